use cgmath::{Matrix, Matrix4, Rad, SquareMatrix, Vector3};
use wgpu::Device;

use super::vertex::Vertex3D;
use crate::gfx::{
    geometry::GeometryData,
    picking::AABB,
    resources::material::{Color, Material},
    rendering::ObjectUniform,
};
use crate::wgpu_utils::UniformBuffer;

pub struct Mesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
    bounds: AABB,
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    index_count: u32,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex3D>, indices: Vec<u32>) -> Self {
        let positions: Vec<[f32; 3]> = vertices.iter().map(|v| v.position).collect();
        let bounds = AABB::from_vertices(&positions);
        let index_count = indices.len() as u32;

        Self {
            vertices,
            indices,
            bounds,
            vertex_buffer: None,
            index_buffer: None,
            index_count,
        }
    }

    pub fn from_geometry(geometry: &GeometryData) -> Self {
        let vertices = geometry
            .vertices
            .iter()
            .zip(geometry.normals.iter())
            .map(|(position, normal)| Vertex3D {
                position: *position,
                normal: *normal,
            })
            .collect();

        Self::new(vertices, geometry.indices.clone())
    }

    /// Local-space bounding box used for picking
    pub fn bounds(&self) -> AABB {
        self.bounds
    }

    fn init_gpu_resources(&mut self, device: &Device) {
        let vertex_buffer = wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some("Vertex Buffer"),
                contents: bytemuck::cast_slice(&self.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );

        let index_buffer = wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some("Index Buffer"),
                contents: bytemuck::cast_slice(&self.indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        );

        self.vertex_buffer = Some(vertex_buffer);
        self.index_buffer = Some(index_buffer);
    }
}

/// Translation, Euler rotation (radians, applied X then Y then Z) and scale
///
/// Kept decomposed so animations can drive a single component such as
/// `rotation.y` or `scale.z` without disturbing the others.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// World matrix: T * Rx * Ry * Rz * S
    pub fn matrix(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.position);
        let r = Matrix4::from_angle_x(Rad(self.rotation.x))
            * Matrix4::from_angle_y(Rad(self.rotation.y))
            * Matrix4::from_angle_z(Rad(self.rotation.z));
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        t * r * s // Order matters: T * R * S
    }
}

// GPU resources for one object: its uniform buffer and bind group
pub struct ObjectGpuResources {
    pub uniform: UniformBuffer<ObjectUniform>,
    pub bind_group: wgpu::BindGroup,
}

/// A named, renderable scene element
///
/// Objects with `pickable == false` are drawn but never returned by picking.
pub struct Object {
    pub name: String,
    pub mesh: Mesh,
    pub material: Material,
    pub transform: Transform,
    pub pickable: bool,
    pub visible: bool,
    pub gpu_resources: Option<ObjectGpuResources>, // None until init_gpu_resources called
}

impl Object {
    pub fn new(name: &str, mesh: Mesh, material: Material) -> Self {
        Self {
            name: name.to_string(),
            mesh,
            material,
            transform: Transform::default(),
            pickable: true,
            visible: true,
            gpu_resources: None,
        }
    }

    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.position = Vector3::new(x, y, z);
        self
    }

    pub fn with_rotation(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.rotation = Vector3::new(x, y, z);
        self
    }

    pub fn with_pickable(mut self, pickable: bool) -> Self {
        self.pickable = pickable;
        self
    }

    pub fn world_matrix(&self) -> Matrix4<f32> {
        self.transform.matrix()
    }

    pub fn uniform(&self) -> ObjectUniform {
        let model = self.world_matrix();
        let normal = model
            .invert()
            .map(|inverse| inverse.transpose())
            .unwrap_or(model);
        let emissive = self.material.emissive().unwrap_or(Color::BLACK);

        ObjectUniform {
            model: model.into(),
            normal: normal.into(),
            base_color: self.material.base_color.to_array4(1.0),
            emissive: emissive.to_array4(0.0),
            params: [self.material.metallic, self.material.roughness, 0.0, 0.0],
        }
    }

    pub fn init_gpu_resources(&mut self, device: &Device, layout: &wgpu::BindGroupLayout) {
        self.mesh.init_gpu_resources(device);

        let uniform = UniformBuffer::with_contents(device, "Object Uniform", &self.uniform());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Object Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform.binding(),
            }],
        });

        self.gpu_resources = Some(ObjectGpuResources {
            uniform,
            bind_group,
        });
    }

    /// Syncs transform and material to the GPU if resources exist
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        let content = self.uniform();
        if let Some(gpu_resources) = self.gpu_resources.as_mut() {
            gpu_resources.uniform.write(queue, content);
        }
    }

    pub fn bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.gpu_resources.as_ref().map(|res| &res.bind_group)
    }
}

pub trait DrawObject<'a> {
    fn draw_mesh(&mut self, mesh: &'a Mesh);
    fn draw_object(&mut self, object: &'a Object);
}

impl<'a, 'b> DrawObject<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh(&mut self, mesh: &'b Mesh) {
        let vertex_buffer = match &mesh.vertex_buffer {
            Some(buffer) => buffer,
            None => return, // Skip drawing if not uploaded
        };
        let index_buffer = match &mesh.index_buffer {
            Some(buffer) => buffer,
            None => return,
        };

        self.set_vertex_buffer(0, vertex_buffer.slice(..));
        self.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, 0..1);
    }

    fn draw_object(&mut self, object: &'b Object) {
        let Some(bind_group) = object.bind_group() else {
            return;
        };
        self.set_bind_group(1, bind_group, &[]);
        self.draw_mesh(&object.mesh);
    }
}
