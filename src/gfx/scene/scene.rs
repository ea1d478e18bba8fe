use wgpu::Device;

use super::{light::Light, object::Object};

/// Stable reference to an object in a [`Scene`]
///
/// Handles carry the scene generation they were issued in. After the scene is
/// cleared and rebuilt, old handles no longer resolve, so anything holding one
/// (a highlight, a running tween) quietly stops touching the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    index: u32,
    generation: u32,
}

/// Stable reference to a light in a [`Scene`], with the same rules as [`NodeHandle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightHandle {
    index: u32,
    generation: u32,
}

/// Flat collection of objects and lights
pub struct Scene {
    objects: Vec<Object>,
    lights: Vec<Light>,
    generation: u32,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            generation: 0,
        }
    }

    pub fn add_object(&mut self, object: Object) -> NodeHandle {
        self.objects.push(object);
        NodeHandle {
            index: (self.objects.len() - 1) as u32,
            generation: self.generation,
        }
    }

    pub fn add_light(&mut self, light: Light) -> LightHandle {
        self.lights.push(light);
        LightHandle {
            index: (self.lights.len() - 1) as u32,
            generation: self.generation,
        }
    }

    /// Removes all objects and lights and invalidates every handle issued so far
    pub fn clear(&mut self) {
        self.objects.clear();
        self.lights.clear();
        self.generation = self.generation.wrapping_add(1);
        log::debug!("Scene cleared, now at generation {}", self.generation);
    }

    pub fn object(&self, handle: NodeHandle) -> Option<&Object> {
        if handle.generation != self.generation {
            return None;
        }
        self.objects.get(handle.index as usize)
    }

    pub fn object_mut(&mut self, handle: NodeHandle) -> Option<&mut Object> {
        if handle.generation != self.generation {
            return None;
        }
        self.objects.get_mut(handle.index as usize)
    }

    pub fn light(&self, handle: LightHandle) -> Option<&Light> {
        if handle.generation != self.generation {
            return None;
        }
        self.lights.get(handle.index as usize)
    }

    pub fn light_mut(&mut self, handle: LightHandle) -> Option<&mut Light> {
        if handle.generation != self.generation {
            return None;
        }
        self.lights.get_mut(handle.index as usize)
    }

    /// First object with the given name
    pub fn find_object(&self, name: &str) -> Option<NodeHandle> {
        self.objects
            .iter()
            .position(|object| object.name == name)
            .map(|index| NodeHandle {
                index: index as u32,
                generation: self.generation,
            })
    }

    /// First light with the given name
    pub fn find_light(&self, name: &str) -> Option<LightHandle> {
        self.lights
            .iter()
            .position(|light| light.name == name)
            .map(|index| LightHandle {
                index: index as u32,
                generation: self.generation,
            })
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Visible, pickable objects with their handles, in scene order
    pub fn pickable_objects(&self) -> impl Iterator<Item = (NodeHandle, &Object)> + '_ {
        let generation = self.generation;
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, object)| object.pickable && object.visible)
            .map(move |(index, object)| {
                (
                    NodeHandle {
                        index: index as u32,
                        generation,
                    },
                    object,
                )
            })
    }

    /// Initializes GPU resources for all objects
    ///
    /// Must be called after the GPU context is available and before rendering.
    pub fn init_gpu_resources(&mut self, device: &Device, layout: &wgpu::BindGroupLayout) {
        for object in self.objects.iter_mut() {
            object.init_gpu_resources(device, layout);
        }
    }

    /// Uploads every object's current transform and material
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        for object in self.objects.iter_mut() {
            object.update_gpu(queue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        geometry::generate_box,
        resources::material::{Color, Material},
        scene::Mesh,
    };

    fn part(name: &str) -> Object {
        Object::new(
            name,
            Mesh::from_geometry(&generate_box(1.0, 1.0, 1.0)),
            Material::default(),
        )
    }

    #[test]
    fn test_find_by_name_returns_first_match() {
        let mut scene = Scene::new();
        let first = scene.add_object(part("Arm"));
        scene.add_object(part("Arm"));

        assert_eq!(scene.find_object("Arm"), Some(first));
        assert_eq!(scene.find_object("Leg"), None);
    }

    #[test]
    fn test_clear_invalidates_old_handles() {
        let mut scene = Scene::new();
        let old_node = scene.add_object(part("Head"));
        let old_light = scene.add_light(Light::ambient("Ambient", Color::WHITE, 1.0));

        scene.clear();
        let new_node = scene.add_object(part("Head"));

        assert!(scene.object(old_node).is_none());
        assert!(scene.light(old_light).is_none());
        assert_ne!(old_node, new_node);
        assert_eq!(scene.object(new_node).map(|o| o.name.as_str()), Some("Head"));
    }
}
