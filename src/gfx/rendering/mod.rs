// src/gfx/rendering/mod.rs
//! Core rendering functionality
//!
//! A single forward pass draws every visible object with Lambert and
//! Blinn-Phong shading plus an additive emissive term. Uniform layouts here
//! MUST match `shader.wgsl`.

use cgmath::{InnerSpace, Vector3};

use crate::gfx::{
    camera::CameraUniform,
    resources::material::Color,
    scene::{LightKind, Scene},
};

pub mod render_engine;

pub use render_engine::RenderEngine;

/// Point lights beyond this count are ignored by the shader
pub const MAX_POINT_LIGHTS: usize = 4;

/// Per-frame data bound at group 0
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view_position: [f32; 4],
    pub ambient: [f32; 4],
    /// Unit vector pointing towards the directional light
    pub light_direction: [f32; 4],
    pub light_color: [f32; 4],
    /// xyz position, w range (0.0 = unbounded)
    pub point_positions: [[f32; 4]; MAX_POINT_LIGHTS],
    pub point_colors: [[f32; 4]; MAX_POINT_LIGHTS],
    pub point_count: [u32; 4],
}

impl GlobalUniform {
    /// Collects camera and light state for one frame
    ///
    /// Ambient and directional lights accumulate; point lights fill slots in
    /// scene order until [`MAX_POINT_LIGHTS`] is reached.
    pub fn from_scene(camera: &CameraUniform, scene: &Scene) -> Self {
        let mut ambient = Color::BLACK;
        let mut light_direction = Vector3::unit_y();
        let mut light_color = Color::BLACK;
        let mut point_positions = [[0.0; 4]; MAX_POINT_LIGHTS];
        let mut point_colors = [[0.0; 4]; MAX_POINT_LIGHTS];
        let mut point_count = 0usize;

        for light in scene.lights() {
            let radiance = light.radiance();
            match light.kind {
                LightKind::Ambient => {
                    ambient = Color::rgb(
                        ambient.r + radiance.r,
                        ambient.g + radiance.g,
                        ambient.b + radiance.b,
                    );
                }
                LightKind::Directional { position } => {
                    if position.magnitude2() > f32::EPSILON {
                        light_direction = position.normalize();
                    }
                    light_color = radiance;
                }
                LightKind::Point { position, range } => {
                    if point_count == MAX_POINT_LIGHTS {
                        log::warn!("Ignoring point light '{}': limit reached", light.name);
                        continue;
                    }
                    point_positions[point_count] = position.extend(range).into();
                    point_colors[point_count] = radiance.to_array4(1.0);
                    point_count += 1;
                }
            }
        }

        Self {
            view_proj: camera.view_proj,
            view_position: camera.view_position,
            ambient: ambient.to_array4(1.0),
            light_direction: light_direction.extend(0.0).into(),
            light_color: light_color.to_array4(1.0),
            point_positions,
            point_colors,
            point_count: [point_count as u32, 0, 0, 0],
        }
    }
}

/// Per-object data bound at group 1
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of `model`
    pub normal: [[f32; 4]; 4],
    pub base_color: [f32; 4],
    pub emissive: [f32; 4],
    /// x metallic, y roughness
    pub params: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::Light;

    #[test]
    fn test_uniform_sizes_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<GlobalUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<ObjectUniform>() % 16, 0);
    }

    #[test]
    fn test_lights_are_packed_with_intensity() {
        let mut scene = Scene::new();
        scene.add_light(Light::ambient("Ambient", Color::WHITE, 0.5));
        scene.add_light(Light::directional(
            "Sun",
            Color::WHITE,
            1.0,
            Vector3::new(0.0, 10.0, 0.0),
        ));
        scene.add_light(Light::point(
            "Lamp",
            Color::rgb(1.0, 0.0, 0.0),
            2.0,
            Vector3::new(1.0, 2.0, 3.0),
            0.5,
        ));

        let uniform = GlobalUniform::from_scene(&CameraUniform::default(), &scene);
        assert_eq!(uniform.ambient, [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(uniform.light_direction, [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(uniform.point_count[0], 1);
        assert_eq!(uniform.point_positions[0], [1.0, 2.0, 3.0, 0.5]);
        assert_eq!(uniform.point_colors[0], [2.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_extra_point_lights_are_dropped() {
        let mut scene = Scene::new();
        for i in 0..(MAX_POINT_LIGHTS + 2) {
            scene.add_light(Light::point(
                &format!("Lamp {i}"),
                Color::WHITE,
                1.0,
                Vector3::new(i as f32, 0.0, 0.0),
                0.0,
            ));
        }

        let uniform = GlobalUniform::from_scene(&CameraUniform::default(), &scene);
        assert_eq!(uniform.point_count[0] as usize, MAX_POINT_LIGHTS);
        assert_eq!(uniform.point_positions[MAX_POINT_LIGHTS - 1][0], 3.0);
    }
}
