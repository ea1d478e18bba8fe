//! Scene lights
//!
//! The renderer understands one ambient term, one directional light and a
//! small number of point lights. Intensity is animatable.

use cgmath::Vector3;

use crate::gfx::resources::material::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    Ambient,
    /// Parallel light shining from `position` towards the origin
    Directional { position: Vector3<f32> },
    /// Point light; `range` of 0.0 means no distance cutoff
    Point { position: Vector3<f32>, range: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub name: String,
    pub kind: LightKind,
    pub color: Color,
    pub intensity: f32,
}

impl Light {
    pub fn ambient(name: &str, color: Color, intensity: f32) -> Self {
        Self {
            name: name.to_string(),
            kind: LightKind::Ambient,
            color,
            intensity,
        }
    }

    pub fn directional(name: &str, color: Color, intensity: f32, position: Vector3<f32>) -> Self {
        Self {
            name: name.to_string(),
            kind: LightKind::Directional { position },
            color,
            intensity,
        }
    }

    pub fn point(
        name: &str,
        color: Color,
        intensity: f32,
        position: Vector3<f32>,
        range: f32,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind: LightKind::Point { position, range },
            color,
            intensity,
        }
    }

    /// Color premultiplied by intensity, as the shader consumes it
    pub fn radiance(&self) -> Color {
        self.color.scaled(self.intensity)
    }
}
