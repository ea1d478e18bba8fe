//! # Procedural Geometry Generation
//!
//! Generates the primitive shapes the robot is assembled from, so the viewer
//! does not need any model files.
//!
//! ## Supported Primitives
//!
//! - **Box**: axis-aligned box with per-face normals
//! - **Sphere**: UV sphere with configurable resolution
//! - **Cylinder**: capped cylinder along the Y axis
//! - **Plane**: flat plane in the XZ plane facing +Y
//!
//! ## Usage
//!
//! ```rust
//! use robot_viewer::gfx::geometry::{generate_box, generate_sphere};
//!
//! let torso = generate_box(1.0, 1.5, 0.8);
//! let eye = generate_sphere(0.1, 16, 16);
//! assert_eq!(torso.triangle_count(), 12);
//! assert!(eye.vertex_count() > 0);
//! ```

pub mod primitives;

pub use primitives::*;

/// Generated geometry data ready to be turned into a mesh
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3]) -> u32 {
        self.vertices.push(position);
        self.normals.push(normal);
        (self.vertices.len() - 1) as u32
    }
}
