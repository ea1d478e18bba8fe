//! # Graphics Module
//!
//! Everything that knows about geometry, cameras and the GPU.
//!
//! - **Camera System** ([`camera`]) - Orbit camera with damped drag, zoom and auto-rotation
//! - **Geometry** ([`geometry`]) - Procedural primitives used to build the robot
//! - **Picking** ([`picking`]) - Screen-to-world rays and nearest-hit queries
//! - **Rendering Pipeline** ([`rendering`]) - Forward shading with an emissive term
//! - **Scene Management** ([`scene`]) - Named objects, lights and stable handles
//! - **Resource Management** ([`resources`]) - Materials, colors and depth textures

pub mod camera;
pub mod geometry;
pub mod picking;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::{CameraManager, OrbitCamera};
pub use rendering::RenderEngine;
pub use scene::Scene;
