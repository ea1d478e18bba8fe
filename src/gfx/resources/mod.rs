// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Materials and colors shared by the scene, plus render target textures.

pub mod material;
pub mod texture_resource;

// Re-export main types
pub use material::{Color, Material};
pub use texture_resource::TextureResource;
