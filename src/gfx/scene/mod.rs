//! # Scene Management Module
//!
//! The scene is a flat list of named objects plus the lights that illuminate
//! them. It is the only owner of scene state; the interaction core keeps
//! [`NodeHandle`]/[`LightHandle`] values and re-resolves them on every use.
//!
//! ## Key Components
//!
//! - [`Scene`] - container for objects and lights, handle resolution and name lookup
//! - [`Object`] - a named mesh with its own material and a decomposed transform
//! - [`Light`] - ambient, directional or point light
//! - [`Vertex3D`] - vertex layout uploaded to the GPU

pub mod light;
pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use light::{Light, LightKind};
pub use object::{DrawObject, Mesh, Object, Transform};
pub use scene::{LightHandle, NodeHandle, Scene};
pub use vertex::Vertex3D;
