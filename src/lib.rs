// src/lib.rs
//! Robot Viewer
//!
//! An interactive 3D viewer for a toy robot built on wgpu and winit. The
//! pointer can hover and click individual named parts; hovering highlights a
//! part and clicking plays a short, reversible animation. The camera orbits on
//! its own and pauses while the user is dragging it.

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod interaction;
pub mod robot;
pub mod timer;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::ViewerApp;
pub use config::ViewerConfig;
pub use error::ViewerError;

/// Creates a viewer with the default configuration and the toy robot scene
pub fn default() -> Result<ViewerApp, ViewerError> {
    ViewerApp::new(ViewerConfig::default())
}
