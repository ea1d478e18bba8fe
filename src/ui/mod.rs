//! # User Interface Module
//!
//! Dear ImGui overlay drawn after the scene.
//!
//! - [`UiManager`] - ImGui integration with winit and wgpu, input capture
//! - [`info_panel`] - the "Selected: <name>" notification box
//!
//! When ImGui wants the mouse, pointer events are not forwarded to picking
//! or the camera.

pub mod info_panel;
pub mod manager;

// Re-export main types
pub use info_panel::info_panel;
pub use manager::UiManager;
