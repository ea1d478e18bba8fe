//! Viewer configuration
//!
//! All tunables live here with defaults matching the reference viewer. Values
//! are plain fields so callers can adjust them before handing the config to
//! [`crate::ViewerApp::new`].

use std::time::Duration;

use cgmath::{Deg, Vector3};

use crate::gfx::resources::material::Color;

/// Timing and feedback settings for the pointer interaction core
#[derive(Debug, Clone)]
pub struct InteractionConfig {
    /// Emissive color written onto a hovered part
    pub highlight_color: Color,
    /// How long a "Selected: <name>" notification stays visible
    pub notification_duration: Duration,
    /// Idle time after the last camera interaction before auto-rotation resumes
    pub idle_resume_delay: Duration,
    /// Maximum pointer travel in pixels between press and release that still counts as a click
    pub click_drag_tolerance: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            highlight_color: Color::from_hex(0x333333),
            notification_duration: Duration::from_millis(2000),
            idle_resume_delay: Duration::from_millis(3000),
            click_drag_tolerance: 4.0,
        }
    }
}

/// Orbit camera placement and control settings
#[derive(Debug, Clone)]
pub struct CameraConfig {
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub target: Vector3<f32>,
    pub fovy: Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub min_distance: Option<f32>,
    pub max_distance: Option<f32>,
    /// Auto-rotation speed; 1.0 is one full orbit every 60 seconds
    pub auto_rotate_speed: f32,
    /// Fraction of the remaining orbit velocity applied (and removed) each frame
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            // Eye at roughly (0, 1, 5) looking at the robot's chest
            distance: 5.0,
            pitch: 0.04,
            yaw: 0.0,
            target: Vector3::new(0.0, 0.8, 0.0),
            fovy: Deg(75.0),
            znear: 0.1,
            zfar: 1000.0,
            min_distance: Some(1.1),
            max_distance: Some(16.0),
            auto_rotate_speed: 0.5,
            damping_factor: 0.05,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
        }
    }
}

/// Top-level configuration for [`crate::ViewerApp`]
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub camera: CameraConfig,
    pub interaction: InteractionConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Robot Viewer".to_string(),
            width: 1200,
            height: 800,
            background: Color::from_hex(0xf0f0f0),
            camera: CameraConfig::default(),
            interaction: InteractionConfig::default(),
        }
    }
}
