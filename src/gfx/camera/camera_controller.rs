use super::orbit_camera::OrbitCamera;

/// Velocities below this are treated as at rest
const VELOCITY_EPSILON: f32 = 1e-6;

/// Turns pointer drags and wheel steps into camera motion
///
/// Drag deltas accumulate into an angular velocity. Each frame a
/// `damping_factor` share of that velocity is applied to the camera and the
/// same share is removed, so the orbit eases out after the pointer stops.
pub struct CameraController {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub damping_factor: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
    is_dragging: bool,
}

impl CameraController {
    pub fn new(rotate_speed: f32, zoom_speed: f32, damping_factor: f32) -> Self {
        Self {
            rotate_speed,
            zoom_speed,
            damping_factor: damping_factor.clamp(0.0, 1.0),
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            is_dragging: false,
        }
    }

    pub fn begin_drag(&mut self) {
        self.is_dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Feeds a pointer movement in pixels; ignored unless a drag is active
    pub fn drag(&mut self, delta: (f32, f32)) {
        if !self.is_dragging {
            return;
        }
        self.yaw_velocity += -delta.0 * self.rotate_speed;
        self.pitch_velocity += delta.1 * self.rotate_speed;
    }

    /// Zooms by a wheel step; positive `scroll` moves the camera closer
    pub fn zoom(&mut self, scroll: f32, camera: &mut OrbitCamera) {
        camera.add_distance(-scroll * self.zoom_speed);
    }

    /// Returns true while the camera is still coasting from a drag
    pub fn is_moving(&self) -> bool {
        self.yaw_velocity.abs() > VELOCITY_EPSILON || self.pitch_velocity.abs() > VELOCITY_EPSILON
    }

    /// Applies the damped orbit velocity; call once per frame
    pub fn update(&mut self, camera: &mut OrbitCamera) {
        if !self.is_moving() {
            self.yaw_velocity = 0.0;
            self.pitch_velocity = 0.0;
            return;
        }

        if self.damping_factor > 0.0 {
            camera.add_yaw(self.yaw_velocity * self.damping_factor);
            camera.add_pitch(self.pitch_velocity * self.damping_factor);
            self.yaw_velocity *= 1.0 - self.damping_factor;
            self.pitch_velocity *= 1.0 - self.damping_factor;
        } else {
            camera.add_yaw(self.yaw_velocity);
            camera.add_pitch(self.pitch_velocity);
            self.yaw_velocity = 0.0;
            self.pitch_velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Vector3, Zero};

    #[test]
    fn test_drag_only_moves_camera_while_dragging() {
        let mut camera = OrbitCamera::new(5.0, 0.0, 0.0, Vector3::zero(), 1.0);
        let mut controller = CameraController::new(0.01, 0.1, 0.0);

        controller.drag((10.0, 0.0));
        controller.update(&mut camera);
        assert_eq!(camera.yaw, 0.0);

        controller.begin_drag();
        controller.drag((10.0, 0.0));
        controller.update(&mut camera);
        assert!((camera.yaw + 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_damped_velocity_decays() {
        let mut camera = OrbitCamera::new(5.0, 0.0, 0.0, Vector3::zero(), 1.0);
        let mut controller = CameraController::new(0.01, 0.1, 0.5);

        controller.begin_drag();
        controller.drag((-100.0, 0.0));
        controller.end_drag();

        controller.update(&mut camera);
        let after_one = camera.yaw;
        controller.update(&mut camera);
        let after_two = camera.yaw;

        assert!((after_one - 0.5).abs() < 1e-5);
        assert!((after_two - after_one - 0.25).abs() < 1e-5);

        for _ in 0..200 {
            controller.update(&mut camera);
        }
        assert!(!controller.is_moving());
        assert!((camera.yaw - 1.0).abs() < 1e-3);
    }
}
