//! # Interaction
//!
//! Pointer-driven behavior on top of the scene: hover highlight, click
//! actions, the selection notification and the camera's idle rotation.
//!
//! [`InteractionEngine`] owns all of this state. The app forwards pointer
//! events to [`InteractionEngine::handle_pointer`] and calls
//! [`InteractionEngine::update`] once per frame before rendering. Each call
//! finishes all of its state changes before returning.

use std::time::Duration;

use crate::{
    animation::{Animator, TweenAnimator},
    config::InteractionConfig,
    gfx::{camera::CameraManager, picking, scene::NodeHandle, Scene},
};

pub mod actions;
pub mod highlight;
pub mod idle_rotation;
pub mod notification;

pub use actions::{
    ActionDispatcher, ActionTable, ClickOutcome, RecipeTarget, TweenRecipe, ValueChange,
};
pub use highlight::HighlightState;
pub use idle_rotation::{AutoRotateState, IdleRotationController};
pub use notification::Notification;

/// Pointer input in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved { x: f32, y: f32 },
    /// Primary button down
    Pressed,
    /// Primary button up
    Released,
    /// Wheel steps; positive zooms in
    Scrolled { delta: f32 },
}

pub struct InteractionEngine<A: Animator = TweenAnimator> {
    config: InteractionConfig,
    highlight: HighlightState,
    dispatcher: ActionDispatcher,
    idle_rotation: IdleRotationController,
    notification: Notification,
    animator: A,
    pointer: Option<(f32, f32)>,
    press_origin: Option<(f32, f32)>,
}

impl InteractionEngine<TweenAnimator> {
    /// Engine with the robot's default actions and the built-in tweener
    pub fn new(config: InteractionConfig) -> Self {
        Self::with_animator(config, ActionTable::robot_defaults(), TweenAnimator::new())
    }
}

impl<A: Animator> InteractionEngine<A> {
    /// Creates an engine around a caller-supplied animation backend
    ///
    /// # Arguments
    /// * `config` - Highlight color, timings and click tolerance
    /// * `table` - Click recipes per part name
    /// * `animator` - Backend that runs the requested tweens
    pub fn with_animator(config: InteractionConfig, table: ActionTable, animator: A) -> Self {
        Self {
            highlight: HighlightState::new(config.highlight_color),
            dispatcher: ActionDispatcher::new(table),
            idle_rotation: IdleRotationController::new(config.idle_resume_delay),
            notification: Notification::new(config.notification_duration),
            animator,
            pointer: None,
            press_origin: None,
            config,
        }
    }

    /// Applies one pointer event
    ///
    /// Returns the click outcome when the event completed a click.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        now: Duration,
        viewport: (f32, f32),
        scene: &mut Scene,
        camera: &mut CameraManager,
    ) -> Option<ClickOutcome> {
        match event {
            PointerEvent::Moved { x, y } => {
                if let Some((last_x, last_y)) = self.pointer {
                    camera.controller.drag((x - last_x, y - last_y));
                }
                self.pointer = Some((x, y));
                let hit = self.pick(viewport, scene, camera);
                self.highlight.on_hover(hit, scene);
                None
            }
            PointerEvent::Pressed => {
                self.press_origin = self.pointer;
                camera.controller.begin_drag();
                self.interaction_start(camera);
                None
            }
            PointerEvent::Released => {
                camera.controller.end_drag();
                self.idle_rotation.interaction_end(now);

                let origin = self.press_origin.take()?;
                let (x, y) = self.pointer?;
                let travel = ((x - origin.0).powi(2) + (y - origin.1).powi(2)).sqrt();
                if travel >= self.config.click_drag_tolerance {
                    return None;
                }

                let hit = self.pick(viewport, scene, camera);
                Some(self.dispatcher.on_click(
                    hit,
                    now,
                    scene,
                    &mut self.animator,
                    &mut self.notification,
                ))
            }
            PointerEvent::Scrolled { delta } => {
                self.interaction_start(camera);
                camera.controller.zoom(delta, &mut camera.camera);
                self.idle_rotation.interaction_end(now);
                None
            }
        }
    }

    /// Per-frame step, run before rendering
    ///
    /// Order: auto-rotate flag, notification expiry, tweens, camera motion.
    pub fn update(
        &mut self,
        now: Duration,
        elapsed: Duration,
        scene: &mut Scene,
        camera: &mut CameraManager,
    ) {
        camera.camera.auto_rotate = self.idle_rotation.update(now);
        self.notification.update(now);
        self.animator.tick(now, scene);
        camera.update(elapsed);
    }

    /// Forgets the pointer, e.g. when it leaves the window
    pub fn pointer_left(&mut self, scene: &mut Scene) {
        self.pointer = None;
        self.highlight.clear(scene);
    }

    pub fn notification_text(&self) -> Option<&str> {
        self.notification.text()
    }

    pub fn highlighted(&self) -> Option<NodeHandle> {
        self.highlight.highlighted()
    }

    pub fn auto_rotate_state(&self) -> AutoRotateState {
        self.idle_rotation.state()
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn dispatcher(&self) -> &ActionDispatcher {
        &self.dispatcher
    }

    fn interaction_start(&mut self, camera: &mut CameraManager) {
        self.idle_rotation.interaction_start();
        camera.camera.auto_rotate = false;
    }

    fn pick(
        &self,
        viewport: (f32, f32),
        scene: &Scene,
        camera: &CameraManager,
    ) -> Option<NodeHandle> {
        let pointer = self.pointer?;
        picking::pick(pointer, viewport, &camera.camera, scene).map(|result| result.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        gfx::camera::{CameraController, OrbitCamera},
        robot::{self, robot_scene},
    };
    use cgmath::Vector3;

    const VIEWPORT: (f32, f32) = (800.0, 800.0);

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn camera() -> CameraManager {
        CameraManager::new(
            OrbitCamera::new(5.0, 0.0, 0.0, Vector3::new(0.0, 1.75, 0.0), 1.0),
            CameraController::new(0.005, 0.1, 0.0),
        )
    }

    fn move_to(
        engine: &mut InteractionEngine,
        x: f32,
        y: f32,
        scene: &mut Scene,
        camera: &mut CameraManager,
    ) {
        engine.handle_pointer(PointerEvent::Moved { x, y }, ms(0), VIEWPORT, scene, camera);
    }

    #[test]
    fn test_hover_highlights_part_under_pointer() {
        let mut scene = robot_scene();
        let mut camera = camera();
        let mut engine = InteractionEngine::new(InteractionConfig::default());
        let head = scene.find_object(robot::HEAD);

        move_to(&mut engine, 400.0, 400.0, &mut scene, &mut camera);
        assert_eq!(engine.highlighted(), head);

        move_to(&mut engine, 0.0, 0.0, &mut scene, &mut camera);
        assert_eq!(engine.highlighted(), None);
    }

    #[test]
    fn test_pointer_leaving_window_restores_highlight() {
        let mut scene = robot_scene();
        let mut camera = camera();
        let mut engine = InteractionEngine::new(InteractionConfig::default());
        let head = scene.find_object(robot::HEAD).unwrap();
        let emissive_before = scene.object(head).unwrap().material.emissive();

        move_to(&mut engine, 400.0, 400.0, &mut scene, &mut camera);
        assert_eq!(engine.highlighted(), Some(head));
        assert_ne!(scene.object(head).unwrap().material.emissive(), emissive_before);

        engine.pointer_left(&mut scene);
        assert_eq!(engine.highlighted(), None);
        assert_eq!(scene.object(head).unwrap().material.emissive(), emissive_before);
    }

    #[test]
    fn test_click_selects_and_animates() {
        let mut scene = robot_scene();
        let mut camera = camera();
        let mut engine = InteractionEngine::new(InteractionConfig::default());

        move_to(&mut engine, 400.0, 400.0, &mut scene, &mut camera);
        engine.handle_pointer(PointerEvent::Pressed, ms(0), VIEWPORT, &mut scene, &mut camera);
        assert!(!camera.camera.auto_rotate);

        let outcome = engine.handle_pointer(
            PointerEvent::Released,
            ms(50),
            VIEWPORT,
            &mut scene,
            &mut camera,
        );
        assert_eq!(
            outcome,
            Some(ClickOutcome::Selected {
                name: robot::HEAD.to_string(),
                animations: 1
            })
        );
        assert_eq!(engine.notification_text(), Some("Selected: Head"));
        assert_eq!(engine.animator().active_count(), 1);

        engine.update(ms(2049), ms(16), &mut scene, &mut camera);
        assert_eq!(engine.notification_text(), Some("Selected: Head"));
        assert_eq!(engine.animator().active_count(), 0);
        assert!(!camera.camera.auto_rotate);

        engine.update(ms(3050), ms(16), &mut scene, &mut camera);
        assert_eq!(engine.notification_text(), None);
        assert!(camera.camera.auto_rotate);
    }

    #[test]
    fn test_drag_orbits_without_clicking() {
        let mut scene = robot_scene();
        let mut camera = camera();
        let mut engine = InteractionEngine::new(InteractionConfig::default());

        move_to(&mut engine, 400.0, 400.0, &mut scene, &mut camera);
        engine.handle_pointer(PointerEvent::Pressed, ms(0), VIEWPORT, &mut scene, &mut camera);
        move_to(&mut engine, 300.0, 400.0, &mut scene, &mut camera);
        let outcome = engine.handle_pointer(
            PointerEvent::Released,
            ms(100),
            VIEWPORT,
            &mut scene,
            &mut camera,
        );

        assert_eq!(outcome, None);
        assert_eq!(engine.notification_text(), None);

        engine.update(ms(116), ms(16), &mut scene, &mut camera);
        assert!((camera.camera.yaw - 0.5).abs() < 1e-5);
        assert_eq!(
            engine.auto_rotate_state(),
            AutoRotateState::Suspended {
                resume_at: Some(ms(3100))
            }
        );
    }

    #[test]
    fn test_click_on_empty_space_deselects() {
        let mut scene = robot_scene();
        let mut camera = camera();
        let mut engine = InteractionEngine::new(InteractionConfig::default());

        move_to(&mut engine, 400.0, 400.0, &mut scene, &mut camera);
        engine.handle_pointer(PointerEvent::Pressed, ms(0), VIEWPORT, &mut scene, &mut camera);
        engine.handle_pointer(PointerEvent::Released, ms(10), VIEWPORT, &mut scene, &mut camera);
        assert!(engine.notification_text().is_some());

        move_to(&mut engine, 0.0, 0.0, &mut scene, &mut camera);
        engine.handle_pointer(PointerEvent::Pressed, ms(20), VIEWPORT, &mut scene, &mut camera);
        let outcome =
            engine.handle_pointer(PointerEvent::Released, ms(30), VIEWPORT, &mut scene, &mut camera);

        assert_eq!(outcome, Some(ClickOutcome::Deselected));
        assert_eq!(engine.notification_text(), None);
    }

    #[test]
    fn test_scroll_zooms_and_suspends_rotation() {
        let mut scene = robot_scene();
        let mut camera = camera();
        let mut engine = InteractionEngine::new(InteractionConfig::default());
        let before = camera.camera.distance;

        engine.handle_pointer(
            PointerEvent::Scrolled { delta: 1.0 },
            ms(0),
            VIEWPORT,
            &mut scene,
            &mut camera,
        );

        assert!(camera.camera.distance < before);
        assert!(!camera.camera.auto_rotate);
        engine.update(ms(2999), ms(16), &mut scene, &mut camera);
        assert!(!camera.camera.auto_rotate);
        engine.update(ms(3000), ms(16), &mut scene, &mut camera);
        assert!(camera.camera.auto_rotate);
    }
}
