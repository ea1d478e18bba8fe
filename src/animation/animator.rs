//! The seam between click dispatch and the tweening backend

use std::time::Duration;

use super::{
    property::{AnimatedProperty, Animatable, AnimationTarget},
    tween::{AnimationRequest, Tween},
};

/// Runs tweens against an [`Animatable`] store, one per `(target, property)`
pub trait Animator {
    /// Starts a tween at `now`, replacing any tween on the same slot
    fn animate(&mut self, request: AnimationRequest, now: Duration);

    /// Stops the tween on the slot, if any, leaving the property at its live value
    ///
    /// Returns the stopped tween's request.
    fn cancel(
        &mut self,
        target: AnimationTarget,
        property: AnimatedProperty,
    ) -> Option<AnimationRequest>;

    /// Writes every tween's current value and drops the finished ones
    fn tick(&mut self, now: Duration, scene: &mut dyn Animatable);

    fn is_animating(&self, target: AnimationTarget, property: AnimatedProperty) -> bool;

    fn active_count(&self) -> usize;
}

/// Default [`Animator`] driven by the per-frame tick
#[derive(Debug, Default)]
pub struct TweenAnimator {
    tweens: Vec<Tween>,
}

impl TweenAnimator {
    /// Creates an animator with no running tweens
    pub fn new() -> Self {
        Self { tweens: Vec::new() }
    }

    fn position(&self, target: AnimationTarget, property: AnimatedProperty) -> Option<usize> {
        self.tweens.iter().position(|tween| {
            tween.request.target == target && tween.request.property == property
        })
    }
}

impl Animator for TweenAnimator {
    fn animate(&mut self, request: AnimationRequest, now: Duration) {
        if let Some(index) = self.position(request.target, request.property) {
            self.tweens.swap_remove(index);
        }
        log::debug!(
            "Tween {:?} {:?}: {} -> {} over {:?}",
            request.target,
            request.property,
            request.from,
            request.to,
            request.duration
        );
        self.tweens.push(Tween::new(request, now));
    }

    fn cancel(
        &mut self,
        target: AnimationTarget,
        property: AnimatedProperty,
    ) -> Option<AnimationRequest> {
        let index = self.position(target, property)?;
        Some(self.tweens.swap_remove(index).request)
    }

    fn tick(&mut self, now: Duration, scene: &mut dyn Animatable) {
        self.tweens.retain(|tween| {
            let request = &tween.request;
            if !scene.write(request.target, request.property, tween.sample(now)) {
                log::debug!("Dropping tween on vanished target {:?}", request.target);
                return false;
            }
            !tween.is_finished(now)
        });
    }

    fn is_animating(&self, target: AnimationTarget, property: AnimatedProperty) -> bool {
        self.position(target, property).is_some()
    }

    fn active_count(&self) -> usize {
        self.tweens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{
        property::Axis,
        tween::{Easing, RepeatMode},
    };
    use crate::robot::{self, robot_scene};

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn head_turn(scene: &crate::gfx::scene::Scene, to: f32) -> AnimationRequest {
        AnimationRequest {
            target: AnimationTarget::Node(scene.find_object(robot::HEAD).unwrap()),
            property: AnimatedProperty::Rotation(Axis::Y),
            start: 0.0,
            from: 0.0,
            to,
            duration: ms(500),
            repeat: RepeatMode::Once,
            easing: Easing::Linear,
        }
    }

    #[test]
    fn test_tick_writes_values_and_retires_finished_tweens() {
        let mut scene = robot_scene();
        let mut animator = TweenAnimator::new();
        let request = head_turn(&scene, 1.0);
        animator.animate(request, ms(0));

        animator.tick(ms(250), &mut scene);
        let mid = scene.read(request.target, request.property).unwrap();
        assert!((mid - 0.5).abs() < 1e-5);
        assert_eq!(animator.active_count(), 1);

        animator.tick(ms(500), &mut scene);
        assert_eq!(scene.read(request.target, request.property), Some(1.0));
        assert_eq!(animator.active_count(), 0);
    }

    #[test]
    fn test_same_slot_replaces_previous_tween() {
        let scene = robot_scene();
        let mut animator = TweenAnimator::new();
        animator.animate(head_turn(&scene, 1.0), ms(0));
        animator.animate(head_turn(&scene, 2.0), ms(100));

        assert_eq!(animator.active_count(), 1);
    }

    #[test]
    fn test_cancel_leaves_live_value() {
        let mut scene = robot_scene();
        let mut animator = TweenAnimator::new();
        let request = head_turn(&scene, 1.0);
        animator.animate(request, ms(0));
        animator.tick(ms(100), &mut scene);

        assert_eq!(animator.cancel(request.target, request.property), Some(request));
        animator.tick(ms(400), &mut scene);
        let value = scene.read(request.target, request.property).unwrap();
        assert!((value - 0.2).abs() < 1e-5);
        assert!(!animator.is_animating(request.target, request.property));
        assert_eq!(animator.cancel(request.target, request.property), None);
    }

    #[test]
    fn test_tween_on_cleared_scene_is_dropped() {
        let mut scene = robot_scene();
        let mut animator = TweenAnimator::new();
        animator.animate(head_turn(&scene, 1.0), ms(0));

        scene.clear();
        robot::build_robot(&mut scene);
        animator.tick(ms(100), &mut scene);

        assert_eq!(animator.active_count(), 0);
        let head = scene.find_object(robot::HEAD).unwrap();
        assert_eq!(scene.object(head).unwrap().transform.rotation.y, 0.0);
    }
}
