//! # Animation
//!
//! Short, time-bounded scalar tweens on node transforms and light intensity.
//! Tweens are advanced by the frame tick; nothing here blocks or spawns.

pub mod animator;
pub mod property;
pub mod tween;

pub use animator::{Animator, TweenAnimator};
pub use property::{AnimatedProperty, Animatable, AnimationTarget, Axis};
pub use tween::{AnimationRequest, Easing, RepeatMode, Tween};
