//! Time-based scalar interpolation
//!
//! A tween's `duration` covers its whole run, including every yoyo leg. With
//! `Yoyo { repeats: 1 }` and 300 ms the value goes out in 150 ms and back in
//! 150 ms.
//!
//! The first leg begins at `start`, which is the live value when the tween is
//! created. It differs from `from` only when a round trip is restarted part
//! way through: the new run leaves from where the property is and still comes
//! back to the old `from`.

use std::time::Duration;

use super::property::{AnimatedProperty, AnimationTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out
    #[default]
    QuadOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatMode {
    /// Play from -> to once and stay at `to`
    Once,
    /// Play from -> to, then alternate direction `repeats` more times
    Yoyo { repeats: u32 },
}

impl RepeatMode {
    /// Number of one-way legs in the whole run
    pub fn legs(self) -> u32 {
        match self {
            RepeatMode::Once => 1,
            RepeatMode::Yoyo { repeats } => repeats.saturating_add(1),
        }
    }

    /// True when an even number of legs brings the value back to `from`
    pub fn returns_to_start(self) -> bool {
        self.legs() % 2 == 0
    }
}

/// Everything needed to start one tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRequest {
    pub target: AnimationTarget,
    pub property: AnimatedProperty,
    /// Value the first leg leaves from
    pub start: f32,
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub repeat: RepeatMode,
    pub easing: Easing,
}

impl AnimationRequest {
    /// Value the property holds once the run is over
    pub fn rest_value(&self) -> f32 {
        if self.repeat.returns_to_start() {
            self.from
        } else {
            self.to
        }
    }
}

/// A running [`AnimationRequest`] anchored at its start time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub request: AnimationRequest,
    pub started_at: Duration,
}

impl Tween {
    pub fn new(request: AnimationRequest, started_at: Duration) -> Self {
        Self {
            request,
            started_at,
        }
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.started_at) >= self.request.duration
    }

    /// Interpolated value at `now`; the rest value once finished
    pub fn sample(&self, now: Duration) -> f32 {
        let request = &self.request;
        if self.is_finished(now) {
            return request.rest_value();
        }

        let legs = request.repeat.legs();
        let progress = now.saturating_sub(self.started_at).as_secs_f32()
            / request.duration.as_secs_f32()
            * legs as f32;
        let leg = (progress.floor() as u32).min(legs - 1);
        let local = progress - leg as f32;

        if leg == 0 {
            let eased = request.easing.apply(local);
            return request.start + (request.to - request.start) * eased;
        }

        // Odd legs run backwards along the same curve
        let eased = if leg % 2 == 0 {
            request.easing.apply(local)
        } else {
            request.easing.apply(1.0 - local)
        };
        request.from + (request.to - request.from) * eased
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        resources::Color,
        scene::{Light, Scene},
    };

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn request(repeat: RepeatMode, easing: Easing) -> AnimationRequest {
        let mut scene = Scene::new();
        let light = scene.add_light(Light::ambient("Ambient", Color::WHITE, 1.0));
        AnimationRequest {
            target: AnimationTarget::Light(light),
            property: AnimatedProperty::LightIntensity,
            start: 1.0,
            from: 1.0,
            to: 3.0,
            duration: ms(200),
            repeat,
            easing,
        }
    }

    #[test]
    fn test_once_ends_at_target() {
        let tween = Tween::new(request(RepeatMode::Once, Easing::Linear), ms(1000));
        assert_eq!(tween.sample(ms(1000)), 1.0);
        assert!((tween.sample(ms(1100)) - 2.0).abs() < 1e-5);
        assert!(!tween.is_finished(ms(1199)));
        assert!(tween.is_finished(ms(1200)));
        assert_eq!(tween.sample(ms(5000)), 3.0);
    }

    #[test]
    fn test_yoyo_returns_to_start() {
        let tween = Tween::new(
            request(RepeatMode::Yoyo { repeats: 1 }, Easing::Linear),
            Duration::ZERO,
        );
        assert!((tween.sample(ms(50)) - 2.0).abs() < 1e-5);
        assert!((tween.sample(ms(100)) - 3.0).abs() < 1e-5);
        assert!((tween.sample(ms(150)) - 2.0).abs() < 1e-5);
        assert_eq!(tween.sample(ms(200)), 1.0);
    }

    #[test]
    fn test_rest_value_depends_on_leg_parity() {
        assert_eq!(request(RepeatMode::Once, Easing::Linear).rest_value(), 3.0);
        assert_eq!(
            request(RepeatMode::Yoyo { repeats: 1 }, Easing::Linear).rest_value(),
            1.0
        );
        assert_eq!(
            request(RepeatMode::Yoyo { repeats: 2 }, Easing::Linear).rest_value(),
            3.0
        );
    }

    #[test]
    fn test_quad_out_front_loads_motion() {
        assert_eq!(Easing::QuadOut.apply(0.0), 0.0);
        assert!((Easing::QuadOut.apply(0.5) - 0.75).abs() < 1e-6);
        assert_eq!(Easing::QuadOut.apply(1.0), 1.0);
        assert_eq!(Easing::QuadOut.apply(2.0), 1.0);
    }

    #[test]
    fn test_interrupted_round_trip_leaves_from_start_and_returns_to_from() {
        let mut req = request(RepeatMode::Yoyo { repeats: 1 }, Easing::Linear);
        req.start = 2.0;
        let tween = Tween::new(req, Duration::ZERO);

        assert_eq!(tween.sample(Duration::ZERO), 2.0);
        assert!((tween.sample(ms(50)) - 2.5).abs() < 1e-5);
        assert!((tween.sample(ms(150)) - 2.0).abs() < 1e-5);
        assert_eq!(tween.sample(ms(200)), 1.0);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut req = request(RepeatMode::Once, Easing::Linear);
        req.duration = Duration::ZERO;
        let tween = Tween::new(req, ms(10));
        assert!(tween.is_finished(ms(10)));
        assert_eq!(tween.sample(ms(10)), 3.0);
    }
}
