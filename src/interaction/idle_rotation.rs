//! Camera idle-rotation controller
//!
//! Auto-rotation stops as soon as the user grabs the camera and comes back
//! after the camera has been left alone for the resume delay.

use std::time::Duration;

use crate::timer::OneShotTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoRotateState {
    Rotating,
    /// `resume_at` is set once the interaction has ended
    Suspended { resume_at: Option<Duration> },
}

#[derive(Debug)]
pub struct IdleRotationController {
    resume_delay: Duration,
    suspended: bool,
    resume_timer: OneShotTimer,
}

impl IdleRotationController {
    /// Creates a controller in the `Rotating` state
    ///
    /// # Arguments
    /// * `resume_delay` - Idle time after the last interaction end before
    ///   rotation resumes
    pub fn new(resume_delay: Duration) -> Self {
        Self {
            resume_delay,
            suspended: false,
            resume_timer: OneShotTimer::new(),
        }
    }

    pub fn state(&self) -> AutoRotateState {
        if self.suspended {
            AutoRotateState::Suspended {
                resume_at: self.resume_timer.deadline(),
            }
        } else {
            AutoRotateState::Rotating
        }
    }

    pub fn is_rotating(&self) -> bool {
        !self.suspended
    }

    /// Manual camera control began; cancels any pending resume
    pub fn interaction_start(&mut self) {
        if !self.suspended {
            log::debug!("Auto-rotate suspended");
        }
        self.suspended = true;
        self.resume_timer.cancel();
    }

    /// Manual camera control ended; (re)starts the resume countdown
    pub fn interaction_end(&mut self, now: Duration) {
        if !self.suspended {
            return;
        }
        self.resume_timer.schedule(now, self.resume_delay);
    }

    /// Resumes rotation once the deadline passes; returns the auto-rotate flag
    pub fn update(&mut self, now: Duration) -> bool {
        if self.resume_timer.fire(now) {
            self.suspended = false;
            log::debug!("Auto-rotate resumed");
        }
        self.is_rotating()
    }
}
