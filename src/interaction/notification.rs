//! Single-slot text notification with auto-hide

use std::time::Duration;

use crate::timer::OneShotTimer;

#[derive(Debug)]
pub struct Notification {
    display_duration: Duration,
    text: Option<String>,
    hide_timer: OneShotTimer,
}

impl Notification {
    /// Creates a hidden notification
    ///
    /// # Arguments
    /// * `display_duration` - How long each shown text stays visible
    pub fn new(display_duration: Duration) -> Self {
        Self {
            display_duration,
            text: None,
            hide_timer: OneShotTimer::new(),
        }
    }

    /// Replaces the current text and restarts the auto-hide countdown
    pub fn show(&mut self, text: impl Into<String>, now: Duration) {
        let text = text.into();
        log::debug!("Notification: {text}");
        self.text = Some(text);
        self.hide_timer.schedule(now, self.display_duration);
    }

    pub fn hide(&mut self) {
        if self.text.take().is_some() {
            log::debug!("Notification hidden");
        }
        self.hide_timer.cancel();
    }

    /// Hides the text once its display time is over
    pub fn update(&mut self, now: Duration) {
        if self.hide_timer.fire(now) {
            self.hide();
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_text_hides_after_display_duration() {
        let mut notification = Notification::new(ms(2000));
        notification.show("Selected: Torso", ms(100));

        notification.update(ms(2099));
        assert_eq!(notification.text(), Some("Selected: Torso"));

        notification.update(ms(2100));
        assert_eq!(notification.text(), None);
    }

    #[test]
    fn test_new_text_restarts_countdown() {
        let mut notification = Notification::new(ms(2000));
        notification.show("Selected: Torso", ms(0));
        notification.show("Selected: Head", ms(1500));

        notification.update(ms(2000));
        assert_eq!(notification.text(), Some("Selected: Head"));
        notification.update(ms(3500));
        assert_eq!(notification.text(), None);
    }
}
