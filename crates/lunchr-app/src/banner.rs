//! Timed, dismissible error banner.
//!
//! The banner holds at most one message at a time. `show` arms an
//! auto-dismiss deadline, `dismiss` hides the banner and cancels the
//! pending auto-dismiss, and `tick` applies the deadline. A tick after a
//! manual dismiss is a no-op: the deadline died with the message.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Shown {
    lines: Vec<String>,
    deadline: Instant,
}

#[derive(Debug)]
pub struct ErrorBanner {
    dismiss_after: Duration,
    shown: Option<Shown>,
}

impl ErrorBanner {
    #[must_use]
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            dismiss_after,
            shown: None,
        }
    }

    /// Shows `message`, replacing any current banner and re-arming the
    /// auto-dismiss deadline. Newlines split the message into banner lines.
    pub fn show(&mut self, message: &str, now: Instant) {
        self.shown = Some(Shown {
            lines: message.lines().map(str::to_owned).collect(),
            deadline: now + self.dismiss_after,
        });
    }

    /// Hides the banner immediately (user click).
    pub fn dismiss(&mut self) {
        self.shown = None;
    }

    /// Applies the auto-dismiss deadline. Returns `true` if this tick hid
    /// the banner.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.shown {
            Some(shown) if now >= shown.deadline => {
                self.shown = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    /// The displayed lines; empty when the banner is hidden.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        self.shown.as_ref().map_or(&[], |shown| &shown.lines)
    }
}
