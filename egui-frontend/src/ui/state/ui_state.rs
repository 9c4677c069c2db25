//! # UI State Module
//!
//! General user-feedback state shared by every view: the transient success
//! and error banners shown under the header after a save attempt.

use std::time::{Duration, Instant};

/// How long a banner stays on screen before it clears itself.
const MESSAGE_LIFETIME: Duration = Duration::from_secs(4);

/// Transient feedback messages for the current frame.
#[derive(Debug, Default)]
pub struct UiState {
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    message_set_at: Option<Instant>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
        self.success_message = None;
        self.message_set_at = Some(Instant::now());
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success_message = Some(message.into());
        self.error_message = None;
        self.message_set_at = Some(Instant::now());
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
        self.message_set_at = None;
    }

    /// True while a banner is visible.
    pub fn has_message(&self) -> bool {
        self.error_message.is_some() || self.success_message.is_some()
    }

    /// Drop expired banners; called once per frame.
    pub fn expire_messages(&mut self) {
        if let Some(set_at) = self.message_set_at {
            if set_at.elapsed() >= MESSAGE_LIFETIME {
                self.clear_messages();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_one_message_clears_the_other() {
        let mut ui = UiState::new();
        ui.set_error("bad");
        ui.set_success("good");
        assert_eq!(ui.success_message.as_deref(), Some("good"));
        assert!(ui.error_message.is_none());
        assert!(ui.has_message());
    }

    #[test]
    fn clear_removes_everything() {
        let mut ui = UiState::new();
        ui.set_error("bad");
        ui.clear_messages();
        assert!(!ui.has_message());
    }
}
