//! Transient notices (the toast).

use crate::render::ScreenHandle;
use crate::timer::{Timer, TimerSlot};
use std::time::Duration;

/// How long a notice stays visible.
pub const NOTICE_DISMISS_AFTER: Duration = Duration::from_millis(3200);
/// Shown when a failure carries no message of its own.
pub const FALLBACK_NOTICE: &str = "API unavailable";
/// Shown when the startup sequence fails.
pub const INIT_FAILED: &str = "Failed to init";

/// Shows one notice at a time and hides it after [`NOTICE_DISMISS_AFTER`].
///
/// A newer notice replaces the visible one and restarts the dismissal.
pub struct NoticeBoard<T: Timer> {
    slot: TimerSlot<T>,
    screen: ScreenHandle,
    dismiss_after: Duration,
}

impl<T: Timer> NoticeBoard<T> {
    pub fn new(timer: T, screen: ScreenHandle) -> Self {
        Self {
            slot: TimerSlot::new(timer),
            screen,
            dismiss_after: NOTICE_DISMISS_AFTER,
        }
    }

    pub fn show(&self, message: &str) {
        let message = if message.trim().is_empty() {
            FALLBACK_NOTICE
        } else {
            message
        };
        self.screen.update(|s| s.notice = Some(message.to_string()));

        let screen = self.screen.clone();
        self.slot.rearm(self.dismiss_after, move || {
            screen.update(|s| s.notice = None);
        });
    }

    /// Hide the current notice now.
    pub fn dismiss(&self) {
        self.slot.cancel();
        self.screen.update(|s| s.notice = None);
    }

    pub fn is_visible(&self) -> bool {
        self.screen.read(|s| s.notice.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualTimer;

    fn board() -> (ManualTimer, ScreenHandle, NoticeBoard<ManualTimer>) {
        let timer = ManualTimer::new();
        let screen = ScreenHandle::new();
        let board = NoticeBoard::new(timer.clone(), screen.clone());
        (timer, screen, board)
    }

    #[test]
    fn test_notice_dismisses_after_timeout() {
        let (timer, screen, board) = board();
        board.show("HTTP 500: boom");
        assert_eq!(screen.read(|s| s.notice.clone()), Some("HTTP 500: boom".into()));
        timer.advance(Duration::from_millis(3199));
        assert!(board.is_visible());
        timer.advance(Duration::from_millis(1));
        assert!(!board.is_visible());
    }

    #[test]
    fn test_newer_notice_restarts_dismissal() {
        let (timer, screen, board) = board();
        board.show("first");
        timer.advance(Duration::from_millis(3000));
        board.show("second");
        timer.advance(Duration::from_millis(3000));
        assert_eq!(screen.read(|s| s.notice.clone()), Some("second".into()));
        assert_eq!(timer.pending(), 1);
        timer.advance(Duration::from_millis(200));
        assert!(!board.is_visible());
    }

    #[test]
    fn test_blank_message_uses_fallback() {
        let (_timer, screen, board) = board();
        board.show("  ");
        assert_eq!(screen.read(|s| s.notice.clone()), Some("API unavailable".into()));
    }

    #[test]
    fn test_dismiss_cancels_timer() {
        let (timer, _screen, board) = board();
        board.show("bye");
        board.dismiss();
        assert!(!board.is_visible());
        assert_eq!(timer.pending(), 0);
    }
}
