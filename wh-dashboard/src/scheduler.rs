//! Redraw Scheduler.
//!
//! Trailing-edge debounce for chart redraws: every request cancels the
//! pending redraw and arms a new one after the quiet period, so a burst of
//! requests collapses into a single redraw that sees the final state.

use crate::timer::{Timer, TimerSlot};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub const REDRAW_QUIET_PERIOD: Duration = Duration::from_millis(300);

pub struct RedrawScheduler<T: Timer> {
    slot: TimerSlot<T>,
    quiet: Duration,
    requested: Cell<u64>,
    executed: Rc<Cell<u64>>,
}

impl<T: Timer> RedrawScheduler<T> {
    pub fn new(timer: T) -> Self {
        Self::with_quiet_period(timer, REDRAW_QUIET_PERIOD)
    }

    pub fn with_quiet_period(timer: T, quiet: Duration) -> Self {
        Self {
            slot: TimerSlot::new(timer),
            quiet,
            requested: Cell::new(0),
            executed: Rc::new(Cell::new(0)),
        }
    }

    /// Request a redraw. Replaces any redraw still waiting for its quiet period.
    pub fn schedule(&self, redraw: impl FnOnce() + 'static) {
        self.requested.set(self.requested.get() + 1);
        let executed = Rc::clone(&self.executed);
        self.slot.rearm(self.quiet, move || {
            executed.set(executed.get() + 1);
            log::debug!("Running chart redraw #{}", executed.get());
            redraw();
        });
    }

    /// Drop the pending redraw without running it.
    pub fn cancel(&self) {
        self.slot.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_armed()
    }

    /// Redraw requests received so far.
    pub fn requested(&self) -> u64 {
        self.requested.get()
    }

    /// Redraws actually run so far.
    pub fn executed(&self) -> u64 {
        self.executed.get()
    }
}
