//! Cancellable one-shot timers.
//!
//! The pipeline never touches a global timer. Anything time-based owns a
//! [`TimerSlot`] built from an explicit [`Timer`] instance, and re-arming a
//! slot always cancels the handle it held before.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Handle to an armed timer.
pub trait TimerHandle {
    /// Prevent the callback from running. No-op if it already ran.
    fn cancel(self);
}

/// Source of one-shot timers on the current event loop.
pub trait Timer: Clone + 'static {
    type Handle: TimerHandle + 'static;

    /// Run `callback` once after `delay`.
    fn arm(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Holds at most one armed timer.
pub struct TimerSlot<T: Timer> {
    timer: T,
    armed: Rc<RefCell<Option<T::Handle>>>,
}

impl<T: Timer> TimerSlot<T> {
    pub fn new(timer: T) -> Self {
        Self {
            timer,
            armed: Rc::new(RefCell::new(None)),
        }
    }

    /// Cancel the pending timer, if any, and arm a new one.
    pub fn rearm(&self, delay: Duration, callback: impl FnOnce() + 'static) {
        self.cancel();
        let armed = Rc::clone(&self.armed);
        let handle = self.timer.arm(
            delay,
            Box::new(move || {
                armed.borrow_mut().take();
                callback();
            }),
        );
        *self.armed.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        let pending = self.armed.borrow_mut().take();
        if let Some(handle) = pending {
            handle.cancel();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.borrow().is_some()
    }
}

impl<T: Timer> Drop for TimerSlot<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Deterministic timer driven by [`ManualTimer::advance`].
///
/// Used by headless front ends and tests; nothing fires until time is
/// advanced explicitly.
#[derive(Clone, Default)]
pub struct ManualTimer {
    inner: Rc<RefCell<ManualClock>>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

struct PendingTimer {
    id: u64,
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

pub struct ManualHandle {
    id: u64,
    inner: Rc<RefCell<ManualClock>>,
}

impl TimerHandle for ManualHandle {
    fn cancel(self) {
        self.inner.borrow_mut().pending.retain(|p| p.id != self.id);
    }
}

impl Timer for ManualTimer {
    type Handle = ManualHandle;

    fn arm(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> ManualHandle {
        let mut clock = self.inner.borrow_mut();
        clock.next_id += 1;
        let id = clock.next_id;
        let due = clock.now + delay;
        clock.pending.push(PendingTimer { id, due, callback });
        ManualHandle {
            id,
            inner: Rc::clone(&self.inner),
        }
    }
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward, firing every timer that comes due in order.
    /// Callbacks may arm further timers; those fire too if they fall due
    /// within the same advance.
    pub fn advance(&self, by: Duration) {
        let target = self.inner.borrow().now + by;
        loop {
            let next = {
                let mut clock = self.inner.borrow_mut();
                let earliest = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.id))
                    .map(|(index, _)| index);
                earliest.map(|index| {
                    let timer = clock.pending.remove(index);
                    clock.now = timer.due;
                    timer.callback
                })
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.inner.borrow_mut().now = target;
    }

    /// Elapsed virtual time.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of armed, unfired timers.
    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }
}

/// Timer backed by the tokio runtime.
///
/// Callbacks run on a local task, so arming must happen inside a
/// `tokio::task::LocalSet`.
#[cfg(feature = "native")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

#[cfg(feature = "native")]
impl TimerHandle for tokio::task::JoinHandle<()> {
    fn cancel(self) {
        self.abort();
    }
}

#[cfg(feature = "native")]
impl Timer for TokioTimer {
    type Handle = tokio::task::JoinHandle<()>;

    fn arm(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle {
        tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            callback();
        })
    }
}
