//! Single-shot, cancellable delayed callbacks.
//!
//! The reveal coordinator only needs "run this once after a delay, unless I
//! cancel it first". The GTK binary backs this with the GLib main loop; tests
//! and headless users drive [`ManualScheduler`] by hand.

use std::cell::{Cell, RefCell};
use std::time::Duration;

/// Identifier of a scheduled callback.
pub type TimerId = u64;

/// A same-thread source of delayed callbacks.
///
/// Implementations must guarantee that a cancelled timer never runs, and must
/// not hold internal borrows while running a callback: callbacks routinely
/// schedule or cancel other timers.
pub trait Scheduler {
    /// Run `callback` once after `delay`.
    fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId;

    /// Cancel a pending callback. Returns false if it already ran or was
    /// cancelled before.
    fn cancel(&self, id: TimerId) -> bool;
}

struct PendingTimer {
    id: TimerId,
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

/// A virtual-clock scheduler advanced explicitly with [`ManualScheduler::advance`].
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_id: Cell<TimerId>,
    pending: RefCell<Vec<PendingTimer>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since creation.
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of callbacks still waiting to run.
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Move the clock forward, running every callback that falls due in
    /// deadline order. Callbacks scheduled while advancing run too if they
    /// fall inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;

        while let Some(timer) = self.take_next_due(target) {
            self.now.set(timer.due);
            (timer.callback)();
        }

        self.now.set(target);
    }

    fn take_next_due(&self, target: Duration) -> Option<PendingTimer> {
        let mut pending = self.pending.borrow_mut();
        let index = pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= target)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(i, _)| i)?;
        Some(pending.remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.pending.borrow_mut().push(PendingTimer {
            id,
            due: self.now.get() + delay,
            callback,
        });
        id
    }

    fn cancel(&self, id: TimerId) -> bool {
        let mut pending = self.pending.borrow_mut();
        let before = pending.len();
        pending.retain(|t| t.id != id);
        pending.len() != before
    }
}
