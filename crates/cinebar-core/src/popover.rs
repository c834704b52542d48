//! Handshake between popover-owning controls and the reveal coordinator.
//!
//! Each popover button owns one [`PopoverOwner`]. The button reports
//! `opened()` before its popover becomes interactive and `closed()` once it
//! is dismissed; the owner turns those into coordinator transitions and
//! filters out unbalanced calls.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::reveal::{PopoverId, RevealCoordinator};

pub struct PopoverOwner {
    id: PopoverId,
    coordinator: Weak<RevealCoordinator>,
    open: Cell<bool>,
}

impl PopoverOwner {
    pub fn new(coordinator: &Rc<RevealCoordinator>) -> Self {
        Self {
            id: coordinator.register_popover(),
            coordinator: Rc::downgrade(coordinator),
            open: Cell::new(false),
        }
    }

    pub fn id(&self) -> PopoverId {
        self.id
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// The popover is about to be shown.
    pub fn opened(&self) {
        if self.open.replace(true) {
            debug!("PopoverOwner {}: already open", self.id);
            return;
        }
        if let Some(coordinator) = self.coordinator.upgrade() {
            coordinator.popover_opened(self.id);
        }
    }

    /// The popover has been dismissed.
    pub fn closed(&self) {
        if !self.open.replace(false) {
            debug!("PopoverOwner {}: close without open, ignoring", self.id);
            return;
        }
        if let Some(coordinator) = self.coordinator.upgrade() {
            coordinator.popover_closed(self.id);
        }
    }
}

impl Drop for PopoverOwner {
    fn drop(&mut self) {
        // A control destroyed with its menu up must not pin the controls.
        self.closed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use std::time::Duration;

    const DELAY: Duration = Duration::from_millis(500);

    fn setup() -> (Rc<ManualScheduler>, Rc<RevealCoordinator>) {
        let scheduler = Rc::new(ManualScheduler::new());
        let coordinator = RevealCoordinator::new(scheduler.clone(), DELAY);
        (scheduler, coordinator)
    }

    #[test]
    fn test_owners_get_distinct_ids() {
        let (_scheduler, coordinator) = setup();
        let a = PopoverOwner::new(&coordinator);
        let b = PopoverOwner::new(&coordinator);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_open_close_round_trip() {
        let (scheduler, coordinator) = setup();
        coordinator.set_fullscreen(true);
        let owner = PopoverOwner::new(&coordinator);

        owner.opened();
        assert!(owner.is_open());
        assert!(coordinator.is_popover_open());

        scheduler.advance(DELAY * 2);
        assert!(coordinator.controls_visible());

        owner.closed();
        assert!(!owner.is_open());
        assert!(!coordinator.is_popover_open());
        assert!(coordinator.has_pending_hide());
    }

    #[test]
    fn test_repeated_open_does_not_restart_timer() {
        let (scheduler, coordinator) = setup();
        coordinator.set_fullscreen(true);
        let owner = PopoverOwner::new(&coordinator);

        owner.opened();
        scheduler.advance(Duration::from_millis(400));
        owner.opened();
        owner.closed();
        owner.closed();

        // One close restarted the timer at t=400.
        scheduler.advance(Duration::from_millis(499));
        assert!(coordinator.controls_visible());
        scheduler.advance(Duration::from_millis(1));
        assert!(!coordinator.controls_visible());
    }

    #[test]
    fn test_drop_while_open_releases_hold() {
        let (scheduler, coordinator) = setup();
        coordinator.set_fullscreen(true);
        {
            let owner = PopoverOwner::new(&coordinator);
            owner.opened();
        }
        assert!(!coordinator.is_popover_open());

        scheduler.advance(DELAY);
        assert!(!coordinator.controls_visible());
    }

    #[test]
    fn test_outlives_coordinator() {
        let (_scheduler, coordinator) = setup();
        let owner = PopoverOwner::new(&coordinator);
        drop(coordinator);

        owner.opened();
        owner.closed();
    }
}
