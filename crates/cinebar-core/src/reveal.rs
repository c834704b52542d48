//! Fullscreen reveal/auto-hide coordination for the player controls.
//!
//! The coordinator is the single owner of the window's fullscreen and
//! popover-open flags. Controls receive an `Rc<RevealCoordinator>` at
//! construction and only ever call its transition methods.
//!
//! Rules:
//! - Windowed mode never hides the controls.
//! - In fullscreen, every reveal shows the controls and restarts one
//!   auto-hide timer (cancel, then reschedule; never stacked).
//! - When the timer fires while a popover holds the controls, nothing is
//!   hidden and nothing is rescheduled; closing the popover reveals again.
//! - Leaving fullscreen cancels the timer, drops the hold and shows the
//!   controls.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::debug;

use crate::callbacks::Callbacks;
use crate::fullscreen::FullscreenAware;
use crate::scheduler::{Scheduler, TimerId};

/// Identifier the coordinator issues to each popover-owning control.
pub type PopoverId = u64;

/// Identifier of a fullscreen-aware subscription.
pub type SubscriptionId = u64;

/// Snapshot of the window-level flags shared by all controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerWindowState {
    pub is_fullscreen_mode: bool,
    /// Only ever true while `is_fullscreen_mode` is true.
    pub is_popover_open: bool,
    pub is_mobile_monitor: bool,
}

/// Externally observable reveal behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Controls are always shown.
    Windowed,
    /// Fullscreen with the controls hidden.
    FullscreenIdle,
    /// Fullscreen with the controls shown and an auto-hide pending.
    FullscreenRevealed,
    /// Fullscreen with an open popover keeping the controls shown.
    FullscreenPopoverHeld,
}

pub struct RevealCoordinator {
    this: Weak<Self>,
    scheduler: Rc<dyn Scheduler>,
    auto_hide_delay: Duration,

    fullscreen: Cell<bool>,
    popover_held: Cell<bool>,
    mobile_monitor: Cell<bool>,
    controls_visible: Cell<bool>,

    hide_timer: Cell<Option<TimerId>>,

    /// Popover currently open, tracked in both modes.
    open_popover: Cell<Option<PopoverId>>,
    next_popover_id: Cell<PopoverId>,

    widgets: RefCell<Vec<(SubscriptionId, Weak<dyn FullscreenAware>)>>,
    next_subscription_id: Cell<SubscriptionId>,

    visibility: Callbacks<bool>,
}

impl RevealCoordinator {
    /// Create a coordinator in windowed mode with the controls visible.
    pub fn new(scheduler: Rc<dyn Scheduler>, auto_hide_delay: Duration) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            this: this.clone(),
            scheduler,
            auto_hide_delay,
            fullscreen: Cell::new(false),
            popover_held: Cell::new(false),
            mobile_monitor: Cell::new(false),
            controls_visible: Cell::new(true),
            hide_timer: Cell::new(None),
            open_popover: Cell::new(None),
            next_popover_id: Cell::new(1),
            widgets: RefCell::new(Vec::new()),
            next_subscription_id: Cell::new(1),
            visibility: Callbacks::new(),
        })
    }

    pub fn window_state(&self) -> PlayerWindowState {
        PlayerWindowState {
            is_fullscreen_mode: self.fullscreen.get(),
            is_popover_open: self.popover_held.get(),
            is_mobile_monitor: self.mobile_monitor.get(),
        }
    }

    pub fn state(&self) -> RevealState {
        if !self.fullscreen.get() {
            RevealState::Windowed
        } else if self.popover_held.get() {
            RevealState::FullscreenPopoverHeld
        } else if self.controls_visible.get() {
            RevealState::FullscreenRevealed
        } else {
            RevealState::FullscreenIdle
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.get()
    }

    pub fn is_popover_open(&self) -> bool {
        self.popover_held.get()
    }

    pub fn is_mobile_monitor(&self) -> bool {
        self.mobile_monitor.get()
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible.get()
    }

    pub fn has_pending_hide(&self) -> bool {
        self.hide_timer.get().is_some()
    }

    // Mode transitions

    /// Record a window fullscreen change reported by the host window.
    pub fn set_fullscreen(&self, fullscreen: bool) {
        if self.fullscreen.get() == fullscreen {
            return;
        }
        debug!("RevealCoordinator: fullscreen {}", fullscreen);
        self.fullscreen.set(fullscreen);

        if fullscreen {
            // A menu opened in windowed mode keeps the controls up once the
            // window goes fullscreen underneath it.
            if self.open_popover.get().is_some() {
                self.popover_held.set(true);
            }
            self.notify_widgets();
            self.reveal_controls();
        } else {
            self.cancel_hide_timer();
            self.popover_held.set(false);
            self.set_controls_visible(true);
            self.notify_widgets();
        }
    }

    /// Record whether the window sits on a mobile-sized monitor.
    pub fn set_mobile_monitor(&self, mobile: bool) {
        if self.mobile_monitor.get() == mobile {
            return;
        }
        debug!("RevealCoordinator: mobile monitor {}", mobile);
        self.mobile_monitor.set(mobile);
        self.notify_widgets();
    }

    /// Show the controls and, in fullscreen, restart the auto-hide timer.
    pub fn reveal_controls(&self) {
        self.set_controls_visible(true);

        if self.fullscreen.get() {
            self.restart_hide_timer();
        }
    }

    /// A button press or similar interaction on the controls.
    pub fn notify_interaction(&self) {
        if self.fullscreen.get() {
            self.reveal_controls();
        }
    }

    // Popover handshake

    /// Issue an id for a new popover-owning control.
    pub fn register_popover(&self) -> PopoverId {
        let id = self.next_popover_id.get();
        self.next_popover_id.set(id + 1);
        id
    }

    /// A popover is about to become interactive.
    pub fn popover_opened(&self, id: PopoverId) {
        if let Some(active) = self.open_popover.get()
            && active != id
        {
            debug!("RevealCoordinator: popover {} replaces {}", id, active);
        }
        self.open_popover.set(Some(id));

        if !self.fullscreen.get() {
            return;
        }

        self.popover_held.set(true);
        self.reveal_controls();
    }

    /// A popover has been fully dismissed.
    ///
    /// Only the popover recorded as open may release the hold; stale closes
    /// from a popover another one already replaced are ignored.
    pub fn popover_closed(&self, id: PopoverId) {
        if self.open_popover.get() != Some(id) {
            debug!(
                "RevealCoordinator: ignoring close of inactive popover {}",
                id
            );
            return;
        }
        self.open_popover.set(None);

        // Reveal first, then release the hold.
        if self.fullscreen.get() {
            self.reveal_controls();
        }
        self.popover_held.set(false);
    }

    // Observers

    /// Subscribe a control to fullscreen/monitor changes.
    ///
    /// The control is called once immediately with the current state. Only a
    /// weak reference is kept; dropped controls are pruned automatically.
    pub fn subscribe(&self, widget: Rc<dyn FullscreenAware>) -> SubscriptionId {
        let id = self.next_subscription_id.get();
        self.next_subscription_id.set(id + 1);
        self.widgets.borrow_mut().push((id, Rc::downgrade(&widget)));

        widget.on_fullscreen_mode_changed(self.fullscreen.get(), self.mobile_monitor.get());
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut widgets = self.widgets.borrow_mut();
        let before = widgets.len();
        widgets.retain(|(sub_id, _)| *sub_id != id);
        widgets.len() != before
    }

    /// Number of live fullscreen-aware subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.widgets
            .borrow()
            .iter()
            .filter(|(_, w)| w.strong_count() > 0)
            .count()
    }

    /// Listen for controls visibility changes.
    ///
    /// The callback receives the current visibility immediately, then every
    /// actual change.
    pub fn connect_visibility<F>(&self, callback: F)
    where
        F: Fn(bool) + 'static,
    {
        let callback = Rc::new(callback);
        let registered = callback.clone();
        self.visibility
            .register(move |visible: &bool| registered(*visible));

        callback(self.controls_visible.get());
    }

    // Internal

    fn set_controls_visible(&self, visible: bool) {
        if self.controls_visible.replace(visible) != visible {
            debug!("RevealCoordinator: controls visible {}", visible);
            self.visibility.notify(&visible);
        }
    }

    fn restart_hide_timer(&self) {
        self.cancel_hide_timer();

        let this_weak = self.this.clone();
        let id = self.scheduler.schedule_once(
            self.auto_hide_delay,
            Box::new(move || {
                if let Some(this) = this_weak.upgrade() {
                    this.on_hide_timeout();
                }
            }),
        );
        self.hide_timer.set(Some(id));
    }

    fn cancel_hide_timer(&self) {
        if let Some(id) = self.hide_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn on_hide_timeout(&self) {
        self.hide_timer.set(None);

        if !self.fullscreen.get() {
            return;
        }

        if self.popover_held.get() {
            debug!("RevealCoordinator: popover open, keeping controls revealed");
            return;
        }

        self.set_controls_visible(false);
    }

    fn notify_widgets(&self) {
        let live: Vec<Rc<dyn FullscreenAware>> = {
            let mut widgets = self.widgets.borrow_mut();
            widgets.retain(|(_, w)| w.strong_count() > 0);
            widgets.iter().filter_map(|(_, w)| w.upgrade()).collect()
        };

        let fullscreen = self.fullscreen.get();
        let mobile = self.mobile_monitor.get();
        for widget in live {
            widget.on_fullscreen_mode_changed(fullscreen, mobile);
        }
    }
}

impl Drop for RevealCoordinator {
    fn drop(&mut self) {
        self.cancel_hide_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;

    const DELAY: Duration = Duration::from_millis(3000);
    const PAST_DELAY: Duration = Duration::from_millis(3001);

    fn setup() -> (Rc<ManualScheduler>, Rc<RevealCoordinator>) {
        let scheduler = Rc::new(ManualScheduler::new());
        let coordinator = RevealCoordinator::new(scheduler.clone(), DELAY);
        (scheduler, coordinator)
    }

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(bool, bool)>>,
    }

    impl FullscreenAware for Recorder {
        fn on_fullscreen_mode_changed(&self, is_fullscreen: bool, is_mobile_monitor: bool) {
            self.calls
                .borrow_mut()
                .push((is_fullscreen, is_mobile_monitor));
        }
    }

    #[test]
    fn test_starts_windowed_and_visible() {
        let (scheduler, coordinator) = setup();
        assert_eq!(coordinator.state(), RevealState::Windowed);
        assert!(coordinator.controls_visible());
        assert_eq!(coordinator.window_state(), PlayerWindowState::default());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_windowed_never_hides() {
        let (scheduler, coordinator) = setup();

        coordinator.reveal_controls();
        coordinator.notify_interaction();
        assert_eq!(scheduler.pending_count(), 0);

        scheduler.advance(PAST_DELAY);
        assert!(coordinator.controls_visible());
    }

    #[test]
    fn test_enter_fullscreen_reveals_then_hides() {
        let (scheduler, coordinator) = setup();

        coordinator.set_fullscreen(true);
        assert_eq!(coordinator.state(), RevealState::FullscreenRevealed);
        assert!(coordinator.has_pending_hide());

        scheduler.advance(PAST_DELAY);
        assert_eq!(coordinator.state(), RevealState::FullscreenIdle);
        assert!(!coordinator.has_pending_hide());
    }

    #[test]
    fn test_interaction_restarts_full_delay() {
        let (scheduler, coordinator) = setup();
        coordinator.set_fullscreen(true);

        scheduler.advance(Duration::from_millis(2000));
        coordinator.notify_interaction();
        scheduler.advance(Duration::from_millis(2000));
        assert!(coordinator.controls_visible());

        scheduler.advance(Duration::from_millis(1000));
        assert!(!coordinator.controls_visible());
    }

    #[test]
    fn test_double_reveal_keeps_single_timer() {
        let (scheduler, coordinator) = setup();
        coordinator.set_fullscreen(true);

        coordinator.reveal_controls();
        coordinator.reveal_controls();
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_popover_holds_controls() {
        let (scheduler, coordinator) = setup();
        let popover = coordinator.register_popover();
        coordinator.set_fullscreen(true);

        coordinator.popover_opened(popover);
        assert_eq!(coordinator.state(), RevealState::FullscreenPopoverHeld);

        scheduler.advance(PAST_DELAY);
        assert!(coordinator.controls_visible());
        assert_eq!(scheduler.pending_count(), 0, "held hide must not reschedule");

        coordinator.popover_closed(popover);
        assert!(!coordinator.is_popover_open());
        assert_eq!(scheduler.pending_count(), 1);

        scheduler.advance(PAST_DELAY);
        assert!(!coordinator.controls_visible());
    }

    #[test]
    fn test_popover_in_windowed_mode_is_inert() {
        let (scheduler, coordinator) = setup();
        let popover = coordinator.register_popover();

        coordinator.popover_opened(popover);
        assert!(!coordinator.is_popover_open());
        assert_eq!(scheduler.pending_count(), 0);

        coordinator.popover_closed(popover);
        assert_eq!(coordinator.state(), RevealState::Windowed);
    }

    #[test]
    fn test_popover_open_across_fullscreen_entry_holds() {
        let (scheduler, coordinator) = setup();
        let popover = coordinator.register_popover();

        coordinator.popover_opened(popover);
        coordinator.set_fullscreen(true);
        assert!(coordinator.is_popover_open());

        scheduler.advance(PAST_DELAY);
        assert!(coordinator.controls_visible());
    }

    #[test]
    fn test_stale_close_is_ignored() {
        let (scheduler, coordinator) = setup();
        let first = coordinator.register_popover();
        let second = coordinator.register_popover();
        coordinator.set_fullscreen(true);

        coordinator.popover_opened(first);
        coordinator.popover_opened(second);
        coordinator.popover_closed(first);
        assert!(coordinator.is_popover_open());

        scheduler.advance(PAST_DELAY);
        assert!(coordinator.controls_visible());
    }

    #[test]
    fn test_close_without_open_is_ignored() {
        let (scheduler, coordinator) = setup();
        let popover = coordinator.register_popover();
        coordinator.set_fullscreen(true);
        scheduler.advance(PAST_DELAY);

        coordinator.popover_closed(popover);
        assert!(!coordinator.controls_visible());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_leave_fullscreen_resets_everything() {
        let (scheduler, coordinator) = setup();
        let popover = coordinator.register_popover();
        coordinator.set_fullscreen(true);
        coordinator.popover_opened(popover);

        coordinator.set_fullscreen(false);
        assert!(coordinator.controls_visible());
        assert!(!coordinator.is_popover_open());
        assert_eq!(scheduler.pending_count(), 0);

        scheduler.advance(PAST_DELAY * 2);
        assert!(coordinator.controls_visible());
    }

    #[test]
    fn test_leave_fullscreen_while_hidden_shows_controls() {
        let (scheduler, coordinator) = setup();
        coordinator.set_fullscreen(true);
        scheduler.advance(PAST_DELAY);
        assert!(!coordinator.controls_visible());

        coordinator.set_fullscreen(false);
        assert!(coordinator.controls_visible());
    }

    #[test]
    fn test_redundant_mode_changes_are_noops() {
        let (scheduler, coordinator) = setup();
        let recorder = Rc::new(Recorder::default());
        coordinator.subscribe(recorder.clone());

        coordinator.set_fullscreen(false);
        coordinator.set_mobile_monitor(false);
        assert_eq!(recorder.calls.borrow().len(), 1);

        coordinator.set_fullscreen(true);
        scheduler.advance(Duration::from_millis(1000));
        coordinator.set_fullscreen(true);
        scheduler.advance(Duration::from_millis(2001));
        assert!(!coordinator.controls_visible());
    }

    #[test]
    fn test_subscribers_notified_in_order() {
        let (_scheduler, coordinator) = setup();
        let order = Rc::new(RefCell::new(Vec::new()));

        struct Tagged(&'static str, Rc<RefCell<Vec<&'static str>>>);
        impl FullscreenAware for Tagged {
            fn on_fullscreen_mode_changed(&self, _: bool, _: bool) {
                self.1.borrow_mut().push(self.0);
            }
        }

        let a: Rc<dyn FullscreenAware> = Rc::new(Tagged("a", order.clone()));
        let b: Rc<dyn FullscreenAware> = Rc::new(Tagged("b", order.clone()));
        coordinator.subscribe(a.clone());
        coordinator.subscribe(b.clone());
        order.borrow_mut().clear();

        coordinator.set_fullscreen(true);
        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_subscribe_sends_current_state() {
        let (_scheduler, coordinator) = setup();
        coordinator.set_mobile_monitor(true);
        coordinator.set_fullscreen(true);

        let recorder = Rc::new(Recorder::default());
        coordinator.subscribe(recorder.clone());
        assert_eq!(*recorder.calls.borrow(), vec![(true, true)]);
    }

    #[test]
    fn test_mobile_change_renotifies() {
        let (_scheduler, coordinator) = setup();
        let recorder = Rc::new(Recorder::default());
        coordinator.subscribe(recorder.clone());
        coordinator.set_fullscreen(true);
        coordinator.set_mobile_monitor(true);

        assert_eq!(
            *recorder.calls.borrow(),
            vec![(false, false), (true, false), (true, true)]
        );
    }

    #[test]
    fn test_unsubscribe_and_prune() {
        let (_scheduler, coordinator) = setup();
        let kept = Rc::new(Recorder::default());
        let id = coordinator.subscribe(kept.clone());
        {
            let dropped = Rc::new(Recorder::default());
            coordinator.subscribe(dropped);
        }
        assert_eq!(coordinator.subscriber_count(), 1);

        assert!(coordinator.unsubscribe(id));
        assert!(!coordinator.unsubscribe(id));
        coordinator.set_fullscreen(true);
        assert_eq!(kept.calls.borrow().len(), 1);
    }

    #[test]
    fn test_visibility_callbacks_fire_on_change_only() {
        let (scheduler, coordinator) = setup();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let s = seen.clone();
        coordinator.connect_visibility(move |visible| s.borrow_mut().push(visible));

        coordinator.set_fullscreen(true);
        coordinator.reveal_controls();
        scheduler.advance(PAST_DELAY);
        coordinator.notify_interaction();

        assert_eq!(*seen.borrow(), vec![true, false, true]);
    }

    #[test]
    fn test_dropping_coordinator_cancels_timer() {
        let (scheduler, coordinator) = setup();
        coordinator.set_fullscreen(true);
        assert_eq!(scheduler.pending_count(), 1);

        drop(coordinator);
        assert_eq!(scheduler.pending_count(), 0);
    }
}
