//! Ordered listener registry used for change notifications.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Identifier returned by [`Callbacks::register`], used to unregister.
pub type CallbackId = u64;

type Callback<T> = Rc<dyn Fn(&T)>;

/// A list of listeners notified synchronously in registration order.
///
/// Listeners may register or unregister other listeners (or themselves) while
/// being notified; such changes take effect from the next notification.
pub struct Callbacks<T> {
    entries: RefCell<Vec<(CallbackId, Callback<T>)>>,
    next_id: Cell<CallbackId>,
}

impl<T> Default for Callbacks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Callbacks<T> {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    pub fn register<F>(&self, callback: F) -> CallbackId
    where
        F: Fn(&T) + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Remove a listener. Returns false if the id was not registered.
    pub fn unregister(&self, id: CallbackId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    pub fn notify(&self, value: &T) {
        // Snapshot first so listeners can re-enter the registry.
        let snapshot: Vec<Callback<T>> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for cb in snapshot {
            cb(value);
        }
    }
}
