//! GLib main-loop backed [`Scheduler`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use cinebar_core::{Scheduler, TimerId};
use gtk4::glib;

/// Runs delayed callbacks as one-shot GLib timeout sources on the default
/// main context.
#[derive(Default)]
pub struct GlibScheduler {
    sources: Rc<RefCell<HashMap<TimerId, glib::SourceId>>>,
    next_id: Cell<TimerId>,
}

impl GlibScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for GlibScheduler {
    fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        let sources_weak = Rc::downgrade(&self.sources);
        let source_id = glib::timeout_add_local_once(delay, move || {
            // The source is finished once we get here; forget it so a late
            // cancel doesn't try to remove it again.
            if let Some(sources) = sources_weak.upgrade() {
                sources.borrow_mut().remove(&id);
            }
            callback();
        });

        self.sources.borrow_mut().insert(id, source_id);
        id
    }

    fn cancel(&self, id: TimerId) -> bool {
        let source = self.sources.borrow_mut().remove(&id);
        match source {
            Some(source) => {
                source.remove();
                true
            }
            None => false,
        }
    }
}

impl Drop for GlibScheduler {
    fn drop(&mut self) {
        for (_, source) in self.sources.borrow_mut().drain() {
            source.remove();
        }
    }
}
