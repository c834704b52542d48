//! Exclusive selection over enumerated options.
//!
//! Backs the toggle-button groups used in the player's popovers (for example
//! the repeat mode selector). Each item has a display name and an integer
//! value; exactly one value is selected at a time.

use std::cell::Cell;

use crate::callbacks::{CallbackId, Callbacks};

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumItem {
    pub name: String,
    pub value: i32,
}

impl EnumItem {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

pub struct EnumToggleGroup {
    items: Vec<EnumItem>,
    selected: Cell<i32>,
    on_selected: Callbacks<i32>,
}

impl EnumToggleGroup {
    /// Build a group; the initial selection is value 0 when present,
    /// otherwise the first item's value.
    pub fn new(items: Vec<EnumItem>) -> Self {
        let initial = if items.iter().any(|item| item.value == 0) {
            0
        } else {
            items.first().map_or(0, |item| item.value)
        };

        Self {
            items,
            selected: Cell::new(initial),
            on_selected: Callbacks::new(),
        }
    }

    pub fn items(&self) -> &[EnumItem] {
        &self.items
    }

    pub fn selected(&self) -> i32 {
        self.selected.get()
    }

    pub fn contains(&self, value: i32) -> bool {
        self.items.iter().any(|item| item.value == value)
    }

    /// A member toggle changed state. Only activations change the selection;
    /// radio grouping deactivates the previous member on its own. Activating
    /// the already selected value is an echo and notifies nobody.
    pub fn toggled(&self, value: i32, active: bool) {
        if !active || !self.contains(value) || self.selected.get() == value {
            return;
        }
        self.selected.set(value);
        self.on_selected.notify(&value);
    }

    /// Select `value` programmatically. Returns false for unknown values or
    /// when it is already selected.
    pub fn select(&self, value: i32) -> bool {
        if !self.contains(value) || self.selected.get() == value {
            return false;
        }
        self.toggled(value, true);
        true
    }

    /// Select the item after the current one, wrapping around.
    pub fn select_next(&self) -> Option<i32> {
        let current = self
            .items
            .iter()
            .position(|item| item.value == self.selected.get())?;
        let next = self.items[(current + 1) % self.items.len()].value;
        self.select(next);
        Some(next)
    }

    /// Listen for selection changes.
    pub fn connect_selected<F>(&self, callback: F) -> CallbackId
    where
        F: Fn(i32) + 'static,
    {
        self.on_selected
            .register(move |value: &i32| callback(*value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn repeat_modes() -> EnumToggleGroup {
        EnumToggleGroup::new(vec![
            EnumItem::new("None", 0),
            EnumItem::new("Track", 1),
            EnumItem::new("Playlist", 2),
        ])
    }

    #[test]
    fn test_initial_selection_prefers_zero() {
        assert_eq!(repeat_modes().selected(), 0);

        let group = EnumToggleGroup::new(vec![EnumItem::new("A", 5), EnumItem::new("B", 7)]);
        assert_eq!(group.selected(), 5);

        assert_eq!(EnumToggleGroup::new(Vec::new()).selected(), 0);
    }

    #[test]
    fn test_toggle_activation_selects_and_notifies() {
        let group = repeat_modes();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        group.connect_selected(move |v| s.borrow_mut().push(v));

        group.toggled(2, true);
        group.toggled(0, false);

        assert_eq!(group.selected(), 2);
        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn test_select_rejects_unknown_and_current() {
        let group = repeat_modes();
        assert!(!group.select(9));
        assert!(!group.select(0));
        assert!(group.select(1));
        assert_eq!(group.selected(), 1);
    }

    #[test]
    fn test_select_then_widget_echo_notifies_once() {
        let group = repeat_modes();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        group.connect_selected(move |v| s.borrow_mut().push(v));

        // The GTK row activates the matching button, which reports back.
        assert!(group.select(2));
        group.toggled(2, true);
        group.toggled(0, false);

        assert_eq!(group.selected(), 2);
        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn test_reactivating_current_is_silent() {
        let group = repeat_modes();
        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        group.connect_selected(move |_| *h.borrow_mut() += 1);

        group.toggled(0, true);
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn test_select_next_wraps() {
        let group = repeat_modes();
        assert_eq!(group.select_next(), Some(1));
        assert_eq!(group.select_next(), Some(2));
        assert_eq!(group.select_next(), Some(0));
        assert_eq!(group.selected(), 0);

        assert_eq!(EnumToggleGroup::new(Vec::new()).select_next(), None);
    }

    #[test]
    fn test_items_keep_model_order() {
        let names: Vec<_> = repeat_modes()
            .items()
            .iter()
            .map(|i| i.name.clone())
            .collect();
        assert_eq!(names, vec!["None", "Track", "Playlist"]);
    }
}
