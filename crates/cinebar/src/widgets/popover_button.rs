//! Menu buttons whose popovers hold the fullscreen controls open.

use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Label, MenuButton, Orientation, Popover, Separator};

use cinebar_core::{PopoverOwner, RevealCoordinator};

use crate::styles::{class, controls, popover as popover_class};

/// A `MenuButton` wired to the reveal coordinator through a [`PopoverOwner`].
///
/// Showing the popover reports "opened" before it takes input; the `closed`
/// signal reports "closed" after it is dismissed.
pub struct PopoverButton {
    button: MenuButton,
    popover: Popover,
}

impl PopoverButton {
    pub fn new(coordinator: &Rc<RevealCoordinator>) -> Self {
        let button = MenuButton::new();
        button.set_halign(Align::Center);
        button.set_valign(Align::Center);
        button.set_can_focus(false);

        // The inner toggle button is what actually gets drawn.
        if let Some(toggle) = button.first_child() {
            toggle.add_css_class(class::FLAT);
            toggle.add_css_class(controls::BUTTON);
        }

        let popover = Popover::new();
        button.set_popover(Some(&popover));

        let owner = Rc::new(PopoverOwner::new(coordinator));
        {
            let owner = owner.clone();
            popover.connect_show(move |_| owner.opened());
        }
        popover.connect_closed(move |_| owner.closed());

        Self { button, popover }
    }

    pub fn with_icon(icon_name: &str, coordinator: &Rc<RevealCoordinator>) -> Self {
        let this = Self::new(coordinator);
        this.button.set_icon_name(icon_name);
        this
    }

    pub fn widget(&self) -> &MenuButton {
        &self.button
    }

    pub fn popover(&self) -> &Popover {
        &self.popover
    }

    pub fn set_icon_name(&self, icon_name: &str) {
        self.button.set_icon_name(icon_name);
    }

    pub fn set_label(&self, label: &str) {
        self.button.set_label(label);
    }

    pub fn set_content(&self, child: &impl IsA<gtk4::Widget>) {
        self.popover.set_child(Some(child));
    }
}

/// A horizontal rule with an optional label in the middle.
///
/// Starts hidden when built without a label and shows up the first time one
/// is set.
pub struct PopoverSeparator {
    root: GtkBox,
    label: Label,
}

impl PopoverSeparator {
    pub fn new(label: Option<&str>) -> Self {
        let root = GtkBox::new(Orientation::Horizontal, 0);
        root.add_css_class(popover_class::SEPARATOR);
        root.set_visible(false);

        let start = Separator::new(Orientation::Horizontal);
        start.set_hexpand(true);
        start.set_valign(Align::Center);

        let middle = Label::new(None);
        middle.add_css_class(class::DIM_LABEL);

        let end = Separator::new(Orientation::Horizontal);
        end.set_hexpand(true);
        end.set_valign(Align::Center);

        root.append(&start);
        root.append(&middle);
        root.append(&end);

        let this = Self {
            root,
            label: middle,
        };
        this.set_label(label);
        this
    }

    pub fn widget(&self) -> &GtkBox {
        &self.root
    }

    pub fn set_label(&self, value: Option<&str>) {
        let value = value.unwrap_or("");
        self.label.set_label(value);
        self.root
            .set_visible(separator_visible(self.root.is_visible(), value));
    }
}

/// Once shown, a separator stays visible even if its label is cleared.
fn separator_visible(currently_visible: bool, label: &str) -> bool {
    currently_visible || !label.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_hidden_until_labelled() {
        assert!(!separator_visible(false, ""));
        assert!(separator_visible(false, "Decoder: auto"));
    }

    #[test]
    fn test_separator_stays_visible_when_label_cleared() {
        let shown = separator_visible(false, "Decoder: auto");
        assert!(separator_visible(shown, ""));
    }
}
