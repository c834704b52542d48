//! Row of radio toggle buttons backed by an [`EnumToggleGroup`].

use std::rc::Rc;

use gtk4::glib::WeakRef;
use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Orientation, ToggleButton};

use cinebar_core::EnumToggleGroup;

use crate::styles::popover;

pub struct ToggleGroup {
    root: GtkBox,
}

impl ToggleGroup {
    /// Build one button per model item. Button presses select in the model,
    /// and selections made on the model activate the matching button.
    pub fn new(model: Rc<EnumToggleGroup>, orientation: Orientation) -> Self {
        let root = GtkBox::new(orientation, 0);
        root.add_css_class(popover::TOGGLE_GROUP);
        root.add_css_class("linked");

        let mut first: Option<ToggleButton> = None;
        let mut buttons: Vec<(i32, WeakRef<ToggleButton>)> =
            Vec::with_capacity(model.items().len());

        for item in model.items() {
            let button = ToggleButton::with_label(&item.name);
            if let Some(first) = first.as_ref() {
                button.set_group(Some(first));
            } else {
                first = Some(button.clone());
            }
            // Set the initial state before listening so it isn't reported
            // back as a user selection.
            button.set_active(item.value == model.selected());

            let value = item.value;
            let model_for_cb = Rc::downgrade(&model);
            button.connect_toggled(move |b| {
                if let Some(model) = model_for_cb.upgrade() {
                    model.toggled(value, b.is_active());
                }
            });

            root.append(&button);
            buttons.push((value, button.downgrade()));
        }

        // The echo from set_active lands on the already selected value and
        // is dropped by the model.
        model.connect_selected(move |selected| {
            let Some(button) = buttons
                .iter()
                .find(|(value, _)| *value == selected)
                .and_then(|(_, button)| button.upgrade())
            else {
                return;
            };
            if !button.is_active() {
                button.set_active(true);
            }
        });

        Self { root }
    }

    pub fn widget(&self) -> &GtkBox {
        &self.root
    }
}
