//! Plain buttons on the controls bar.

use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{Align, Button};

use cinebar_core::RevealCoordinator;

use crate::styles::{class, controls};

/// A flat, non-focusable controls button.
///
/// Every click counts as an interaction, so pressing a button in fullscreen
/// keeps the controls on screen for another auto-hide period.
pub struct CustomButton {
    button: Button,
}

impl CustomButton {
    pub fn from_icon_name(icon_name: &str, coordinator: &Rc<RevealCoordinator>) -> Self {
        let button = Button::from_icon_name(icon_name);
        button.set_halign(Align::Center);
        button.set_valign(Align::Center);
        button.set_can_focus(false);
        button.add_css_class(class::FLAT);
        button.add_css_class(controls::BUTTON);

        let coordinator_weak = Rc::downgrade(coordinator);
        button.connect_clicked(move |_| {
            if let Some(coordinator) = coordinator_weak.upgrade() {
                coordinator.notify_interaction();
            }
        });

        Self { button }
    }

    pub fn widget(&self) -> &Button {
        &self.button
    }

    pub fn connect_clicked<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.button.connect_clicked(move |_| callback());
    }
}

/// A [`CustomButton`] that flips between two icons (play/pause and the like).
pub struct IconToggleButton {
    inner: CustomButton,
    primary_icon: String,
    secondary_icon: String,
}

impl IconToggleButton {
    pub fn new(
        primary_icon: &str,
        secondary_icon: &str,
        coordinator: &Rc<RevealCoordinator>,
    ) -> Self {
        Self {
            inner: CustomButton::from_icon_name(primary_icon, coordinator),
            primary_icon: primary_icon.to_string(),
            secondary_icon: secondary_icon.to_string(),
        }
    }

    pub fn widget(&self) -> &Button {
        self.inner.widget()
    }

    pub fn set_primary_icon(&self) {
        self.inner.widget().set_icon_name(&self.primary_icon);
    }

    pub fn set_secondary_icon(&self) {
        self.inner.widget().set_icon_name(&self.secondary_icon);
    }

    pub fn connect_clicked<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.inner.connect_clicked(callback);
    }
}
