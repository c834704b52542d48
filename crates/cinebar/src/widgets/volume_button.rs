//! Volume button with a vertical scale popover.

use std::cell::Cell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{Orientation, PositionType, Scale};
use tracing::trace;

use cinebar_core::{RevealCoordinator, map_volume};

use super::popover_button::PopoverButton;
use crate::styles::{controls, popover};

/// Scale maximum; values above 1.0 amplify.
const MAX_VOLUME: f64 = 2.0;

pub struct VolumeButton {
    base: PopoverButton,
    scale: Scale,
    muted: Cell<bool>,
}

impl VolumeButton {
    pub fn new(coordinator: &Rc<RevealCoordinator>) -> Rc<Self> {
        let base = PopoverButton::with_icon("audio-volume-high-symbolic", coordinator);
        base.popover().add_css_class(popover::VOLUME);

        let scale = Scale::with_range(Orientation::Vertical, 0.0, MAX_VOLUME, 0.01);
        scale.set_inverted(true);
        scale.set_draw_value(false);
        scale.add_mark(1.0, PositionType::Left, None);
        scale.set_value(1.0);
        base.set_content(&scale);

        let this = Rc::new(Self {
            base,
            scale,
            muted: Cell::new(false),
        });

        let this_weak = Rc::downgrade(&this);
        this.scale.connect_value_changed(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.refresh();
            }
        });
        this.refresh();

        this
    }

    pub fn widget(&self) -> &gtk4::MenuButton {
        self.base.widget()
    }

    pub fn set_muted(&self, muted: bool) {
        self.muted.set(muted);
        self.refresh();
    }

    fn refresh(&self) {
        let indicator = map_volume(self.scale.value(), self.muted.get());
        trace!("VolumeButton: {:?}", indicator);

        let has_overamp = self.scale.has_css_class(controls::OVERAMP);
        if indicator.overamplified && !has_overamp {
            self.scale.add_css_class(controls::OVERAMP);
        } else if !indicator.overamplified && has_overamp {
            self.scale.remove_css_class(controls::OVERAMP);
        }

        self.base.set_icon_name(indicator.icon.icon_name());
    }
}
