//! Elapsed time button with the playback speed popover.

use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Label, Orientation, PolicyType, PositionType, Scale, ScrolledWindow};

use cinebar_core::text::elapsed_placeholder;
use cinebar_core::{FullscreenAware, RevealCoordinator, SizePolicy};

use super::popover_button::PopoverButton;
use crate::styles::popover;

const TIME_COLON: char = ':';

pub struct ElapsedTimeButton {
    base: PopoverButton,
    scrolled_window: ScrolledWindow,
    popover_box: GtkBox,
    speed_scale: Scale,
    policy: SizePolicy,
}

impl ElapsedTimeButton {
    pub fn new(coordinator: &Rc<RevealCoordinator>, policy: SizePolicy) -> Rc<Self> {
        let base = PopoverButton::new(coordinator);
        base.popover().add_css_class(popover::ELAPSED);

        let popover_box = GtkBox::new(Orientation::Vertical, 6);

        let speed_label = Label::new(Some("Speed"));
        popover_box.append(&speed_label);

        let speed_scale = Scale::with_range(Orientation::Horizontal, 0.01, 2.0, 0.01);
        speed_scale.set_value(1.0);
        speed_scale.set_draw_value(true);
        speed_scale.add_mark(1.0, PositionType::Bottom, None);
        popover_box.append(&speed_scale);

        let scrolled_window = ScrolledWindow::builder()
            .hscrollbar_policy(PolicyType::Never)
            .propagate_natural_height(true)
            .max_content_height(policy.windowed)
            .child(&popover_box)
            .build();
        base.set_content(&scrolled_window);

        let this = Rc::new(Self {
            base,
            scrolled_window,
            popover_box,
            speed_scale,
            policy,
        });
        this.set_initial_state();

        coordinator.subscribe(this.clone());
        this
    }

    pub fn widget(&self) -> &gtk4::MenuButton {
        self.base.widget()
    }

    /// Extra rows (such as the repeat selector) go here.
    pub fn popover_box(&self) -> &GtkBox {
        &self.popover_box
    }

    pub fn speed_scale(&self) -> &Scale {
        &self.speed_scale
    }

    pub fn set_label(&self, value: &str) {
        self.base.set_label(value);
    }

    pub fn set_initial_state(&self) {
        self.set_label(&elapsed_placeholder(TIME_COLON));
    }
}

impl FullscreenAware for ElapsedTimeButton {
    fn on_fullscreen_mode_changed(&self, is_fullscreen: bool, is_mobile_monitor: bool) {
        self.scrolled_window
            .set_max_content_height(self.policy.max_height(is_fullscreen, is_mobile_monitor));
    }
}
