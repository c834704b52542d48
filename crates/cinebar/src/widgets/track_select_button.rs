//! Track selection button and popover.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Orientation, PolicyType, ScrolledWindow};

use cinebar_core::text::decoder_label;
use cinebar_core::{EnumItem, EnumToggleGroup, FullscreenAware, RevealCoordinator, SizePolicy};

use super::popover_button::{PopoverButton, PopoverSeparator};
use super::toggle_group::ToggleGroup;
use crate::styles::popover;

/// Maps an untranslated UI string to the display language.
pub type Translate = fn(&str) -> String;

pub struct TrackSelectButton {
    base: PopoverButton,
    scrolled_window: ScrolledWindow,
    popover_box: GtkBox,
    decoder_separator: PopoverSeparator,
    tracks: RefCell<Option<Rc<EnumToggleGroup>>>,
    policy: SizePolicy,
    translate: Translate,
}

impl TrackSelectButton {
    pub fn new(
        coordinator: &Rc<RevealCoordinator>,
        icon_name: &str,
        policy: SizePolicy,
        translate: Translate,
    ) -> Rc<Self> {
        let base = PopoverButton::with_icon(icon_name, coordinator);
        base.popover().add_css_class(popover::TRACKS);

        let content = GtkBox::new(Orientation::Vertical, 6);

        let popover_box = GtkBox::new(Orientation::Vertical, 0);
        let scrolled_window = ScrolledWindow::builder()
            .hscrollbar_policy(PolicyType::Never)
            .propagate_natural_height(true)
            .max_content_height(policy.windowed)
            .child(&popover_box)
            .build();
        content.append(&scrolled_window);

        let decoder_separator = PopoverSeparator::new(None);
        content.append(decoder_separator.widget());

        base.set_content(&content);

        let this = Rc::new(Self {
            base,
            scrolled_window,
            popover_box,
            decoder_separator,
            tracks: RefCell::new(None),
            policy,
            translate,
        });

        coordinator.subscribe(this.clone());
        this
    }

    pub fn widget(&self) -> &gtk4::MenuButton {
        self.base.widget()
    }

    /// Replace the listed tracks with a fresh radio group.
    pub fn set_tracks(&self, items: Vec<EnumItem>) -> Rc<EnumToggleGroup> {
        while let Some(child) = self.popover_box.first_child() {
            self.popover_box.remove(&child);
        }

        let model = Rc::new(EnumToggleGroup::new(items));
        let group = ToggleGroup::new(model.clone(), Orientation::Vertical);
        self.popover_box.append(group.widget());
        self.tracks.replace(Some(model.clone()));
        model
    }

    pub fn set_decoder(&self, decoder: &str) {
        let label = decoder_label(self.translate, decoder);
        self.decoder_separator.set_label(Some(&label));
    }
}

impl FullscreenAware for TrackSelectButton {
    fn on_fullscreen_mode_changed(&self, is_fullscreen: bool, is_mobile_monitor: bool) {
        self.scrolled_window
            .set_max_content_height(self.policy.max_height(is_fullscreen, is_mobile_monitor));
    }
}
