//! Windowed-mode header bar: media title/subtitle, menu and fullscreen button.

use gtk4::gio;
use gtk4::pango::EllipsizeMode;
use gtk4::prelude::*;
use gtk4::{
    Align, ApplicationWindow, Box as GtkBox, Button, HeaderBar, Label, MenuButton, Orientation,
};
use tracing::debug;

use cinebar_core::{MediaInfo, derive_label};

use crate::styles::class;

pub struct PlayerHeaderBar {
    header: HeaderBar,
    title_label: Label,
    subtitle_label: Label,
    default_title: String,
}

impl PlayerHeaderBar {
    pub fn new(window: &ApplicationWindow, menu: &gio::MenuModel, default_title: &str) -> Self {
        let header = HeaderBar::new();
        header.set_can_focus(false);

        let title_box = GtkBox::new(Orientation::Vertical, 0);
        title_box.set_valign(Align::Center);

        let title_label = Label::builder()
            .halign(Align::Center)
            .single_line_mode(true)
            .ellipsize(EllipsizeMode::End)
            .width_chars(5)
            .build();
        title_label.add_css_class(class::TITLE);
        title_box.append(&title_label);

        window
            .bind_property("title", &title_label, "label")
            .sync_create()
            .build();

        let subtitle_label = Label::builder()
            .halign(Align::Center)
            .single_line_mode(true)
            .ellipsize(EllipsizeMode::End)
            .visible(false)
            .build();
        subtitle_label.add_css_class(class::SUBTITLE);
        title_box.append(&subtitle_label);

        header.set_title_widget(Some(&title_box));

        let open_menu_button = MenuButton::new();
        open_menu_button.set_icon_name("open-menu-symbolic");
        open_menu_button.set_menu_model(Some(menu));
        header.pack_end(&open_menu_button);

        let fullscreen_button = Button::from_icon_name("view-fullscreen-symbolic");
        let window_weak = window.downgrade();
        fullscreen_button.connect_clicked(move |_| {
            if let Some(window) = window_weak.upgrade() {
                window.fullscreen();
            }
        });
        header.pack_end(&fullscreen_button);

        Self {
            header,
            title_label,
            subtitle_label,
            default_title: default_title.to_string(),
        }
    }

    pub fn widget(&self) -> &HeaderBar {
        &self.header
    }

    /// Refresh the title and subtitle from new media metadata.
    pub fn update(&self, info: &MediaInfo) {
        let label = derive_label(info, &self.default_title);
        debug!("HeaderBar: {:?}", label);

        // Media titles stay in the header; the window title is left alone.
        self.title_label.set_label(&label.title);
        self.subtitle_label.set_visible(label.subtitle_visible());

        if let Some(ref subtitle) = label.subtitle {
            self.subtitle_label.set_label(subtitle);
        }
    }
}
