//! Player window: header bar, video area and the auto-hiding controls bar.
//!
//! The window owns the single `RevealCoordinator`. GTK fullscreen
//! notifications, pointer motion and keyboard shortcuts are translated into
//! coordinator transitions; the coordinator's visibility drives a `Revealer`.

use std::cell::Cell;
use std::rc::Rc;

use gtk4::gdk;
use gtk4::gio;
use gtk4::glib::Propagation;
use gtk4::prelude::*;
use gtk4::{
    Align, Application, ApplicationWindow, Box as GtkBox, EventControllerKey,
    EventControllerMotion, Orientation, Overlay, Revealer, RevealerTransitionType,
};
use tracing::{debug, info};

use cinebar_core::config::{Config, DisplayConfig};
use cinebar_core::{EnumItem, EnumToggleGroup, MediaInfo, RevealCoordinator, Scheduler};

use crate::styles::{class, controls};
use crate::widgets::{
    CustomButton, ElapsedTimeButton, IconToggleButton, PlayerHeaderBar, ToggleGroup,
    TrackSelectButton, VolumeButton,
};

const DEFAULT_WIDTH: i32 = 960;
const DEFAULT_HEIGHT: i32 = 540;

/// Repeat modes offered in the playback speed popover.
fn repeat_modes() -> Vec<EnumItem> {
    vec![
        EnumItem::new("None", 0),
        EnumItem::new("Track", 1),
        EnumItem::new("Playlist", 2),
    ]
}

/// Localization hook for UI strings; no catalog is bundled.
fn translate(msgid: &str) -> String {
    msgid.to_string()
}

pub struct PlayerWindow {
    window: ApplicationWindow,
    coordinator: Rc<RevealCoordinator>,
    header: PlayerHeaderBar,
    revealer: Revealer,
    play_button: IconToggleButton,
    unfullscreen_button: CustomButton,
    elapsed_button: Rc<ElapsedTimeButton>,
    track_button: Rc<TrackSelectButton>,
    volume_button: Rc<VolumeButton>,
    repeat_mode: Rc<EnumToggleGroup>,
    display_config: DisplayConfig,
    playing: Cell<bool>,
    muted: Cell<bool>,
}

impl PlayerWindow {
    pub fn new(app: &Application, config: &Config, scheduler: Rc<dyn Scheduler>) -> Rc<Self> {
        let coordinator = RevealCoordinator::new(scheduler, config.controls.auto_hide_delay());

        let window = ApplicationWindow::builder()
            .application(app)
            .title(config.header.default_title.as_str())
            .default_width(DEFAULT_WIDTH)
            .default_height(DEFAULT_HEIGHT)
            .build();

        let menu = gio::Menu::new();
        menu.append(Some("Toggle Fullscreen"), Some("win.toggle-fullscreen"));
        menu.append(Some("Quit"), Some("app.quit"));
        let header = PlayerHeaderBar::new(&window, menu.upcast_ref(), &config.header.default_title);
        window.set_titlebar(Some(header.widget()));

        // Controls bar
        let controls_box = GtkBox::new(Orientation::Horizontal, 4);
        controls_box.add_css_class(controls::BAR);
        controls_box.add_css_class(class::OSD);

        let play_button = IconToggleButton::new(
            "media-playback-start-symbolic",
            "media-playback-pause-symbolic",
            &coordinator,
        );
        controls_box.append(play_button.widget());

        let elapsed_button = ElapsedTimeButton::new(&coordinator, config.popovers.elapsed_policy());
        let repeat_mode = Rc::new(EnumToggleGroup::new(repeat_modes()));
        let repeat_group = ToggleGroup::new(repeat_mode.clone(), Orientation::Horizontal);
        repeat_group.widget().set_halign(Align::Center);
        elapsed_button.popover_box().append(repeat_group.widget());
        controls_box.append(elapsed_button.widget());

        let spacer = GtkBox::new(Orientation::Horizontal, 0);
        spacer.set_hexpand(true);
        controls_box.append(&spacer);

        let track_button = TrackSelectButton::new(
            &coordinator,
            "view-list-symbolic",
            config.popovers.track_select_policy(),
            translate,
        );
        controls_box.append(track_button.widget());

        let volume_button = VolumeButton::new(&coordinator);
        controls_box.append(volume_button.widget());

        let unfullscreen_button = CustomButton::from_icon_name("view-restore-symbolic", &coordinator);
        unfullscreen_button.widget().set_visible(false);
        controls_box.append(unfullscreen_button.widget());

        let revealer = Revealer::builder()
            .transition_type(RevealerTransitionType::Crossfade)
            .valign(Align::End)
            .reveal_child(true)
            .child(&controls_box)
            .build();

        let video = GtkBox::new(Orientation::Vertical, 0);
        video.add_css_class(controls::VIDEO);
        video.set_hexpand(true);
        video.set_vexpand(true);

        let overlay = Overlay::new();
        overlay.set_child(Some(&video));
        overlay.add_overlay(&revealer);
        window.set_child(Some(&overlay));

        let this = Rc::new(Self {
            window,
            coordinator,
            header,
            revealer,
            play_button,
            unfullscreen_button,
            elapsed_button,
            track_button,
            volume_button,
            repeat_mode,
            display_config: config.display.clone(),
            playing: Cell::new(false),
            muted: Cell::new(false),
        });

        this.connect_signals();
        this
    }

    pub fn present(&self) {
        self.window.present();
    }

    /// Show metadata for newly opened media.
    pub fn set_media(&self, info: &MediaInfo) {
        self.header.update(info);

        let tracks = self.track_button.set_tracks(vec![EnumItem::new("Default", 0)]);
        tracks.connect_selected(|value| debug!("Track selected: {}", value));
        self.track_button.set_decoder("auto");
        self.elapsed_button.set_initial_state();
    }

    pub fn toggle_fullscreen(&self) {
        if self.window.is_fullscreen() {
            self.window.unfullscreen();
        } else {
            self.window.fullscreen();
        }
    }

    fn connect_signals(self: &Rc<Self>) {
        {
            let revealer = self.revealer.clone();
            let window = self.window.clone();
            self.coordinator.connect_visibility(move |visible| {
                revealer.set_reveal_child(visible);
                window.set_cursor_from_name(if visible { None } else { Some("none") });
            });
        }

        let this_weak = Rc::downgrade(self);
        self.window.connect_fullscreened_notify(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.on_fullscreen_changed();
            }
        });

        let this_weak = Rc::downgrade(self);
        self.play_button.connect_clicked(move || {
            if let Some(this) = this_weak.upgrade() {
                let playing = !this.playing.get();
                this.playing.set(playing);
                if playing {
                    this.play_button.set_secondary_icon();
                } else {
                    this.play_button.set_primary_icon();
                }
            }
        });

        let window_weak = self.window.downgrade();
        self.unfullscreen_button.connect_clicked(move || {
            if let Some(window) = window_weak.upgrade() {
                window.unfullscreen();
            }
        });

        self.repeat_mode
            .connect_selected(|value| debug!("Repeat mode selected: {}", value));
        self.elapsed_button
            .speed_scale()
            .connect_value_changed(|scale| debug!("Playback speed: {:.2}", scale.value()));

        // Any pointer movement over the window counts as an interaction.
        let motion = EventControllerMotion::new();
        let coordinator_weak = Rc::downgrade(&self.coordinator);
        motion.connect_motion(move |_, _x, _y| {
            if let Some(coordinator) = coordinator_weak.upgrade() {
                coordinator.notify_interaction();
            }
        });
        self.window.add_controller(motion);

        let keys = EventControllerKey::new();
        let this_weak = Rc::downgrade(self);
        keys.connect_key_pressed(move |_, keyval, _, _| {
            let Some(this) = this_weak.upgrade() else {
                return Propagation::Proceed;
            };
            match keyval {
                gdk::Key::F11 | gdk::Key::f => {
                    this.toggle_fullscreen();
                    Propagation::Stop
                }
                gdk::Key::Escape if this.window.is_fullscreen() => {
                    this.window.unfullscreen();
                    Propagation::Stop
                }
                gdk::Key::m => {
                    this.set_muted(!this.muted.get());
                    Propagation::Stop
                }
                gdk::Key::r => {
                    this.repeat_mode.select_next();
                    this.coordinator.notify_interaction();
                    Propagation::Stop
                }
                _ => Propagation::Proceed,
            }
        });
        self.window.add_controller(keys);

        let toggle_action = gio::SimpleAction::new("toggle-fullscreen", None);
        let this_weak = Rc::downgrade(self);
        toggle_action.connect_activate(move |_, _| {
            if let Some(this) = this_weak.upgrade() {
                this.toggle_fullscreen();
            }
        });
        self.window.add_action(&toggle_action);
    }

    fn set_muted(&self, muted: bool) {
        self.muted.set(muted);
        self.volume_button.set_muted(muted);
        self.coordinator.notify_interaction();
    }

    fn on_fullscreen_changed(&self) {
        let fullscreen = self.window.is_fullscreen();
        info!("Window fullscreen: {}", fullscreen);

        self.coordinator
            .set_mobile_monitor(self.detect_mobile_monitor());
        self.header.widget().set_visible(!fullscreen);
        self.unfullscreen_button.widget().set_visible(fullscreen);
        self.coordinator.set_fullscreen(fullscreen);
    }

    fn detect_mobile_monitor(&self) -> bool {
        let Some(surface) = self.window.surface() else {
            return false;
        };
        let Some(monitor) = surface.display().monitor_at_surface(&surface) else {
            return false;
        };

        let width = monitor.geometry().width();
        let mobile = self.display_config.is_mobile_width(width);
        debug!("Monitor width {}px, mobile={}", width, mobile);
        mobile
    }
}
