//! Player control widgets.
//!
//! Each control wraps plain GTK4 widgets and receives the window's
//! `RevealCoordinator` at construction. Controls whose popovers change size
//! in fullscreen implement `FullscreenAware` and subscribe themselves.

mod buttons;
mod elapsed_time_button;
mod header_bar;
mod popover_button;
mod toggle_group;
mod track_select_button;
mod volume_button;

pub use buttons::{CustomButton, IconToggleButton};
pub use elapsed_time_button::ElapsedTimeButton;
pub use header_bar::PlayerHeaderBar;
pub use toggle_group::ToggleGroup;
pub use track_select_button::TrackSelectButton;
pub use volume_button::VolumeButton;
