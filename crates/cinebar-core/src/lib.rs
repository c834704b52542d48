//! cinebar-core - toolkit-free logic behind the cinebar player controls.
//!
//! Everything here runs on a single thread and never touches GTK: the
//! fullscreen reveal/auto-hide state machine, the popover handshake, header
//! text derivation, volume icon mapping and configuration.

pub mod callbacks;
pub mod config;
pub mod error;
pub mod fullscreen;
pub mod label;
pub mod logging;
pub mod popover;
pub mod reveal;
pub mod scheduler;
pub mod text;
pub mod toggle_group;
pub mod volume;

pub use config::{Config, ConfigLoadResult};
pub use error::{Error, Result};
pub use fullscreen::{FullscreenAware, SizePolicy};
pub use label::{DisplayLabel, MediaInfo, derive_label};
pub use popover::PopoverOwner;
pub use reveal::{PlayerWindowState, PopoverId, RevealCoordinator, RevealState};
pub use scheduler::{ManualScheduler, Scheduler, TimerId};
pub use toggle_group::{EnumItem, EnumToggleGroup};
pub use volume::{VolumeIcon, VolumeIndicator, map_volume};
