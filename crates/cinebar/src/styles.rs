//! Shared CSS class constants for cinebar.
//!
//! # Usage
//!
//! ```ignore
//! use crate::styles::{class, controls};
//!
//! button.add_css_class(class::FLAT);
//! button.add_css_class(controls::BUTTON);
//! ```

/// GTK/Adwaita stock classes.
pub mod class {
    /// Borderless button (`.flat`).
    pub const FLAT: &str = "flat";

    /// Header bar title label (`.title`).
    pub const TITLE: &str = "title";

    /// Header bar subtitle label (`.subtitle`).
    pub const SUBTITLE: &str = "subtitle";

    /// Translucent on-video surface (`.osd`).
    pub const OSD: &str = "osd";

    /// Dimmed text (`.dim-label`).
    pub const DIM_LABEL: &str = "dim-label";
}

/// Player controls classes.
pub mod controls {
    /// Bottom controls bar (`.cinebar-controls`).
    pub const BAR: &str = "cinebar-controls";

    /// Any button on the controls bar (`.cinebar-controls-button`).
    pub const BUTTON: &str = "cinebar-controls-button";

    /// Video area placeholder (`.cinebar-video`).
    pub const VIDEO: &str = "cinebar-video";

    /// Marks a volume scale above 100% (`.overamp`).
    pub const OVERAMP: &str = "overamp";
}

/// Popover content classes.
pub mod popover {
    /// Playback speed popover (`.elapsedpopover`).
    pub const ELAPSED: &str = "elapsedpopover";

    /// Track selection popover (`.trackpopover`).
    pub const TRACKS: &str = "trackpopover";

    /// Volume popover (`.volumepopover`).
    pub const VOLUME: &str = "volumepopover";

    /// Labelled separator row (`.popover-separator`).
    pub const SEPARATOR: &str = "popover-separator";

    /// Toggle button group (`.toggle-group`).
    pub const TOGGLE_GROUP: &str = "toggle-group";
}
