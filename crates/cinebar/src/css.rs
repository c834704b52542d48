//! Application stylesheet.

use gtk4::CssProvider;
use tracing::{debug, warn};

use crate::styles::{controls, popover};

fn stylesheet() -> String {
    format!(
        r#"
.{video} {{
    background-color: black;
}}

.{bar} {{
    margin: 8px;
    padding: 4px;
    border-radius: 12px;
}}

.{button} {{
    min-width: 32px;
    min-height: 32px;
}}

.{elapsed} scale {{
    min-width: 200px;
}}

.{volume} scale {{
    min-height: 160px;
}}

scale.{overamp} highlight {{
    background-color: @warning_color;
}}

.{separator} label {{
    margin: 0 6px;
}}

.{toggle_group} togglebutton {{
    padding: 2px 10px;
}}
"#,
        video = controls::VIDEO,
        bar = controls::BAR,
        button = controls::BUTTON,
        elapsed = popover::ELAPSED,
        volume = popover::VOLUME,
        overamp = controls::OVERAMP,
        separator = popover::SEPARATOR,
        toggle_group = popover::TOGGLE_GROUP,
    )
}

/// Install the application stylesheet on the default display.
pub fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_string(&stylesheet());

    if let Some(display) = gtk4::gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
        debug!("Application CSS loaded");
    } else {
        warn!("No default display, skipping CSS");
    }
}
