//! Small user-visible strings built from templates.

/// Ratio-style separator between elapsed and total time (U+2215).
const TIME_DIVIDER: char = '\u{2215}';

/// Template for the decoder separator in the track selector.
pub const DECODER_TEMPLATE: &str = "Decoder: %s";

/// Build the decoder separator label.
///
/// `translate` maps the untranslated template to the display language; the
/// first `%s` in its result is replaced with `decoder`.
pub fn decoder_label<F>(translate: F, decoder: &str) -> String
where
    F: Fn(&str) -> String,
{
    translate(DECODER_TEMPLATE).replacen("%s", decoder, 1)
}

/// Label shown on the elapsed time button before anything is playing.
pub fn elapsed_placeholder(time_colon: char) -> String {
    format!("00{time_colon}00{TIME_DIVIDER}00{time_colon}00")
}
