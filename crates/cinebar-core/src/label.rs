//! Header bar title/subtitle derivation from media metadata.

use std::borrow::Cow;
use std::path::Path;

use url::Url;

const FILE_SCHEME_PREFIX: &str = "file://";

/// Metadata of the currently loaded media, as reported by the player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaInfo {
    pub title: Option<String>,
    pub uri: Option<String>,
}

impl MediaInfo {
    pub fn new(title: Option<&str>, uri: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            uri: uri.map(str::to_string),
        }
    }
}

/// Text shown in the header bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLabel {
    pub title: String,
    pub subtitle: Option<String>,
}

impl DisplayLabel {
    /// Whether the subtitle line should be shown at all.
    pub fn subtitle_visible(&self) -> bool {
        self.subtitle.is_some()
    }
}

/// Derive the header bar text for `info`.
///
/// A present title is kept and the URI becomes the subtitle. Without a title,
/// the URI text minus its final extension becomes the title and the subtitle
/// is dropped; without either, `default_title` is used. Empty strings count as
/// absent.
pub fn derive_label(info: &MediaInfo, default_title: &str) -> DisplayLabel {
    let title = info.title.as_deref().filter(|t| !t.is_empty());
    let subtitle = info
        .uri
        .as_deref()
        .filter(|u| !u.is_empty())
        .map(uri_display_text);

    if let Some(title) = title {
        return DisplayLabel {
            title: title.to_string(),
            subtitle,
        };
    }

    let title = match subtitle {
        None => default_title.to_string(),
        Some(text) => match text.rsplit_once('.') {
            Some((stem, _extension)) => stem.to_string(),
            None => text,
        },
    };

    DisplayLabel {
        title,
        subtitle: None,
    }
}

/// Text used to represent a media URI.
///
/// Local files show their decoded base name; anything else is shown verbatim.
pub fn uri_display_text(uri: &str) -> String {
    if uri.starts_with(FILE_SCHEME_PREFIX) {
        file_uri_basename(uri)
    } else {
        uri.to_string()
    }
}

fn file_uri_basename(uri: &str) -> String {
    let path = Url::parse(uri).ok().and_then(|url| url.to_file_path().ok());

    if let Some(path) = path {
        return basename(&path);
    }

    // Foreign hosts and malformed URIs can't become a local path; decode the
    // last segment by hand instead.
    let trimmed = uri.trim_end_matches('/');
    let tail = trimmed.rsplit('/').next().unwrap_or(trimmed);
    urlencoding::decode(tail)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| tail.to_string())
}

fn basename(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}
