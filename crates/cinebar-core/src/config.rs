//! Configuration types and parsing.
//!
//! The schema is deliberately small: timing for the fullscreen auto-hide,
//! popover size bounds, and a few display defaults. User files are merged
//! over the embedded defaults so partial configs stay valid.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use toml::Table;

use crate::error::{Error, Result};
use crate::fullscreen::SizePolicy;

/// Embedded default configuration TOML, compiled into the binary.
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Result of loading a configuration file.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Path where config was found, if any.
    pub source: Option<PathBuf>,
    /// Whether defaults were used (no config file found).
    pub used_defaults: bool,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Player controls behaviour.
    pub controls: ControlsConfig,

    /// Popover size bounds.
    pub popovers: PopoversConfig,

    /// Header bar options.
    pub header: HeaderConfig,

    /// Monitor classification.
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from the embedded default TOML string.
    pub fn from_default_toml() -> Result<Self> {
        let config: Config = toml::from_str(DEFAULT_CONFIG_TOML)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, merging with embedded defaults.
    ///
    /// Returns an error if the file doesn't exist or can't be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::load_with_defaults(&content)
    }

    /// Parse a TOML string, deep-merging it over the embedded defaults.
    pub fn load_with_defaults(user_toml: &str) -> Result<Self> {
        let mut base: Table = toml::from_str(DEFAULT_CONFIG_TOML)?;
        let user: Table = toml::from_str(user_toml)?;

        deep_merge_toml(&mut base, user);

        let config: Config = base.try_into()?;
        Ok(config)
    }

    /// Find and load configuration using the XDG lookup chain.
    ///
    /// An explicit path is used strictly (no fallback). Otherwise searches:
    /// 1. `$XDG_CONFIG_HOME/cinebar/config.toml`
    /// 2. `~/.config/cinebar/config.toml`
    /// 3. `./config.toml`
    ///
    /// A file that exists but fails to load is an error; defaults are only
    /// used when no file exists at all.
    pub fn find_and_load(explicit_path: Option<&Path>) -> Result<ConfigLoadResult> {
        if let Some(path) = explicit_path {
            let config = Self::load(path)?;
            return Ok(ConfigLoadResult {
                config,
                source: Some(path.to_path_buf()),
                used_defaults: false,
            });
        }

        let search_paths = Self::config_search_paths();

        for path in &search_paths {
            if !path.exists() {
                continue;
            }
            match Self::load(path) {
                Ok(config) => {
                    return Ok(ConfigLoadResult {
                        config,
                        source: Some(path.clone()),
                        used_defaults: false,
                    });
                }
                Err(e) => {
                    tracing::error!("Config file {:?} exists but failed to load: {}", path, e);
                    return Err(e);
                }
            }
        }

        tracing::info!("No config file found, using built-in default config");
        tracing::debug!(
            "Searched: {}",
            search_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(ConfigLoadResult {
            config: Self::from_default_toml()?,
            source: None,
            used_defaults: true,
        })
    }

    /// Get the list of paths to search for config files.
    pub fn config_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join("cinebar/config.toml"));
        }

        if let Ok(home) = env::var("HOME") {
            paths.push(PathBuf::from(home).join(".config/cinebar/config.toml"));
        }

        paths.push(PathBuf::from("config.toml"));

        paths
    }

    /// Validate the configuration, collecting every invalid value.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.controls.auto_hide_ms == 0 {
            errors.push("controls.auto_hide_ms: must be greater than 0".to_string());
        }

        let popovers = &self.popovers;
        for (name, value) in [
            ("popovers.elapsed_max_height", popovers.elapsed_max_height),
            (
                "popovers.elapsed_max_height_fullscreen",
                popovers.elapsed_max_height_fullscreen,
            ),
            ("popovers.track_select_max_height", popovers.track_select_max_height),
            (
                "popovers.track_select_max_height_fullscreen",
                popovers.track_select_max_height_fullscreen,
            ),
        ] {
            if value <= 0 {
                errors.push(format!("{}: must be greater than 0, got {}", name, value));
            }
        }

        if popovers.elapsed_max_height_fullscreen < popovers.elapsed_max_height {
            errors.push(format!(
                "popovers.elapsed_max_height_fullscreen: {} is smaller than elapsed_max_height ({})",
                popovers.elapsed_max_height_fullscreen, popovers.elapsed_max_height
            ));
        }

        if popovers.track_select_max_height_fullscreen < popovers.track_select_max_height {
            errors.push(format!(
                "popovers.track_select_max_height_fullscreen: {} is smaller than track_select_max_height ({})",
                popovers.track_select_max_height_fullscreen, popovers.track_select_max_height
            ));
        }

        if self.header.default_title.trim().is_empty() {
            errors.push("header.default_title: must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::ConfigValidation(errors))
        }
    }

    /// Human-readable summary, printed by `--check-config`.
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push("Controls:".to_string());
        lines.push(format!("  auto_hide: {}ms", self.controls.auto_hide_ms));

        lines.push("\nPopovers (windowed / fullscreen):".to_string());
        lines.push(format!(
            "  elapsed: {}px / {}px",
            self.popovers.elapsed_max_height, self.popovers.elapsed_max_height_fullscreen
        ));
        lines.push(format!(
            "  track_select: {}px / {}px",
            self.popovers.track_select_max_height, self.popovers.track_select_max_height_fullscreen
        ));

        lines.push("\nHeader:".to_string());
        lines.push(format!("  default_title: {}", self.header.default_title));

        lines.push("\nDisplay:".to_string());
        lines.push(format!("  mobile_max_width: {}px", self.display.mobile_max_width));

        lines.join("\n")
    }
}

/// Deep merge two TOML tables, with `overlay` values taking precedence.
///
/// Nested tables merge recursively; any other value replaces the base value.
fn deep_merge_toml(base: &mut Table, overlay: Table) {
    for (key, overlay_value) in overlay {
        match (base.get_mut(&key), overlay_value) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                deep_merge_toml(base_table, overlay_table);
            }
            (_, overlay_value) => {
                base.insert(key, overlay_value);
            }
        }
    }
}

/// Player controls configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlsConfig {
    /// Delay before fullscreen controls hide after the last interaction.
    pub auto_hide_ms: u32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self { auto_hide_ms: 3000 }
    }
}

impl ControlsConfig {
    pub fn auto_hide_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.auto_hide_ms))
    }
}

/// Popover maximum content heights, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PopoversConfig {
    pub elapsed_max_height: i32,
    pub elapsed_max_height_fullscreen: i32,
    pub track_select_max_height: i32,
    pub track_select_max_height_fullscreen: i32,
}

impl Default for PopoversConfig {
    fn default() -> Self {
        Self {
            elapsed_max_height: 150,
            elapsed_max_height_fullscreen: 190,
            track_select_max_height: 220,
            track_select_max_height_fullscreen: 290,
        }
    }
}

impl PopoversConfig {
    /// Size policy for the playback speed (elapsed time) popover.
    pub fn elapsed_policy(&self) -> SizePolicy {
        SizePolicy::new(self.elapsed_max_height, self.elapsed_max_height_fullscreen)
    }

    /// Size policy for the track selection popover.
    pub fn track_select_policy(&self) -> SizePolicy {
        SizePolicy::new(
            self.track_select_max_height,
            self.track_select_max_height_fullscreen,
        )
    }
}

/// Header bar configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    /// Title shown when the media has neither a title nor a URI.
    pub default_title: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            default_title: "Cinebar".to_string(),
        }
    }
}

/// Display classification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Monitors with a logical width at or below this are mobile monitors.
    pub mobile_max_width: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mobile_max_width: 720,
        }
    }
}

impl DisplayConfig {
    pub fn is_mobile_width(&self, monitor_width: i32) -> bool {
        monitor_width > 0 && monitor_width <= self.mobile_max_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toml_matches_typed_defaults() {
        let from_toml = Config::from_default_toml().unwrap();
        assert_eq!(from_toml, Config::default());
    }

    #[test]
    fn test_defaults_validate() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn test_partial_user_config_merges_over_defaults() {
        let config = Config::load_with_defaults(
            r#"
            [controls]
            auto_hide_ms = 1200
            "#,
        )
        .unwrap();

        assert_eq!(config.controls.auto_hide_ms, 1200);
        assert_eq!(config.popovers, PopoversConfig::default());
        assert_eq!(config.header.default_title, "Cinebar");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = Config::load_with_defaults(
            r#"
            [controls]
            hide_after = 5
            "#,
        );
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_validate_zero_auto_hide() {
        let mut config = Config::default();
        config.controls.auto_hide_ms = 0;

        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("controls.auto_hide_ms"));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = Config::default();
        config.popovers.track_select_max_height = 0;
        config.popovers.elapsed_max_height_fullscreen = 100;
        config.header.default_title = "  ".to_string();

        match config.validate() {
            Err(Error::ConfigValidation(errors)) => {
                assert_eq!(errors.len(), 3, "{:?}", errors);
                assert!(errors[0].contains("track_select_max_height"));
                assert!(errors[1].contains("elapsed_max_height_fullscreen"));
                assert!(errors[2].contains("header.default_title"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/cinebar/config.toml"));
        assert!(matches!(result, Err(Error::ConfigNotFound(_))));
    }

    #[test]
    fn test_find_and_load_explicit_missing_is_error() {
        let result = Config::find_and_load(Some(Path::new("/nonexistent/cinebar.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_popover_policies() {
        let popovers = PopoversConfig::default();
        assert_eq!(popovers.elapsed_policy().max_height(true, false), 190);
        assert_eq!(popovers.elapsed_policy().max_height(false, false), 150);
        assert_eq!(popovers.track_select_policy().max_height(true, false), 290);
        assert_eq!(popovers.track_select_policy().max_height(true, true), 220);
    }

    #[test]
    fn test_mobile_width() {
        let display = DisplayConfig::default();
        assert!(display.is_mobile_width(360));
        assert!(display.is_mobile_width(720));
        assert!(!display.is_mobile_width(1920));
        assert!(!display.is_mobile_width(0));
    }

    #[test]
    fn test_auto_hide_delay() {
        let controls = ControlsConfig { auto_hide_ms: 2500 };
        assert_eq!(controls.auto_hide_delay(), Duration::from_millis(2500));
    }
}
