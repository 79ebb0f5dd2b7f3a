//! TOML-based page configuration.
//!
//! Stores the fixed values the page is built around:
//! - The countdown target instant (a local date-time literal)
//! - Tick and step cadence for the countdown and the reveal widgets
//! - The ordered gallery item list
//!
//! Configuration is stored at `~/.config/gala/config.toml`. Every field has
//! a serde default, so a missing or partial file always yields a usable
//! config.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const TARGET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Countdown configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownConfig {
    /// Target instant literal, local zone, e.g. "2026-01-01T00:00:00".
    #[serde(default = "default_target")]
    pub target: String,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

/// Cadence for one reveal widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Progress added per step, 1..=100.
    pub increment: u8,
    pub step_interval_ms: u64,
}

impl WidgetConfig {
    fn scratch_default() -> Self {
        Self {
            increment: 20,
            step_interval_ms: 100,
        }
    }

    fn envelope_default() -> Self {
        Self {
            increment: 25,
            step_interval_ms: 120,
        }
    }
}

/// Per-widget cadence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetsConfig {
    #[serde(default = "WidgetConfig::scratch_default")]
    pub scratch: WidgetConfig,
    #[serde(default = "WidgetConfig::envelope_default")]
    pub envelope: WidgetConfig,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            scratch: WidgetConfig::scratch_default(),
            envelope: WidgetConfig::envelope_default(),
        }
    }
}

/// Gallery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Ordered opaque item ids, supplied by the asset layer.
    #[serde(default = "default_gallery_items")]
    pub items: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            items: default_gallery_items(),
        }
    }
}

/// Top-level page configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub countdown: CountdownConfig,
    #[serde(default)]
    pub widgets: WidgetsConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl PageConfig {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("gala").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location, falling back to defaults when no
    /// file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Write to the default location, creating parent directories.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, raw).map_err(|source| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.countdown.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "countdown.tick_interval_ms",
                message: "must be at least 1".into(),
            });
        }
        for (field, widget) in [
            ("widgets.scratch", &self.widgets.scratch),
            ("widgets.envelope", &self.widgets.envelope),
        ] {
            if widget.increment == 0 || widget.increment > 100 {
                return Err(ConfigError::InvalidValue {
                    field: "widget increment",
                    message: format!("{field}: increment must be in 1..=100"),
                });
            }
            if widget.step_interval_ms == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "widget step_interval_ms",
                    message: format!("{field}: must be at least 1"),
                });
            }
        }
        self.target_instant()?;
        Ok(())
    }

    /// Resolve the target literal to a UTC instant via the local zone.
    pub fn target_instant(&self) -> Result<DateTime<Utc>, ConfigError> {
        let value = &self.countdown.target;
        let naive = NaiveDateTime::parse_from_str(value, TARGET_FORMAT).map_err(|source| {
            ConfigError::InvalidTarget {
                value: value.clone(),
                source,
            }
        })?;
        let local = Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| ConfigError::UnrepresentableTarget {
                value: value.clone(),
            })?;
        Ok(local.with_timezone(&Utc))
    }
}

fn default_target() -> String {
    "2026-01-01T00:00:00".to_string()
}

fn default_tick_interval_ms() -> u64 {
    1_000
}

fn default_gallery_items() -> Vec<String> {
    [
        "images/img1.jpg",
        "images/img2.jpg",
        "images/img4.jpg",
        "images/img5.jpg",
        "images/img6.jpeg",
        "images/img7.jpg",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn defaults_are_valid() {
        let config = PageConfig::default();
        config.validate().unwrap();
        assert_eq!(config.countdown.tick_interval_ms, 1_000);
        assert_eq!(config.widgets.scratch.increment, 20);
        assert_eq!(config.gallery.items.len(), 6);
    }

    #[test]
    fn default_target_parses_to_new_year() {
        let config = PageConfig::default();
        let target = config.target_instant().unwrap();
        let local = target.with_timezone(&Local);
        assert_eq!(local.year(), 2026);
        assert_eq!(local.month(), 1);
        assert_eq!(local.day(), 1);
        assert_eq!(local.hour(), 0);
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = PageConfig::default();
        config.widgets.scratch.increment = 10;
        config.gallery.items = vec!["a.jpg".into(), "b.jpg".into()];
        config.save_to(&path).unwrap();

        let loaded = PageConfig::load_from(&path).unwrap();
        assert_eq!(loaded.widgets.scratch.increment, 10);
        assert_eq!(loaded.gallery.items, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[countdown]\ntarget = \"2027-06-15T12:00:00\"\n").unwrap();

        let config = PageConfig::load_from(&path).unwrap();
        assert_eq!(config.countdown.target, "2027-06-15T12:00:00");
        assert_eq!(config.countdown.tick_interval_ms, 1_000);
        assert_eq!(config.widgets.envelope.increment, 25);
    }

    #[test]
    fn rejects_invalid_increment() {
        let mut config = PageConfig::default();
        config.widgets.envelope.increment = 0;
        assert!(config.validate().is_err());
        config.widgets.envelope.increment = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unparseable_target() {
        let mut config = PageConfig::default();
        config.countdown.target = "next year sometime".into();
        assert!(matches!(
            config.target_instant(),
            Err(ConfigError::InvalidTarget { .. })
        ));
    }
}
