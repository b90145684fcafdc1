//! Configuration module for nook
//!
//! Manages user settings: the starting browse map region, the detail map
//! zoom, logging level and a few display options. Configuration is stored in
//! the user's config directory (`~/.config/nook/config.toml` on Linux).
//!
//! A missing file is not an error; defaults are used and nothing is written
//! until `nook config init` is run.

use crate::map::{CameraPosition, Coordinate, Span};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Level of detail for the world outline drawn under map pins
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MapDetail {
    /// Coarse outline, cheaper to draw
    Low,
    /// Detailed outline
    #[default]
    High,
}

/// A map region: center plus uniform span in degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RegionConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub span: f64,
}

impl Default for RegionConfig {
    fn default() -> Self {
        let camera = crate::browse::DEFAULT_BROWSE_CAMERA;
        Self {
            latitude: camera.center.latitude,
            longitude: camera.center.longitude,
            span: camera.span.latitude_delta,
        }
    }
}

impl RegionConfig {
    /// Camera for this region
    #[must_use]
    pub const fn camera(&self) -> CameraPosition {
        CameraPosition::region(
            Coordinate::new(self.latitude, self.longitude),
            Span::uniform(self.span),
        )
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NookConfig {
    /// Suppress informational output by default
    pub quiet: bool,

    /// Span (degrees) of a freshly opened detail map
    pub detail_span: f64,

    /// Log level for the log file (error, warn, info, debug, trace)
    pub log_level: String,

    /// How long status bar messages stay visible, in seconds
    pub message_ttl_secs: u64,

    /// Outline detail for the map pane
    pub map_detail: MapDetail,

    /// Region shown by the browse map on start-up
    pub browse_region: RegionConfig,
}

impl Default for NookConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            detail_span: crate::detail::DETAIL_SPAN.latitude_delta,
            log_level: "info".to_string(),
            message_ttl_secs: 4,
            map_detail: MapDetail::High,
            browse_region: RegionConfig::default(),
        }
    }
}

impl NookConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("nook").join("config.toml"))
    }

    /// Load configuration from the default location, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be read,
    /// parsed, or holds invalid values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or fails validation.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// See [`NookConfig::save`].
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        fs::write(path, self.to_toml()?)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render as pretty TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` naming the first invalid setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let region = &self.browse_region;
        if !Coordinate::new(region.latitude, region.longitude).is_in_range() {
            return Err(ConfigError::Message(format!(
                "browse_region center ({}, {}) is outside valid latitude/longitude ranges",
                region.latitude, region.longitude
            )));
        }
        if !(region.span > 0.0 && region.span <= crate::map::MAX_SPAN) {
            return Err(ConfigError::Message(format!(
                "browse_region.span must be in (0, {}], got {}",
                crate::map::MAX_SPAN,
                region.span
            )));
        }
        if !(self.detail_span > 0.0 && self.detail_span <= crate::map::MAX_SPAN) {
            return Err(ConfigError::Message(format!(
                "detail_span must be in (0, {}], got {}",
                crate::map::MAX_SPAN,
                self.detail_span
            )));
        }
        if !matches!(
            self.log_level.to_lowercase().as_str(),
            "off" | "error" | "warn" | "info" | "debug" | "trace"
        ) {
            return Err(ConfigError::Message(format!(
                "unknown log_level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Starting camera for the browse map
    #[must_use]
    pub const fn browse_camera(&self) -> CameraPosition {
        self.browse_region.camera()
    }

    /// Span for detail maps
    #[must_use]
    pub const fn detail_span(&self) -> Span {
        Span::uniform(self.detail_span)
    }

    #[must_use]
    pub const fn message_ttl(&self) -> Duration {
        Duration::from_secs(self.message_ttl_secs)
    }
}
