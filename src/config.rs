//! Configuration management for the `Outfind` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::OutfindError;
use crate::models::weather::DEFAULT_PRECIPITATION_CODE_MIN;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `Outfind` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutfindConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Weather provider interpretation
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Wardrobe storage used by the CLI
    #[serde(default)]
    pub wardrobe: WardrobeConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Weather provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// WMO weather codes at or above this count as precipitation
    #[serde(default = "default_precipitation_code_min")]
    pub precipitation_code_min: u16,
}

/// Wardrobe file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardrobeConfig {
    /// JSON file holding the wardrobe
    #[serde(default = "default_wardrobe_path")]
    pub path: String,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_precipitation_code_min() -> u16 {
    DEFAULT_PRECIPITATION_CODE_MIN
}

fn default_wardrobe_path() -> String {
    "wardrobe.json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            precipitation_code_min: default_precipitation_code_min(),
        }
    }
}

impl Default for WardrobeConfig {
    fn default() -> Self {
        Self {
            path: default_wardrobe_path(),
        }
    }
}

impl OutfindConfig {
    /// Load configuration from a file (or the default location) and
    /// environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path()
                .filter(|path| path.exists())
                .unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with OUTFIND_ prefix
        builder = builder.add_source(
            Environment::with_prefix("OUTFIND")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: OutfindConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("outfind").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.wardrobe.path.is_empty() {
            self.wardrobe.path = default_wardrobe_path();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.precipitation_code_min > 99 {
            return Err(OutfindError::config(
                "Precipitation code threshold must be a WMO weather code (0-99)",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(OutfindError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(OutfindError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if self.wardrobe.path.trim().is_empty() {
            return Err(OutfindError::config("Wardrobe path cannot be empty").into());
        }

        Ok(())
    }
}
