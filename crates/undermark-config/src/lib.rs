//! Undermark Config
//!
//! This crate handles configuration loading and management
//! for undermark, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/undermark/config.toml`
//! - macOS: `~/Library/Application Support/undermark/config.toml`
//! - Windows: `%APPDATA%\undermark\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use undermark_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod features;
mod output;

pub use features::FeaturesConfig;
pub use output::OutputConfig;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use undermark_core::{Result, UndermarkError};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[features]
Parallel          = false
ParallelThreshold = 64

[output]
BlockSeparator  = "\n"
TrailingNewline = true
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pipeline feature flags
    #[serde(default)]
    pub features: FeaturesConfig,

    /// HTML output layout
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use undermark_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[features]"));
    /// assert!(toml.contains("[output]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "undermark")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| UndermarkError::Config(format!("{} ({})", e, path.display())))
    }

    /// Parse configuration from a TOML string.
    ///
    /// Sections and keys that are missing keep their default values.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| UndermarkError::Config(format!("Parse error: {}", e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` names an existing file, load and merge it;
    ///    otherwise treat it as inline TOML
    ///
    /// # Example
    ///
    /// ```no_run
    /// use undermark_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[features]\nParallel = true")).unwrap();
    /// assert!(config.features.parallel);
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_config = if override_path.exists() {
                Self::load_from(override_path)?
            } else {
                Self::parse(override_str)?
            };

            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use undermark_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config = Config::parse(r#"
    ///     [output]
    ///     TrailingNewline = false
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(!base.output.trailing_newline);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.features.merge(&other.features);
        self.output.merge(&other.output);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| UndermarkError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}
