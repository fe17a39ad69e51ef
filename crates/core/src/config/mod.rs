//! Configuration for sceneprobe
//!
//! A single TOML file controls framework-level settings:
//! - Debug logging
//! - The tracing filter directive
//!
//! The file is created with defaults on first load.
//!
//! # Example
//!
//! ```ignore
//! use sceneprobe_core::{logging, CoreConfig};
//!
//! let config = CoreConfig::load().unwrap_or_default();
//! logging::init_logging(&config);
//! ```

mod loader;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use loader::{configs_dir, core_config_path, sceneprobe_base_dir, BASE_DIR_ENV};

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Could not determine config directory from the host binary location
    #[error("Config directory not available - could not resolve base path")]
    NoConfigDirectory,
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Core framework configuration.
///
/// Loaded from `configs/core.toml` under the sceneprobe base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Config version for future migration support
    pub version: u32,

    /// Enable debug logging (overrides `log_filter`)
    pub debug: bool,

    /// `tracing` filter directive, e.g. `"info"` or `"sceneprobe_core=trace"`
    pub log_filter: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            version: 1,
            debug: false,
            log_filter: "info".to_string(),
        }
    }
}

impl CoreConfig {
    /// Load core config from the default path, creating it if missing.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&core_config_path()?)
    }

    /// Load config from `path`, creating a default file if missing.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            tracing::debug!("Loaded core config from {:?}", path);
            Ok(config)
        } else {
            let default = Self::default();
            default.save_to(path)?;
            tracing::info!("Created default core config at {:?}", path);
            Ok(default)
        }
    }

    /// Save core config to the default path.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&core_config_path()?)
    }

    /// Save config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved core config to {:?}", path);
        Ok(())
    }

    /// Reload core config from the default path.
    pub fn reload(&mut self) -> ConfigResult<()> {
        let path = core_config_path()?;
        let content = std::fs::read_to_string(&path)?;
        *self = toml::from_str(&content)?;
        tracing::debug!("Reloaded core config from {:?}", path);
        Ok(())
    }

    /// Filter directive for the log subscriber
    pub fn log_directive(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.log_filter
        }
    }
}
