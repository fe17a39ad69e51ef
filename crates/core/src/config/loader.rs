//! Config path resolution
//!
//! Handles resolving paths for configuration files based on the host
//! binary's location.

use std::path::PathBuf;

use super::{ConfigError, ConfigResult};

/// Environment variable overriding the base directory
pub const BASE_DIR_ENV: &str = "SCENEPROBE_HOME";

/// Returns the sceneprobe base directory.
///
/// Uses `SCENEPROBE_HOME` when set. Otherwise the host loads the library
/// from:
/// `<game>/sceneprobe/bin/<host binary>`
///
/// and this navigates up 2 levels to reach:
/// `<game>/sceneprobe/`
pub fn sceneprobe_base_dir() -> ConfigResult<PathBuf> {
    if let Some(dir) = std::env::var_os(BASE_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let exe = std::env::current_exe().map_err(ConfigError::IoError)?;

    // Navigate: binary -> bin -> sceneprobe
    exe.parent() // bin/
        .and_then(|p| p.parent()) // sceneprobe/
        .map(PathBuf::from)
        .ok_or(ConfigError::NoConfigDirectory)
}

/// Returns the base configs directory.
///
/// Path: `<base>/configs/`
pub fn configs_dir() -> ConfigResult<PathBuf> {
    Ok(sceneprobe_base_dir()?.join("configs"))
}

/// Returns the core config path.
///
/// Path: `<base>/configs/core.toml`
pub fn core_config_path() -> ConfigResult<PathBuf> {
    Ok(configs_dir()?.join("core.toml"))
}
