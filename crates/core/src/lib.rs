//! sceneprobe - Core Logic
//!
//! This crate contains the search engines and the load/shutdown logic for
//! the sceneprobe runtime explorer.
//!
//! # Re-exports
//!
//! This crate re-exports the SDK and engine crates for convenience:
//! - [`sdk`] - Scene types and reserved names
//! - [`engine`] - Host runtime interfaces and global storage

use tracing::info;

// Re-export SDK and engine crates
pub use sceneprobe_engine as engine;
pub use sceneprobe_sdk as sdk;

pub mod config;
pub mod logging;
pub mod search;

// Re-export commonly used items
pub use search::{
    find_objects, find_singletons, find_types, search, search_installed, ChildFilter,
    SceneFilter, SearchContext, SearchRequest, SearchResults,
};

// Re-export config types
pub use config::{ConfigError, ConfigResult, CoreConfig};

/// Install the host runtime searches run against
///
/// Called by the host once its object model is ready.
pub fn load(runtime: engine::HostRuntime) -> Result<(), engine::HostError> {
    engine::install_host(runtime)?;
    info!("sceneprobe loaded");
    Ok(())
}

/// Shutdown sceneprobe
///
/// Called when the host unloads. Clears the installed runtime.
pub fn shutdown() {
    engine::clear_host();
    info!("sceneprobe shutting down...");
}
