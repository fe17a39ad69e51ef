//! Log subscriber setup
//!
//! Diagnostics go through `tracing`. Hosts call [`init_logging`] once at
//! load; later calls leave the installed subscriber in place.

use tracing_subscriber::EnvFilter;

use crate::config::CoreConfig;

/// Build the filter for a config, falling back to `info` on a bad directive
pub fn env_filter(config: &CoreConfig) -> EnvFilter {
    EnvFilter::try_new(config.log_directive()).unwrap_or_else(|e| {
        eprintln!(
            "Invalid log filter '{}': {}, using 'info'",
            config.log_directive(),
            e
        );
        EnvFilter::new("info")
    })
}

/// Install the global fmt subscriber
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(config: &CoreConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true)
        .try_init()
        .is_ok()
}
