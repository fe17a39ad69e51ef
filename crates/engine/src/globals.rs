//! Global host runtime storage
//!
//! Hosts that prefer ambient access install their runtime here once the
//! object model is ready. Query engines never require the slot; they take
//! a [`HostRuntime`] by reference.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::HostError;
use crate::host::HostRuntime;

/// Installed host runtime, cleared when the host unloads
static HOST: RwLock<Option<Arc<HostRuntime>>> = RwLock::new(None);

/// Install the host runtime
///
/// Returns an error if a runtime is already installed.
pub fn install_host(runtime: HostRuntime) -> Result<(), HostError> {
    let mut slot = HOST.write();
    if slot.is_some() {
        return Err(HostError::AlreadyInstalled);
    }
    tracing::info!("Host runtime installed: {:?}", runtime);
    *slot = Some(Arc::new(runtime));
    Ok(())
}

/// Remove the installed host runtime
///
/// Called when the host unloads. Queries already holding the runtime
/// finish against it.
pub fn clear_host() {
    if HOST.write().take().is_some() {
        tracing::debug!("Host runtime cleared");
    }
}

/// Get the installed host runtime, if any
pub fn try_host() -> Option<Arc<HostRuntime>> {
    HOST.read().clone()
}

/// Check if a host runtime is installed
pub fn is_host_installed() -> bool {
    HOST.read().is_some()
}

/// Check if current thread is the thread that built the installed runtime
pub fn is_main_thread() -> bool {
    HOST.read()
        .as_ref()
        .is_some_and(|h| h.on_main_thread())
}
