//! Error types for host inspection

use crate::host::TypeRef;

/// Error raised by a host while inspecting a type or member
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// Reading a member failed for a reason other than absence
    #[error("Failed to read member '{member}': {reason}")]
    MemberRead { member: String, reason: String },

    /// Type metadata (name, attributes) could not be read
    #[error("Type metadata unavailable: {0}")]
    Metadata(String),

    /// A module refused to list all of its types
    ///
    /// `loaded` holds the types that did load and remain usable.
    #[error("Failed to load all types from module {module}: {reason}")]
    TypeLoad {
        module: String,
        reason: String,
        loaded: Vec<TypeRef>,
    },
}

/// Error type for host slot operations
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// A host runtime is already installed
    #[error("Host runtime already installed")]
    AlreadyInstalled,
}
