//! sceneprobe Engine - Host Runtime Interfaces and Global Storage
//!
//! This crate handles:
//! - The collaborator traits a host implements to expose its type catalog,
//!   live objects and scene hierarchy
//! - Bundling those collaborators into a [`HostRuntime`]
//! - Storing the installed runtime in a process-wide slot
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────── Host process ────────────────────────────┐
//! │  TypeCatalog ── modules() ──► TypeModule ── types() ──► RuntimeType  │
//! │      └──── resolve_type(name)                   └── read_member()    │
//! │  InstanceSource ── find_objects_of_type_all(ty) ──► LiveObject       │
//! │                                       as_node() / owner() ──► Node   │
//! └───────────────────────────────────┬──────────────────────────────────┘
//!                                     ▼
//!                         HostRuntime (this crate)
//!                                     ▼
//!                      sceneprobe-core query engines
//! ```
//!
//! # Thread Safety
//!
//! Collaborators are `Send + Sync` so a runtime can sit in the global slot,
//! but the host object model is assumed single-threaded. The thread that
//! built the runtime is recorded for [`is_main_thread()`] checks, and
//! searches through the global slot refuse to run on any other thread.

pub mod error;
pub mod flags;
pub mod globals;
pub mod host;

pub use error::{HostError, InspectError};
pub use flags::{MemberFlags, TypeAttributes};
pub use globals::{clear_host, install_host, is_host_installed, is_main_thread, try_host};
pub use host::{
    try_get_types, type_label, HierarchyNode, HostRuntime, InstanceSource, LiveObject, ModuleRef,
    NodeRef, ObjectId, ObjectRef, RuntimeType, TypeCatalog, TypeKey, TypeModule, TypeRef,
    WellKnownTypes,
};
