//! sceneprobe SDK - Host Scene Types and Reserved Names
//!
//! This crate contains the plain value types a host runtime exposes to the
//! query engines. It has no dependencies and compiles quickly, allowing
//! parallel compilation of dependent crates.
//!
//! # Modules
//!
//! - [`scene`] - Scene handles and scene attributes
//! - [`names`] - Reserved object names and singleton accessor spellings

pub mod names;
pub mod scene;

pub use names::{INSTANCE_NAMES, UI_ROOT_NAME};
pub use scene::{SceneAttributes, SceneHandle, DONT_DESTROY_ON_LOAD_HANDLE, UNLOADED_BUILD_INDEX};
