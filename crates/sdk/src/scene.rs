//! Scene handle and attribute types
//!
//! A scene is identified by an integer handle assigned by the host. The
//! host reserves a few handle and build index values:
//!
//! ```text
//! handle  0   -> no scene assigned (HideAndDontSave objects, assets)
//! handle -12  -> the DontDestroyOnLoad pseudo-scene
//! build  -1   -> scene not part of the build (loaded at runtime, or none)
//! ```

use std::fmt;

/// Handle value the host assigns to the DontDestroyOnLoad scene
pub const DONT_DESTROY_ON_LOAD_HANDLE: i32 = -12;

/// Build index reported for scenes that are not in the build settings
pub const UNLOADED_BUILD_INDEX: i32 = -1;

/// Opaque scene identity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SceneHandle(pub i32);

impl SceneHandle {
    /// The unassigned scene
    pub const NONE: SceneHandle = SceneHandle(0);

    /// The DontDestroyOnLoad pseudo-scene
    pub const DONT_DESTROY_ON_LOAD: SceneHandle = SceneHandle(DONT_DESTROY_ON_LOAD_HANDLE);

    /// Get the raw handle value
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl fmt::Display for SceneHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scene#{}", self.0)
    }
}

/// Read-only facts about the scene an object lives in
///
/// Equality follows scene identity: two attribute values are equal when
/// their handles are equal, regardless of build index.
#[derive(Debug, Clone, Copy)]
pub struct SceneAttributes {
    /// Scene identity
    pub handle: SceneHandle,
    /// Index in the build settings, or [`UNLOADED_BUILD_INDEX`]
    pub build_index: i32,
}

impl SceneAttributes {
    /// Create scene attributes from a raw handle and build index
    pub const fn new(handle: i32, build_index: i32) -> Self {
        Self {
            handle: SceneHandle(handle),
            build_index,
        }
    }

    /// The DontDestroyOnLoad pseudo-scene
    pub const fn dont_destroy_on_load() -> Self {
        Self::new(DONT_DESTROY_ON_LOAD_HANDLE, UNLOADED_BUILD_INDEX)
    }

    /// Whether this is the default value (no scene assigned)
    pub fn is_unassigned(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the scene is part of the build
    pub fn is_in_build(&self) -> bool {
        self.build_index != UNLOADED_BUILD_INDEX
    }
}

impl Default for SceneAttributes {
    fn default() -> Self {
        Self {
            handle: SceneHandle::NONE,
            build_index: UNLOADED_BUILD_INDEX,
        }
    }
}

impl PartialEq for SceneAttributes {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for SceneAttributes {}
