//! Object filter predicates
//!
//! Pure functions over object attributes. Unrecognized raw filter values
//! fail closed: they match nothing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use sceneprobe_sdk::{SceneAttributes, DONT_DESTROY_ON_LOAD_HANDLE};

/// Error returned when filter text names no known variant
#[derive(Debug, thiserror::Error)]
#[error("Unknown {kind}: '{value}'")]
pub struct ParseFilterError {
    kind: &'static str,
    value: String,
}

/// Hierarchy position constraint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChildFilter {
    #[default]
    Any,
    /// Container has no parent
    RootObject,
    /// Container has a parent
    HasParent,
}

impl ChildFilter {
    /// Convert a raw discriminant, `None` if out of range
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Any),
            1 => Some(Self::RootObject),
            2 => Some(Self::HasParent),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::RootObject => "RootObject",
            Self::HasParent => "HasParent",
        }
    }
}

impl FromStr for ChildFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Any, Self::RootObject, Self::HasParent]
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFilterError {
                kind: "child filter",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ChildFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scene membership constraint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneFilter {
    #[default]
    Any,
    /// Scene is part of the build
    ActivelyLoaded,
    /// The DontDestroyOnLoad pseudo-scene
    DontDestroyOnLoad,
    /// No scene assigned
    HideAndDontSave,
}

impl SceneFilter {
    /// Convert a raw discriminant, `None` if out of range
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Any),
            1 => Some(Self::ActivelyLoaded),
            2 => Some(Self::DontDestroyOnLoad),
            3 => Some(Self::HideAndDontSave),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::ActivelyLoaded => "ActivelyLoaded",
            Self::DontDestroyOnLoad => "DontDestroyOnLoad",
            Self::HideAndDontSave => "HideAndDontSave",
        }
    }
}

impl FromStr for SceneFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Any,
            Self::ActivelyLoaded,
            Self::DontDestroyOnLoad,
            Self::HideAndDontSave,
        ]
        .into_iter()
        .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| ParseFilterError {
            kind: "scene filter",
            value: s.to_string(),
        })
    }
}

impl fmt::Display for SceneFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check a scene against a scene filter
pub fn matches_scene(scene: &SceneAttributes, filter: SceneFilter) -> bool {
    match filter {
        SceneFilter::Any => true,
        SceneFilter::DontDestroyOnLoad => scene.handle.raw() == DONT_DESTROY_ON_LOAD_HANDLE,
        SceneFilter::HideAndDontSave => scene.is_unassigned(),
        SceneFilter::ActivelyLoaded => scene.is_in_build(),
    }
}

/// Check a scene against a raw filter discriminant
pub fn matches_scene_raw(scene: &SceneAttributes, raw: i32) -> bool {
    SceneFilter::from_raw(raw).is_some_and(|filter| matches_scene(scene, filter))
}

/// Check a container's parent presence against a child filter
pub fn matches_child_filter(has_parent: bool, filter: ChildFilter) -> bool {
    match filter {
        ChildFilter::Any => true,
        ChildFilter::RootObject => !has_parent,
        ChildFilter::HasParent => has_parent,
    }
}

/// Check parent presence against a raw filter discriminant
pub fn matches_child_filter_raw(has_parent: bool, raw: i32) -> bool {
    ChildFilter::from_raw(raw).is_some_and(|filter| matches_child_filter(has_parent, filter))
}

/// Fold one character to its simple uppercase form
///
/// Characters whose uppercase form is more than one character (`ß`) are
/// kept as is, so folding never changes the character count.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn fold(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Substring pattern matched ignoring case, folded once per query
///
/// Folding is per character with simple case mappings, so `İ` matches
/// only itself and `ß` never matches `SS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreCasePattern {
    folded: String,
}

impl IgnoreCasePattern {
    pub fn new(pattern: &str) -> Self {
        Self {
            folded: fold(pattern),
        }
    }

    /// Check if the pattern is empty
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    /// Check if `haystack` contains the pattern
    pub fn found_in(&self, haystack: &str) -> bool {
        fold(haystack).contains(&self.folded)
    }
}

/// Case-insensitive substring check
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    IgnoreCasePattern::new(needle).found_in(haystack)
}

/// Name filter; empty filter text matches every name
pub fn matches_name(name: &str, filter: &IgnoreCasePattern) -> bool {
    filter.is_empty() || filter.found_in(name)
}
