//! Search requests as sent by a host UI

use serde::{Deserialize, Serialize};

use super::filters::{ChildFilter, SceneFilter};

/// Which search engine a request targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchContext {
    /// Live objects
    #[default]
    UnityObject,
    /// Static singleton instances
    Singleton,
    /// Loaded types
    Class,
}

/// A single search, as entered by the user
///
/// Missing fields take their defaults, so `{"input": "Camera"}` is a
/// complete object search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub context: SearchContext,
    /// Name filter text
    pub input: Option<String>,
    /// Type name constraining object searches
    pub custom_type: Option<String>,
    pub child_filter: ChildFilter,
    pub scene_filter: SceneFilter,
}

impl SearchRequest {
    /// Object search with no filters beyond the name
    pub fn objects(input: impl Into<String>) -> Self {
        Self {
            input: Some(input.into()),
            ..Self::default()
        }
    }

    /// Singleton search
    pub fn singletons(input: impl Into<String>) -> Self {
        Self {
            context: SearchContext::Singleton,
            input: Some(input.into()),
            ..Self::default()
        }
    }

    /// Class search
    pub fn classes(input: impl Into<String>) -> Self {
        Self {
            context: SearchContext::Class,
            input: Some(input.into()),
            ..Self::default()
        }
    }

    /// Constrain an object search to a type name
    pub fn with_custom_type(mut self, custom_type: impl Into<String>) -> Self {
        self.custom_type = Some(custom_type.into());
        self
    }

    /// Set the hierarchy position filter
    pub fn with_child_filter(mut self, filter: ChildFilter) -> Self {
        self.child_filter = filter;
        self
    }

    /// Set the scene membership filter
    pub fn with_scene_filter(mut self, filter: SceneFilter) -> Self {
        self.scene_filter = filter;
        self
    }

    /// Parse a request from JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Name filter text, `None` when empty
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref().filter(|s| !s.is_empty())
    }

    /// Custom type text, `None` when empty
    pub fn custom_type(&self) -> Option<&str> {
        self.custom_type.as_deref().filter(|s| !s.is_empty())
    }
}
