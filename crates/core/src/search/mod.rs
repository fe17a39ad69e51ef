//! Search engines over the host's live objects and type catalog
//!
//! Three independent searches share the same shape: take plain text and
//! enum input, pull a fresh snapshot from the host, filter, and return a
//! list. Nothing is cached between calls.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │ search(host, &SearchRequest)                                  │
//! │   UnityObject ──► objects::find_objects                       │
//! │                     resolve ─► snapshot ─► filters            │
//! │   Class       ──► classes::find_types                         │
//! │                     loaded types ─► scan (name match)         │
//! │   Singleton   ──► singletons::find_singletons                 │
//! │                     loaded types ─► scan (member probe) ─► dedup │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Failure policy
//!
//! Searches never fail. Unresolvable type text degrades to the base type
//! with a warning; a type that errors during inspection is logged at error
//! level and skipped.
//!
//! # Example
//!
//! ```ignore
//! use sceneprobe_core::search::{search, SearchRequest, SceneFilter};
//!
//! let request = SearchRequest::objects("Camera")
//!     .with_custom_type("UnityEngine.Camera")
//!     .with_scene_filter(SceneFilter::ActivelyLoaded);
//!
//! for object in search(&runtime, &request).objects() {
//!     println!("{}", object.name());
//! }
//! ```

pub mod classes;
pub mod filters;
pub mod objects;
pub mod request;
pub mod resolve;
pub mod scan;
pub mod singletons;

#[cfg(test)]
pub(crate) mod testing;

use tracing::{debug, warn};

use sceneprobe_engine::{HostRuntime, ObjectRef, TypeRef};

pub use classes::find_types;
pub use filters::{
    contains_ignore_case, matches_child_filter, matches_child_filter_raw, matches_name,
    matches_scene, matches_scene_raw, ChildFilter, IgnoreCasePattern, ParseFilterError,
    SceneFilter,
};
pub use objects::{attachment, find_objects, hierarchy_root};
pub use request::{SearchContext, SearchRequest};
pub use resolve::resolve_constraint_type;
pub use singletons::{find_singleton, find_singletons};

/// Results of a dispatched search
#[derive(Debug, Clone)]
pub enum SearchResults {
    /// Live objects or singleton instances
    Objects(Vec<ObjectRef>),
    /// Loaded types
    Types(Vec<TypeRef>),
}

impl SearchResults {
    /// No results, shaped for `context`
    pub fn empty(context: SearchContext) -> Self {
        match context {
            SearchContext::Class => SearchResults::Types(Vec::new()),
            SearchContext::UnityObject | SearchContext::Singleton => {
                SearchResults::Objects(Vec::new())
            }
        }
    }

    /// Number of results
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Objects(objects) => objects.len(),
            SearchResults::Types(types) => types.len(),
        }
    }

    /// Check if there are no results
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Object results, empty for type results
    pub fn objects(&self) -> &[ObjectRef] {
        match self {
            SearchResults::Objects(objects) => objects,
            SearchResults::Types(_) => &[],
        }
    }

    /// Type results, empty for object results
    pub fn types(&self) -> &[TypeRef] {
        match self {
            SearchResults::Types(types) => types,
            SearchResults::Objects(_) => &[],
        }
    }
}

/// Run the search a request's context names
pub fn search(host: &HostRuntime, request: &SearchRequest) -> SearchResults {
    match request.context {
        SearchContext::UnityObject => SearchResults::Objects(find_objects(
            host,
            request.input(),
            request.custom_type(),
            request.child_filter,
            request.scene_filter,
        )),
        SearchContext::Singleton => SearchResults::Objects(find_singletons(host, request.input())),
        SearchContext::Class => SearchResults::Types(find_types(host, request.input())),
    }
}

/// Run a search against the installed host runtime
///
/// Returns empty results when no host is installed, or when called from a
/// thread other than the one that built the runtime. The host object model
/// is single-threaded.
pub fn search_installed(request: &SearchRequest) -> SearchResults {
    let Some(host) = sceneprobe_engine::try_host() else {
        debug!("Search requested with no host installed");
        return SearchResults::empty(request.context);
    };

    if !host.on_main_thread() {
        warn!(
            "{:?} search refused: called off the host main thread",
            request.context
        );
        return SearchResults::empty(request.context);
    }

    search(&host, request)
}
