//! Live object search
//!
//! Enumerates a fresh snapshot of live objects and applies the name, scene
//! and hierarchy filters.
//!
//! # Filter applicability
//!
//! ```text
//! search type            candidate kind          scene / child filters
//! ─────────────────────  ──────────────────────  ─────────────────────
//! container              container               applied
//! attachment-like        attached to container   applied
//! anything else          any                     ignored
//! any                    no container            ignored
//! ```
//!
//! Candidates under the explorer's own UI root are always dropped.

use tracing::debug;

use sceneprobe_engine::{type_label, HostRuntime, LiveObject, NodeRef, ObjectRef, WellKnownTypes};
use sceneprobe_sdk::UI_ROOT_NAME;

use super::filters::{
    matches_child_filter, matches_name, matches_scene, ChildFilter, IgnoreCasePattern,
    SceneFilter,
};
use super::resolve::resolve_constraint_type;

/// Container an object is, or is attached to
///
/// Decided from the object's actual type: a container yields itself, an
/// attachment-like object yields its owner, anything else yields `None`.
pub fn attachment(object: &dyn LiveObject, types: &WellKnownTypes) -> Option<NodeRef> {
    let ty = object.actual_type();
    if ty.is(types.container.as_ref()) {
        object.as_node()
    } else if ty.is_assignable_to(types.attachment.as_ref()) {
        object.owner()
    } else {
        None
    }
}

/// Walk parent links up to the top of the hierarchy
pub fn hierarchy_root(node: &NodeRef) -> NodeRef {
    let mut current = node.clone();
    while let Some(parent) = current.parent() {
        current = parent;
    }
    current
}

/// Filter settings shared by every candidate of one search
struct ObjectFilter {
    name: Option<IgnoreCasePattern>,
    child: ChildFilter,
    scene: SceneFilter,
    /// Whether scene/child filters apply to the search type at all
    hierarchy: bool,
}

impl ObjectFilter {
    fn keep(&self, object: &dyn LiveObject, types: &WellKnownTypes) -> bool {
        if let Some(name) = &self.name {
            if !matches_name(&object.name(), name) {
                return false;
            }
        }

        let Some(node) = attachment(object, types) else {
            return true;
        };

        if hierarchy_root(&node).name() == UI_ROOT_NAME {
            return false;
        }

        if !self.hierarchy {
            return true;
        }

        if self.scene != SceneFilter::Any && !matches_scene(&node.scene(), self.scene) {
            return false;
        }

        if self.child != ChildFilter::Any
            && !matches_child_filter(node.parent().is_some(), self.child)
        {
            return false;
        }

        true
    }
}

/// Find live objects
///
/// # Arguments
/// * `host` - Host runtime to enumerate
/// * `input` - Name filter; empty or `None` matches every name
/// * `custom_type` - Optional type name constraining the search
/// * `child_filter` - Hierarchy position constraint
/// * `scene_filter` - Scene membership constraint
///
/// # Returns
/// Matching objects in enumeration order.
pub fn find_objects(
    host: &HostRuntime,
    input: Option<&str>,
    custom_type: Option<&str>,
    child_filter: ChildFilter,
    scene_filter: SceneFilter,
) -> Vec<ObjectRef> {
    let types = host.types();
    let search_type = resolve_constraint_type(host.catalog(), custom_type, &types.object);
    let snapshot = host.instances().find_objects_of_type_all(&search_type);

    let filter = ObjectFilter {
        name: input.filter(|s| !s.is_empty()).map(IgnoreCasePattern::new),
        child: child_filter,
        scene: scene_filter,
        hierarchy: search_type.is(types.container.as_ref())
            || search_type.is_assignable_to(types.attachment.as_ref()),
    };

    let total = snapshot.len();
    let results: Vec<ObjectRef> = snapshot
        .into_iter()
        .filter(|object| filter.keep(object.as_ref(), types))
        .collect();

    debug!(
        "Object search over {} kept {}/{} (child={}, scene={})",
        type_label(search_type.as_ref()),
        results.len(),
        total,
        child_filter,
        scene_filter
    );

    results
}
