//! Per-type catch-and-continue scanning
//!
//! Catalog scans inspect every loaded type. A failure while inspecting one
//! type is logged with the type's name and skipped; it never ends the scan.

use std::collections::HashSet;

use tracing::error;

use sceneprobe_engine::{type_label, InspectError, ObjectRef, TypeRef};

/// Outcome of inspecting a single type
pub type Inspection<T> = Result<Option<T>, InspectError>;

/// Fold `inspect` over `types`, keeping matches and logging failures
///
/// `what` names the search in diagnostics ("classes", "singletons").
pub fn scan_types<T, I, F>(types: I, what: &str, mut inspect: F) -> Vec<T>
where
    I: IntoIterator<Item = TypeRef>,
    F: FnMut(&TypeRef) -> Inspection<T>,
{
    types.into_iter().fold(Vec::new(), |mut found, ty| {
        match inspect(&ty) {
            Ok(Some(item)) => found.push(item),
            Ok(None) => {}
            Err(e) => error!(
                "Error while searching for {} in {}!  {}",
                what,
                type_label(ty.as_ref()),
                e
            ),
        }
        found
    })
}

/// Drop later handles to an already-seen instance, keeping first-seen order
pub fn dedup_by_identity(objects: Vec<ObjectRef>) -> Vec<ObjectRef> {
    let mut seen = HashSet::with_capacity(objects.len());
    objects.into_iter().filter(|obj| seen.insert(obj.id())).collect()
}
