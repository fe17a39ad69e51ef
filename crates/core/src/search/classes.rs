//! Loaded type search

use tracing::debug;

use sceneprobe_engine::{HostRuntime, TypeRef};

use super::filters::IgnoreCasePattern;
use super::scan::scan_types;

/// Find loaded types whose qualified name contains `input`
///
/// Empty or missing input returns nothing without touching the catalog.
/// Types whose name cannot be read are logged and skipped.
pub fn find_types(host: &HostRuntime, input: Option<&str>) -> Vec<TypeRef> {
    let Some(filter) = input.filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    let pattern = IgnoreCasePattern::new(filter);
    let found = scan_types(host.loaded_types(), "classes", |ty| {
        let name = ty.full_name()?;
        Ok(pattern.found_in(&name).then(|| ty.clone()))
    });

    debug!("Class search for '{}' found {} types", filter, found.len());
    found
}
