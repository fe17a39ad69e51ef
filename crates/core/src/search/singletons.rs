//! Singleton discovery
//!
//! Heuristic scan for static members whose names follow common singleton
//! accessor conventions ([`INSTANCE_NAMES`]). Only the listed spellings are
//! probed; singletons stored under other names are not found.

use tracing::{debug, trace};

use sceneprobe_engine::{
    type_label, HostRuntime, InspectError, MemberFlags, ObjectRef, RuntimeType,
};
use sceneprobe_sdk::INSTANCE_NAMES;

use super::filters::IgnoreCasePattern;
use super::scan::{dedup_by_identity, scan_types};

/// Probe `ty` for the first non-null static member named in `names`
///
/// Later names are not read once one yields a value. A failed read ends the
/// probe for this type with the error.
pub fn find_singleton(
    ty: &dyn RuntimeType,
    names: &[&str],
    flags: MemberFlags,
) -> Result<Option<ObjectRef>, InspectError> {
    for name in names {
        if let Some(instance) = ty.read_member(name, flags)? {
            trace!("Singleton for {} found in {}", type_label(ty), name);
            return Ok(Some(instance));
        }
    }
    Ok(None)
}

/// Find singleton instances on types whose qualified name contains `input`
///
/// Static-only and enumeration types are skipped. Empty or missing input
/// returns nothing without touching the catalog. The result holds each
/// instance once, in discovery order.
pub fn find_singletons(host: &HostRuntime, input: Option<&str>) -> Vec<ObjectRef> {
    let Some(filter) = input.filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    let pattern = IgnoreCasePattern::new(filter);
    let flags = MemberFlags::static_lookup();
    let candidates = host
        .loaded_types()
        .filter(|ty| ty.attributes().can_hold_singleton());

    let found = scan_types(candidates, "singletons", |ty| {
        if !pattern.found_in(&ty.full_name()?) {
            return Ok(None);
        }
        find_singleton(ty.as_ref(), INSTANCE_NAMES, flags)
    });

    let instances = dedup_by_identity(found);
    debug!(
        "Singleton search for '{}' found {} instances",
        filter,
        instances.len()
    );
    instances
}
