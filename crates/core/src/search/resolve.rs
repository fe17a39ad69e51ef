//! Search type resolution
//!
//! Turns optional user-supplied type text into the type an object search
//! enumerates. Bad input never fails the search: it degrades to the base
//! contract with a warning.

use tracing::warn;

use sceneprobe_engine::{type_label, TypeCatalog, TypeRef};

/// Resolve the type constraint for a search
///
/// # Arguments
/// * `catalog` - Type catalog used for name resolution
/// * `custom_type` - Optional type name typed by the user
/// * `base` - Contract the resolved type must be assignable to; also the default
///
/// # Returns
/// The resolved custom type, or `base` when the text is empty, names no
/// type, or names a type not assignable to `base`.
pub fn resolve_constraint_type(
    catalog: &dyn TypeCatalog,
    custom_type: Option<&str>,
    base: &TypeRef,
) -> TypeRef {
    let Some(text) = custom_type.filter(|s| !s.is_empty()) else {
        return base.clone();
    };

    match catalog.resolve_type(text) {
        Some(ty) if ty.is_assignable_to(base.as_ref()) => ty,
        Some(ty) => {
            warn!(
                "Custom type '{}' is not assignable from {}!",
                type_label(ty.as_ref()),
                type_label(base.as_ref())
            );
            base.clone()
        }
        None => {
            warn!("Could not find any type by name '{}'!", text);
            base.clone()
        }
    }
}
