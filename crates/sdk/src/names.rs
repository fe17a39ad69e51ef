//! Reserved names the query engines match against
//!
//! These strings must match exactly what the host runtime reports.

/// Name of the hierarchy root that holds the explorer's own UI.
///
/// Objects parented under this root are never reported by object searches.
pub const UI_ROOT_NAME: &str = "UniverseLibCanvas";

/// Static member spellings probed during singleton discovery, in priority order
///
/// The last two entries are the compiler-synthesized backing fields of
/// auto-properties named `Instance` and `instance`.
pub const INSTANCE_NAMES: &[&str] = &[
    "m_instance",
    "m_Instance",
    "s_instance",
    "s_Instance",
    "_instance",
    "_Instance",
    "instance",
    "Instance",
    "<Instance>k__BackingField",
    "<instance>k__BackingField",
];
