//! Host runtime collaborator interfaces
//!
//! A host exposes its object model through a handful of traits. Every
//! handle is reference counted and owned by the query that produced it;
//! nothing here retains yielded objects between queries.

use std::fmt;
use std::sync::Arc;
use std::thread::ThreadId;

use tracing::warn;

use sceneprobe_sdk::SceneAttributes;

use crate::error::InspectError;
use crate::flags::{MemberFlags, TypeAttributes};

/// Shared handle to a loaded type
pub type TypeRef = Arc<dyn RuntimeType>;

/// Shared handle to a live object or member value
pub type ObjectRef = Arc<dyn LiveObject>;

/// Shared handle to a hierarchy container
pub type NodeRef = Arc<dyn HierarchyNode>;

/// Shared handle to a loaded module
pub type ModuleRef = Arc<dyn TypeModule>;

/// Identity of a loaded type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey(pub u64);

/// Identity of a live object
///
/// Two handles with the same id refer to the same instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u64);

/// A type loaded in the host process
pub trait RuntimeType: Send + Sync {
    /// Identity of this type
    fn key(&self) -> TypeKey;

    /// Short type name (never fails)
    fn name(&self) -> &str;

    /// Namespace-qualified type name
    fn full_name(&self) -> Result<String, InspectError>;

    /// Declaration attributes
    fn attributes(&self) -> TypeAttributes;

    /// Whether values of this type can be used where `base` is expected
    fn is_assignable_to(&self, base: &dyn RuntimeType) -> bool;

    /// Read a named member value off this type
    ///
    /// Returns `Ok(None)` when the member does not exist or holds null.
    fn read_member(&self, name: &str, flags: MemberFlags)
        -> Result<Option<ObjectRef>, InspectError>;
}

impl dyn RuntimeType {
    /// Whether two handles refer to the same type
    pub fn is(&self, other: &dyn RuntimeType) -> bool {
        self.key() == other.key()
    }
}

impl fmt::Debug for dyn RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeType")
            .field("key", &self.key())
            .field("name", &self.name())
            .finish()
    }
}

/// Label used to name a type in diagnostics
///
/// Falls back to the short name when the qualified name is unreadable.
pub fn type_label(ty: &dyn RuntimeType) -> String {
    ty.full_name().unwrap_or_else(|_| ty.name().to_string())
}

/// A live object (or any value read off a member)
pub trait LiveObject: Send + Sync {
    /// Instance identity
    fn id(&self) -> ObjectId;

    /// Display name
    fn name(&self) -> String;

    /// The object's runtime type, which may be more derived than the
    /// type it was enumerated as
    fn actual_type(&self) -> TypeRef;

    /// This object viewed as a hierarchy container, if it is one
    fn as_node(&self) -> Option<NodeRef> {
        None
    }

    /// The container this object is attached to, if any
    fn owner(&self) -> Option<NodeRef> {
        None
    }
}

impl fmt::Debug for dyn LiveObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveObject")
            .field("id", &self.id())
            .field("name", &self.name())
            .finish()
    }
}

/// A container in the scene hierarchy
pub trait HierarchyNode: Send + Sync {
    /// Display name
    fn name(&self) -> String;

    /// Parent container, `None` for hierarchy roots
    fn parent(&self) -> Option<NodeRef>;

    /// Scene this container lives in
    fn scene(&self) -> SceneAttributes;
}

/// A loaded module (assembly) contributing types
pub trait TypeModule: Send + Sync {
    /// Module name for diagnostics
    fn name(&self) -> &str;

    /// All types declared by this module
    ///
    /// Modules that cannot load every type return
    /// [`InspectError::TypeLoad`] carrying the types that did load.
    fn types(&self) -> Result<Vec<TypeRef>, InspectError>;
}

/// The host's type catalog
pub trait TypeCatalog: Send + Sync {
    /// Currently loaded modules
    fn modules(&self) -> Vec<ModuleRef>;

    /// Resolve a type by its name; `None` when nothing matches
    fn resolve_type(&self, name: &str) -> Option<TypeRef>;
}

/// The host's live object enumeration
pub trait InstanceSource: Send + Sync {
    /// Fresh snapshot of every live object assignable to `ty`
    fn find_objects_of_type_all(&self, ty: &TypeRef) -> Vec<ObjectRef>;
}

/// Types the query engines treat specially
#[derive(Clone, Debug)]
pub struct WellKnownTypes {
    /// Universal base contract for object searches
    pub object: TypeRef,
    /// Hierarchy-bearing container type
    pub container: TypeRef,
    /// Base of kinds always attached to exactly one container
    pub attachment: TypeRef,
}

/// List a module's types, keeping whatever loaded if the listing fails
pub fn try_get_types(module: &dyn TypeModule) -> Vec<TypeRef> {
    match module.types() {
        Ok(types) => types,
        Err(InspectError::TypeLoad { reason, loaded, .. }) => {
            warn!(
                "Module {} refused a full type listing ({}), using {} loaded types",
                module.name(),
                reason,
                loaded.len()
            );
            loaded
        }
        Err(e) => {
            warn!("Could not list types of module {}: {}", module.name(), e);
            Vec::new()
        }
    }
}

/// Collaborators a host provides to the query engines
pub struct HostRuntime {
    catalog: Arc<dyn TypeCatalog>,
    instances: Arc<dyn InstanceSource>,
    types: WellKnownTypes,
    /// Thread that built the runtime, assumed to own the object model
    pub main_thread_id: ThreadId,
}

impl HostRuntime {
    /// Create a new HostRuntime
    ///
    /// # Arguments
    /// * `catalog` - Type catalog and name resolution
    /// * `instances` - Live object enumeration
    /// * `types` - Object, container and attachment base types
    pub fn new(
        catalog: Arc<dyn TypeCatalog>,
        instances: Arc<dyn InstanceSource>,
        types: WellKnownTypes,
    ) -> Self {
        Self {
            catalog,
            instances,
            types,
            main_thread_id: std::thread::current().id(),
        }
    }

    /// Type catalog
    pub fn catalog(&self) -> &dyn TypeCatalog {
        self.catalog.as_ref()
    }

    /// Live object enumeration
    pub fn instances(&self) -> &dyn InstanceSource {
        self.instances.as_ref()
    }

    /// Well-known base types
    pub fn types(&self) -> &WellKnownTypes {
        &self.types
    }

    /// Check if the current thread built this runtime
    pub fn on_main_thread(&self) -> bool {
        std::thread::current().id() == self.main_thread_id
    }

    /// Every type of every loaded module, in module order
    pub fn loaded_types(&self) -> impl Iterator<Item = TypeRef> + '_ {
        self.catalog
            .modules()
            .into_iter()
            .flat_map(|module| try_get_types(module.as_ref()))
    }
}

impl fmt::Debug for HostRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostRuntime")
            .field("types", &self.types)
            .field("main_thread_id", &self.main_thread_id)
            .finish_non_exhaustive()
    }
}
