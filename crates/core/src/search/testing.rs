//! In-memory host used by the search tests

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use sceneprobe_engine::{
    HierarchyNode, HostRuntime, InspectError, InstanceSource, LiveObject, MemberFlags, ModuleRef,
    NodeRef, ObjectId, ObjectRef, RuntimeType, TypeAttributes, TypeCatalog, TypeKey, TypeModule,
    TypeRef, WellKnownTypes,
};
use sceneprobe_sdk::SceneAttributes;

pub const OBJECT: u64 = 1;
pub const GAME_OBJECT: u64 = 2;
pub const COMPONENT: u64 = 3;
pub const TRANSFORM: u64 = 4;
pub const BEHAVIOUR: u64 = 5;

pub struct FixtureType {
    key: u64,
    full_name: String,
    bases: Vec<u64>,
    attributes: TypeAttributes,
    members: HashMap<String, ObjectRef>,
    broken: Option<String>,
    unnamed: bool,
    reads: AtomicUsize,
}

impl FixtureType {
    pub fn new(key: u64, full_name: &str) -> Self {
        Self {
            key,
            full_name: full_name.to_string(),
            bases: Vec::new(),
            attributes: TypeAttributes::empty(),
            members: HashMap::new(),
            broken: None,
            unnamed: false,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn base(mut self, key: u64) -> Self {
        self.bases.push(key);
        self
    }

    pub fn attributes(mut self, attributes: TypeAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn member(mut self, name: &str, value: ObjectRef) -> Self {
        self.members.insert(name.to_string(), value);
        self
    }

    /// Every member read fails with `message`
    pub fn broken(mut self, message: &str) -> Self {
        self.broken = Some(message.to_string());
        self
    }

    /// Qualified name cannot be read
    pub fn unnamed(mut self) -> Self {
        self.unnamed = true;
        self
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl RuntimeType for FixtureType {
    fn key(&self) -> TypeKey {
        TypeKey(self.key)
    }

    fn name(&self) -> &str {
        self.full_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.full_name)
    }

    fn full_name(&self) -> Result<String, InspectError> {
        if self.unnamed {
            Err(InspectError::Metadata(format!("{} has no metadata", self.name())))
        } else {
            Ok(self.full_name.clone())
        }
    }

    fn attributes(&self) -> TypeAttributes {
        self.attributes
    }

    fn is_assignable_to(&self, base: &dyn RuntimeType) -> bool {
        let key = base.key().0;
        key == self.key || self.bases.contains(&key)
    }

    fn read_member(
        &self,
        name: &str,
        flags: MemberFlags,
    ) -> Result<Option<ObjectRef>, InspectError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        assert!(flags.contains(MemberFlags::STATIC));
        if let Some(reason) = &self.broken {
            return Err(InspectError::MemberRead {
                member: name.to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.members.get(name).cloned())
    }
}

pub struct FixtureNode {
    name: String,
    parent: Option<NodeRef>,
    scene: SceneAttributes,
}

pub fn node(name: &str, parent: Option<&NodeRef>, scene: SceneAttributes) -> NodeRef {
    Arc::new(FixtureNode {
        name: name.to_string(),
        parent: parent.cloned(),
        scene,
    })
}

impl HierarchyNode for FixtureNode {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn parent(&self) -> Option<NodeRef> {
        self.parent.clone()
    }

    fn scene(&self) -> SceneAttributes {
        self.scene
    }
}

pub struct FixtureObject {
    id: u64,
    name: String,
    ty: TypeRef,
    node: Option<NodeRef>,
    owner: Option<NodeRef>,
}

impl FixtureObject {
    pub fn new(id: u64, name: &str, ty: &TypeRef) -> Self {
        Self {
            id,
            name: name.to_string(),
            ty: ty.clone(),
            node: None,
            owner: None,
        }
    }

    pub fn node(mut self, node: &NodeRef) -> Self {
        self.node = Some(node.clone());
        self
    }

    pub fn owner(mut self, node: &NodeRef) -> Self {
        self.owner = Some(node.clone());
        self
    }

    pub fn into_ref(self) -> ObjectRef {
        Arc::new(self)
    }
}

impl LiveObject for FixtureObject {
    fn id(&self) -> ObjectId {
        ObjectId(self.id)
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn actual_type(&self) -> TypeRef {
        self.ty.clone()
    }

    fn as_node(&self) -> Option<NodeRef> {
        self.node.clone()
    }

    fn owner(&self) -> Option<NodeRef> {
        self.owner.clone()
    }
}

/// Plain value with no hierarchy
pub fn value(id: u64, name: &str, ty: &TypeRef) -> ObjectRef {
    FixtureObject::new(id, name, ty).into_ref()
}

struct FixtureModule {
    name: String,
    types: Vec<TypeRef>,
    refusal: Option<String>,
}

impl TypeModule for FixtureModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn types(&self) -> Result<Vec<TypeRef>, InspectError> {
        match &self.refusal {
            Some(reason) => Err(InspectError::TypeLoad {
                module: self.name.clone(),
                reason: reason.clone(),
                loaded: self.types.clone(),
            }),
            None => Ok(self.types.clone()),
        }
    }
}

/// Catalog and instance source backed by vectors
pub struct FixtureHost {
    modules: Vec<ModuleRef>,
    objects: Vec<ObjectRef>,
    module_calls: AtomicUsize,
    snapshot_calls: AtomicUsize,
}

impl FixtureHost {
    /// Times the module list was requested
    pub fn module_calls(&self) -> usize {
        self.module_calls.load(Ordering::SeqCst)
    }

    /// Times a live object snapshot was taken
    pub fn snapshot_calls(&self) -> usize {
        self.snapshot_calls.load(Ordering::SeqCst)
    }

    fn all_types(&self) -> impl Iterator<Item = TypeRef> + '_ {
        self.modules
            .iter()
            .flat_map(|m| sceneprobe_engine::try_get_types(m.as_ref()))
    }
}

impl TypeCatalog for FixtureHost {
    fn modules(&self) -> Vec<ModuleRef> {
        self.module_calls.fetch_add(1, Ordering::SeqCst);
        self.modules.clone()
    }

    fn resolve_type(&self, name: &str) -> Option<TypeRef> {
        self.all_types()
            .find(|ty| ty.full_name().map(|n| n == name).unwrap_or(false))
            .or_else(|| self.all_types().find(|ty| ty.name() == name))
    }
}

impl InstanceSource for FixtureHost {
    fn find_objects_of_type_all(&self, ty: &TypeRef) -> Vec<ObjectRef> {
        self.snapshot_calls.fetch_add(1, Ordering::SeqCst);
        self.objects
            .iter()
            .filter(|obj| obj.actual_type().is_assignable_to(ty.as_ref()))
            .cloned()
            .collect()
    }
}

/// Engine base types shared by every fixture
pub struct EngineTypes {
    pub object: TypeRef,
    pub game_object: TypeRef,
    pub component: TypeRef,
    pub transform: TypeRef,
    pub behaviour: TypeRef,
}

impl EngineTypes {
    pub fn new() -> Self {
        Self {
            object: Arc::new(FixtureType::new(OBJECT, "UnityEngine.Object")),
            game_object: Arc::new(FixtureType::new(GAME_OBJECT, "UnityEngine.GameObject").base(OBJECT)),
            component: Arc::new(FixtureType::new(COMPONENT, "UnityEngine.Component").base(OBJECT)),
            transform: Arc::new(
                FixtureType::new(TRANSFORM, "UnityEngine.Transform")
                    .base(COMPONENT)
                    .base(OBJECT),
            ),
            behaviour: Arc::new(
                FixtureType::new(BEHAVIOUR, "UnityEngine.MonoBehaviour")
                    .base(COMPONENT)
                    .base(OBJECT),
            ),
        }
    }

    fn all(&self) -> Vec<TypeRef> {
        vec![
            self.object.clone(),
            self.game_object.clone(),
            self.component.clone(),
            self.transform.clone(),
            self.behaviour.clone(),
        ]
    }
}

fn erase(types: Vec<Arc<FixtureType>>) -> Vec<TypeRef> {
    types.into_iter().map(|ty| ty as TypeRef).collect()
}

pub struct FixtureBuilder {
    engine: EngineTypes,
    modules: Vec<ModuleRef>,
    objects: Vec<ObjectRef>,
}

impl FixtureBuilder {
    pub fn new() -> Self {
        let engine = EngineTypes::new();
        let core = FixtureModule {
            name: "UnityEngine.CoreModule".to_string(),
            types: engine.all(),
            refusal: None,
        };
        Self {
            engine,
            modules: vec![Arc::new(core)],
            objects: Vec::new(),
        }
    }

    pub fn engine(&self) -> &EngineTypes {
        &self.engine
    }

    pub fn module(mut self, name: &str, types: Vec<Arc<FixtureType>>) -> Self {
        self.modules.push(Arc::new(FixtureModule {
            name: name.to_string(),
            types: erase(types),
            refusal: None,
        }));
        self
    }

    /// Module whose listing fails after loading `types`
    pub fn partial_module(mut self, name: &str, types: Vec<Arc<FixtureType>>, reason: &str) -> Self {
        self.modules.push(Arc::new(FixtureModule {
            name: name.to_string(),
            types: erase(types),
            refusal: Some(reason.to_string()),
        }));
        self
    }

    pub fn object(mut self, object: ObjectRef) -> Self {
        self.objects.push(object);
        self
    }

    pub fn build(self) -> (Arc<FixtureHost>, HostRuntime) {
        let host = Arc::new(FixtureHost {
            modules: self.modules,
            objects: self.objects,
            module_calls: AtomicUsize::new(0),
            snapshot_calls: AtomicUsize::new(0),
        });
        let runtime = HostRuntime::new(
            host.clone(),
            host.clone(),
            WellKnownTypes {
                object: self.engine.object,
                container: self.engine.game_object,
                attachment: self.engine.component,
            },
        );
        (host, runtime)
    }
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that records formatted log lines
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock()).into_owned();
    (result, logs)
}
