//! Member lookup and type attribute flags

use bitflags::bitflags;

bitflags! {
    /// Visibility flags passed to member reads
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MemberFlags: u32 {
        /// Public members
        const PUBLIC = 0x01;
        /// Private, protected and internal members
        const NON_PUBLIC = 0x02;
        /// Instance members
        const INSTANCE = 0x04;
        /// Static members
        const STATIC = 0x08;
        /// Include static members declared on base types
        const FLATTEN_HIERARCHY = 0x10;
    }
}

impl MemberFlags {
    /// Flags used when probing a type for its singleton accessor
    pub const fn static_lookup() -> Self {
        Self::PUBLIC
            .union(Self::NON_PUBLIC)
            .union(Self::STATIC)
            .union(Self::FLATTEN_HIERARCHY)
    }
}

bitflags! {
    /// Declaration attributes of a loaded type
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TypeAttributes: u32 {
        const SEALED = 0x01;
        const ABSTRACT = 0x02;
        const ENUM = 0x04;
        const INTERFACE = 0x08;
    }
}

impl TypeAttributes {
    /// Static-only container (declared sealed and abstract)
    pub fn is_static_class(self) -> bool {
        self.contains(Self::SEALED | Self::ABSTRACT)
    }

    /// Enumeration kind
    pub fn is_enum(self) -> bool {
        self.contains(Self::ENUM)
    }

    /// Whether singleton discovery should consider this type
    pub fn can_hold_singleton(self) -> bool {
        !self.is_static_class() && !self.is_enum()
    }
}
