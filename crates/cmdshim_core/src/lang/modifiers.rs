//! Declaration modifier vocabulary.
//!
//! The scanner only cares about `partial`, but hosts hand over the full modifier list of each declaration, so the
//! registry covers every modifier a class or method can carry.
//!
//! ## Examples
//! ```rust
//! use cmdshim_core::lang::modifiers::{self, ModifierId};
//!
//! assert_eq!(modifiers::from_str("static"), Some(ModifierId::Static));
//! assert_eq!(modifiers::from_str("Partial"), None); // case-sensitive
//! ```

use super::registry::{self, LangItemInfo};

/// Stable identifier for declaration modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierId {
    Public,
    Private,
    Protected,
    Internal,
    Partial,
    Static,
    Async,
    Abstract,
    Sealed,
    Virtual,
    Override,
    Readonly,
    New,
    Extern,
    Unsafe,
}

/// Metadata entry for a modifier.
pub type ModifierInfo = LangItemInfo<ModifierId>;

/// Registry of declaration modifiers.
pub const MODIFIERS: &[ModifierInfo] = &[
    info(ModifierId::Public, "public", "Accessible from any assembly."),
    info(ModifierId::Private, "private", "Accessible only inside the containing type."),
    info(ModifierId::Protected, "protected", "Accessible inside the containing type and derived types."),
    info(ModifierId::Internal, "internal", "Accessible inside the containing assembly."),
    info(ModifierId::Partial, "partial", "Declaration may be split across several parts."),
    info(ModifierId::Static, "static", "Member belongs to the type rather than an instance."),
    info(ModifierId::Async, "async", "Method body may await."),
    info(ModifierId::Abstract, "abstract", "Declaration has no implementation."),
    info(ModifierId::Sealed, "sealed", "Type or override cannot be further derived."),
    info(ModifierId::Virtual, "virtual", "Member may be overridden."),
    info(ModifierId::Override, "override", "Member overrides an inherited member."),
    info(ModifierId::Readonly, "readonly", "Member is assignable only during construction."),
    info(ModifierId::New, "new", "Member hides an inherited member."),
    info(ModifierId::Extern, "extern", "Member is implemented externally."),
    info(ModifierId::Unsafe, "unsafe", "Declaration uses an unsafe context."),
];

/// Resolve a modifier spelling to its stable id.
pub fn from_str(spelling: &str) -> Option<ModifierId> {
    registry::lookup(MODIFIERS, spelling)
}

/// Return the canonical spelling for a modifier.
pub fn as_str(id: ModifierId) -> &'static str {
    info_for(id).canonical
}

/// Return the metadata entry for a modifier.
pub fn info_for(id: ModifierId) -> &'static ModifierInfo {
    MODIFIERS.iter().find(|m| m.id == id).expect("modifier info missing")
}

const fn info(id: ModifierId, canonical: &'static str, description: &'static str) -> ModifierInfo {
    LangItemInfo {
        id,
        canonical,
        aliases: &[],
        description,
    }
}
