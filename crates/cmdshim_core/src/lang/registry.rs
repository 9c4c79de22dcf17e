//! Shareable metadata for `cmdshim_core::lang` registries.
//!
//! ## Notes
//! - These types are `Copy` so registries can live in `const` tables.
//!
//! ## See also
//! - [`crate::lang::modifiers`]
//! - [`crate::lang::well_known`]

/// Shared metadata shape for registry-first vocabulary items.
///
/// Every registry entry carries a stable identity (`id`), its accepted spellings (`canonical` + `aliases`) and a
/// one-line `description` used in docs and diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

/// Resolve a spelling against a registry table (canonical spellings win over aliases).
pub(crate) fn lookup<Id: Copy + PartialEq>(table: &[LangItemInfo<Id>], spelling: &str) -> Option<Id> {
    if let Some(info) = table.iter().find(|i| i.canonical == spelling) {
        return Some(info.id);
    }
    table.iter().find(|i| i.aliases.contains(&spelling)).map(|i| i.id)
}
