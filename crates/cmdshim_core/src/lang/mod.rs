//! Vocabulary registries for the command-group shim generator.
//!
//! Callers work with **stable IDs** (e.g. [`well_known::WellKnownTypeId`], [`modifiers::ModifierId`]) and look up
//! spellings via registry tables instead of comparing raw strings.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no tree types, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use cmdshim_core::lang::modifiers::{self, ModifierId};
//!
//! assert_eq!(modifiers::from_str("partial"), Some(ModifierId::Partial));
//! assert_eq!(modifiers::as_str(ModifierId::Partial), "partial");
//! ```

pub mod modifiers;
pub mod preamble;
pub mod registry;
pub mod well_known;
