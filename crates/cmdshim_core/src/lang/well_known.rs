//! Well-known framework types the generator matches against or emits.
//!
//! Canonical spellings are **metadata names** (`Namespace.Type`), the form a host resolves through
//! `type_by_name`. The emitted, fully qualified display form is `global::<metadata name>`.
//!
//! ## Examples
//! ```rust
//! use cmdshim_core::lang::well_known::{self, WellKnownTypeId};
//!
//! assert_eq!(
//!     well_known::as_str(WellKnownTypeId::CommandGroup),
//!     "Remora.Commands.Groups.CommandGroup"
//! );
//! assert_eq!(
//!     well_known::display(WellKnownTypeId::Task),
//!     "global::System.Threading.Tasks.Task"
//! );
//! ```

use super::registry::{self, LangItemInfo};

/// Prefix of a fully qualified display name.
pub const GLOBAL_ALIAS: &str = "global::";

/// Stable identifier for well-known types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownTypeId {
    /// Base class marking a command group.
    CommandGroup,
    /// Annotation marking a command handler.
    CommandAttribute,
    Task,
    ValueTask,
    /// Non-generic result returned by shims.
    Result,
    /// Result error wrapping a caught exception.
    ExceptionError,
    Exception,
}

/// Metadata entry for a well-known type.
pub type WellKnownTypeInfo = LangItemInfo<WellKnownTypeId>;

/// Registry of well-known types.
pub const WELL_KNOWN_TYPES: &[WellKnownTypeInfo] = &[
    info(
        WellKnownTypeId::CommandGroup,
        "Remora.Commands.Groups.CommandGroup",
        "Base class of every command group.",
    ),
    info(
        WellKnownTypeId::CommandAttribute,
        "Remora.Commands.Attributes.CommandAttribute",
        "Marks a method as a command handler.",
    ),
    info(
        WellKnownTypeId::Task,
        "System.Threading.Tasks.Task",
        "Asynchronous unit of work.",
    ),
    info(
        WellKnownTypeId::ValueTask,
        "System.Threading.Tasks.ValueTask",
        "Allocation-free asynchronous unit of work.",
    ),
    info(
        WellKnownTypeId::Result,
        "Remora.Results.Result",
        "Success-or-error outcome without a value.",
    ),
    info(
        WellKnownTypeId::ExceptionError,
        "Remora.Results.ExceptionError",
        "Result error carrying an exception.",
    ),
    info(WellKnownTypeId::Exception, "System.Exception", "Base exception type."),
];

/// Return types a handler may declare to qualify for a shim.
pub const ASYNC_RETURN_TYPES: &[WellKnownTypeId] = &[WellKnownTypeId::Task, WellKnownTypeId::ValueTask];

/// Resolve a metadata name to its stable id.
pub fn from_str(name: &str) -> Option<WellKnownTypeId> {
    registry::lookup(WELL_KNOWN_TYPES, name)
}

/// Return the metadata name for a well-known type.
pub fn as_str(id: WellKnownTypeId) -> &'static str {
    info_for(id).canonical
}

/// Return the fully qualified display spelling (`global::Namespace.Type`).
pub fn display(id: WellKnownTypeId) -> String {
    format!("{GLOBAL_ALIAS}{}", as_str(id))
}

/// Return the unqualified type name, as spelled where the preamble imports its namespace.
pub fn simple_name(id: WellKnownTypeId) -> &'static str {
    let name = as_str(id);
    name.rsplit('.').next().unwrap_or(name)
}

/// Return the metadata entry for a well-known type.
pub fn info_for(id: WellKnownTypeId) -> &'static WellKnownTypeInfo {
    WELL_KNOWN_TYPES
        .iter()
        .find(|t| t.id == id)
        .expect("well-known type info missing")
}

const fn info(id: WellKnownTypeId, canonical: &'static str, description: &'static str) -> WellKnownTypeInfo {
    LangItemInfo {
        id,
        canonical,
        aliases: &[],
        description,
    }
}
