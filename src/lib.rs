#![forbid(unsafe_code)]
//! Command-group shim generator
//!
//! Reads resolved declaration trees for a set of compilation units and, for every unit that declares a command
//! group, emits a source artifact that reopens the group's partial classes and adds one public shim per non-public
//! command handler. Shims forward to the handler and report its outcome through a uniform result type.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `generator` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a registry bug (a vocabulary entry without metadata), use
//!   `.expect("... info missing")`.

pub mod cli;
pub mod emit;
pub mod generator;

pub use emit::{CodeWriter, EmitConfig, Indent, Newline};
pub use generator::{GenerateError, GeneratedSource, GeneratedSources, GeneratorConfig, ShimGenerator};
