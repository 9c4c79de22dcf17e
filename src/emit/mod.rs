//! Hierarchical, indentation-aware text emission.
//!
//! Generated artifacts are composed from nested [`CodeWriter`] scopes. Each scope owns its own buffer and indent
//! depth; a child's text reaches its parent only when the child is released (explicitly or on drop), so blocks
//! compose strictly inside-out.

mod config;
mod writer;

pub use config::{EmitConfig, Indent, Newline};
pub use writer::CodeWriter;
