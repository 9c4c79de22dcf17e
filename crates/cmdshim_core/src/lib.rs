//! Provide the canonical vocabulary shared by the shim generator and its host adapters.
//!
//! This crate is intentionally small and dependency-free. It records the spellings the generator matches against
//! (well-known framework types, declaration modifiers) and the fixed text it emits (the artifact preamble), so that
//! neither the generator nor a host adapter carries stringly-typed copies of them.
//!
//! ## Notes
//!
//! - This is a pure vocabulary crate: **no IO**, no global state, and no syntax-tree types.

pub mod lang;
