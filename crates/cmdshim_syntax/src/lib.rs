//! Host-side data model for the command-group shim generator: declaration trees, resolved symbols, and the
//! semantic-model seam.
//!
//! The generator never parses source code itself. A host (a compiler plugin, a test, or the JSON unit dumps in
//! [`dump`]) hands it one [`tree::CompilationUnit`] at a time together with a [`model::SemanticModel`] that
//! resolves declarations to [`symbols::Symbol`]s.
//!
//! ## Notes
//! - This crate is intentionally "structure-only": it does no qualification and emits no text.
//! - Spellings the generator matches against (modifiers, well-known types) come from `cmdshim_core::lang`.
//!
//! ## Examples
//! ```rust
//! use cmdshim_syntax::tree::{DeclNode, NodeId};
//!
//! let root = DeclNode::unit(NodeId(0)).with_children(vec![
//!     DeclNode::class(NodeId(1), "Users").with_modifiers(&["public", "partial"]),
//! ]);
//! assert_eq!(root.descendants().count(), 1);
//! ```

pub mod dump;
pub mod model;
pub mod symbols;
pub mod tree;

pub use dump::{DumpError, UnitDump};
pub use model::{InMemoryModel, SemanticModel};
pub use symbols::{
    Accessibility, Annotation, ArgValue, ClassSymbol, FunctionSymbol, Literal, NamedArg, NamespaceRef, Parameter,
    Symbol, TypeKind, TypeRef,
};
pub use tree::{CompilationUnit, DeclNode, NodeId, SyntaxKind};
