//! The semantic-model seam between the generator and its host.
//!
//! The generator consumes resolution through three pure queries and nothing else, so any host (a real compiler,
//! a fixture loader, a hand-built test model) can drive it.

use std::collections::HashMap;

use crate::symbols::{Symbol, TypeRef};
use crate::tree::{DeclNode, NodeId};

/// Resolution facility for one compilation unit.
pub trait SemanticModel {
    /// Resolve the symbol a declaration node declares.
    fn declared_symbol(&self, node: &DeclNode) -> Option<Symbol>;

    /// Look up a type known to the compilation by its metadata name.
    fn type_by_name(&self, metadata_name: &str) -> Option<TypeRef>;

    /// Decide whether two type references denote the same type.
    fn types_equal(&self, a: &TypeRef, b: &TypeRef) -> bool;
}

impl<M: SemanticModel + ?Sized> SemanticModel for &M {
    fn declared_symbol(&self, node: &DeclNode) -> Option<Symbol> {
        (**self).declared_symbol(node)
    }

    fn type_by_name(&self, metadata_name: &str) -> Option<TypeRef> {
        (**self).type_by_name(metadata_name)
    }

    fn types_equal(&self, a: &TypeRef, b: &TypeRef) -> bool {
        (**self).types_equal(a, b)
    }
}

/// A [`SemanticModel`] backed by explicit tables.
///
/// Types are identified by metadata name and kind; display spellings do not take part in identity.
#[derive(Debug, Clone, Default)]
pub struct InMemoryModel {
    symbols: HashMap<NodeId, Symbol>,
    types: HashMap<String, TypeRef>,
}

impl InMemoryModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the symbol declared by `node`, returning the symbol it replaces.
    pub fn insert_symbol(&mut self, node: NodeId, symbol: Symbol) -> Option<Symbol> {
        self.symbols.insert(node, symbol)
    }

    /// Register a type the compilation knows about.
    pub fn insert_type(&mut self, ty: TypeRef) {
        self.types.insert(ty.name.clone(), ty);
    }

    pub fn with_symbol(mut self, node: NodeId, symbol: Symbol) -> Self {
        self.insert_symbol(node, symbol);
        self
    }

    pub fn with_type(mut self, ty: TypeRef) -> Self {
        self.insert_type(ty);
        self
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }
}

impl SemanticModel for InMemoryModel {
    fn declared_symbol(&self, node: &DeclNode) -> Option<Symbol> {
        self.symbols.get(&node.id).cloned()
    }

    fn type_by_name(&self, metadata_name: &str) -> Option<TypeRef> {
        self.types.get(metadata_name).cloned()
    }

    fn types_equal(&self, a: &TypeRef, b: &TypeRef) -> bool {
        a.name == b.name && a.kind == b.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{ClassSymbol, NamespaceRef, TypeKind};

    fn class_symbol(name: &str) -> Symbol {
        Symbol::Class(ClassSymbol {
            name: name.to_string(),
            accessibility: Default::default(),
            base_type: None,
            namespace: NamespaceRef::global(),
        })
    }

    #[test]
    fn test_declared_symbol_by_node_id() {
        let model = InMemoryModel::new().with_symbol(NodeId(1), class_symbol("A"));
        let node = DeclNode::class(NodeId(1), "A");
        let other = DeclNode::class(NodeId(2), "B");
        assert_eq!(model.declared_symbol(&node).map(|s| s.name().to_string()), Some("A".into()));
        assert!(model.declared_symbol(&other).is_none());
    }

    #[test]
    fn test_type_by_name_only_knows_registered_types() {
        let model = InMemoryModel::new().with_type(TypeRef::named("Remora.Results.Result"));
        assert!(model.type_by_name("Remora.Results.Result").is_some());
        assert!(model.type_by_name("Remora.Commands.Groups.CommandGroup").is_none());
    }

    #[test]
    fn test_types_equal_ignores_display() {
        let model = InMemoryModel::new();
        let a = TypeRef::named("System.Int32");
        let b = TypeRef::keyword("System.Int32", "int").with_kind(TypeKind::Class);
        assert!(model.types_equal(&a, &b));
        assert!(!model.types_equal(&a, &TypeRef::named("System.Int64")));
        assert!(!model.types_equal(&a, &a.clone().with_kind(TypeKind::Array)));
    }

    #[test]
    fn test_insert_symbol_reports_replacement() {
        let mut model = InMemoryModel::new();
        assert!(model.insert_symbol(NodeId(1), class_symbol("A")).is_none());
        assert!(model.insert_symbol(NodeId(1), class_symbol("B")).is_some());
        assert_eq!(model.symbol_count(), 1);
    }
}
