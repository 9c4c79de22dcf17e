//! Declaration tree definitions.
//!
//! A tree only records *structure*: which declarations exist, how they nest, their modifiers and the base types
//! written in their base list. Everything semantic (accessibility, resolved types, annotations) lives in
//! [`crate::symbols`] and is obtained through [`crate::model::SemanticModel`].

use serde::{Deserialize, Serialize};

use cmdshim_core::lang::modifiers::{self, ModifierId};

/// Identity of a node within its compilation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of a declaration node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxKind {
    /// Root of a compilation unit.
    Unit,
    Namespace,
    Class,
    Function,
    /// Any other member (fields, properties, nested enums, ...). Traversed, never emitted.
    Other,
}

/// A node of the declaration tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclNode {
    pub id: NodeId,
    pub kind: SyntaxKind,
    /// Declared identifier (empty for the unit root).
    #[serde(default)]
    pub name: String,
    /// Modifier spellings in source order.
    #[serde(default)]
    pub modifiers: Vec<String>,
    /// Base types as written in the base list, unresolved.
    #[serde(default)]
    pub base_list: Vec<String>,
    /// Child declarations in source order.
    #[serde(default)]
    pub children: Vec<DeclNode>,
}

impl DeclNode {
    pub fn new(id: NodeId, kind: SyntaxKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            modifiers: Vec::new(),
            base_list: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn unit(id: NodeId) -> Self {
        Self::new(id, SyntaxKind::Unit, "")
    }

    pub fn namespace(id: NodeId, name: impl Into<String>) -> Self {
        Self::new(id, SyntaxKind::Namespace, name)
    }

    pub fn class(id: NodeId, name: impl Into<String>) -> Self {
        Self::new(id, SyntaxKind::Class, name)
    }

    pub fn function(id: NodeId, name: impl Into<String>) -> Self {
        Self::new(id, SyntaxKind::Function, name)
    }

    pub fn with_modifiers(mut self, modifiers: &[&str]) -> Self {
        self.modifiers = modifiers.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base_list.push(base.into());
        self
    }

    pub fn with_children(mut self, children: Vec<DeclNode>) -> Self {
        self.children = children;
        self
    }

    /// Check whether the node carries the given modifier.
    pub fn has_modifier(&self, id: ModifierId) -> bool {
        let spelling = modifiers::as_str(id);
        self.modifiers.iter().any(|m| m == spelling)
    }

    pub fn is_partial(&self) -> bool {
        self.has_modifier(ModifierId::Partial)
    }

    /// Check whether the declaration lists at least one base type.
    pub fn has_base_list(&self) -> bool {
        !self.base_list.is_empty()
    }

    /// Iterate over all descendants (not including `self`) in document pre-order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Return the first class declaration in document pre-order.
    pub fn first_class(&self) -> Option<&DeclNode> {
        self.descendants().find(|n| n.kind == SyntaxKind::Class)
    }
}

/// Pre-order iterator over a node's descendants.
pub struct Descendants<'a> {
    stack: Vec<&'a DeclNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a DeclNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// One parsed source file as handed over by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    /// Host identity of the unit (usually its path). Artifact names derive from it.
    pub id: String,
    pub root: DeclNode,
}

impl CompilationUnit {
    pub fn new(id: impl Into<String>, root: DeclNode) -> Self {
        Self { id: id.into(), root }
    }
}
