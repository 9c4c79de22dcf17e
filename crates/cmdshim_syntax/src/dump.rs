//! JSON unit dumps: a serialized compilation unit together with its resolved symbols.
//!
//! This is the host adapter used by the CLI and the fixtures. A dump carries the unit identity, the declaration
//! tree, one symbol entry per resolvable node, and the types the compilation knows by metadata name.
//!
//! ## Examples
//! ```rust
//! use cmdshim_syntax::UnitDump;
//!
//! let json = r#"{ "id": "Empty.cs", "root": { "id": 0, "kind": "unit" } }"#;
//! let (unit, _model) = UnitDump::from_json(json).unwrap().into_parts().unwrap();
//! assert_eq!(unit.id, "Empty.cs");
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::InMemoryModel;
use crate::symbols::{Symbol, TypeRef};
use crate::tree::{CompilationUnit, DeclNode, NodeId};

/// Errors raised while loading a unit dump.
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("malformed unit dump: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unit `{unit}`: node {node} has more than one symbol entry")]
    DuplicateSymbol { unit: String, node: NodeId },

    #[error("unit `{unit}`: symbol entry for node {node}, which is not in the tree")]
    UnknownNode { unit: String, node: NodeId },
}

/// Symbol declared by one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub node: NodeId,
    pub symbol: Symbol,
}

/// A serialized compilation unit plus its semantic facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDump {
    pub id: String,
    pub root: DeclNode,
    #[serde(default)]
    pub symbols: Vec<SymbolEntry>,
    /// Types resolvable by metadata name in this compilation.
    #[serde(default)]
    pub types: Vec<TypeRef>,
}

impl UnitDump {
    pub fn from_json(text: &str) -> Result<Self, DumpError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, DumpError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Split the dump into the unit and a semantic model over it.
    ///
    /// ## Errors
    ///
    /// Returns an error if a node has two symbol entries or an entry names a node missing from the tree.
    #[tracing::instrument(skip_all, fields(unit = %self.id, symbols = self.symbols.len()))]
    pub fn into_parts(self) -> Result<(CompilationUnit, InMemoryModel), DumpError> {
        let mut known: HashSet<NodeId> = self.root.descendants().map(|n| n.id).collect();
        known.insert(self.root.id);

        let mut model = InMemoryModel::new();
        for entry in self.symbols {
            if !known.contains(&entry.node) {
                return Err(DumpError::UnknownNode {
                    unit: self.id,
                    node: entry.node,
                });
            }
            if model.insert_symbol(entry.node, entry.symbol).is_some() {
                return Err(DumpError::DuplicateSymbol {
                    unit: self.id,
                    node: entry.node,
                });
            }
        }
        for ty in self.types {
            model.insert_type(ty);
        }

        Ok((CompilationUnit::new(self.id, self.root), model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SemanticModel;
    use crate::symbols::{Accessibility, ArgValue, Literal};
    use crate::tree::SyntaxKind;

    const SAMPLE: &str = r#"{
        "id": "Commands/Users.cs",
        "root": {
            "id": 0,
            "kind": "unit",
            "children": [
                {
                    "id": 1,
                    "kind": "class",
                    "name": "Users",
                    "modifiers": ["public", "partial"],
                    "base_list": ["CommandGroup"],
                    "children": [{ "id": 2, "kind": "function", "name": "BanAsync", "modifiers": ["private"] }]
                }
            ]
        },
        "symbols": [
            {
                "node": 1,
                "symbol": { "class": {
                    "name": "Users",
                    "accessibility": "public",
                    "base_type": { "name": "Remora.Commands.Groups.CommandGroup" },
                    "namespace": "Bot.Commands"
                } }
            },
            {
                "node": 2,
                "symbol": { "function": {
                    "name": "BanAsync",
                    "return_type": { "name": "System.Threading.Tasks.Task" },
                    "parameters": [
                        { "name": "count", "ty": { "name": "System.Int32", "display": "int", "kind": "struct" } }
                    ],
                    "annotations": [
                        {
                            "ty": { "name": "Remora.Commands.Attributes.CommandAttribute" },
                            "positional": [{ "scalar": { "str": "ban" } }]
                        }
                    ]
                } }
            }
        ],
        "types": [{ "name": "Remora.Commands.Groups.CommandGroup" }]
    }"#;

    #[test]
    fn test_parse_sample_dump() {
        let dump = UnitDump::from_json(SAMPLE).unwrap();
        assert_eq!(dump.id, "Commands/Users.cs");
        assert_eq!(dump.root.kind, SyntaxKind::Unit);
        assert_eq!(dump.symbols.len(), 2);

        let Symbol::Function(func) = &dump.symbols[1].symbol else {
            panic!("expected a function symbol");
        };
        assert_eq!(func.accessibility, Accessibility::Private);
        assert_eq!(func.parameters[0].ty.fully_qualified(), "int");
        assert_eq!(
            func.annotations[0].positional,
            vec![ArgValue::Scalar(Literal::Str("ban".into()))]
        );
    }

    #[test]
    fn test_into_parts_builds_model() {
        let (unit, model) = UnitDump::from_json(SAMPLE).unwrap().into_parts().unwrap();
        let class = unit.root.first_class().unwrap();
        let Some(Symbol::Class(symbol)) = model.declared_symbol(class) else {
            panic!("expected a class symbol");
        };
        assert_eq!(symbol.namespace.name, "Bot.Commands");
        assert!(model.type_by_name("Remora.Commands.Groups.CommandGroup").is_some());
    }

    #[test]
    fn test_round_trip_through_json() {
        let dump = UnitDump::from_json(SAMPLE).unwrap();
        let again = UnitDump::from_json(&dump.to_json().unwrap()).unwrap();
        assert_eq!(dump, again);
    }

    #[test]
    fn test_unknown_node_rejected() {
        let json = r#"{
            "id": "A.cs",
            "root": { "id": 0, "kind": "unit" },
            "symbols": [{ "node": 7, "symbol": { "class": { "name": "X" } } }]
        }"#;
        let err = UnitDump::from_json(json).unwrap().into_parts().unwrap_err();
        assert!(matches!(err, DumpError::UnknownNode { node: NodeId(7), .. }));
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let json = r#"{
            "id": "A.cs",
            "root": { "id": 0, "kind": "unit", "children": [{ "id": 1, "kind": "class", "name": "X" }] },
            "symbols": [
                { "node": 1, "symbol": { "class": { "name": "X" } } },
                { "node": 1, "symbol": { "class": { "name": "Y" } } }
            ]
        }"#;
        let err = UnitDump::from_json(json).unwrap().into_parts().unwrap_err();
        assert!(err.to_string().contains("more than one symbol entry"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = UnitDump::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DumpError::Json(_)));
    }
}
