//! Define error types for shim generation.
//!
//! Qualification failures are never errors: a declaration that does not qualify is skipped silently. These
//! errors represent violations of the host contract (a declaration the host cannot resolve) or of the output
//! contract (one unit submitted twice).

use cmdshim_syntax::NodeId;
use thiserror::Error;

/// Error during shim generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("unit `{unit}`: the host did not resolve a symbol for node {node}")]
    UnresolvedSymbol { unit: String, node: NodeId },

    #[error("unit `{unit}`: node {node} resolved to a {found} symbol, expected a {expected} symbol")]
    SymbolKindMismatch {
        unit: String,
        node: NodeId,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unit `{unit}` was already generated as `{name}`")]
    DuplicateArtifact { unit: String, name: String },
}
