//! Command-group shim generation
//!
//! For every compilation unit whose first class derives from the command-group marker, emit one artifact that
//! reopens each conforming partial class and adds a public shim around each non-public, async, command-annotated
//! handler.
//!
//! ## Modules
//!
//! - `config` - Recognized names and output settings
//! - `scanner` - Unit walk: qualification and class/namespace blocks
//! - `metadata` - Annotation re-emission
//! - `shim` - Shim synthesis for one handler
//! - `output` - Artifacts and artifact naming
//!
//! ## Design
//!
//! Units are independent: the generator keeps no state between them, so generating the same unit twice yields
//! byte-identical text. A host contract violation (an unresolvable declaration) aborts the unit with an error
//! instead of producing partial output.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod config;
mod errors;
pub mod metadata;
mod output;
mod scanner;
pub mod shim;

pub use config::GeneratorConfig;
pub use errors::GenerateError;
pub use output::{GeneratedSource, GeneratedSources, artifact_name, disambiguated_name};
pub use scanner::DeclarationScanner;

use cmdshim_syntax::{CompilationUnit, SemanticModel};

/// Shim generator entry point
#[derive(Debug, Clone, Default)]
pub struct ShimGenerator {
    config: GeneratorConfig,
}

impl ShimGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the artifact for one unit, or `None` if the unit is not a command group.
    ///
    /// ## Errors
    ///
    /// Returns [`GenerateError`] if the model cannot resolve a declaration the generator inspects.
    #[tracing::instrument(skip_all, fields(unit = %unit.id))]
    pub fn generate_unit<M: SemanticModel>(
        &self,
        unit: &CompilationUnit,
        model: &M,
    ) -> Result<Option<GeneratedSource>, GenerateError> {
        let mut scanner = DeclarationScanner::new(&self.config, model, unit);
        let Some(text) = scanner.scan()? else {
            return Ok(None);
        };

        let source = GeneratedSource::new(unit.id.clone(), text);
        tracing::debug!(artifact = %source.name, shims = scanner.shim_count(), "generated artifact");
        Ok(Some(source))
    }

    /// Generate artifacts for a batch of units.
    ///
    /// ## Errors
    ///
    /// Returns the first unit's [`GenerateError`], or [`GenerateError::DuplicateArtifact`] if the same unit
    /// identity appears twice.
    #[tracing::instrument(skip_all)]
    pub fn generate<'u, M, I>(&self, units: I) -> Result<GeneratedSources, GenerateError>
    where
        M: SemanticModel,
        I: IntoIterator<Item = (&'u CompilationUnit, M)>,
    {
        let mut sources = GeneratedSources::new();
        let mut scanned = 0usize;
        for (unit, model) in units {
            scanned += 1;
            if let Some(source) = self.generate_unit(unit, &model)? {
                sources.add(source)?;
            }
        }
        tracing::info!(units = scanned, artifacts = sources.len(), "generation complete");
        Ok(sources)
    }
}
