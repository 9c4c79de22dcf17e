//! Generator configuration.
//!
//! Defaults come from the `cmdshim_core::lang` registries; every recognized name can be overridden so the
//! generator can target a fork of the command framework.

use cmdshim_core::lang::preamble;
use cmdshim_core::lang::well_known::{self, WellKnownTypeId};

use crate::emit::EmitConfig;

/// Generator configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Metadata name of the command-group base class
    pub command_group_type: String,
    /// Metadata name of the command annotation
    pub command_attribute_type: String,
    /// Fully qualified return type spellings a handler may declare
    pub async_return_types: Vec<String>,
    /// Lines emitted at the top of every artifact
    pub preamble: Vec<String>,
    /// Suffix appended to the handler name
    pub shim_suffix: String,
    /// Return type spelled on every shim
    pub shim_return_type: String,
    /// Map an exception from the forwarded call to a failed result instead of letting it escape
    pub propagate_failures: bool,
    /// Text emission settings
    pub emit: EmitConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let mut preamble_lines = vec![preamble::AUTO_GENERATED_MARKER.to_string()];
        preamble_lines.extend(preamble::IMPORTS.iter().map(|line| line.to_string()));

        Self {
            command_group_type: well_known::as_str(WellKnownTypeId::CommandGroup).to_string(),
            command_attribute_type: well_known::as_str(WellKnownTypeId::CommandAttribute).to_string(),
            async_return_types: well_known::ASYNC_RETURN_TYPES
                .iter()
                .map(|id| well_known::display(*id))
                .collect(),
            preamble: preamble_lines,
            shim_suffix: preamble::SHIM_SUFFIX.to_string(),
            shim_return_type: format!(
                "{}<{}>",
                well_known::display(WellKnownTypeId::Task),
                well_known::simple_name(WellKnownTypeId::Result)
            ),
            propagate_failures: true,
            emit: EmitConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the command-group base class
    pub fn with_command_group_type(mut self, metadata_name: impl Into<String>) -> Self {
        self.command_group_type = metadata_name.into();
        self
    }

    /// Set the command annotation
    pub fn with_command_attribute_type(mut self, metadata_name: impl Into<String>) -> Self {
        self.command_attribute_type = metadata_name.into();
        self
    }

    /// Set the shim name suffix
    pub fn with_shim_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.shim_suffix = suffix.into();
        self
    }

    /// Enable or disable failure propagation in shim bodies
    pub fn with_propagate_failures(mut self, propagate: bool) -> Self {
        self.propagate_failures = propagate;
        self
    }

    /// Set the emission settings
    pub fn with_emit(mut self, emit: EmitConfig) -> Self {
        self.emit = emit;
        self
    }

    /// Check whether a fully qualified return type is one of the recognized async spellings
    pub fn is_async_return_type(&self, fully_qualified: &str) -> bool {
        self.async_return_types.iter().any(|t| t == fully_qualified)
    }
}
