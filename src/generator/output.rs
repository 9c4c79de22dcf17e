//! Generated artifacts and their names.
//!
//! An artifact is named after the whole unit identity, so units that share a file name in different directories
//! keep separate artifacts. Distinct identities that still sanitize to the same name are told apart by a short
//! hash of the identity.

use std::collections::HashMap;

use cmdshim_core::lang::preamble::ARTIFACT_EXTENSION;

use super::errors::GenerateError;

/// Hex digits of the identity hash used to tell colliding names apart.
const HASH_DIGITS: usize = 8;

/// One generated source artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Artifact name, unique within one generation run
    pub name: String,
    /// Identity of the unit the artifact was generated from
    pub unit_id: String,
    pub text: String,
}

impl GeneratedSource {
    pub fn new(unit_id: impl Into<String>, text: impl Into<String>) -> Self {
        let unit_id = unit_id.into();
        Self {
            name: artifact_name(&unit_id),
            unit_id,
            text: text.into(),
        }
    }
}

/// Artifacts of one generation run, in the order their units were processed.
#[derive(Debug, Clone, Default)]
pub struct GeneratedSources {
    sources: Vec<GeneratedSource>,
    by_name: HashMap<String, usize>,
}

impl GeneratedSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an artifact.
    ///
    /// If another unit already holds the artifact's name, the artifact is renamed to
    /// [`disambiguated_name`] of its unit identity.
    ///
    /// ## Errors
    ///
    /// Returns [`GenerateError::DuplicateArtifact`] if an artifact for the same unit identity was already added.
    pub fn add(&mut self, mut source: GeneratedSource) -> Result<(), GenerateError> {
        if let Some(&held) = self.by_name.get(&source.name) {
            self.ensure_other_unit(held, &source)?;
            let renamed = disambiguated_name(&source.unit_id);
            tracing::debug!(unit = %source.unit_id, from = %source.name, to = %renamed, "artifact name taken");
            source.name = renamed;
            if let Some(&held) = self.by_name.get(&source.name) {
                self.ensure_other_unit(held, &source)?;
                return Err(GenerateError::DuplicateArtifact {
                    unit: source.unit_id,
                    name: source.name,
                });
            }
        }
        self.by_name.insert(source.name.clone(), self.sources.len());
        self.sources.push(source);
        Ok(())
    }

    fn ensure_other_unit(&self, held: usize, source: &GeneratedSource) -> Result<(), GenerateError> {
        if self.sources[held].unit_id == source.unit_id {
            return Err(GenerateError::DuplicateArtifact {
                unit: source.unit_id.clone(),
                name: self.sources[held].name.clone(),
            });
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&GeneratedSource> {
        self.by_name.get(name).map(|&i| &self.sources[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedSource> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn into_vec(self) -> Vec<GeneratedSource> {
        self.sources
    }
}

impl<'a> IntoIterator for &'a GeneratedSources {
    type Item = &'a GeneratedSource;
    type IntoIter = std::slice::Iter<'a, GeneratedSource>;

    fn into_iter(self) -> Self::IntoIter {
        self.sources.iter()
    }
}

/// Derive an artifact name from a unit identity.
///
/// The last path segment loses its extension. Every run of characters outside `[A-Za-z0-9]`, path separators
/// included, becomes one `_`, and the generated-artifact extension is appended. An identity that leaves nothing
/// behind maps to `unit`.
pub fn artifact_name(unit_id: &str) -> String {
    format!("{}{}", artifact_stem(unit_id), ARTIFACT_EXTENSION)
}

/// [`artifact_name`] with the first hex digits of the identity's BLAKE3 hash appended to the stem.
pub fn disambiguated_name(unit_id: &str) -> String {
    let hash = blake3::hash(unit_id.as_bytes()).to_hex();
    format!("{}_{}{}", artifact_stem(unit_id), &hash.as_str()[..HASH_DIGITS], ARTIFACT_EXTENSION)
}

fn artifact_stem(unit_id: &str) -> String {
    let split = unit_id.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let (dir, file) = unit_id.split_at(split);
    let file = match file.rfind('.') {
        Some(dot) if dot > 0 => &file[..dot],
        _ => file,
    };

    let mut stem = String::with_capacity(unit_id.len());
    for c in dir.chars().chain(file.chars()) {
        if c.is_ascii_alphanumeric() {
            stem.push(c);
        } else if !stem.is_empty() && !stem.ends_with('_') {
            stem.push('_');
        }
    }
    let trimmed = stem.trim_end_matches('_');
    if trimmed.is_empty() {
        "unit".to_string()
    } else {
        trimmed.to_string()
    }
}
