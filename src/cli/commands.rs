//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Component, Path, PathBuf};

use cmdshim_syntax::{CompilationUnit, InMemoryModel, UnitDump};

use super::{CliError, CliResult, ExitCode};
use crate::generator::{GeneratorConfig, ShimGenerator};

/// Maximum size of a unit dump we are willing to read.
const MAX_DUMP_SIZE: u64 = 100 * 1024 * 1024;

// ============================================================================
// Input
// ============================================================================

/// Read a dump file's contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_DUMP_SIZE` (100 MB)
pub fn read_dump(file_path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path.display(), e)))?;

    if metadata.len() > MAX_DUMP_SIZE {
        return Err(CliError::failure(format!(
            "Dump file '{}' is too large ({} bytes, max {} bytes)",
            file_path.display(),
            metadata.len(),
            MAX_DUMP_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e)))
}

/// Read and decode one unit dump into a unit and its semantic model.
pub fn load_unit(file_path: &Path) -> CliResult<(CompilationUnit, InMemoryModel)> {
    let text = read_dump(file_path)?;
    UnitDump::from_json(&text)
        .and_then(UnitDump::into_parts)
        .map_err(|e| CliError::failure(format!("Invalid unit dump '{}': {}", file_path.display(), e)))
}

// ============================================================================
// Output
// ============================================================================

/// Validate the output directory to prevent path traversal.
///
/// This function ensures:
/// - The path doesn't contain `..` components
/// - Absolute paths are allowed but logged
fn validate_output_dir(out_dir: &Path) -> CliResult<()> {
    if out_dir.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(CliError::failure(format!(
            "Output directory '{}' contains path traversal (..)",
            out_dir.display()
        )));
    }

    if out_dir.is_absolute() {
        tracing::warn!(
            "Using absolute output path: {}. Consider using a relative path.",
            out_dir.display()
        );
    }

    Ok(())
}

// ============================================================================
// Commands
// ============================================================================

/// Print the generated artifact for one dump.
pub fn emit_file(file_path: &Path, config: &GeneratorConfig) -> CliResult<ExitCode> {
    let (unit, model) = load_unit(file_path)?;
    let generator = ShimGenerator::new(config.clone());

    let source = generator
        .generate_unit(&unit, &model)
        .map_err(|e| CliError::failure(format!("Generation error: {}", e)))?;

    match source {
        Some(source) => {
            print!("{}", source.text);
        }
        None => {
            eprintln!("No command group in '{}'; nothing generated", file_path.display());
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Generate artifacts for a set of dumps and write them to `out_dir`.
///
/// Returns the paths written, in unit order.
pub fn write_artifacts(dumps: &[PathBuf], out_dir: &Path, config: &GeneratorConfig) -> CliResult<Vec<PathBuf>> {
    validate_output_dir(out_dir)?;

    let units = dumps.iter().map(|path| load_unit(path)).collect::<CliResult<Vec<_>>>()?;

    let generator = ShimGenerator::new(config.clone());
    let sources = generator
        .generate(units.iter().map(|(unit, model)| (unit, model)))
        .map_err(|e| CliError::failure(format!("Generation error: {}", e)))?;

    if sources.is_empty() {
        return Ok(Vec::new());
    }

    fs::create_dir_all(out_dir).map_err(|e| {
        CliError::failure(format!("Cannot create output directory '{}': {}", out_dir.display(), e))
    })?;

    let mut written = Vec::with_capacity(sources.len());
    for source in &sources {
        let path = out_dir.join(&source.name);
        fs::write(&path, &source.text)
            .map_err(|e| CliError::failure(format!("Error writing {}: {}", path.display(), e)))?;
        tracing::debug!(unit = %source.unit_id, path = %path.display(), "wrote artifact");
        written.push(path);
    }
    Ok(written)
}

/// Generate artifacts for a set of dumps.
pub fn generate_files(dumps: &[PathBuf], out_dir: &Path, config: &GeneratorConfig) -> CliResult<ExitCode> {
    let written = write_artifacts(dumps, out_dir, config)?;

    for path in &written {
        println!("Generated: {}", path.display());
    }
    println!("\n✓ {} unit(s) scanned, {} artifact(s) generated", dumps.len(), written.len());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::process;

    const USERS_DUMP: &str = r#"{
        "id": "Commands/Users.cs",
        "root": {
            "id": 0, "kind": "unit", "name": "",
            "children": [{
                "id": 1, "kind": "class", "name": "Users",
                "modifiers": ["public", "partial"], "base_list": ["CommandGroup"],
                "children": [{ "id": 2, "kind": "function", "name": "BanAsync" }]
            }]
        },
        "symbols": [
            { "node": 1, "symbol": { "class": {
                "name": "Users", "accessibility": "public",
                "base_type": { "name": "Remora.Commands.Groups.CommandGroup" },
                "namespace": "Bot.Commands"
            } } },
            { "node": 2, "symbol": { "function": {
                "name": "BanAsync", "accessibility": "private",
                "return_type": { "name": "System.Threading.Tasks.Task" },
                "annotations": [{
                    "ty": { "name": "Remora.Commands.Attributes.CommandAttribute" },
                    "positional": [{ "scalar": { "str": "ban" } }]
                }]
            } } }
        ],
        "types": [
            { "name": "Remora.Commands.Groups.CommandGroup" },
            { "name": "Remora.Commands.Attributes.CommandAttribute" }
        ]
    }"#;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cmdshim_{}_{}", name, process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_validate_output_dir_rejects_traversal() {
        assert!(validate_output_dir(Path::new("out/../../etc")).is_err());
        assert!(validate_output_dir(Path::new("out/generated")).is_ok());
    }

    #[test]
    fn test_load_unit_reports_missing_file() {
        let err = load_unit(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.message.contains("Cannot access file"));
    }

    #[test]
    fn test_load_unit_reports_invalid_json() {
        let dir = scratch_dir("invalid");
        let path = dir.join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_unit(&path).unwrap_err();
        assert!(err.message.contains("Invalid unit dump"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_artifacts_names_output_after_unit() {
        let dir = scratch_dir("write");
        let dump = dir.join("users.json");
        fs::write(&dump, USERS_DUMP).unwrap();
        let out = dir.join("out");

        let written = write_artifacts(&[dump], &out, &GeneratorConfig::default()).unwrap();
        assert_eq!(written, vec![out.join("Commands_Users.CommandShims.g.cs")]);
        let text = fs::read_to_string(&written[0]).unwrap();
        assert!(text.contains("namespace Bot.Commands"));
        assert!(text.contains("BanAsync_Shim()"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_artifacts_rejects_same_unit_twice() {
        let dir = scratch_dir("duplicate");
        let first = dir.join("a.json");
        let second = dir.join("b.json");
        fs::write(&first, USERS_DUMP).unwrap();
        fs::write(&second, USERS_DUMP).unwrap();

        let err = write_artifacts(&[first, second], &dir.join("out"), &GeneratorConfig::default()).unwrap_err();
        assert!(err.message.contains("Commands/Users.cs"));
        assert!(err.message.contains("Commands_Users.CommandShims.g.cs"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_artifacts_keeps_same_file_name_in_different_directories() {
        let dir = scratch_dir("same-file-name");
        let admin = dir.join("admin.json");
        let moderation = dir.join("moderation.json");
        fs::write(&admin, USERS_DUMP.replace("Commands/Users.cs", "Commands/Admin/Users.cs")).unwrap();
        fs::write(&moderation, USERS_DUMP.replace("Commands/Users.cs", "Commands/Moderation/Users.cs")).unwrap();
        let out = dir.join("out");

        let written = write_artifacts(&[admin, moderation], &out, &GeneratorConfig::default()).unwrap();
        assert_eq!(
            written,
            vec![
                out.join("Commands_Admin_Users.CommandShims.g.cs"),
                out.join("Commands_Moderation_Users.CommandShims.g.cs"),
            ]
        );
        assert!(written.iter().all(|path| path.exists()));
        let _ = fs::remove_dir_all(&dir);
    }
}
