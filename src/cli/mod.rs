//! CLI module for the shim generator
//!
//! This module drives generation over JSON unit dumps written by a host.
//!
//! ## Commands
//!
//! - `generate <DUMP>...` - Generate artifacts for every dump and write them to an output directory
//! - `--emit <DUMP>` - Print the artifact for one dump to stdout (debug)
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::emit::{EmitConfig, Indent};
use crate::generator::GeneratorConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default output directory for `generate`
pub const DEFAULT_OUT_DIR: &str = "generated";

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Command-group shim generator
#[derive(Parser, Debug)]
#[command(name = "cmdshim")]
#[command(version = VERSION)]
#[command(about = "Generate public shims for command-group handlers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print the generated artifact for one dump (debug)
    #[arg(long = "emit", value_name = "DUMP")]
    pub emit_file: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options shared by every command that produces artifacts
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Indent with N spaces instead of tabs
    #[arg(long = "spaces", value_name = "N", global = true)]
    pub spaces: Option<usize>,

    /// Let exceptions from handlers escape instead of mapping them to a failed result
    #[arg(long = "no-propagate", global = true)]
    pub no_propagate: bool,
}

impl OutputArgs {
    /// Build the generator configuration these options select.
    pub fn generator_config(&self) -> GeneratorConfig {
        let indent = match self.spaces {
            Some(width) => Indent::Spaces(width),
            None => Indent::Tab,
        };
        GeneratorConfig::new()
            .with_emit(EmitConfig::new().with_indent(indent))
            .with_propagate_failures(!self.no_propagate)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate shim artifacts for unit dumps
    Generate {
        /// JSON unit dumps
        #[arg(value_name = "DUMP", required = true)]
        dumps: Vec<PathBuf>,
        /// Output directory (default: generated)
        #[arg(long = "out-dir", value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.output.generator_config();

    if let Some(file) = cli.emit_file {
        return commands::emit_file(&file, &config);
    }

    match cli.command {
        Some(Command::Generate { dumps, out_dir }) => {
            let out_dir = out_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
            commands::generate_files(&dumps, &out_dir, &config)
        }
        None => Err(CliError::failure(
            "Error: expected a subcommand or --emit <DUMP> (see --help)",
        )),
    }
}

// ============================================================================
// Tests
// ============================================================================
