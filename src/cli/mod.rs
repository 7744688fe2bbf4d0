//! CLI module for the structured-tokens pipeline
//!
//! ## Commands
//!
//! - `parse [NAME]` - Build, compare and validate structured tokens for one token file (default action)
//! - `classify <NAME>...` - Print the name structure of ad-hoc token names
//! - `roundtrip [NAME]` - Regenerate a token file from its structured tokens and diff it against the source
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

use crate::config::PipelineConfig;

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

impl From<crate::files::FileError> for CliError {
    fn from(err: crate::files::FileError) -> Self {
        Self::failure(err.to_string())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Structured design-token tooling
#[derive(Parser, Debug)]
#[command(name = "structured-tokens")]
#[command(version = VERSION)]
#[command(about = "Parse design-token names into structured tokens and check them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub paths: PathArgs,
}

/// Locations overriding the defaults of [`PipelineConfig`].
#[derive(Args, Debug, Default)]
pub struct PathArgs {
    /// Directory holding the source token files
    #[arg(long, value_name = "DIR", global = true)]
    pub tokens_dir: Option<PathBuf>,

    /// Directory holding the structured-token schemas
    #[arg(long, value_name = "DIR", global = true)]
    pub schemas_dir: Option<PathBuf>,

    /// CSV export of the naming-rules workbook
    #[arg(long = "rules", value_name = "FILE", global = true)]
    pub rules_path: Option<PathBuf>,

    /// Directory receiving structured token arrays
    #[arg(long, value_name = "DIR", global = true)]
    pub structured_dir: Option<PathBuf>,

    /// Directory receiving reports, regenerated files and diffs
    #[arg(long, value_name = "DIR", global = true)]
    pub report_dir: Option<PathBuf>,
}

impl PathArgs {
    /// Apply the given overrides on top of the default configuration.
    pub fn to_config(&self, file_stem: Option<&str>) -> PipelineConfig {
        let mut config = PipelineConfig::new();
        if let Some(dir) = &self.tokens_dir {
            config = config.with_tokens_dir(dir);
        }
        if let Some(dir) = &self.schemas_dir {
            config = config.with_schemas_dir(dir);
        }
        if let Some(path) = &self.rules_path {
            config = config.with_rules_path(path);
        }
        if let Some(dir) = &self.structured_dir {
            config = config.with_structured_dir(dir);
        }
        if let Some(dir) = &self.report_dir {
            config = config.with_report_dir(dir);
        }
        if let Some(stem) = file_stem {
            config = config.with_file_stem(stem);
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build, compare and validate structured tokens for a token file
    Parse {
        /// Token file name without extension (default: layout)
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },

    /// Print the name structure of token names
    Classify {
        /// Token names to classify
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },

    /// Regenerate a token file from structured tokens and diff it against the source
    Roundtrip {
        /// Token file name without extension (default: layout)
        #[arg(value_name = "NAME")]
        name: Option<String>,
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
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Parse { name }) => commands::parse_tokens(&cli.paths.to_config(name.as_deref())),
        Some(Command::Classify { names }) => commands::classify_names(&names),
        Some(Command::Roundtrip { name }) => commands::roundtrip(&cli.paths.to_config(name.as_deref())),
        None => commands::parse_tokens(&cli.paths.to_config(None)),
    }
}

// ============================================================================
// Tests
// ============================================================================
