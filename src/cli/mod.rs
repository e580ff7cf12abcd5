//! CLI module for the gofront front end
//!
//! ## Commands
//!
//! - `tokens <file>` - Dump the token stream with line numbers
//! - `parse <file> [--quiet]` - Dump the syntax tree
//! - `check <file>...` - Parse several files concurrently and report diagnostics
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

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use gofront_syntax::source::SourceError;

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
/// The entry point prints the message and exits with [`CliError::exit_code`].
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(code(gofront::cli::source))]
    Source(#[from] SourceError),

    #[error("worker thread for {path} panicked")]
    #[diagnostic(code(gofront::cli::worker))]
    Worker { path: String },
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Lexer and parser front end for a Go-like language
#[derive(Parser, Debug)]
#[command(name = "gofront")]
#[command(version = VERSION)]
#[command(about = "Lexer and parser front end for a Go-like language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dump the token stream of a source file
    Tokens {
        /// Source file to scan
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse a source file and dump its syntax tree
    Parse {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Only report diagnostics
        #[arg(short, long)]
        quiet: bool,
    },

    /// Parse source files concurrently and report diagnostics
    Check {
        /// Source files to check
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code != ExitCode::SUCCESS {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            let code = e.exit_code();
            eprintln!("{:?}", miette::Report::new(e));
            process::exit(code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Tokens { file } => commands::tokens(&file),
        Command::Parse { file, quiet } => commands::parse(&file, quiet),
        Command::Check { files } => commands::check(&files),
    }
}

// ============================================================================
// Tests
// ============================================================================
