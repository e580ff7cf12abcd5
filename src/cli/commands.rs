//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::{Path, PathBuf};
use std::thread;

use gofront_syntax::diagnostics::Diagnostics;
use gofront_syntax::lexer::{self, Lexer, Token, TokenKind};
use gofront_syntax::location::PathInterner;
use gofront_syntax::parser::{self, Parsed};
use gofront_syntax::source::{FileSource, SourceError};

use super::{CliError, CliResult, ExitCode};

// ============================================================================
// Commands
// ============================================================================

/// Scan `path` and print one line per token.
pub fn tokens(path: &Path) -> CliResult<ExitCode> {
    let source = FileSource::open(path)?;
    let mut interner = PathInterner::new();
    let (tokens, diagnostics) = lexer::tokenize(Lexer::new(source, &mut interner));
    print!("{}", render_tokens(&tokens));
    Ok(report(&diagnostics))
}

/// Parse `path` and print the syntax tree unless `quiet`.
pub fn parse(path: &Path, quiet: bool) -> CliResult<ExitCode> {
    let source = FileSource::open(path)?;
    let mut interner = PathInterner::new();
    let parsed = parser::parse_file(source, &mut interner);
    if !quiet {
        println!("{:#?}", parsed.file);
    }
    Ok(report(&parsed.diagnostics))
}

/// Parse every file on its own thread and print a summary line per file.
///
/// ## Notes
/// - Each worker owns its source, path table and diagnostics; nothing is shared between parses.
/// - Results are reported in argument order regardless of completion order.
pub fn check(paths: &[PathBuf]) -> CliResult<ExitCode> {
    let workers: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| {
            let handle = thread::spawn({
                let path = path.clone();
                move || parse_path(&path)
            });
            (path, handle)
        })
        .collect();

    let mut exit = ExitCode::SUCCESS;
    for (path, handle) in workers {
        let shown = path.display().to_string();
        let parsed = handle.join().map_err(|_| CliError::Worker { path: shown.clone() })??;
        tracing::debug!(path = %shown, diagnostics = parsed.diagnostics.len(), "checked");
        if report(&parsed.diagnostics) != ExitCode::SUCCESS {
            exit = ExitCode::FAILURE;
        }
        println!("{}", summary_line(&shown, &parsed));
    }
    Ok(exit)
}

fn parse_path(path: &Path) -> Result<Parsed, SourceError> {
    let source = FileSource::open(path)?;
    let mut interner = PathInterner::new();
    Ok(parser::parse_file(source, &mut interner))
}

// ============================================================================
// Rendering
// ============================================================================

/// One line per token: location, kind and, for literals, the value.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| match &token.kind {
            TokenKind::Literal(value) => format!("{}\t{}\t{}\n", token.loc, token.kind, value),
            kind => format!("{}\t{}\n", token.loc, kind),
        })
        .collect()
}

/// `path: ok`, or the diagnostic count split into lexical and syntactic.
pub fn summary_line(path: &str, parsed: &Parsed) -> String {
    let total = parsed.diagnostics.len();
    if total == 0 {
        return format!("{path}: ok");
    }
    let lexical = parsed.diagnostics.iter().filter(|d| d.kind.is_lexical()).count();
    let noun = if total == 1 { "diagnostic" } else { "diagnostics" };
    format!("{path}: {total} {noun} ({lexical} lexical, {} syntactic)", total - lexical)
}

/// Render diagnostics to stderr and map them to an exit code.
fn report(diagnostics: &Diagnostics) -> ExitCode {
    for diagnostic in diagnostics.iter() {
        eprintln!("{:?}", miette::Report::new(diagnostic.clone()));
    }
    if diagnostics.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
