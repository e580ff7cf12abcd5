#![forbid(unsafe_code)]
//! gofront: lexical and syntactic front end for a Go-like language
//!
//! The work happens in two member crates: `gofront_core` holds the language vocabulary (keywords, operators,
//! punctuation) and `gofront_syntax` holds the byte source, rune decoder, lexer, parser and syntax tree. This crate
//! adds the developer CLI on top.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: registry lookups that cannot fail (every id has a table row) use `.expect`.

pub mod cli;

pub use gofront_syntax::{ast, diagnostics, lexer, parser, source};
pub use gofront_syntax::{Diagnostic, Diagnostics, Parsed, parse_file, parse_source};
