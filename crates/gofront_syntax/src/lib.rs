//! Syntax front end for a Go-like language: byte source, rune decoder, lexer, parser, syntax tree, diagnostics.
//!
//! Bytes flow upward through four layers. A [`source::ByteSource`] supplies bytes, the [`decoder::Decoder`] turns
//! them into runes and tracks lines, the [`lexer::Lexer`] scans tokens and inserts `;` terminators, and the
//! [`parser`] builds an [`ast::SourceFile`].
//!
//! ## Notes
//! - This crate is “syntax-only”: no name resolution, no type checking, no constant folding.
//! - A parse never fails. Malformed input yields placeholder nodes plus [`diagnostics::Diagnostic`] values; the
//!   diagnostic count is the failure signal.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `gofront_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use gofront_syntax::parser;
//!
//! let parsed = parser::parse_source("package main\n\nfunc main() {}\n");
//! assert!(parsed.diagnostics.is_empty());
//! assert_eq!(parsed.file.package.node, "main");
//! assert_eq!(parsed.file.decls.len(), 1);
//! ```

pub mod ast;
pub mod decoder;
pub mod diagnostics;
pub mod lexer;
pub mod literal;
pub mod location;
pub mod parser;
pub mod source;
pub mod token_helpers;

pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, Diagnostics};
pub use location::{Located, Location, PathInterner};
pub use parser::{Parsed, parse_file, parse_source};
