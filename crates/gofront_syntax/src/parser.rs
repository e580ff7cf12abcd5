//! Recursive-descent parser.
//!
//! Pulls tokens from a [`Lexer`] with bounded lookahead and builds a [`SourceFile`]. Errors never stop the parse:
//! each one is reported once, the parser resynchronizes on a token set chosen by the enclosing construct, and a
//! `Bad` placeholder stands in for whatever could not be parsed.
//!
//! ## Examples
//!
//! ```rust
//! use gofront_syntax::ast::{Decl, Spec};
//! use gofront_syntax::parser;
//!
//! let parsed = parser::parse_source("package p\n\nconst Pi = 3.14159\n");
//! assert!(parsed.diagnostics.is_empty());
//! assert!(matches!(&parsed.file.decls[0].node, Decl::Gen(g) if matches!(g.specs[0].node, Spec::Value(_))));
//! ```

use gofront_core::lang::keywords::KeywordId;
use gofront_core::lang::operators::{self, OperatorFamily, OperatorId};
use gofront_core::lang::punctuation::PunctuationId;

use crate::ast::*;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::location::{ANONYMOUS_PATH, PathInterner};
use crate::source::{ByteSource, MemorySource};
use crate::token_helpers::TokenSet;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
