//! Token types for the lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators; the id carries its family (relational, additive, ...)
//! - `Punctuation(PunctuationId)` for delimiters and separators, including the automatic `;`
//!
//! ## Notes
//! - The payload shape is fully determined by the variant: identifiers carry their name, literals carry a
//!   [`Constant`], everything else carries an id.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use gofront_core::lang::keywords::{self, KeywordId};
use gofront_core::lang::operators::{self, OperatorId};
use gofront_core::lang::punctuation::{self, PunctuationId};

use crate::literal::Constant;
use crate::location::Location;

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    Literal(Constant),

    // ========== Special ==========
    Eof,
}

impl fmt::Display for TokenKind {
    /// Short description used in "found ..." diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "`{}`", keywords::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "`{}`", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "`{}`", punctuation::as_str(*id)),
            TokenKind::Ident(name) => write!(f, "identifier `{name}`"),
            TokenKind::Literal(value) => write!(f, "{} literal", value.kind()),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

/// A token with its kind and source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub loc: Location,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, loc: Location) -> Self {
        Self { kind, loc }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
