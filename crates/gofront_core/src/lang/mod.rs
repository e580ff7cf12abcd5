//! Language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators and punctuation.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer and parser. Callers work with
//! **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - [`symbols`] groups operator and punctuation spellings by length for longest-match scanning.
//!
//! ## Examples
//! ```rust
//! use gofront_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("func"), Some(KeywordId::Func));
//! assert_eq!(keywords::as_str(KeywordId::Func), "func");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod symbols;
