//! Provide the canonical language vocabulary for the gofront front end.
//!
//! This crate is intentionally small and dependency-free. It holds the registry tables that both the lexer and the
//! parser consult (reserved words, operators, punctuation), so that spellings and metadata live in exactly one place.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no syntax-tree types.
//! - Syntax rules are enforced by `gofront_syntax`; the registries only describe tokens.

pub mod lang;
