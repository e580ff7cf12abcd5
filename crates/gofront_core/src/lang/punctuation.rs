//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the lexer/parser: delimiters,
//! separators, and access markers.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use gofront_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("..."), Some(PunctuationId::Ellipsis));
//! assert_eq!(punctuation::as_str(PunctuationId::RBrace), "}");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,`, `;` and `:`.
    Separator,
    /// Access markers like `.`.
    Access,
    /// Misc markers like `...`.
    Marker,
}

/// Stable identifier for punctuation tokens.
///
/// ## Notes
/// - The discriminant order is relied upon by token bitsets; keep the enum at no more than 16 variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PunctuationId {
    // Separators
    Comma,
    Semicolon,
    Colon,

    // Access
    Dot,

    // Markers
    Ellipsis,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
    /// `true` if a newline directly after this token terminates the statement.
    pub ends_statement: bool,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator, false),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator, false),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator, false),
    info(PunctuationId::Dot, ".", PunctuationCategory::Access, false),
    info(PunctuationId::Ellipsis, "...", PunctuationCategory::Marker, false),
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter, false),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter, true),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter, false),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter, true),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter, false),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter, true),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return `true` if a newline after this token triggers terminator insertion.
pub fn ends_statement(id: PunctuationId) -> bool {
    info_for(id).ends_statement
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(
    id: PunctuationId,
    canonical: &'static str,
    category: PunctuationCategory,
    ends_statement: bool,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category,
        ends_statement,
    }
}
