//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy to work with ID-based
//! tokens. [`TokenSet`] is the bitset the parser hands to its resynchronization routine.

use std::fmt;

use gofront_core::lang::keywords::KeywordId;
use gofront_core::lang::operators::OperatorId;
use gofront_core::lang::punctuation::PunctuationId;

use crate::lexer::{Token, TokenKind};

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    pub fn is_ident(&self) -> bool {
        matches!(self, TokenKind::Ident(_))
    }

    /// Return `true` for string literals (import paths, struct tags).
    pub fn is_string_literal(&self) -> bool {
        matches!(self, TokenKind::Literal(crate::literal::Constant::String(_)))
    }

    /// Return `true` if both kinds are the same token, ignoring identifier and literal payloads.
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        match (self, other) {
            (TokenKind::Keyword(a), TokenKind::Keyword(b)) => a == b,
            (TokenKind::Operator(a), TokenKind::Operator(b)) => a == b,
            (TokenKind::Punctuation(a), TokenKind::Punctuation(b)) => a == b,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }
}

// ============================================================================
// TOKEN SETS
// ============================================================================

const OPERATOR_BASE: u32 = 32;
const PUNCTUATION_BASE: u32 = 96;
const IDENT_SLOT: u32 = 112;
const LITERAL_SLOT: u32 = 113;
const EOF_SLOT: u32 = 114;

/// A set of token kinds, one bit per kind.
///
/// ## Notes
/// - Slot layout: keywords `0..32`, operators `32..96`, punctuation `96..112`, then identifier, literal and end of
///   input. The registry guardrail tests keep every id inside its range.
/// - Identifier and literal membership ignores the payload.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TokenSet(u128);

impl TokenSet {
    pub const IDENT: TokenSet = TokenSet(1 << IDENT_SLOT);
    pub const LITERAL: TokenSet = TokenSet(1 << LITERAL_SLOT);
    pub const EOF: TokenSet = TokenSet(1 << EOF_SLOT);

    pub const fn keywords(ids: &[KeywordId]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < ids.len() {
            bits |= 1 << (ids[i] as u32);
            i += 1;
        }
        TokenSet(bits)
    }

    pub const fn operators(ids: &[OperatorId]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < ids.len() {
            bits |= 1 << (OPERATOR_BASE + ids[i] as u32);
            i += 1;
        }
        TokenSet(bits)
    }

    pub const fn punctuation(ids: &[PunctuationId]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < ids.len() {
            bits |= 1 << (PUNCTUATION_BASE + ids[i] as u32);
            i += 1;
        }
        TokenSet(bits)
    }

    pub const fn union(self, other: TokenSet) -> Self {
        TokenSet(self.0 | other.0)
    }

    pub fn contains(&self, kind: &TokenKind) -> bool {
        self.0 & (1 << slot(kind)) != 0
    }
}

fn slot(kind: &TokenKind) -> u32 {
    match kind {
        TokenKind::Keyword(id) => *id as u32,
        TokenKind::Operator(id) => OPERATOR_BASE + *id as u32,
        TokenKind::Punctuation(id) => PUNCTUATION_BASE + *id as u32,
        TokenKind::Ident(_) => IDENT_SLOT,
        TokenKind::Literal(_) => LITERAL_SLOT,
        TokenKind::Eof => EOF_SLOT,
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenSet({:#034x})", self.0)
    }
}
