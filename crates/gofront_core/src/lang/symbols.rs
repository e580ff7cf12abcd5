//! Fixed symbol tables for longest-match scanning.
//!
//! The lexer recognizes operators and punctuation by table lookup: it tries the next three characters, then two,
//! then one, against the spellings registered in [`crate::lang::operators`] and [`crate::lang::punctuation`]. The
//! first hit is the longest valid symbol.
//!
//! ## Examples
//! ```rust
//! use gofront_core::lang::operators::OperatorId;
//! use gofront_core::lang::symbols::{self, Symbol};
//!
//! assert_eq!(symbols::longest_match("<<=x"), Some((Symbol::Operator(OperatorId::ShlAssign), 3)));
//! assert_eq!(symbols::longest_match("<-ch"), Some((Symbol::Operator(OperatorId::Arrow), 2)));
//! assert_eq!(symbols::longest_match("@"), None);
//! ```

use super::operators::{self, OperatorId};
use super::punctuation::{self, PunctuationId};

/// Length of the longest operator or punctuation spelling.
pub const MAX_SYMBOL_LEN: usize = 3;

/// A fixed-spelling token: either an operator or a punctuation mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Operator(OperatorId),
    Punctuation(PunctuationId),
}

/// Look up an exact spelling in the symbol tables.
pub fn lookup(spelling: &str) -> Option<Symbol> {
    operators::from_str(spelling)
        .map(Symbol::Operator)
        .or_else(|| punctuation::from_str(spelling).map(Symbol::Punctuation))
}

/// Return the longest symbol that prefixes `text`, with its length in characters.
///
/// ## Notes
/// - Only the first [`MAX_SYMBOL_LEN`] characters of `text` are examined.
pub fn longest_match(text: &str) -> Option<(Symbol, usize)> {
    let chars: Vec<char> = text.chars().take(MAX_SYMBOL_LEN).collect();
    (1..=chars.len()).rev().find_map(|len| {
        let candidate: String = chars[..len].iter().collect();
        lookup(&candidate).map(|sym| (sym, len))
    })
}

/// Iterate over every symbol spelling of exactly `len` characters.
pub fn spellings_of_len(len: usize) -> impl Iterator<Item = (&'static str, Symbol)> {
    let ops = operators::OPERATORS
        .iter()
        .map(|o| (o.spelling, Symbol::Operator(o.id)));
    let puncts = punctuation::PUNCTUATION
        .iter()
        .map(|p| (p.canonical, Symbol::Punctuation(p.id)));
    ops.chain(puncts).filter(move |(s, _)| s.chars().count() == len)
}
