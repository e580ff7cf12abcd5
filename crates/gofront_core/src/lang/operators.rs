//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with basic metadata: the operator family (which doubles as
//! the precedence level for binary operators), whether the operator may also appear in prefix position, and whether
//! it can end a statement.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Binary precedence follows the family: `||` < `&&` < relational < additive < multiplicative.
//!
//! ## Examples
//! ```rust
//! use gofront_core::lang::operators::{self, OperatorFamily, OperatorId};
//!
//! assert_eq!(operators::from_str("&^"), Some(OperatorId::AndNot));
//! assert_eq!(operators::family(OperatorId::AndNot), OperatorFamily::Multiplicative);
//! assert_eq!(operators::binary_precedence(OperatorId::Add), Some(4));
//! ```

/// Closed classification of operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorFamily {
    /// `||`
    LogicalOr,
    /// `&&`
    LogicalAnd,
    /// `==`, `!=`, `<`, `<=`, `>`, `>=`
    Relational,
    /// `+`, `-`, `|`, `^`
    Additive,
    /// `*`, `/`, `%`, `<<`, `>>`, `&`, `&^`
    Multiplicative,
    /// Prefix-only operators: `!`, `<-`
    Unary,
    /// `++`, `--`
    IncDec,
    /// `=`, `:=`, and the compound assignment operators
    Assignment,
}

/// Stable identifier for every operator.
///
/// ## Notes
/// - The discriminant order is relied upon by token bitsets; keep the enum at no more than 64 variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperatorId {
    // Logical
    LogOr,
    LogAnd,

    // Relational
    Eql,
    Neq,
    Lss,
    Leq,
    Gtr,
    Geq,

    // Additive
    Add,
    Sub,
    Or,
    Xor,

    // Multiplicative
    Mul,
    Quo,
    Rem,
    Shl,
    Shr,
    And,
    AndNot,

    // Prefix only
    Not,
    Arrow,

    // Increment / decrement
    Inc,
    Dec,

    // Assignment
    Assign,
    Define,
    AddAssign,
    SubAssign,
    MulAssign,
    QuoAssign,
    RemAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    ShlAssign,
    ShrAssign,
    AndNotAssign,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub family: OperatorFamily,
    /// `true` if the operator may also be used in prefix position (`-x`, `*p`, `<-ch`).
    pub prefix: bool,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Logical
    op(OperatorId::LogOr, "||", OperatorFamily::LogicalOr, false),
    op(OperatorId::LogAnd, "&&", OperatorFamily::LogicalAnd, false),
    // Relational
    op(OperatorId::Eql, "==", OperatorFamily::Relational, false),
    op(OperatorId::Neq, "!=", OperatorFamily::Relational, false),
    op(OperatorId::Lss, "<", OperatorFamily::Relational, false),
    op(OperatorId::Leq, "<=", OperatorFamily::Relational, false),
    op(OperatorId::Gtr, ">", OperatorFamily::Relational, false),
    op(OperatorId::Geq, ">=", OperatorFamily::Relational, false),
    // Additive
    op(OperatorId::Add, "+", OperatorFamily::Additive, true),
    op(OperatorId::Sub, "-", OperatorFamily::Additive, true),
    op(OperatorId::Or, "|", OperatorFamily::Additive, false),
    op(OperatorId::Xor, "^", OperatorFamily::Additive, true),
    // Multiplicative
    op(OperatorId::Mul, "*", OperatorFamily::Multiplicative, true),
    op(OperatorId::Quo, "/", OperatorFamily::Multiplicative, false),
    op(OperatorId::Rem, "%", OperatorFamily::Multiplicative, false),
    op(OperatorId::Shl, "<<", OperatorFamily::Multiplicative, false),
    op(OperatorId::Shr, ">>", OperatorFamily::Multiplicative, false),
    op(OperatorId::And, "&", OperatorFamily::Multiplicative, true),
    op(OperatorId::AndNot, "&^", OperatorFamily::Multiplicative, false),
    // Prefix only
    op(OperatorId::Not, "!", OperatorFamily::Unary, true),
    op(OperatorId::Arrow, "<-", OperatorFamily::Unary, true),
    // Increment / decrement
    op(OperatorId::Inc, "++", OperatorFamily::IncDec, false),
    op(OperatorId::Dec, "--", OperatorFamily::IncDec, false),
    // Assignment
    op(OperatorId::Assign, "=", OperatorFamily::Assignment, false),
    op(OperatorId::Define, ":=", OperatorFamily::Assignment, false),
    op(OperatorId::AddAssign, "+=", OperatorFamily::Assignment, false),
    op(OperatorId::SubAssign, "-=", OperatorFamily::Assignment, false),
    op(OperatorId::MulAssign, "*=", OperatorFamily::Assignment, false),
    op(OperatorId::QuoAssign, "/=", OperatorFamily::Assignment, false),
    op(OperatorId::RemAssign, "%=", OperatorFamily::Assignment, false),
    op(OperatorId::AndAssign, "&=", OperatorFamily::Assignment, false),
    op(OperatorId::OrAssign, "|=", OperatorFamily::Assignment, false),
    op(OperatorId::XorAssign, "^=", OperatorFamily::Assignment, false),
    op(OperatorId::ShlAssign, "<<=", OperatorFamily::Assignment, false),
    op(OperatorId::ShrAssign, ">>=", OperatorFamily::Assignment, false),
    op(OperatorId::AndNotAssign, "&^=", OperatorFamily::Assignment, false),
];

/// Return the spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the family of an operator.
pub fn family(id: OperatorId) -> OperatorFamily {
    info_for(id).family
}

/// Return `true` if the operator can be used in prefix position.
pub fn is_prefix(id: OperatorId) -> bool {
    info_for(id).prefix
}

/// Return the binary precedence of an operator (higher binds tighter), or `None` for non-binary operators.
pub fn binary_precedence(id: OperatorId) -> Option<u8> {
    match family(id) {
        OperatorFamily::LogicalOr => Some(1),
        OperatorFamily::LogicalAnd => Some(2),
        OperatorFamily::Relational => Some(3),
        OperatorFamily::Additive => Some(4),
        OperatorFamily::Multiplicative => Some(5),
        OperatorFamily::Unary | OperatorFamily::IncDec | OperatorFamily::Assignment => None,
    }
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, family: OperatorFamily, prefix: bool) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        family,
        prefix,
    }
}
