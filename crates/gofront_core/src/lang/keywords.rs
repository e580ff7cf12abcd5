//! Define the reserved keyword vocabulary.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, categories, and whether the keyword may end a
//! statement (which drives automatic terminator insertion in the lexer).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This registry is intentionally **pure** (no AST/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use gofront_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("range"), Some(KeywordId::Range));
//! assert!(keywords::ends_statement(KeywordId::Return));
//! assert!(!keywords::ends_statement(KeywordId::If));
//! ```

/// Stable identifier for every reserved keyword.
///
/// ## Notes
/// - The canonical spelling is accessible via [`as_str`].
/// - The discriminant order is relied upon by token bitsets; keep the enum at no more than 32 variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeywordId {
    // Control flow / statements
    Break,
    Case,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Go,
    Goto,
    If,
    Range,
    Return,
    Select,
    Switch,

    // Declarations
    Const,
    Func,
    Import,
    Package,
    Type,
    Var,

    // Type constructors
    Chan,
    Interface,
    Map,
    Struct,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Declaration,
    TypeConstructor,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    /// `true` if a newline directly after this keyword terminates the statement.
    pub ends_statement: bool,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow / statements
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow, true),
    info(KeywordId::Case, "case", KeywordCategory::ControlFlow, false),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow, true),
    info(KeywordId::Default, "default", KeywordCategory::ControlFlow, false),
    info(KeywordId::Defer, "defer", KeywordCategory::ControlFlow, false),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow, false),
    info(KeywordId::Fallthrough, "fallthrough", KeywordCategory::ControlFlow, true),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow, false),
    info(KeywordId::Go, "go", KeywordCategory::ControlFlow, false),
    info(KeywordId::Goto, "goto", KeywordCategory::ControlFlow, false),
    info(KeywordId::If, "if", KeywordCategory::ControlFlow, false),
    info(KeywordId::Range, "range", KeywordCategory::ControlFlow, false),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow, true),
    info(KeywordId::Select, "select", KeywordCategory::ControlFlow, false),
    info(KeywordId::Switch, "switch", KeywordCategory::ControlFlow, false),
    // Declarations
    info(KeywordId::Const, "const", KeywordCategory::Declaration, false),
    info(KeywordId::Func, "func", KeywordCategory::Declaration, false),
    info(KeywordId::Import, "import", KeywordCategory::Declaration, false),
    info(KeywordId::Package, "package", KeywordCategory::Declaration, false),
    info(KeywordId::Type, "type", KeywordCategory::Declaration, false),
    info(KeywordId::Var, "var", KeywordCategory::Declaration, false),
    // Type constructors
    info(KeywordId::Chan, "chan", KeywordCategory::TypeConstructor, false),
    info(KeywordId::Interface, "interface", KeywordCategory::TypeConstructor, false),
    info(KeywordId::Map, "map", KeywordCategory::TypeConstructor, false),
    info(KeywordId::Struct, "struct", KeywordCategory::TypeConstructor, false),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling of the keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` if a newline after this keyword triggers terminator insertion.
pub fn ends_statement(id: KeywordId) -> bool {
    info_for(id).ends_statement
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved, `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory, ends_statement: bool) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        ends_statement,
    }
}
