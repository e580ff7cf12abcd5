//! Structured diagnostics for the lexer and parser.
//!
//! The front end never renders final text. It builds [`Diagnostic`] values (a [`DiagnosticKind`] plus a
//! [`Location`]) and appends them, in discovery order, to a [`DiagnosticSink`]. Rendering is left to the caller;
//! `DiagnosticKind` derives `miette::Diagnostic` so callers can hand values straight to a `miette` report handler.
//!
//! ## Notes
//! - Every diagnostic is recoverable. The diagnostic count is the only failure signal a parse exposes.

use crate::location::Location;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum DiagnosticKind {
    // ========== Lexical ==========
    #[error("illegal UTF-8 sequence")]
    #[diagnostic(code(gofront::lex::illegal_utf8))]
    IllegalUtf8,

    #[error("illegal character {0:?}")]
    #[diagnostic(code(gofront::lex::illegal_character))]
    IllegalCharacter(char),

    #[error("comment not terminated")]
    #[diagnostic(code(gofront::lex::unterminated_comment))]
    UnterminatedComment,

    #[error("{what} literal not terminated")]
    #[diagnostic(code(gofront::lex::unterminated_literal))]
    UnterminatedLiteral { what: &'static str },

    #[error("malformed numeric literal: {reason}")]
    #[diagnostic(code(gofront::lex::malformed_number))]
    MalformedNumber { reason: &'static str },

    #[error("malformed rune literal: {reason}")]
    #[diagnostic(code(gofront::lex::malformed_rune))]
    MalformedRune { reason: &'static str },

    #[error("illegal escape sequence")]
    #[diagnostic(code(gofront::lex::illegal_escape), help("valid escapes are \\a \\b \\f \\n \\r \\t \\v \\\\ \\NNN \\xNN \\uNNNN \\UNNNNNNNN"))]
    IllegalEscape,

    #[error("extra characters after {after}")]
    #[diagnostic(code(gofront::lex::trailing_characters))]
    TrailingCharacters { after: &'static str },

    #[error("floating-point constant overflow")]
    #[diagnostic(code(gofront::lex::float_overflow))]
    FloatOverflow,

    // ========== Syntactic ==========
    #[error("expected {expected}, found {found}")]
    #[diagnostic(code(gofront::parse::expected_token))]
    ExpectedToken { expected: String, found: String },

    #[error("expected declaration, found {found}")]
    #[diagnostic(code(gofront::parse::expected_declaration))]
    ExpectedDeclaration { found: String },

    #[error("expected field declaration, found {found}")]
    #[diagnostic(code(gofront::parse::expected_field))]
    ExpectedField { found: String },

    #[error("expected method or embedded interface, found {found}")]
    #[diagnostic(code(gofront::parse::expected_method_spec))]
    ExpectedMethodSpec { found: String },

    #[error("expected type, found {found}")]
    #[diagnostic(code(gofront::parse::expected_type))]
    ExpectedType { found: String },

    #[error("expected operand, found {found}")]
    #[diagnostic(code(gofront::parse::expected_operand))]
    ExpectedOperand { found: String },

    #[error("expected identifier, found {found}")]
    #[diagnostic(code(gofront::parse::expected_identifier))]
    ExpectedIdentifier { found: String },

    #[error("illegal variadic parameter")]
    #[diagnostic(code(gofront::parse::illegal_variadic), help("only the final parameter may be declared with `...`"))]
    IllegalVariadic,

    #[error("{context}: expected {expected} expression(s), found {found}")]
    #[diagnostic(code(gofront::parse::arity_mismatch))]
    ArityMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("malformed slice expression: {reason}")]
    #[diagnostic(code(gofront::parse::malformed_slice))]
    MalformedSlice { reason: &'static str },
}

impl DiagnosticKind {
    /// Return `true` for diagnostics produced while scanning (decoder or lexer).
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            DiagnosticKind::IllegalUtf8
                | DiagnosticKind::IllegalCharacter(_)
                | DiagnosticKind::UnterminatedComment
                | DiagnosticKind::UnterminatedLiteral { .. }
                | DiagnosticKind::MalformedNumber { .. }
                | DiagnosticKind::MalformedRune { .. }
                | DiagnosticKind::IllegalEscape
                | DiagnosticKind::TrailingCharacters { .. }
                | DiagnosticKind::FloatOverflow
        )
    }
}

/// A diagnostic value: kind plus location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
#[error("{location}: {kind}")]
#[diagnostic(forward(kind))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub location: Location,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, location: Location) -> Self {
        Self { kind, location }
    }
}

/// Destination for diagnostics.
///
/// ## Notes
/// - Implementations must preserve the order of `report` calls.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);

    /// Number of diagnostics reported so far.
    fn count(&self) -> usize;
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }

    fn count(&self) -> usize {
        self.len()
    }
}

/// Default in-memory accumulator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::trace!(location = %diagnostic.location, kind = %diagnostic.kind, "diagnostic");
        self.items.push(diagnostic);
    }

    fn count(&self) -> usize {
        self.items.len()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
