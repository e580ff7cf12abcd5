//! Lexer: a buffered, lookahead-capable token stream.
//!
//! Handles tokenization including:
//! - Keywords and identifiers (Unicode letters, `_`, digits)
//! - Numeric literals in arbitrary precision (decimal, octal, hex, float, imaginary)
//! - Rune, interpreted string and raw string literals
//! - Operators and punctuation by longest match over the `gofront_core` symbol tables
//! - Automatic `;` insertion
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `numbers` - Numeric literal scanning and float forming
//! - `escapes` - Rune/string literal scanning and the shared escape decoder
//!
//! ## Notes
//! - The lexer owns the diagnostic accumulator for a parse. The decoder below reports into it through
//!   `&mut impl DiagnosticSink`, and the parser above reports through [`Lexer::report`].

mod escapes;
mod numbers;
pub mod tokens;

pub use numbers::MAX_DECIMAL_EXPONENT;
pub use tokens::{Token, TokenKind, keyword_id};

use std::collections::VecDeque;

use gofront_core::lang::keywords;
use gofront_core::lang::operators::{self, OperatorFamily};
use gofront_core::lang::punctuation::{self, PunctuationId};
use gofront_core::lang::symbols::{self, MAX_SYMBOL_LEN, Symbol};
use unicode_xid::UnicodeXID;

use crate::decoder::Decoder;
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, Diagnostics};
use crate::location::{Location, PathInterner};
use crate::source::{ByteSource, MemorySource};

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Terminator insertion (simplified):
//
// [emit ident/literal/`)`/`]`/`}`/`++`/`--`/break/...] → insert_semi = true
//                                       ↓
//                       see '\n' or EOF → emit `;`, insert_semi = false
//                                       ↓
//                       see '\n' again → skipped like any whitespace
// ============================================================================

/// Token stream over a [`ByteSource`].
///
/// Tokens are scanned on demand into a queue, so `peek(k)` never re-scans and memory stays bounded by the deepest
/// lookahead requested.
pub struct Lexer<S> {
    decoder: Decoder<S>,
    diagnostics: Diagnostics,
    queue: VecDeque<Token>,
    /// A newline or end of input at this point produces a `;`.
    insert_semi: bool,
}

impl<S: ByteSource> Lexer<S> {
    /// Create a lexer reading from `source`, interning its path in `interner`.
    pub fn new(source: S, interner: &mut PathInterner) -> Self {
        Self {
            decoder: Decoder::new(source, interner),
            diagnostics: Diagnostics::new(),
            queue: VecDeque::new(),
            insert_semi: false,
        }
    }

    /// Return the token `k` positions ahead without consuming it.
    ///
    /// ## Notes
    /// - Past the end of input every position holds an `Eof` token.
    pub fn peek(&mut self, k: usize) -> &Token {
        while self.queue.len() <= k {
            let token = self.scan();
            self.queue.push_back(token);
        }
        &self.queue[k]
    }

    /// Remove and return the next token.
    pub fn consume(&mut self) -> Token {
        match self.queue.pop_front() {
            Some(token) => token,
            None => self.scan(),
        }
    }

    /// Record a diagnostic in this stream's accumulator.
    pub fn report(&mut self, kind: DiagnosticKind, loc: Location) {
        self.diagnostics.report(Diagnostic::new(kind, loc));
    }

    /// Number of diagnostics recorded so far.
    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics.count()
    }

    /// Finish the stream, handing back every diagnostic recorded during the parse.
    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek_char(&mut self, offset: usize) -> Option<char> {
        self.decoder.peek(offset, &mut self.diagnostics)
    }

    fn bump(&mut self) -> Option<char> {
        self.decoder.consume(&mut self.diagnostics)
    }

    fn location(&self) -> Location {
        self.decoder.location()
    }

    /// Append characters to `buf` while `pred` holds.
    fn take_while(&mut self, buf: &mut String, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek_char(0) {
            if !pred(c) {
                break;
            }
            buf.push(c);
            self.bump();
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan(&mut self) -> Token {
        loop {
            let loc = self.location();
            let Some(c) = self.peek_char(0) else {
                if std::mem::take(&mut self.insert_semi) {
                    return self.semicolon(loc);
                }
                return Token::new(TokenKind::Eof, loc);
            };

            match c {
                '\n' => {
                    if std::mem::take(&mut self.insert_semi) {
                        return self.semicolon(loc);
                    }
                    self.bump();
                }
                ' ' | '\t' | '\r' => {
                    self.bump();
                }
                '/' if self.peek_char(1) == Some('/') => self.skip_line_comment(),
                '/' if self.peek_char(1) == Some('*') => {
                    let spans_newline = self.skip_block_comment(loc.clone());
                    if spans_newline && std::mem::take(&mut self.insert_semi) {
                        return self.semicolon(loc);
                    }
                }
                c if is_ident_start(c) => return self.scan_identifier(loc),
                '0'..='9' => {
                    let kind = self.scan_number();
                    return self.finish(kind, loc);
                }
                '.' if self.peek_char(1).is_some_and(|d| d.is_ascii_digit()) => {
                    let kind = self.scan_number();
                    return self.finish(kind, loc);
                }
                '"' => {
                    let kind = self.scan_string(loc.clone());
                    return self.finish(kind, loc);
                }
                '`' => {
                    let kind = self.scan_raw_string(loc.clone());
                    return self.finish(kind, loc);
                }
                '\'' => {
                    let kind = self.scan_rune(loc.clone());
                    return self.finish(kind, loc);
                }
                _ => {
                    if let Some(token) = self.scan_symbol(loc.clone()) {
                        return token;
                    }
                    self.bump();
                    self.report(DiagnosticKind::IllegalCharacter(c), loc);
                }
            }
        }
    }

    fn semicolon(&mut self, loc: Location) -> Token {
        Token::new(TokenKind::Punctuation(PunctuationId::Semicolon), loc)
    }

    /// Wrap a literal token kind, arming terminator insertion.
    fn finish(&mut self, kind: TokenKind, loc: Location) -> Token {
        self.insert_semi = true;
        Token::new(kind, loc)
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// Skip `// ...` up to, but not including, the newline.
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek_char(0) {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    /// Skip `/* ... */`. Returns `true` if the comment contained a newline.
    fn skip_block_comment(&mut self, start: Location) -> bool {
        self.bump();
        self.bump();
        let mut spans_newline = false;
        loop {
            match self.bump() {
                Some('*') if self.peek_char(0) == Some('/') => {
                    self.bump();
                    return spans_newline;
                }
                Some('\n') => spans_newline = true,
                Some(_) => {}
                None => {
                    self.report(DiagnosticKind::UnterminatedComment, start);
                    return spans_newline;
                }
            }
        }
    }

    // ========================================================================
    // Identifiers and symbols
    // ========================================================================

    fn scan_identifier(&mut self, loc: Location) -> Token {
        let mut name = String::new();
        self.take_while(&mut name, is_ident_continue);
        let kind = match keyword_id(&name) {
            Some(id) => {
                self.insert_semi = keywords::ends_statement(id);
                TokenKind::Keyword(id)
            }
            None => {
                self.insert_semi = true;
                TokenKind::Ident(name)
            }
        };
        Token::new(kind, loc)
    }

    /// Longest match against the operator and punctuation tables.
    fn scan_symbol(&mut self, loc: Location) -> Option<Token> {
        let text: String = (0..MAX_SYMBOL_LEN).map_while(|i| self.peek_char(i)).collect();
        let (symbol, len) = symbols::longest_match(&text)?;
        for _ in 0..len {
            self.bump();
        }
        let kind = match symbol {
            Symbol::Operator(id) => {
                self.insert_semi = operators::family(id) == OperatorFamily::IncDec;
                TokenKind::Operator(id)
            }
            Symbol::Punctuation(id) => {
                self.insert_semi = punctuation::ends_statement(id);
                TokenKind::Punctuation(id)
            }
        };
        Some(Token::new(kind, loc))
    }
}

fn is_ident_start(c: char) -> bool {
    c == '_' || UnicodeXID::is_xid_start(c)
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || UnicodeXID::is_xid_continue(c)
}

/// Tokenize `source` completely.
///
/// The returned stream always ends with exactly one [`TokenKind::Eof`] token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut interner = PathInterner::new();
    tokenize(Lexer::new(MemorySource::new(source), &mut interner))
}

/// Drain a lexer into a token vector.
pub fn tokenize<S: ByteSource>(mut lexer: Lexer<S>) -> (Vec<Token>, Diagnostics) {
    let mut tokens = Vec::new();
    loop {
        let token = lexer.consume();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    tracing::debug!(tokens = tokens.len(), diagnostics = lexer.diagnostic_count(), "lexed");
    (tokens, lexer.into_diagnostics())
}
