//! Rune and string literal scanning.
//!
//! Interpreted strings and rune literals share one escape decoder. Octal (`\NNN`) and hex (`\xNN`) escapes denote
//! single bytes; `\u` and `\U` escapes denote code points and are validated against the Unicode range.

use num_bigint::BigInt;

use super::{Lexer, TokenKind};
use crate::diagnostics::DiagnosticKind;
use crate::literal::Constant;
use crate::location::Location;
use crate::source::ByteSource;

/// One decoded escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Escaped {
    Char(char),
    Byte(u8),
}

impl<S: ByteSource> Lexer<S> {
    /// Decode the escape following a consumed `\`.
    ///
    /// ## Parameters
    /// - `quote`: the enclosing literal's delimiter; only that quote may be escaped.
    ///
    /// ## Returns
    /// `None` after reporting [`DiagnosticKind::IllegalEscape`].
    fn scan_escape(&mut self, quote: char) -> Option<Escaped> {
        let loc = self.location();
        let c = match self.peek_char(0) {
            Some(c) if c != '\n' => c,
            _ => {
                self.report(DiagnosticKind::IllegalEscape, loc);
                return None;
            }
        };
        let simple = match c {
            'a' => Some('\u{07}'),
            'b' => Some('\u{08}'),
            'f' => Some('\u{0C}'),
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            'v' => Some('\u{0B}'),
            '\\' => Some('\\'),
            '\'' | '"' if c == quote => Some(c),
            _ => None,
        };
        if let Some(ch) = simple {
            self.bump();
            return Some(Escaped::Char(ch));
        }

        let (digits, radix, max) = match c {
            '0'..='7' => (3, 8, 255),
            'x' => (2, 16, 255),
            'u' => (4, 16, char::MAX as u32),
            'U' => (8, 16, char::MAX as u32),
            _ => {
                self.bump();
                self.report(DiagnosticKind::IllegalEscape, loc);
                return None;
            }
        };
        if radix == 16 {
            self.bump();
        }

        let mut value: u32 = 0;
        for _ in 0..digits {
            match self.peek_char(0).and_then(|d| d.to_digit(radix)) {
                Some(d) => {
                    self.bump();
                    value = value * radix + d;
                }
                None => {
                    self.report(DiagnosticKind::IllegalEscape, loc);
                    return None;
                }
            }
        }
        if value > max {
            self.report(DiagnosticKind::IllegalEscape, loc);
            return None;
        }
        match c {
            'u' | 'U' => match char::from_u32(value) {
                Some(ch) => Some(Escaped::Char(ch)),
                None => {
                    self.report(DiagnosticKind::IllegalEscape, loc);
                    None
                }
            },
            _ => u8::try_from(value).ok().map(Escaped::Byte),
        }
    }

    /// Scan `'x'` after seeing the opening quote.
    pub(super) fn scan_rune(&mut self, loc: Location) -> TokenKind {
        self.bump();
        let mut first: Option<(u32, bool)> = None;
        let mut count = 0usize;
        loop {
            match self.peek_char(0) {
                None | Some('\n') => {
                    self.report(DiagnosticKind::UnterminatedLiteral { what: "rune" }, loc.clone());
                    break;
                }
                Some('\'') => {
                    self.bump();
                    if count == 0 {
                        self.report(
                            DiagnosticKind::MalformedRune {
                                reason: "empty rune literal",
                            },
                            loc.clone(),
                        );
                    } else if count > 1 {
                        self.report(
                            DiagnosticKind::MalformedRune {
                                reason: "more than one character in rune literal",
                            },
                            loc.clone(),
                        );
                    }
                    break;
                }
                Some('\\') => {
                    self.bump();
                    let decoded = match self.scan_escape('\'') {
                        Some(Escaped::Char(c)) => Some((c as u32, false)),
                        Some(Escaped::Byte(b)) => Some((u32::from(b), true)),
                        None => None,
                    };
                    if count == 0 {
                        first = decoded;
                    }
                    count += 1;
                }
                Some(c) => {
                    self.bump();
                    if count == 0 {
                        first = Some((c as u32, false));
                    }
                    count += 1;
                }
            }
        }
        let (value, byte_escape) = first.unwrap_or((0, false));
        TokenKind::Literal(Constant::Rune {
            value: BigInt::from(value),
            byte_escape,
        })
    }

    /// Scan `"..."` after seeing the opening quote.
    pub(super) fn scan_string(&mut self, loc: Location) -> TokenKind {
        self.bump();
        let mut bytes = Vec::new();
        loop {
            match self.peek_char(0) {
                None | Some('\n') => {
                    self.report(DiagnosticKind::UnterminatedLiteral { what: "string" }, loc);
                    break;
                }
                Some('"') => {
                    self.bump();
                    break;
                }
                Some('\\') => {
                    self.bump();
                    match self.scan_escape('"') {
                        Some(Escaped::Char(c)) => push_char(&mut bytes, c),
                        Some(Escaped::Byte(b)) => bytes.push(b),
                        None => {}
                    }
                }
                Some(c) => {
                    self.bump();
                    push_char(&mut bytes, c);
                }
            }
        }
        TokenKind::Literal(Constant::String(bytes))
    }

    /// Scan `` `...` `` after seeing the opening backquote. Carriage returns are dropped.
    pub(super) fn scan_raw_string(&mut self, loc: Location) -> TokenKind {
        self.bump();
        let mut bytes = Vec::new();
        loop {
            match self.bump() {
                None => {
                    self.report(DiagnosticKind::UnterminatedLiteral { what: "raw string" }, loc);
                    break;
                }
                Some('`') => break,
                Some('\r') => {}
                Some(c) => push_char(&mut bytes, c),
            }
        }
        TokenKind::Literal(Constant::String(bytes))
    }
}

fn push_char(bytes: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
