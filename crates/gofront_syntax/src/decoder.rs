//! Rune decoder: lazy UTF-8 decoding with validation and line tracking.
//!
//! The decoder sits between a [`ByteSource`] and the lexer. Code points are decoded on demand into a small lookahead
//! queue, so memory use is bounded by the deepest `peek` the lexer asks for.
//!
//! ## Validation
//!
//! Decoding is a three-state automaton:
//!
//! ```text
//! [Leading] --ASCII--------------------------------> [Done]
//! [Leading] --lead byte (2/3/4-byte form)--> [Continuation x1..3] --all read--> [Done]
//! ```
//!
//! Truncated sequences, overlong encodings, surrogate halves and code points above U+10FFFF are rejected. On any
//! violation an [`DiagnosticKind::IllegalUtf8`] is reported, bytes are discarded until a legal leading byte
//! reappears, and decoding resumes. The decoder never stops producing output before end of input.

use std::collections::VecDeque;

use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::location::{ANONYMOUS_PATH, Location, PathInterner, SourcePath};
use crate::source::ByteSource;

const MAX_CODE_POINT: u32 = 0x10_FFFF;
const SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Automaton state while decoding one code point.
enum State {
    Leading,
    Continuation { remaining: u8, value: u32, min: u32 },
    Done(u32),
}

/// Decodes a byte stream into runes.
pub struct Decoder<S> {
    source: S,
    path: SourcePath,
    /// Line of the next rune to be consumed.
    line: u32,
    /// Line of the next byte to be decoded (ahead of `line` when runes are queued).
    scan_line: u32,
    lookahead: VecDeque<char>,
    at_start: bool,
}

impl<S: ByteSource> Decoder<S> {
    /// Create a decoder, interning the source path.
    pub fn new(source: S, interner: &mut PathInterner) -> Self {
        let path = interner.intern(source.path().unwrap_or(ANONYMOUS_PATH));
        Self {
            source,
            path,
            line: 1,
            scan_line: 1,
            lookahead: VecDeque::new(),
            at_start: true,
        }
    }

    /// Return the rune `offset` positions ahead without consuming it.
    pub fn peek(&mut self, offset: usize, sink: &mut impl DiagnosticSink) -> Option<char> {
        while self.lookahead.len() <= offset {
            let c = self.decode(sink)?;
            self.lookahead.push_back(c);
        }
        self.lookahead.get(offset).copied()
    }

    /// Remove and return the next rune.
    pub fn consume(&mut self, sink: &mut impl DiagnosticSink) -> Option<char> {
        let c = match self.lookahead.pop_front() {
            Some(c) => c,
            None => self.decode(sink)?,
        };
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Location of the next rune to be consumed.
    pub fn location(&self) -> Location {
        Location::new(self.path.clone(), self.line)
    }

    fn decode(&mut self, sink: &mut impl DiagnosticSink) -> Option<char> {
        loop {
            let c = self.decode_one(sink)?;
            if std::mem::take(&mut self.at_start) && c == BYTE_ORDER_MARK {
                continue;
            }
            if c == '\n' {
                self.scan_line += 1;
            }
            return Some(c);
        }
    }

    fn decode_one(&mut self, sink: &mut impl DiagnosticSink) -> Option<char> {
        let mut state = State::Leading;
        loop {
            state = match state {
                State::Leading => {
                    let b = self.source.consume()?;
                    match b {
                        0x00..=0x7F => State::Done(u32::from(b)),
                        0xC0..=0xDF => State::Continuation {
                            remaining: 1,
                            value: u32::from(b & 0x1F),
                            min: 0x80,
                        },
                        0xE0..=0xEF => State::Continuation {
                            remaining: 2,
                            value: u32::from(b & 0x0F),
                            min: 0x800,
                        },
                        0xF0..=0xF7 => State::Continuation {
                            remaining: 3,
                            value: u32::from(b & 0x07),
                            min: 0x1_0000,
                        },
                        _ => {
                            self.illegal(sink);
                            State::Leading
                        }
                    }
                }
                State::Continuation { remaining, value, min } => match self.source.peek(0) {
                    Some(b) if is_continuation(b) => {
                        self.source.consume();
                        let value = (value << 6) | u32::from(b & 0x3F);
                        if remaining == 1 {
                            if value < min || SURROGATES.contains(&value) || value > MAX_CODE_POINT {
                                self.illegal(sink);
                                State::Leading
                            } else {
                                State::Done(value)
                            }
                        } else {
                            State::Continuation {
                                remaining: remaining - 1,
                                value,
                                min,
                            }
                        }
                    }
                    // Truncated: leave the offending byte for the next leading-byte read.
                    _ => {
                        self.illegal(sink);
                        State::Leading
                    }
                },
                State::Done(value) => return char::from_u32(value),
            };
        }
    }

    /// Report an illegal sequence and skip to the next legal leading byte.
    fn illegal(&mut self, sink: &mut impl DiagnosticSink) {
        sink.report(Diagnostic::new(
            DiagnosticKind::IllegalUtf8,
            Location::new(self.path.clone(), self.scan_line),
        ));
        let mut skipped = 0usize;
        while let Some(b) = self.source.peek(0) {
            if is_leading(b) {
                break;
            }
            self.source.consume();
            skipped += 1;
        }
        tracing::debug!(line = self.scan_line, skipped, "resynchronized after illegal UTF-8");
    }
}

fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

fn is_leading(b: u8) -> bool {
    b < 0x80 || (0xC0..=0xF7).contains(&b)
}
