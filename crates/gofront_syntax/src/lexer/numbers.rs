//! Numeric literal scanning.
//!
//! Integers are parsed into exact big integers. Floats keep their decimal mantissa as a big integer and are formed
//! by scaling with an exact power of ten, so `0.1` is exactly one tenth rather than the nearest binary fraction.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::{Lexer, TokenKind, is_ident_continue};
use crate::diagnostics::DiagnosticKind;
use crate::literal::Constant;
use crate::location::Location;
use crate::source::ByteSource;

/// Largest decimal exponent (after folding in the fraction length) a float literal may carry.
///
/// Larger magnitudes report [`DiagnosticKind::FloatOverflow`] and yield zero.
pub const MAX_DECIMAL_EXPONENT: i64 = 65_536;

/// Signed exponent digits as written after `e`/`E`.
struct Exponent {
    negative: bool,
    digits: String,
}

impl<S: ByteSource> Lexer<S> {
    /// Scan a numeric literal starting at a digit or at `.` followed by a digit.
    pub(super) fn scan_number(&mut self) -> TokenKind {
        let loc = self.location();
        let is_hex = self.peek_char(0) == Some('0') && matches!(self.peek_char(1), Some('x' | 'X'));
        let value = if is_hex {
            self.scan_hex(loc.clone())
        } else {
            self.scan_decimal(loc.clone())
        };
        self.reject_trailing(loc);
        TokenKind::Literal(value)
    }

    fn scan_hex(&mut self, loc: Location) -> Constant {
        self.bump();
        self.bump();
        let mut digits = String::new();
        self.take_while(&mut digits, |c| c.is_ascii_hexdigit());
        if digits.is_empty() {
            self.report(
                DiagnosticKind::MalformedNumber {
                    reason: "hexadecimal literal has no digits",
                },
                loc,
            );
            return Constant::Int(BigInt::zero());
        }
        Constant::Int(parse_digits(&digits, 16))
    }

    fn scan_decimal(&mut self, loc: Location) -> Constant {
        let mut int_part = String::new();
        self.take_while(&mut int_part, |c| c.is_ascii_digit());

        let mut is_float = false;
        let mut frac = String::new();
        if self.peek_char(0) == Some('.') {
            self.bump();
            is_float = true;
            self.take_while(&mut frac, |c| c.is_ascii_digit());
        }

        let mut exponent = None;
        if matches!(self.peek_char(0), Some('e' | 'E')) {
            self.bump();
            is_float = true;
            let negative = match self.peek_char(0) {
                Some('-') => {
                    self.bump();
                    true
                }
                Some('+') => {
                    self.bump();
                    false
                }
                _ => false,
            };
            let mut digits = String::new();
            self.take_while(&mut digits, |c| c.is_ascii_digit());
            if digits.is_empty() {
                self.report(
                    DiagnosticKind::MalformedNumber {
                        reason: "exponent has no digits",
                    },
                    loc.clone(),
                );
            }
            exponent = Some(Exponent { negative, digits });
        }

        let imaginary = self.peek_char(0) == Some('i');
        if imaginary {
            self.bump();
        }

        if !is_float && !imaginary {
            return Constant::Int(self.integer_value(&int_part, loc));
        }
        let value = self.float_value(&int_part, &frac, exponent, loc);
        if imaginary {
            Constant::imaginary(value)
        } else {
            Constant::Float(value)
        }
    }

    /// Decimal or, with a leading `0`, octal.
    fn integer_value(&mut self, digits: &str, loc: Location) -> BigInt {
        if digits.len() > 1 && digits.starts_with('0') {
            if digits.contains(['8', '9']) {
                self.report(
                    DiagnosticKind::MalformedNumber {
                        reason: "invalid digit in octal literal",
                    },
                    loc,
                );
                return parse_digits(digits, 10);
            }
            return parse_digits(digits, 8);
        }
        parse_digits(digits, 10)
    }

    fn float_value(&mut self, int_part: &str, frac: &str, exponent: Option<Exponent>, loc: Location) -> BigRational {
        let mantissa = parse_digits(&format!("{int_part}{frac}"), 10);
        let written = match exponent {
            None => Some(0),
            Some(Exponent { digits, .. }) if digits.is_empty() => Some(0),
            Some(Exponent { negative, digits }) => digits.parse::<i64>().ok().map(|e| if negative { -e } else { e }),
        };
        let scaled = written.and_then(|e| e.checked_sub(i64::try_from(frac.len()).ok()?));
        match scaled.and_then(|e| decimal_to_rational(mantissa, e)) {
            Some(value) => value,
            None => {
                self.report(DiagnosticKind::FloatOverflow, loc);
                BigRational::zero()
            }
        }
    }

    /// Letters or digits glued to a literal are consumed and reported once.
    fn reject_trailing(&mut self, loc: Location) {
        let mut extra = String::new();
        self.take_while(&mut extra, is_ident_continue);
        if !extra.is_empty() {
            self.report(
                DiagnosticKind::TrailingCharacters {
                    after: "numeric literal",
                },
                loc,
            );
        }
    }
}

fn parse_digits(digits: &str, radix: u32) -> BigInt {
    if digits.is_empty() {
        return BigInt::zero();
    }
    BigInt::parse_bytes(digits.as_bytes(), radix).unwrap_or_default()
}

/// `mantissa × 10^exp10` as an exact rational, or `None` if `exp10` is out of range.
fn decimal_to_rational(mantissa: BigInt, exp10: i64) -> Option<BigRational> {
    let magnitude = exp10.unsigned_abs();
    if magnitude > MAX_DECIMAL_EXPONENT.unsigned_abs() {
        return None;
    }
    let scale = pow10(magnitude);
    Some(if exp10 >= 0 {
        BigRational::from_integer(mantissa * scale)
    } else {
        BigRational::new(mantissa, scale)
    })
}

/// `10^exp` by binary exponentiation.
fn pow10(mut exp: u64) -> BigInt {
    let mut result = BigInt::one();
    let mut base = BigInt::from(10u32);
    while exp > 0 {
        if exp & 1 == 1 {
            result *= &base;
        }
        exp >>= 1;
        if exp > 0 {
            base = &base * &base;
        }
    }
    result
}
