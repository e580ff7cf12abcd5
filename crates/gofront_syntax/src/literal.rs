//! Lexical constant values.
//!
//! A [`Constant`] is the payload of a literal token. It travels unchanged from the lexer through the token into the
//! tree's literal node, where later stages fold and convert it. Numeric payloads are exact: integers and runes are
//! big integers, floats are big rationals.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

/// Kind tag of a [`Constant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstantKind {
    Bool,
    Int,
    Rune,
    Float,
    Complex,
    String,
    Error,
    Uninit,
}

impl ConstantKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ConstantKind::Bool => "boolean",
            ConstantKind::Int => "integer",
            ConstantKind::Rune => "rune",
            ConstantKind::Float => "floating-point",
            ConstantKind::Complex => "complex",
            ConstantKind::String => "string",
            ConstantKind::Error => "error",
            ConstantKind::Uninit => "uninitialized",
        }
    }
}

impl fmt::Display for ConstantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An untyped literal value.
///
/// ## Notes
/// - The kind of a value never changes; conversions produce new values downstream.
/// - `String` holds bytes, not text: byte escapes such as `\xFF` may produce invalid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Constant {
    Bool(bool),
    Int(BigInt),
    /// A rune literal. `byte_escape` is set when the value came from an octal or hex escape.
    Rune { value: BigInt, byte_escape: bool },
    Float(BigRational),
    Complex { re: BigRational, im: BigRational },
    String(Vec<u8>),
    /// Placeholder for a literal that could not be scanned at all.
    Error,
    #[default]
    Uninit,
}

impl Constant {
    pub fn kind(&self) -> ConstantKind {
        match self {
            Constant::Bool(_) => ConstantKind::Bool,
            Constant::Int(_) => ConstantKind::Int,
            Constant::Rune { .. } => ConstantKind::Rune,
            Constant::Float(_) => ConstantKind::Float,
            Constant::Complex { .. } => ConstantKind::Complex,
            Constant::String(_) => ConstantKind::String,
            Constant::Error => ConstantKind::Error,
            Constant::Uninit => ConstantKind::Uninit,
        }
    }

    /// A purely imaginary complex value.
    pub fn imaginary(im: BigRational) -> Self {
        Constant::Complex {
            re: BigRational::zero(),
            im,
        }
    }

    /// Return the string payload as text, if this is a string holding valid UTF-8.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Constant::String(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }

    /// Return the nearest `f64` for a float value. Used for display only.
    pub fn approx_f64(&self) -> Option<f64> {
        match self {
            Constant::Float(r) => r.to_f64(),
            Constant::Int(i) => i.to_f64(),
            _ => None,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Bool(b) => write!(f, "{b}"),
            Constant::Int(i) => write!(f, "{i}"),
            Constant::Rune { value, .. } => match value.to_u32().and_then(char::from_u32) {
                Some(c) => write!(f, "{c:?}"),
                None => write!(f, "rune({value})"),
            },
            Constant::Float(r) => write_rational(f, r),
            Constant::Complex { re, im } => {
                f.write_str("(")?;
                write_rational(f, re)?;
                f.write_str(" + ")?;
                write_rational(f, im)?;
                f.write_str("i)")
            }
            Constant::String(bytes) => write!(f, "\"{}\"", bytes.escape_ascii()),
            Constant::Error => f.write_str("<error>"),
            Constant::Uninit => f.write_str("<uninit>"),
        }
    }
}

fn write_rational(f: &mut fmt::Formatter<'_>, r: &BigRational) -> fmt::Result {
    if r.is_integer() {
        return write!(f, "{}", r.numer());
    }
    match r.to_f64() {
        Some(v) if v.is_finite() && v != 0.0 => write!(f, "{v:e}"),
        _ => write!(f, "{}/{}", r.numer(), r.denom()),
    }
}
