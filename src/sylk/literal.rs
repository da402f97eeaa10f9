//! Recognizer for the literal carried by a `K` sub-field.
//!
//! Only three shapes are accepted:
//!
//! - signed integers: `42`, `-7`, `+3`
//! - signed decimals with an optional exponent: `1.5`, `-.25`, `6.02E23`
//! - double-quoted strings where `""` stands for one `"`: `"say ""hi"""`
//!
//! Anything else (bare words, formulas, booleans) is rejected with a
//! [`LiteralError`].

use std::fmt;
use thiserror::Error;

/// A decoded cell literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
}

/// Why a `K` token was not a literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("empty cell value")]
    Empty,

    #[error("unterminated string literal {0}")]
    UnterminatedString(String),

    #[error("unescaped quote inside string literal {0}")]
    StrayQuote(String),

    #[error("unsupported literal syntax {0:?}")]
    Unsupported(String),
}

impl Literal {
    /// Recognize `token` as a literal.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(token: &str) -> Result<Self, LiteralError> {
        let token = token.trim();
        match token.as_bytes().first() {
            None => Err(LiteralError::Empty),
            Some(b'"') => parse_quoted(token).map(Literal::Str),
            Some(_) => parse_number(token),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Literal::Int(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(value) => f.write_str(itoa::Buffer::new().format(*value)),
            Literal::Float(value) => f.write_str(ryu::Buffer::new().format(*value)),
            Literal::Str(value) => f.write_str(value),
        }
    }
}

fn parse_quoted(token: &str) -> Result<String, LiteralError> {
    let inner = token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| LiteralError::UnterminatedString(token.to_string()))?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '"' {
            // Only a doubled quote may appear inside the literal.
            if chars.next() != Some('"') {
                return Err(LiteralError::StrayQuote(token.to_string()));
            }
        }
        out.push(c);
    }
    Ok(out)
}

/// Shape of a numeric token, as far as the grammar cares.
enum NumberShape {
    Integer,
    Decimal,
}

fn parse_number(token: &str) -> Result<Literal, LiteralError> {
    let unsupported = || LiteralError::Unsupported(token.to_string());

    let shape = classify_number(token.as_bytes()).ok_or_else(unsupported)?;
    let unsigned = token.strip_prefix('+').unwrap_or(token);

    if let NumberShape::Integer = shape {
        if let Ok(value) = atoi_simd::parse_skipped::<i64>(unsigned.as_bytes()) {
            return Ok(Literal::Int(value));
        }
        // Too wide for i64; keep the magnitude as a float.
    }

    let value: f64 = fast_float2::parse(unsigned).map_err(|_| unsupported())?;
    Ok(Literal::Float(value))
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn classify_number(bytes: &[u8]) -> Option<NumberShape> {
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    let mut decimal = false;
    if bytes.get(pos) == Some(&b'.') {
        decimal = true;
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        decimal = true;
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return None;
        }
        pos += exp_digits;
    }

    if pos != bytes.len() {
        return None;
    }
    Some(if decimal {
        NumberShape::Decimal
    } else {
        NumberShape::Integer
    })
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(Literal::parse("42"), Ok(Literal::Int(42)));
        assert_eq!(Literal::parse("-7"), Ok(Literal::Int(-7)));
        assert_eq!(Literal::parse("+3"), Ok(Literal::Int(3)));
        assert_eq!(Literal::parse(" 0 "), Ok(Literal::Int(0)));
    }

    #[test]
    fn test_wide_integer_becomes_float() {
        let lit = Literal::parse("123456789012345678901234").unwrap();
        assert!(matches!(lit, Literal::Float(v) if v > 1.0e23));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(Literal::parse("1.5"), Ok(Literal::Float(1.5)));
        assert_eq!(Literal::parse("-.25"), Ok(Literal::Float(-0.25)));
        assert_eq!(Literal::parse("3."), Ok(Literal::Float(3.0)));
        assert_eq!(Literal::parse("1E3"), Ok(Literal::Float(1000.0)));
        assert_eq!(Literal::parse("2.5e-1"), Ok(Literal::Float(0.25)));
    }

    #[test]
    fn test_strings() {
        assert_eq!(Literal::parse("\"Name\""), Ok(Literal::Str("Name".into())));
        assert_eq!(Literal::parse("\"\""), Ok(Literal::Str(String::new())));
        assert_eq!(
            Literal::parse("\"say \"\"hi\"\"\""),
            Ok(Literal::Str("say \"hi\"".into()))
        );
        assert_eq!(Literal::parse("\"a;b\""), Ok(Literal::Str("a;b".into())));
    }

    #[test]
    fn test_rejections() {
        assert_eq!(Literal::parse(""), Err(LiteralError::Empty));
        assert!(matches!(
            Literal::parse("\"open"),
            Err(LiteralError::UnterminatedString(_))
        ));
        assert!(matches!(
            Literal::parse("\""),
            Err(LiteralError::UnterminatedString(_))
        ));
        assert!(matches!(
            Literal::parse("\"a\"b\""),
            Err(LiteralError::StrayQuote(_))
        ));
        for token in ["TRUE", "1+2", "__import__('os')", ".", "-", "1e", "0x10", "inf", "nan"] {
            assert!(
                matches!(Literal::parse(token), Err(LiteralError::Unsupported(_))),
                "{token} should be rejected"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Literal::Int(-12).to_string(), "-12");
        assert_eq!(Literal::Float(1.5).to_string(), "1.5");
        assert_eq!(Literal::Float(3.0).to_string(), "3.0");
        assert_eq!(Literal::Str("x y".into()).to_string(), "x y");

        // Shortest round-trip form, not Python's repr.
        assert_eq!(Literal::Float(0.00001).to_string(), "0.00001");
        assert_eq!(Literal::Float(1e16).to_string(), "1e16");
        assert_eq!(Literal::Float(-2.5e-7).to_string(), "-2.5e-7");
    }

    #[test]
    fn test_as_int() {
        assert_eq!(Literal::Int(19723).as_int(), Some(19723));
        assert_eq!(Literal::Float(2.0).as_int(), None);
        assert_eq!(Literal::Str("1".into()).as_int(), None);
    }
}
