//! Numeral literals: scanning them out of an expression and turning them into
//! [`Decimal`] values.
//!
//! Accepted grammar:
//!
//! ```text
//! numeral  := sign? mantissa exponent?
//! mantissa := digit+ ('.' digit*)? | '.' digit+
//! exponent := ('e' | 'E') sign? digit+
//! sign     := '+' | '-'
//! ```
//!
//! The value is built from the digit string and an explicit scale, so a
//! numeral converts to a `Decimal` exactly, without any rounding.

use crate::Decimal;
use num_bigint::BigInt;
use thiserror::Error;

/// Why a numeral token could not be turned into a number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumeralError {
    #[error("no digits")]
    MissingDigits,

    #[error("exponent has no digits")]
    MissingExponentDigits,

    #[error("exponent out of range")]
    ExponentOutOfRange,

    #[error("unexpected '{found}' at offset {offset}")]
    UnexpectedCharacter { found: char, offset: usize },
}

/// Can `ch` begin a numeral token in an infix expression?
#[inline]
pub fn is_numeral_start(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | '+' | '-')
}

#[inline]
fn is_numeral_continue(byte: u8) -> bool {
    byte.is_ascii_digit() || matches!(byte, b'.' | b'e')
}

/// Finds the end (exclusive byte offset) of the numeral token starting at
/// `start`.
///
/// The first character is always taken; it is expected to satisfy
/// [`is_numeral_start`]. After that the token extends over digits, `.` and
/// `e`, and a sign is taken only directly after an `e`. The token is maximal
/// and not validated here: `1.2.3` or `1e` are scanned whole and rejected by
/// [`parse_numeral`].
pub fn scan_numeral(source: &str, start: usize) -> usize {
    let bytes = source.as_bytes();
    if start >= bytes.len() {
        return start;
    }

    let mut pos = start;
    loop {
        let after_exponent_marker = bytes[pos] == b'e';
        pos += 1;
        if pos >= bytes.len() {
            break;
        }
        if after_exponent_marker && matches!(bytes[pos], b'+' | b'-') {
            pos += 1;
            if pos >= bytes.len() {
                break;
            }
        }
        if !is_numeral_continue(bytes[pos]) {
            break;
        }
    }
    pos
}

/// Parses a complete numeral token.
///
/// # Example
///
/// ```
/// use decicalc_core::{Decimal, syntax::parse_numeral};
///
/// let n = parse_numeral("-1.5e2").unwrap();
/// assert_eq!(n, "-150".parse::<Decimal>().unwrap());
/// assert!(parse_numeral("1.2.3").is_err());
/// ```
pub fn parse_numeral(text: &str) -> Result<Decimal, NumeralError> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < len && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &text[int_start..pos];

    let mut frac_digits = "";
    if pos < len && bytes[pos] == b'.' {
        pos += 1;
        let frac_start = pos;
        while pos < len && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        frac_digits = &text[frac_start..pos];
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(NumeralError::MissingDigits);
    }

    let mut exponent: i64 = 0;
    if pos < len && matches!(bytes[pos], b'e' | b'E') {
        pos += 1;
        let exp_start = pos;
        if pos < len && matches!(bytes[pos], b'+' | b'-') {
            pos += 1;
        }
        let exp_digits_start = pos;
        while pos < len && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == exp_digits_start {
            return Err(NumeralError::MissingExponentDigits);
        }
        exponent = text[exp_start..pos]
            .parse::<i32>()
            .map_err(|_| NumeralError::ExponentOutOfRange)?
            .into();
    }

    if let Some(found) = text[pos..].chars().next() {
        return Err(NumeralError::UnexpectedCharacter { found, offset: pos });
    }

    let mut digits = String::with_capacity(int_digits.len() + frac_digits.len());
    digits.push_str(int_digits);
    digits.push_str(frac_digits);
    let magnitude =
        BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(NumeralError::MissingDigits)?;
    let unscaled = if negative { -magnitude } else { magnitude };

    // value = unscaled * 10^-(fraction length - exponent)
    let scale = frac_digits.len() as i64 - exponent;
    Ok(Decimal::new(unscaled, scale))
}
