//! Binary operator dispatch.
//!
//! `+` and `-` bind looser than `*` and `/`; all four are left-associative.
//! Precedence values only mean something relative to each other.

use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use thiserror::Error;

use crate::Decimal;
use crate::evaluator::EvalError;
use crate::syntax::Span;

/// Largest power of ten a division will scale its operands by.
pub const MAX_SHIFT: u64 = 100_000;

/// Why an operator could not produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("operands too far apart in magnitude to divide")]
    OutOfRange,
}

impl ArithmeticError {
    /// Attaches the operator's span and its right operand's span.
    pub(crate) fn at(self, span: Span, divisor: Span) -> EvalError {
        match self {
            ArithmeticError::DivisionByZero => EvalError::DivisionByZero { span, divisor },
            ArithmeticError::OutOfRange => EvalError::OutOfRange { span },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// All recognised operators.
    pub const ALL: [BinaryOp; 4] = [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div];

    /// Looks up the operator written as `symbol`.
    pub fn from_symbol(symbol: char) -> Result<Self, EvalError> {
        match symbol {
            '+' => Ok(BinaryOp::Add),
            '-' => Ok(BinaryOp::Sub),
            '*' => Ok(BinaryOp::Mul),
            '/' => Ok(BinaryOp::Div),
            _ => Err(EvalError::UnknownOperator { symbol }),
        }
    }

    pub fn is_operator(symbol: char) -> bool {
        Self::from_symbol(symbol).is_ok()
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 0,
            BinaryOp::Mul | BinaryOp::Div => 1,
        }
    }

    /// Evaluates `lhs op rhs`.
    ///
    /// Addition, subtraction and multiplication are exact. Division rounds to
    /// `scale` fractional digits.
    pub fn checked_apply(
        self,
        lhs: &Decimal,
        rhs: &Decimal,
        scale: u32,
    ) -> Result<Decimal, ArithmeticError> {
        match self {
            BinaryOp::Add => Ok(lhs + rhs),
            BinaryOp::Sub => Ok(lhs - rhs),
            BinaryOp::Mul => Ok(lhs * rhs),
            BinaryOp::Div => checked_div(lhs, rhs, scale),
        }
    }
}

/// Relative priority of the operator written as `symbol`.
pub fn priority_of(symbol: char) -> Result<u8, EvalError> {
    BinaryOp::from_symbol(symbol).map(BinaryOp::precedence)
}

fn pow10(exp: u128) -> Result<BigInt, ArithmeticError> {
    if exp > u128::from(MAX_SHIFT) {
        return Err(ArithmeticError::OutOfRange);
    }
    let exp = u32::try_from(exp).map_err(|_| ArithmeticError::OutOfRange)?;
    Ok(BigInt::from(10u8).pow(exp))
}

/// Divides `lhs` by `rhs`, rounding half-up to exactly `scale` fractional
/// digits.
///
/// The quotient is computed on the unscaled integers, so the only rounding is
/// the final one. Operands whose exponents are too far apart for that fail
/// with [`ArithmeticError::OutOfRange`].
pub fn checked_div(lhs: &Decimal, rhs: &Decimal, scale: u32) -> Result<Decimal, ArithmeticError> {
    if rhs.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }

    // lhs = a * 10^-ea, rhs = b * 10^-eb
    // lhs / rhs * 10^scale = a * 10^(eb + scale - ea) / b
    let (a, ea) = lhs.as_bigint_and_exponent();
    let (b, eb) = rhs.as_bigint_and_exponent();
    let shift = i128::from(eb) + i128::from(scale) - i128::from(ea);

    let (numerator, denominator) = if shift >= 0 {
        (a * pow10(shift.unsigned_abs())?, b)
    } else {
        (a, b * pow10(shift.unsigned_abs())?)
    };

    let mut quotient = &numerator / &denominator;
    let remainder = &numerator % &denominator;

    // Half-up: round away from zero when the discarded part is at least half.
    let twice_remainder = remainder.magnitude().clone() * 2u32;
    if &twice_remainder >= denominator.magnitude() {
        let negative = (numerator.sign() == Sign::Minus) != (denominator.sign() == Sign::Minus);
        if negative {
            quotient -= BigInt::from(1u8);
        } else {
            quotient += BigInt::from(1u8);
        }
    }

    Ok(Decimal::new(quotient, i64::from(scale)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn div(a: &str, b: &str, scale: u32) -> String {
        checked_div(&dec(a), &dec(b), scale).unwrap().to_string()
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(BinaryOp::from_symbol('+'), Ok(BinaryOp::Add));
        assert_eq!(BinaryOp::from_symbol('/'), Ok(BinaryOp::Div));
        assert_eq!(
            BinaryOp::from_symbol('^'),
            Err(EvalError::UnknownOperator { symbol: '^' })
        );
        for op in BinaryOp::ALL {
            assert_eq!(BinaryOp::from_symbol(op.symbol()), Ok(op));
        }
    }

    #[test]
    fn test_priority_of() {
        assert_eq!(priority_of('+'), priority_of('-'));
        assert_eq!(priority_of('*'), priority_of('/'));
        assert!(priority_of('*').unwrap() > priority_of('+').unwrap());
        assert!(priority_of('%').is_err());
    }

    #[test]
    fn test_exact_operations() {
        let a = dec("0.1");
        let b = dec("0.2");
        assert_eq!(BinaryOp::Add.checked_apply(&a, &b, 0), Ok(dec("0.3")));
        assert_eq!(BinaryOp::Sub.checked_apply(&a, &b, 0), Ok(dec("-0.1")));
        assert_eq!(BinaryOp::Mul.checked_apply(&a, &b, 0), Ok(dec("0.02")));
    }

    #[test]
    fn test_div_rounds_to_scale() {
        assert_eq!(div("10", "3", 4), "3.3333");
        assert_eq!(div("10", "3", 0), "3");
        assert_eq!(div("2", "3", 4), "0.6667");
        assert_eq!(div("1", "8", 2), "0.13");
        assert_eq!(div("1", "4", 4), "0.2500");
    }

    #[test]
    fn test_div_half_up_ties_away_from_zero() {
        assert_eq!(div("5", "2", 0), "3");
        assert_eq!(div("-5", "2", 0), "-3");
        assert_eq!(div("5", "-2", 0), "-3");
        assert_eq!(div("-5", "-2", 0), "3");
        assert_eq!(div("0.125", "1", 2), "0.13");
        assert_eq!(div("-0.125", "1", 2), "-0.13");
    }

    #[test]
    fn test_div_with_scientific_operands() {
        assert_eq!(div("1e2", "3", 1), "33.3");
        assert_eq!(div("1", "1e-2", 0), "100");
        assert_eq!(div("1e-3", "2", 4), "0.0005");
    }

    #[test]
    fn test_div_by_zero() {
        let zero = Err(ArithmeticError::DivisionByZero);
        assert_eq!(checked_div(&dec("1"), &dec("0"), 4), zero);
        assert_eq!(checked_div(&dec("1"), &dec("0.000"), 4), zero);
        assert_eq!(BinaryOp::Div.checked_apply(&dec("1"), &dec("0"), 4), zero);
    }

    #[test]
    fn test_div_with_distant_exponents_fails() {
        let out_of_range = Err(ArithmeticError::OutOfRange);
        assert_eq!(
            checked_div(&dec("1e2000000000"), &dec("3"), 4),
            out_of_range
        );
        assert_eq!(
            checked_div(&dec("1"), &dec("1e-2000000000"), 0),
            out_of_range
        );
        assert_eq!(
            checked_div(&dec("1e2147483647"), &dec("1e-2147483647"), 4),
            out_of_range
        );
        // Right at the limit still divides.
        assert_eq!(div("1", "3", MAX_SHIFT as u32).len(), MAX_SHIFT as usize + 2);
    }
}
