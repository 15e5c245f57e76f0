use core::fmt;
use core::str::FromStr;

use crate::Decimal;
use crate::api::{CalculatorOptions, Diagnostic, MAX_SCALE};
use crate::evaluator::{EvalError, InfixCalculator, PostfixCalculator};

/// The capability an interactive shell (or any other caller) depends on.
pub trait Calculator {
    /// Evaluate one expression, returning the value and any warnings.
    fn evaluate(&self, expression: &str) -> Result<Evaluation, EvalError>;

    /// Evaluate one expression.
    ///
    /// Non-fatal warnings are logged through `tracing`; use
    /// [`evaluate`](Calculator::evaluate) to get them as [`Diagnostic`]s.
    fn compute(&self, expression: &str) -> Result<Decimal, EvalError> {
        let evaluation = self.evaluate(expression)?;
        evaluation.log_warnings();
        Ok(evaluation.value)
    }

    /// Number of fractional digits a division rounds to.
    fn scale(&self) -> u32;

    /// Change the division scale for subsequent calls.
    ///
    /// Fails with [`EvalError::InvalidScale`] if `scale` is negative or above
    /// [`MAX_SCALE`]; the current scale is then left unchanged.
    fn set_scale(&mut self, scale: i64) -> Result<(), EvalError>;

    /// The notation this calculator reads.
    fn notation(&self) -> Notation;
}

/// Result of a successful evaluation together with any warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub value: Decimal,
    pub warnings: Vec<Diagnostic>,
}

impl Evaluation {
    fn log_warnings(&self) {
        for warning in &self.warnings {
            tracing::warn!(
                start = warning.span.0.start,
                end = warning.span.0.end,
                "{}",
                warning.message
            );
        }
    }
}

/// Expression notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Operators between operands, with precedence and brackets.
    Infix,
    /// Reverse-Polish: operators after their operands.
    Postfix,
}

impl Notation {
    /// The other notation.
    pub fn toggled(self) -> Self {
        match self {
            Notation::Infix => Notation::Postfix,
            Notation::Postfix => Notation::Infix,
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Infix => write!(f, "infix"),
            Notation::Postfix => write!(f, "postfix"),
        }
    }
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "infix" => Ok(Notation::Infix),
            "postfix" | "rpn" => Ok(Notation::Postfix),
            other => Err(format!("unknown notation '{}'", other)),
        }
    }
}

/// Build a calculator for `notation`.
pub fn calculator_for(notation: Notation, options: CalculatorOptions) -> Box<dyn Calculator> {
    match notation {
        Notation::Infix => Box::new(InfixCalculator::with_options(options)),
        Notation::Postfix => Box::new(PostfixCalculator::with_options(options)),
    }
}

/// Validate a requested scale against `0..=MAX_SCALE`.
pub fn checked_scale(scale: i64) -> Result<u32, EvalError> {
    u32::try_from(scale)
        .ok()
        .filter(|value| *value <= MAX_SCALE)
        .ok_or(EvalError::InvalidScale { scale })
}
