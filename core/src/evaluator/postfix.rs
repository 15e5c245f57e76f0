//! Reverse-Polish evaluation.
//!
//! Tokens are separated by whitespace. A token that starts with a digit, or is
//! longer than one character, is read as a numeral; a one-character token must
//! be an operator, which pops its right operand and then its left operand.

use crate::Decimal;
use crate::api::{Calculator, CalculatorOptions, Evaluation, Notation, checked_scale};
use crate::evaluator::Operand;
use crate::evaluator::error::EvalError;
use crate::evaluator::operators::BinaryOp;
use crate::stack::BoundedStack;
use crate::syntax::{Span, parse_numeral};

/// Evaluates postfix expressions such as `2 3 4 * +`.
///
/// # Example
///
/// ```
/// use decicalc_core::{Calculator, Decimal, PostfixCalculator};
///
/// let calc = PostfixCalculator::new();
/// assert_eq!(calc.compute("2 3 + 4 *").unwrap(), Decimal::from(20));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PostfixCalculator {
    options: CalculatorOptions,
}

impl PostfixCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(scale: u32) -> Self {
        Self::with_options(CalculatorOptions::with_scale(scale))
    }

    pub fn with_options(options: CalculatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CalculatorOptions {
        &self.options
    }

    /// Evaluates tokens that are already split.
    ///
    /// Spans in errors refer to the tokens joined with single spaces.
    pub fn compute_tokens(&self, tokens: &[&str]) -> Result<Decimal, EvalError> {
        let mut offset = 0;
        let mut spanned = Vec::with_capacity(tokens.len());
        for token in tokens.iter().filter(|t| !t.trim().is_empty()) {
            let token = token.trim();
            spanned.push((Span::new(offset, offset + token.len()), token));
            offset += token.len() + 1;
        }
        self.run(&spanned, Span::new(0, offset.saturating_sub(1)))
    }

    fn run(&self, tokens: &[(Span, &str)], whole: Span) -> Result<Decimal, EvalError> {
        if tokens.is_empty() {
            return Err(EvalError::EmptyExpression { span: whole });
        }

        let mut operands: BoundedStack<Operand> = BoundedStack::new(tokens.len());

        for (span, token) in tokens {
            let mut chars = token.chars();
            let Some(first) = chars.next() else {
                continue;
            };

            if first.is_ascii_digit() || chars.next().is_some() {
                let value = parse_numeral(token).map_err(|reason| EvalError::InvalidNumeral {
                    text: token.to_string(),
                    reason,
                    span: span.clone(),
                })?;
                operands.try_push(Operand {
                    value,
                    span: span.clone(),
                })?;
                continue;
            }

            let op = BinaryOp::from_symbol(first).map_err(|_| EvalError::UnexpectedCharacter {
                found: first,
                span: span.clone(),
            })?;
            if operands.len() < 2 {
                return Err(EvalError::MissingOperand {
                    symbol: first,
                    span: span.clone(),
                });
            }

            let rhs = operands.pop()?;
            let lhs = operands.pop()?;
            let value = op
                .checked_apply(&lhs.value, &rhs.value, self.options.scale)
                .map_err(|e| e.at(span.clone(), rhs.span.clone()))?;
            tracing::trace!(op = %first, %value, "apply");

            operands.try_push(Operand {
                value,
                span: Span::combine(&lhs.span, span),
            })?;
        }

        if operands.len() > 1 {
            let remaining = operands.len();
            let mut spans = operands.iter().map(|operand| &operand.span);
            let span = match (spans.next(), operands.peek()) {
                (Some(bottom), Ok(top)) => Span::combine(bottom, &top.span),
                _ => whole,
            };
            return Err(EvalError::MissingOperator { remaining, span });
        }
        Ok(operands.pop()?.value)
    }
}

impl Calculator for PostfixCalculator {
    /// Postfix input never produces warnings.
    fn evaluate(&self, expression: &str) -> Result<Evaluation, EvalError> {
        let tokens = tokenize(expression);
        let value = self.run(&tokens, Span::new(0, expression.len()))?;
        Ok(Evaluation {
            value,
            warnings: Vec::new(),
        })
    }

    fn scale(&self) -> u32 {
        self.options.scale
    }

    fn set_scale(&mut self, scale: i64) -> Result<(), EvalError> {
        self.options.scale = checked_scale(scale)?;
        Ok(())
    }

    fn notation(&self) -> Notation {
        Notation::Postfix
    }
}

/// Splits on runs of whitespace, keeping each token's byte span.
fn tokenize(expression: &str) -> Vec<(Span, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (pos, ch) in expression.char_indices() {
        if ch.is_whitespace() {
            if let Some(begin) = start.take() {
                tokens.push((Span::new(begin, pos), &expression[begin..pos]));
            }
        } else if start.is_none() {
            start = Some(pos);
        }
    }
    if let Some(begin) = start {
        tokens.push((Span::new(begin, expression.len()), &expression[begin..]));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_keeps_byte_spans() {
        let tokens = tokenize("  12\t3.5   +\n");
        assert_eq!(
            tokens,
            vec![
                (Span(2..4), "12"),
                (Span(5..8), "3.5"),
                (Span(11..12), "+"),
            ]
        );
        assert!(tokenize(" \t ").is_empty());
    }
}
