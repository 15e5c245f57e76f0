//! Infix evaluation by precedence climbing over a single left-to-right scan.
//!
//! The scanner alternates between expecting a numeral and expecting an
//! operator. Numerals go on an operand stack and operators on an operator
//! stack; an incoming operator first folds every stacked operator of equal or
//! higher precedence, which keeps the operator stack strictly increasing in
//! precedence from bottom to top. A bracketed group is located by depth
//! counting and evaluated recursively on its byte range, so spans stay
//! relative to the top-level expression.

use core::ops::Range;

use crate::Decimal;
use crate::api::{Calculator, CalculatorOptions, Diagnostic, Evaluation, Notation, checked_scale};
use crate::evaluator::error::{Bracket, Edge, EvalError};
use crate::evaluator::operators::BinaryOp;
use crate::evaluator::Operand;
use crate::stack::BoundedStack;
use crate::syntax::numeral::is_numeral_start;
use crate::syntax::{Span, char_at, parse_numeral, scan_numeral};

/// Evaluates infix expressions such as `2 + 3 * (4 - 1)`.
///
/// # Example
///
/// ```
/// use decicalc_core::{Calculator, Decimal, InfixCalculator};
///
/// let calc = InfixCalculator::new();
/// assert_eq!(calc.compute("2(3 + 4)").unwrap(), Decimal::from(14));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InfixCalculator {
    options: CalculatorOptions,
}

impl InfixCalculator {
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
}

impl Calculator for InfixCalculator {
    /// Evaluation stops at the first `=`; non-blank text after it is ignored
    /// and reported as a warning rather than an error.
    fn evaluate(&self, expression: &str) -> Result<Evaluation, EvalError> {
        let mut scanner = Scanner {
            source: expression,
            scale: self.options.scale,
            max_depth: self.options.max_depth,
            warnings: Vec::new(),
        };
        let value = scanner.compute(0..expression.len(), 0)?;
        Ok(Evaluation {
            value,
            warnings: scanner.warnings,
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
        Notation::Infix
    }
}

#[derive(Debug)]
struct PendingOp {
    op: BinaryOp,
    span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectNumeral,
    ExpectOperator,
}

struct Scanner<'s> {
    source: &'s str,
    scale: u32,
    max_depth: usize,
    warnings: Vec<Diagnostic>,
}

impl<'s> Scanner<'s> {
    /// Evaluates `source[range]`. `depth` counts enclosing bracket groups.
    fn compute(&mut self, range: Range<usize>, depth: usize) -> Result<Decimal, EvalError> {
        if depth > self.max_depth {
            return Err(EvalError::NestingTooDeep {
                max_depth: self.max_depth,
                span: Span(range),
            });
        }
        self.primary_check(&range)?;

        // Every token is at least one byte long.
        let mut operands: BoundedStack<Operand> = BoundedStack::new(range.len());
        let mut operators: BoundedStack<PendingOp> = BoundedStack::new(range.len());

        let end = range.end;
        let mut pos = range.start;
        let mut state = State::ExpectNumeral;

        while pos < end {
            let Some(ch) = char_at(self.source, pos) else {
                break;
            };

            match state {
                State::ExpectNumeral => {
                    if ch.is_whitespace() {
                        pos += ch.len_utf8();
                    } else if ch == '(' {
                        let close = self.matching_bracket(pos, end)?;
                        let group = Span::new(pos, close + 1);
                        let inner = pos + 1..close;
                        if self.source[inner.clone()].trim().is_empty() {
                            return Err(EvalError::EmptyBracket { span: group });
                        }

                        tracing::debug!(depth, start = inner.start, end = inner.end, "bracketed group");
                        let value = self.compute(inner, depth + 1)?;
                        operands.try_push(Operand { value, span: group })?;
                        state = State::ExpectOperator;
                        pos = close + 1;
                    } else if ch == ')' {
                        return Err(EvalError::UnmatchedBracket {
                            bracket: Bracket::Close,
                            span: Span::of_char(pos, ch),
                        });
                    } else if is_numeral_start(ch) {
                        let token_end = scan_numeral(&self.source[..end], pos);
                        let span = Span::new(pos, token_end);
                        let text = span.str_of(self.source);
                        let value = parse_numeral(text).map_err(|reason| EvalError::InvalidNumeral {
                            text: text.to_string(),
                            reason,
                            span: span.clone(),
                        })?;
                        operands.try_push(Operand { value, span })?;
                        state = State::ExpectOperator;
                        pos = token_end;
                    } else {
                        return Err(EvalError::UnexpectedCharacter {
                            found: ch,
                            span: Span::of_char(pos, ch),
                        });
                    }
                }

                State::ExpectOperator => {
                    if let Ok(op) = BinaryOp::from_symbol(ch) {
                        let incoming = PendingOp {
                            op,
                            span: Span::of_char(pos, ch),
                        };
                        self.resolve(&mut operands, &mut operators, incoming)?;
                        state = State::ExpectNumeral;
                        pos += ch.len_utf8();
                    } else if ch.is_whitespace() {
                        pos += ch.len_utf8();
                    } else {
                        match ch {
                            '=' => {
                                let rest = &self.source[pos + 1..end];
                                let trimmed = rest.trim();
                                if !trimmed.is_empty() {
                                    let start = pos + 1 + (rest.len() - rest.trim_start().len());
                                    self.warnings.push(Diagnostic::ignored_after_equals(
                                        Span::new(start, start + trimmed.len()),
                                    ));
                                }
                                break;
                            }
                            '(' => {
                                // Implicit multiplication: `2(3)` is `2 * (3)`. The
                                // position is left on the '(' so it opens the group.
                                let incoming = PendingOp {
                                    op: BinaryOp::Mul,
                                    span: Span::of_char(pos, ch),
                                };
                                self.resolve(&mut operands, &mut operators, incoming)?;
                                state = State::ExpectNumeral;
                            }
                            ')' => {
                                return Err(EvalError::UnmatchedBracket {
                                    bracket: Bracket::Close,
                                    span: Span::of_char(pos, ch),
                                });
                            }
                            _ => {
                                return Err(EvalError::UnexpectedCharacter {
                                    found: ch,
                                    span: Span::of_char(pos, ch),
                                });
                            }
                        }
                    }
                }
            }
        }

        while operands.len() > 1 {
            self.fold(&mut operands, &mut operators)?;
        }
        if let Ok(dangling) = operators.pop() {
            return Err(EvalError::MissingOperand {
                symbol: dangling.op.symbol(),
                span: dangling.span,
            });
        }
        Ok(operands.pop()?.value)
    }

    /// Rejects empty input and input that cannot start or end an expression.
    fn primary_check(&self, range: &Range<usize>) -> Result<(), EvalError> {
        let text = &self.source[range.clone()];
        let trimmed = text.trim();
        let (Some(first), Some(last)) = (trimmed.chars().next(), trimmed.chars().next_back())
        else {
            return Err(EvalError::EmptyExpression {
                span: Span(range.clone()),
            });
        };

        let first_pos = range.start + (text.len() - text.trim_start().len());
        let last_pos = first_pos + trimmed.len() - last.len_utf8();

        if !(first.is_ascii_digit() || matches!(first, '.' | '-' | '+' | '(')) {
            return Err(EvalError::IllegalBoundary {
                edge: Edge::Start,
                found: first,
                span: Span::of_char(first_pos, first),
            });
        }
        if !(last.is_ascii_digit() || matches!(last, '.' | '=' | ')')) {
            return Err(EvalError::IllegalBoundary {
                edge: Edge::End,
                found: last,
                span: Span::of_char(last_pos, last),
            });
        }
        Ok(())
    }

    /// Byte offset of the `)` matching the `(` at `open`, searching before `end`.
    fn matching_bracket(&self, open: usize, end: usize) -> Result<usize, EvalError> {
        let mut level = 1usize;
        for (offset, ch) in self.source[open + 1..end].char_indices() {
            match ch {
                '(' => level += 1,
                ')' => {
                    level -= 1;
                    if level == 0 {
                        return Ok(open + 1 + offset);
                    }
                }
                _ => {}
            }
        }
        Err(EvalError::UnmatchedBracket {
            bracket: Bracket::Open,
            span: Span::of_char(open, '('),
        })
    }

    /// Folds every stacked operator that binds at least as tightly as
    /// `incoming`, then stacks `incoming`.
    fn resolve(
        &self,
        operands: &mut BoundedStack<Operand>,
        operators: &mut BoundedStack<PendingOp>,
        incoming: PendingOp,
    ) -> Result<(), EvalError> {
        let precedence = incoming.op.precedence();
        while operators
            .peek()
            .is_ok_and(|top| top.op.precedence() >= precedence)
        {
            self.fold(operands, operators)?;
        }
        Ok(operators.try_push(incoming)?)
    }

    /// Pops the right operand, the left operand and the operator, and pushes
    /// the result.
    fn fold(
        &self,
        operands: &mut BoundedStack<Operand>,
        operators: &mut BoundedStack<PendingOp>,
    ) -> Result<(), EvalError> {
        let rhs = operands.pop()?;
        let lhs = operands.pop()?;
        let pending = operators.pop()?;

        let value = pending
            .op
            .checked_apply(&lhs.value, &rhs.value, self.scale)
            .map_err(|e| e.at(pending.span.clone(), rhs.span.clone()))?;
        tracing::trace!(op = %pending.op.symbol(), %value, "fold");

        operands.try_push(Operand {
            value,
            span: Span::combine(&lhs.span, &rhs.span),
        })?;
        Ok(())
    }
}
