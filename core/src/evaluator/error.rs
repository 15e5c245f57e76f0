//! Evaluation errors.
//!
//! Every variant except [`EvalError::Stack`] describes a problem with the user's
//! input (or with a requested scale). Spans are byte ranges into the expression
//! passed to `compute`, including for errors found inside nested brackets.
//!
//! `Stack` and `UnknownOperator` guard internal invariants; a well-formed
//! caller never sees them.

use core::fmt;
use thiserror::Error;

use crate::api::{Diagnostic, RelatedInfo, Severity};
use crate::stack::StackError;
use crate::syntax::{NumeralError, Span};

/// Which end of an infix expression is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Start => write!(f, "start"),
            Edge::End => write!(f, "ending"),
        }
    }
}

/// The bracket that has no partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// A `(` that is never closed.
    Open,
    /// A `)` that was never opened.
    Close,
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bracket::Open => write!(f, "a right bracket is missing for this left bracket"),
            Bracket::Close => write!(f, "a left bracket is missing for this right bracket"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Empty expression")]
    EmptyExpression { span: Span },

    #[error("Illegal {edge} of expression: '{found}'")]
    IllegalBoundary { edge: Edge, found: char, span: Span },

    #[error("Unmatched bracket: {bracket}")]
    UnmatchedBracket { bracket: Bracket, span: Span },

    #[error("Empty brackets")]
    EmptyBracket { span: Span },

    #[error("Unrecognised symbol '{found}'")]
    UnexpectedCharacter { found: char, span: Span },

    #[error("Invalid numeral '{text}': {reason}")]
    InvalidNumeral {
        text: String,
        reason: NumeralError,
        span: Span,
    },

    #[error("'{symbol}' is not a recognised operator")]
    UnknownOperator { symbol: char },

    #[error("Missing one or more operand(s) for '{symbol}'")]
    MissingOperand { symbol: char, span: Span },

    #[error("Missing one or more operator(s): {remaining} operands left unconsumed")]
    MissingOperator { remaining: usize, span: Span },

    #[error("Scale must be between 0 and 10000: {scale}")]
    InvalidScale { scale: i64 },

    #[error("Division by zero")]
    DivisionByZero { span: Span, divisor: Span },

    #[error("Brackets nested deeper than {max_depth} levels")]
    NestingTooDeep { max_depth: usize, span: Span },

    #[error("Division out of range")]
    OutOfRange { span: Span },

    #[error("Internal error: {0}")]
    Stack(#[from] StackError),
}

impl EvalError {
    /// Source location of the problem, if it has one.
    pub fn span(&self) -> Option<&Span> {
        match self {
            EvalError::EmptyExpression { span }
            | EvalError::IllegalBoundary { span, .. }
            | EvalError::UnmatchedBracket { span, .. }
            | EvalError::EmptyBracket { span }
            | EvalError::UnexpectedCharacter { span, .. }
            | EvalError::InvalidNumeral { span, .. }
            | EvalError::MissingOperand { span, .. }
            | EvalError::MissingOperator { span, .. }
            | EvalError::DivisionByZero { span, .. }
            | EvalError::NestingTooDeep { span, .. }
            | EvalError::OutOfRange { span } => Some(span),
            EvalError::UnknownOperator { .. }
            | EvalError::InvalidScale { .. }
            | EvalError::Stack(_) => None,
        }
    }

    /// Convert to a Diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help, related) = match self {
            EvalError::EmptyExpression { .. } => (
                "C001",
                vec!["Type a numeral or an expression such as `1 + 2`".to_string()],
                vec![],
            ),
            EvalError::IllegalBoundary { edge, .. } => (
                "C002",
                vec![match edge {
                    Edge::Start => {
                        "An expression starts with a digit, '.', '+', '-' or '('".to_string()
                    }
                    Edge::End => "An expression ends with a digit, '.', '=' or ')'".to_string(),
                }],
                vec![],
            ),
            EvalError::UnmatchedBracket { bracket, .. } => (
                "C003",
                vec![match bracket {
                    Bracket::Open => "Add the missing ')'".to_string(),
                    Bracket::Close => "Remove this ')' or add a '(' before it".to_string(),
                }],
                vec![],
            ),
            EvalError::EmptyBracket { .. } => (
                "C004",
                vec!["Brackets must contain an expression".to_string()],
                vec![],
            ),
            EvalError::UnexpectedCharacter { .. } => (
                "C005",
                vec!["Only numerals, '+', '-', '*', '/', brackets and '=' are allowed".to_string()],
                vec![],
            ),
            EvalError::InvalidNumeral { .. } => (
                "C006",
                vec!["Check the number format, e.g. `12`, `0.5`, `.5` or `1.5e-3`".to_string()],
                vec![],
            ),
            EvalError::UnknownOperator { .. } => ("C007", vec![], vec![]),
            EvalError::MissingOperand { .. } => (
                "C008",
                vec!["Every operator needs two operands before it".to_string()],
                vec![],
            ),
            EvalError::MissingOperator { .. } => (
                "C009",
                vec!["Separate numerals and operators with whitespace".to_string()],
                vec![],
            ),
            EvalError::InvalidScale { .. } => ("C010", vec![], vec![]),
            EvalError::DivisionByZero { divisor, .. } => (
                "C011",
                vec![],
                vec![RelatedInfo {
                    span: divisor.clone(),
                    message: "this evaluates to zero".to_string(),
                }],
            ),
            EvalError::NestingTooDeep { .. } => (
                "C012",
                vec!["Reduce nesting or simplify the expression".to_string()],
                vec![],
            ),
            EvalError::Stack(_) => ("C013", vec![], vec![]),
            EvalError::OutOfRange { .. } => (
                "C014",
                vec!["The operands' exponents are too far apart for the quotient".to_string()],
                vec![],
            ),
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.to_string(),
            span: self.span().cloned().unwrap_or(Span(0..0)),
            related,
            help,
            code: Some(code.to_string()),
        }
    }
}
