//! Decicalc - an arbitrary-precision decimal calculator
//!
//! # Overview
//!
//! Decicalc evaluates arithmetic on decimal numbers of unbounded size in two
//! notations:
//!
//! - **Infix**: `2 + 3 * (4 - 1)`, with the usual precedence, brackets,
//!   implicit multiplication (`2(3 + 4)`) and an optional terminating `=`
//! - **Postfix** (reverse-Polish): `2 3 4 1 - * +`
//!
//! Numerals may carry a sign, a fractional part and an exponent (`-1.5e3`).
//! Addition, subtraction and multiplication are exact; division rounds
//! half-up to a configurable number of fractional digits, the *scale*.
//!
//! # Quick Start
//!
//! ```
//! use decicalc::{Calculator, InfixCalculator, PostfixCalculator};
//!
//! let infix = InfixCalculator::new();
//! assert_eq!(infix.compute("10 / 3").unwrap().to_string(), "3.3333");
//!
//! let mut postfix = PostfixCalculator::new();
//! postfix.set_scale(0).unwrap();
//! assert_eq!(postfix.compute("10 3 /").unwrap().to_string(), "3");
//! ```
//!
//! # Errors
//!
//! Every error carries the byte span of the offending input and converts to a
//! [`Diagnostic`]. The `render_error*` functions draw it under the source:
//!
//! ```
//! use decicalc::{Calculator, InfixCalculator, render_error_to_string_no_color};
//!
//! let source = "1 + (2 * 3";
//! let err = InfixCalculator::new().compute(source).unwrap_err();
//! let report = render_error_to_string_no_color(&err, source);
//! assert!(report.contains("Unmatched bracket"));
//! ```

// Re-export public API from decicalc_core
pub use decicalc_core::api::{
    Calculator, CalculatorOptions, DEFAULT_MAX_DEPTH, DEFAULT_SCALE, Diagnostic, Evaluation,
    MAX_SCALE, Notation, RelatedInfo, Severity, calculator_for,
};
pub use decicalc_core::{Decimal, Span};

// Re-export the evaluators
pub use decicalc_core::evaluator::{
    BinaryOp, Bracket, Edge, EvalError, InfixCalculator, PostfixCalculator, priority_of,
};

mod error_renderer;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
    render_warnings, render_warnings_to_string, render_warnings_to_string_no_color,
};
