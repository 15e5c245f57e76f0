//! Stack-based evaluators for infix and postfix arithmetic.
//!
//! Both evaluators read the expression in a single pass and keep intermediate
//! values on a [`BoundedStack`](crate::stack::BoundedStack) sized from the
//! input, so no syntax tree is ever built.
//!
//! ## Design Principles
//!
//! - **Never panic**: malformed input is reported as an [`EvalError`] with a span
//! - **Stack-safe**: bracket nesting is bounded by `max_depth`
//! - **Exact**: only division rounds, half-up, to the configured scale
//!
//! ## Example
//!
//! ```
//! use decicalc_core::{Calculator, Decimal, InfixCalculator, PostfixCalculator};
//!
//! let infix = InfixCalculator::new();
//! let postfix = PostfixCalculator::new();
//! assert_eq!(infix.compute("(2 + 3) * 4").unwrap(), Decimal::from(20));
//! assert_eq!(postfix.compute("2 3 + 4 *").unwrap(), Decimal::from(20));
//! ```

mod error;
mod infix;
pub mod operators;
mod postfix;


pub use error::{Bracket, Edge, EvalError};
pub use infix::InfixCalculator;
pub use operators::{ArithmeticError, BinaryOp, priority_of};
pub use postfix::PostfixCalculator;

use crate::Decimal;
use crate::syntax::Span;

/// A value on an operand stack, with the source it was computed from.
#[derive(Debug)]
pub(crate) struct Operand {
    pub(crate) value: Decimal,
    pub(crate) span: Span,
}
