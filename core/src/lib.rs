//! Arbitrary-precision decimal calculator engine.
//!
//! Two evaluators share one numeric core: [`InfixCalculator`] reads ordinary
//! arithmetic with precedence and brackets, [`PostfixCalculator`] reads
//! reverse-Polish notation. Both compute on [`Decimal`] values; addition,
//! subtraction and multiplication are exact and division rounds half-up to a
//! configurable scale.

pub mod api;
pub mod evaluator;
pub mod stack;
pub mod syntax;

pub use bigdecimal::BigDecimal as Decimal;

pub use api::{
    Calculator, CalculatorOptions, Diagnostic, Evaluation, Notation, RelatedInfo, Severity,
    calculator_for,
};
pub use evaluator::{BinaryOp, EvalError, InfixCalculator, PostfixCalculator, priority_of};
pub use syntax::Span;
