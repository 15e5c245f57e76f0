//! Public API for the calculator engine.
//!
//! Front ends talk to the engine only through the [`Calculator`] capability:
//! `compute` an expression, and read or change the division `scale`.
//!
//! # Example
//!
//! ```
//! use decicalc_core::api::{Calculator, CalculatorOptions, Notation, calculator_for};
//!
//! let mut calc = calculator_for(Notation::Infix, CalculatorOptions::default());
//! assert_eq!(calc.compute("10 / 3").unwrap().to_string(), "3.3333");
//!
//! calc.set_scale(0).unwrap();
//! assert_eq!(calc.compute("10 / 3").unwrap().to_string(), "3");
//! ```

pub mod calculator;
pub mod error;
pub mod options;

pub use calculator::{Calculator, Evaluation, Notation, calculator_for, checked_scale};
pub use error::{Diagnostic, RelatedInfo, Severity};
pub use options::{CalculatorOptions, DEFAULT_MAX_DEPTH, DEFAULT_SCALE, MAX_SCALE};
