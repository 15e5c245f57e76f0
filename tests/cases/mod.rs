#![allow(dead_code, unused_macros)]

use decicalc::{CalculatorOptions, Decimal, EvalError, Notation, calculator_for};
use once_cell::sync::Lazy;

pub fn compute(notation: Notation, scale: u32, input: &str) -> Result<Decimal, EvalError> {
    calculator_for(notation, CalculatorOptions::with_scale(scale)).compute(input)
}

pub fn dec(s: &str) -> Decimal {
    s.parse().expect("valid decimal literal in test")
}

/// Declares a test that evaluates `input` in `notation`.
///
/// - `value:` compares numerically, ignoring the scale of the result.
/// - `text:` compares the printed result, so trailing zeros matter.
/// - `error:` matches the error against a pattern.
macro_rules! test_case {
    (
        name: $name:ident,
        notation: $notation:ident,
        input: $input:expr,
        $(scale: $scale:expr,)?
        value: $value:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            #[allow(unused_mut, unused_assignments)]
            let mut scale = decicalc::DEFAULT_SCALE;
            $(scale = $scale;)?
            let result = $crate::cases::compute(decicalc::Notation::$notation, scale, $input);
            pretty_assertions::assert_eq!(result, Ok($crate::cases::dec($value)));
        }
    };
    (
        name: $name:ident,
        notation: $notation:ident,
        input: $input:expr,
        $(scale: $scale:expr,)?
        text: $text:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            #[allow(unused_mut, unused_assignments)]
            let mut scale = decicalc::DEFAULT_SCALE;
            $(scale = $scale;)?
            let result = $crate::cases::compute(decicalc::Notation::$notation, scale, $input);
            pretty_assertions::assert_eq!(result.map(|v| v.to_string()), Ok($text.to_string()));
        }
    };
    (
        name: $name:ident,
        notation: $notation:ident,
        input: $input:expr,
        error: $pattern:pat $(,)?
    ) => {
        #[test]
        fn $name() {
            let result = $crate::cases::compute(
                decicalc::Notation::$notation,
                decicalc::DEFAULT_SCALE,
                $input,
            );
            assert!(
                matches!(result, Err($pattern)),
                "{:?} gave {:?}",
                $input,
                result
            );
        }
    };
}

pub struct EquivalentCase {
    pub name: &'static str,
    pub infix: &'static str,
    pub postfix: &'static str,
    pub value: Decimal,
}

/// The same computation written in both notations.
pub static EQUIVALENT_CASES: Lazy<Vec<EquivalentCase>> = Lazy::new(|| {
    vec![
        EquivalentCase {
            name: "precedence",
            infix: "2 + 3 * 4",
            postfix: "2 3 4 * +",
            value: dec("14"),
        },
        EquivalentCase {
            name: "brackets",
            infix: "(2 + 3) * 4",
            postfix: "2 3 + 4 *",
            value: dec("20"),
        },
        EquivalentCase {
            name: "left_associative_subtraction",
            infix: "10 - 4 - 3",
            postfix: "10 4 - 3 -",
            value: dec("3"),
        },
        EquivalentCase {
            name: "division_rounds",
            infix: "2 / 3",
            postfix: "2 3 /",
            value: dec("0.6667"),
        },
        EquivalentCase {
            name: "negative_numerals",
            infix: "-1.5 * -2",
            postfix: "-1.5 -2 *",
            value: dec("3"),
        },
        EquivalentCase {
            name: "exponents",
            infix: "2.5e3 / 5e-1",
            postfix: "2.5e3 5e-1 /",
            value: dec("5000"),
        },
        EquivalentCase {
            name: "nested",
            infix: "((1 + 2) * (3 + 4)) / 7",
            postfix: "1 2 + 3 4 + * 7 /",
            value: dec("3"),
        },
        EquivalentCase {
            name: "large_values",
            infix: "99999999999999999999 * 99999999999999999999",
            postfix: "99999999999999999999 99999999999999999999 *",
            value: dec("9999999999999999999800000000000000000001"),
        },
    ]
});
