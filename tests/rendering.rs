use decicalc::{
    Calculator, EvalError, InfixCalculator, PostfixCalculator, render_error_to_string_no_color,
    render_warnings_to_string_no_color,
};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn infix_report(source: &str) -> String {
    let err = InfixCalculator::new().compute(source).unwrap_err();
    render_error_to_string_no_color(&err, source)
}

#[test]
fn empty_expression_has_no_snippet() {
    assert_eq!(
        infix_report(""),
        indoc! {"
            Error[C001]: Empty expression
              help: Type a numeral or an expression such as `1 + 2`
        "}
    );
}

#[test]
fn invalid_scale_has_no_snippet() {
    let mut calc = PostfixCalculator::new();
    let err = calc.set_scale(-7).unwrap_err();
    assert_eq!(
        render_error_to_string_no_color(&err, ""),
        "Error[C010]: Scale must be between 0 and 10000: -7\n"
    );
}

#[test]
fn snippet_shows_source_and_help() {
    let report = infix_report("2 * (3 + 4");
    assert!(report.contains("[C003] Error: Unmatched bracket"), "{}", report);
    assert!(report.contains("2 * (3 + 4"), "{}", report);
    assert!(report.contains("Add the missing ')'"), "{}", report);
}

#[test]
fn nested_error_points_into_brackets() {
    let source = "1 + (2 $ 3)";
    let err = InfixCalculator::new().compute(source).unwrap_err();
    assert!(matches!(err, EvalError::UnexpectedCharacter { found: '$', .. }));
    let report = render_error_to_string_no_color(&err, source);
    assert!(report.contains("Unrecognised symbol '$'"), "{}", report);
}

#[test]
fn division_by_zero_marks_divisor() {
    let report = infix_report("8 / (4 - 4)");
    assert!(report.contains("Division by zero"), "{}", report);
    assert!(report.contains("this evaluates to zero"), "{}", report);
}

#[test]
fn warning_after_equals_is_rendered() {
    let source = "3 * 3 = 10";
    let evaluation = InfixCalculator::new().evaluate(source).unwrap();
    assert_eq!(evaluation.warnings.len(), 1);

    let report = render_warnings_to_string_no_color(&evaluation.warnings, source);
    assert!(report.contains("[W001] Warning"), "{}", report);
    assert!(report.contains("terminating = sign was ignored"), "{}", report);
}
