//! Error rendering using ariadne
//!
//! Turns [`EvalError`]s and warning [`Diagnostic`]s into annotated snippets of
//! the expression they came from.

use crate::{Diagnostic, EvalError, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<input>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use decicalc::{Calculator, InfixCalculator, render_error};
///
/// let source = "1 + (2 *";
/// if let Err(e) = InfixCalculator::new().compute(source) {
///     render_error(&e, source);
/// }
/// ```
pub fn render_error(error: &EvalError, source: &str) {
    render_error_to_writer(error, source, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(
    error: &EvalError,
    source: &str,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_error_to_writer(error, source, writer, true)
}

/// Render an error to a String (useful for logs and UIs)
pub fn render_error_to_string(error: &EvalError, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &EvalError, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render warnings (such as text after a terminating `=`) to stderr
pub fn render_warnings(warnings: &[Diagnostic], source: &str) {
    render_diagnostics(source, warnings, &mut std::io::stderr(), true).ok();
}

/// Render warnings to a String
pub fn render_warnings_to_string(warnings: &[Diagnostic], source: &str) -> String {
    let mut buf = Vec::new();
    render_diagnostics(source, warnings, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render warnings to a String without color codes
pub fn render_warnings_to_string_no_color(warnings: &[Diagnostic], source: &str) -> String {
    let mut buf = Vec::new();
    render_diagnostics(source, warnings, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &EvalError,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let diagnostic = error.to_diagnostic();
    match error.span() {
        Some(span) if !span.0.is_empty() => {
            render_diagnostics(source, &[diagnostic], writer, use_color)
        }
        // Nothing to point at: an empty expression, or an error not tied to
        // the input.
        _ => {
            write!(writer, "Error")?;
            if let Some(code) = &diagnostic.code {
                write!(writer, "[{}]", code)?;
            }
            writeln!(writer, ": {}", diagnostic.message)?;
            for help_msg in &diagnostic.help {
                writeln!(writer, "  help: {}", help_msg)?;
            }
            Ok(())
        }
    }
}

fn render_diagnostics(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let kind = match diag.severity {
            Severity::Error => ReportKind::Error,
            Severity::Warning => ReportKind::Warning,
            Severity::Info => ReportKind::Advice,
        };

        let mut report = Report::build(kind, (SOURCE_ID, diag.span.0.clone()))
            .with_message(&diag.message)
            .with_config(ariadne::Config::default().with_color(use_color));

        if let Some(code) = &diag.code {
            report = report.with_code(code);
        }

        let color = colors.next();
        report = report.with_label(
            Label::new((SOURCE_ID, diag.span.0.clone()))
                .with_message(&diag.message)
                .with_color(color),
        );

        for related in &diag.related {
            let color = colors.next();
            report = report.with_label(
                Label::new((SOURCE_ID, related.span.0.clone()))
                    .with_message(&related.message)
                    .with_color(color),
            );
        }

        for help_msg in &diag.help {
            report = report.with_help(help_msg);
        }

        report
            .finish()
            .write((SOURCE_ID, Source::from(source)), &mut *writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Calculator, InfixCalculator, PostfixCalculator};

    #[test]
    fn test_render_bracket_error() {
        let source = "1 + (2 * 3";
        let err = InfixCalculator::new().compute(source).unwrap_err();
        let output = render_error_to_string_no_color(&err, source);

        assert!(output.contains("Error"));
        assert!(output.contains("C003"));
        assert!(output.contains("1 + (2 * 3"));
        assert!(output.contains("Add the missing ')'"));
    }

    #[test]
    fn test_render_division_by_zero_labels_divisor() {
        let source = "4 0 /";
        let err = PostfixCalculator::new().compute(source).unwrap_err();
        let output = render_error_to_string_no_color(&err, source);

        assert!(output.contains("Division by zero"));
        assert!(output.contains("this evaluates to zero"));
    }

    #[test]
    fn test_render_without_span() {
        let source = "";
        let err = InfixCalculator::new().compute(source).unwrap_err();
        let output = render_error_to_string_no_color(&err, source);
        assert_eq!(output.lines().next(), Some("Error[C001]: Empty expression"));

        let err = EvalError::InvalidScale { scale: -2 };
        let output = render_error_to_string_no_color(&err, "");
        assert_eq!(
            output,
            "Error[C010]: Scale must be between 0 and 10000: -2\n"
        );
    }

    #[test]
    fn test_render_warnings() {
        let source = "1 + 1 = 3";
        let evaluation = InfixCalculator::new().evaluate(source).unwrap();
        let output = render_warnings_to_string_no_color(&evaluation.warnings, source);

        assert!(output.contains("Warning"));
        assert!(output.contains("W001"));
        assert!(output.lines().count() > 1);
    }
}
