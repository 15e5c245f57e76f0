//! Diagnostics exposed to front ends.
//!
//! Errors and warnings produced by the evaluators are converted to
//! [`Diagnostic`]s at the API boundary so that a shell, a renderer or a test
//! can display them without matching on every error variant.

use core::fmt;

use crate::syntax::Span;

/// A diagnostic message (error or warning) with source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Related locations that provide additional context.
    pub related: Vec<RelatedInfo>,

    /// Suggestions on how to fix the issue.
    pub help: Vec<String>,

    /// Optional stable code (e.g., "C001") for documentation lookup.
    pub code: Option<String>,
}

impl Diagnostic {
    /// Warning emitted when text follows the terminating `=` of an infix
    /// expression.
    pub fn ignored_after_equals(span: Span) -> Self {
        Self {
            severity: Severity::Warning,
            message: "the part after the terminating = sign was ignored".to_string(),
            span,
            related: Vec::new(),
            help: vec!["Remove everything after '='".to_string()],
            code: Some("W001".to_string()),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;

        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }

        for help_msg in &self.help {
            write!(f, "\nhelp: {}", help_msg)?;
        }

        Ok(())
    }
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - no result was produced.
    Error,
    /// Warning - a result was produced, but part of the input was ignored.
    Warning,
    /// Info - informational message.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Related information for a diagnostic (e.g., "this evaluates to zero").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    /// Source location of the related information.
    pub span: Span,

    /// Message explaining the relevance.
    pub message: String,
}
