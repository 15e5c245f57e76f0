//! Lexical building blocks shared by the infix and postfix evaluators.

pub mod numeral;

use core::ops::Range;

pub use numeral::{NumeralError, parse_numeral, scan_numeral};

/// Byte range into the expression that was passed to `compute`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }

    /// A span covering the single character starting at `start`.
    pub fn of_char(start: usize, ch: char) -> Self {
        Self(start..start + ch.len_utf8())
    }

    pub fn combine(a: &Span, b: &Span) -> Span {
        Span::new(a.0.start, b.0.end)
    }

    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.0.start..self.0.end]
    }
}

/// Returns the character starting at byte `pos`, if any.
#[inline]
pub(crate) fn char_at(source: &str, pos: usize) -> Option<char> {
    source.get(pos..).and_then(|rest| rest.chars().next())
}
