use logos::Logos;
use nu_ansi_term::{Color, Style};
use reedline::{StyledText, ValidationResult, Validator};

use crate::lexer::{Token, calculate_depth};

#[derive(Debug)]
struct PaletteItem {
    token: Option<Token>,
    fg: Color,
}

/// Colors per token kind. `None` styles whitespace and unlexable input.
const PALETTE: &[PaletteItem] = &[
    PaletteItem { token: None, fg: Color::White },
    PaletteItem { token: Some(Token::Numeral), fg: Color::Cyan },
    PaletteItem { token: Some(Token::Operator), fg: Color::Yellow },
    PaletteItem { token: Some(Token::LParen), fg: Color::White },
    PaletteItem { token: Some(Token::RParen), fg: Color::White },
    PaletteItem { token: Some(Token::Equals), fg: Color::Magenta },
    PaletteItem { token: Some(Token::Command), fg: Color::Blue },
    PaletteItem { token: Some(Token::Other), fg: Color::Red },
];

fn color_of(token: Option<Token>) -> Color {
    PALETTE
        .iter()
        .find(|item| item.token == token)
        .map_or(PALETTE[0].fg, |item| item.fg)
}

pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut curr_end = 0;

        for (token_res, span) in Token::lexer(line).spanned() {
            if span.start > curr_end {
                output.push((Style::new(), line[curr_end..span.start].to_string()));
            }
            let style = Style::new().fg(color_of(token_res.ok()));
            output.push((style, line[span.clone()].to_string()));
            curr_end = span.end;
        }

        if curr_end < line.len() {
            output.push((Style::new(), line[curr_end..].to_string()));
        }
        output
    }
}

/// Keeps the editor open while a `(` is unclosed.
pub struct BracketValidator;

impl Validator for BracketValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match calculate_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reedline::Highlighter as _;

    fn plain(styled: &StyledText) -> String {
        styled.buffer.iter().map(|(_, text)| text.as_str()).collect()
    }

    #[test]
    fn test_highlight_preserves_text() {
        let line = "  2 * (3 + x) = ";
        let styled = Highlighter.highlight(line, 0);
        assert_eq!(plain(&styled), line);
    }

    #[test]
    fn test_numerals_and_operators_are_colored() {
        let styled = Highlighter.highlight("12+3", 0);
        let styles: Vec<_> = styled.buffer.iter().map(|(style, _)| style.foreground).collect();
        assert_eq!(
            styles,
            vec![Some(Color::Cyan), Some(Color::Yellow), Some(Color::Cyan)]
        );
    }

    #[test]
    fn test_validator_waits_for_closing_bracket() {
        assert!(matches!(
            BracketValidator.validate("2 * (3 +"),
            ValidationResult::Incomplete
        ));
        assert!(matches!(
            BracketValidator.validate("2 * (3 + 4)"),
            ValidationResult::Complete
        ));
        assert!(matches!(
            BracketValidator.validate("4)"),
            ValidationResult::Complete
        ));
    }
}
