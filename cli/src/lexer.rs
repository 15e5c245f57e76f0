use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\n\f]+")]
pub enum Token {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[regex(r"[+\-*/]")]
    Operator,

    #[token("=")]
    Equals,

    // Unsigned; a leading sign lexes as an operator.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+\-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+\-]?[0-9]+)?")]
    Numeral,

    #[regex(r":[A-Za-z]*")]
    Command,

    #[regex(r"[^ \t\n\f()+\-*/=:0-9.]+")]
    Other,
}

/// Net number of unclosed `(` in `buffer`, or `None` if it does not lex.
///
/// Used to keep reading lines while a bracket is open. A surplus of `)` counts
/// as zero so the evaluator gets to report it.
pub fn calculate_depth(buffer: &str) -> Option<usize> {
    let mut depth: isize = 0;

    for token_res in Token::lexer(buffer) {
        match token_res {
            Ok(Token::LParen) => depth += 1,
            Ok(Token::RParen) => depth -= 1,
            Ok(_) => {}
            Err(_) => return None,
        }
    }

    if depth < 0 {
        Some(0)
    } else {
        Some(depth as usize)
    }
}
