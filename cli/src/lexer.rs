use std::ops::Range;

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[regex(r"-?[0-9]+(\.[0-9]+)?", priority = 3)]
    Number,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("^")]
    Operator,

    #[token("min")]
    #[token("max")]
    Keyword,

    // Anything else up to the next delimiter; the parser will reject it.
    #[regex(r"[^ \t\r\n\f()]+", priority = 1)]
    Other,
}

/// Number of parentheses still open at the end of `buffer`.
///
/// Surplus closing parentheses count as balanced; the parser reports them.
pub fn calculate_depth(buffer: &str) -> usize {
    let mut depth: isize = 0;

    for token in Token::lexer(buffer).flatten() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => depth -= 1,
            _ => {}
        }
    }

    depth.max(0) as usize
}

/// Lex `source` for highlighting, resolving tokens by their grammar position.
///
/// A signed literal such as `-1` right after `(`, or leading a bare top-level
/// form with more input after it, is read by the parser as the `-` operator
/// followed by a number, and is split the same way here.
pub fn classify(source: &str) -> Vec<(Option<Token>, Range<usize>)> {
    let raw: Vec<_> = Token::lexer(source)
        .spanned()
        .map(|(token, span)| (token.ok(), span))
        .collect();

    let mut tokens = Vec::with_capacity(raw.len() + 1);
    for (i, (token, span)) in raw.iter().cloned().enumerate() {
        let in_operator_position = match i {
            0 => raw.len() > 1,
            _ => raw[i - 1].0 == Some(Token::LParen),
        };
        let signed_number =
            token == Some(Token::Number) && source[span.clone()].starts_with('-');
        if signed_number && in_operator_position {
            tokens.push((Some(Token::Operator), span.start..span.start + 1));
            tokens.push((Some(Token::Number), span.start + 1..span.end));
        } else {
            tokens.push((token, span));
        }
    }
    tokens
}
