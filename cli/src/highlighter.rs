use nu_ansi_term::{Color, Style};
use reedline::{StyledText, ValidationResult, Validator};

use crate::lexer::{Token, calculate_depth, classify};

fn style_of(token: Option<Token>) -> Style {
    let fg = match token {
        Some(Token::Number) => Color::Cyan,
        Some(Token::Operator) => Color::White,
        Some(Token::Keyword) => Color::Magenta,
        Some(Token::LParen | Token::RParen) => Color::DarkGray,
        Some(Token::Other) | None => Color::Red,
    };
    Style::new().fg(fg)
}

/// Token-based syntax highlighting for the REPL.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut curr_end = 0;

        for (token, span) in classify(line) {
            // Whitespace skipped by the lexer keeps its place in the line.
            if span.start > curr_end {
                output.push((Style::new(), line[curr_end..span.start].to_string()));
            }
            curr_end = span.end;
            output.push((style_of(token), line[span].to_string()));
        }

        if curr_end < line.len() {
            output.push((Style::new(), line[curr_end..].to_string()));
        }

        output
    }
}

/// Keeps reading lines while parentheses are open.
pub struct ParenValidator;

impl Validator for ParenValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        if calculate_depth(line) > 0 {
            ValidationResult::Incomplete
        } else {
            ValidationResult::Complete
        }
    }
}
