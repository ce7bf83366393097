//! Tokenizer for arithmetic expressions.
//!
//! Turns raw expression text into a flat token stream. The accepted
//! alphabet is deliberately small: decimal number literals, the four
//! binary operators, parentheses, and ASCII whitespace. Anything else is
//! rejected with its byte offset.

use crate::error::EvalError;
use std::fmt;

/// A single lexical token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Decimal number literal.
    Number(f64),

    /// `+`
    Plus,

    /// `-`
    Minus,

    /// `*`
    Star,

    /// `/`
    Slash,

    /// `(`
    OpenParen,

    /// `)`
    CloseParen,
}

impl Token {
    /// Returns a short kind name for this token.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Star => "star",
            Self::Slash => "slash",
            Self::OpenParen => "open-paren",
            Self::CloseParen => "close-paren",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
        }
    }
}

/// A token paired with the byte offset where it starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lexeme {
    /// The token itself.
    pub token: Token,

    /// Byte offset of the token's first character in the input.
    pub offset: usize,
}

/// Tokenizes expression text into a lexeme stream.
///
/// ASCII whitespace is skipped. Number literals are maximal runs of
/// digits and `.`, parsed as `f64` (so `.5` and `5.` are accepted while
/// `1.2.3` is not).
///
/// # Errors
///
/// Returns [`EvalError::UnexpectedChar`] for characters outside the
/// grammar and [`EvalError::InvalidNumber`] for malformed literals.
pub fn tokenize(input: &str) -> std::result::Result<Vec<Lexeme>, EvalError> {
    let mut lexemes = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(offset, ch)) = chars.peek() {
        match ch {
            c if c.is_ascii_whitespace() => {
                chars.next();
            }
            '+' => {
                chars.next();
                lexemes.push(Lexeme {
                    token: Token::Plus,
                    offset,
                });
            }
            '-' => {
                chars.next();
                lexemes.push(Lexeme {
                    token: Token::Minus,
                    offset,
                });
            }
            '*' => {
                chars.next();
                lexemes.push(Lexeme {
                    token: Token::Star,
                    offset,
                });
            }
            '/' => {
                chars.next();
                lexemes.push(Lexeme {
                    token: Token::Slash,
                    offset,
                });
            }
            '(' => {
                chars.next();
                lexemes.push(Lexeme {
                    token: Token::OpenParen,
                    offset,
                });
            }
            ')' => {
                chars.next();
                lexemes.push(Lexeme {
                    token: Token::CloseParen,
                    offset,
                });
            }
            '0'..='9' | '.' => {
                let mut end = offset;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let literal = &input[offset..end];
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidNumber {
                        literal: literal.to_string(),
                    })?;
                lexemes.push(Lexeme {
                    token: Token::Number(value),
                    offset,
                });
            }
            other => {
                return Err(EvalError::UnexpectedChar { ch: other, offset });
            }
        }
    }

    Ok(lexemes)
}
