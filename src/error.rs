//! Error types for calc-rs operations.
//!
//! This module provides the error hierarchy using `thiserror` for all
//! calculator operations including tokenizing, parsing, evaluation, and
//! CLI commands.

use thiserror::Error;

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for calculator operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Expression evaluation errors (tokenizing, parsing, arithmetic).
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// I/O errors (terminal read/write).
    #[error("I/O error: {0}")]
    Io(String),
}

/// Evaluation-specific errors.
///
/// Every way an accumulated expression can fail to produce a value is a
/// variant here. At the session surface all of these collapse to the
/// `"Error"` readout marker; the CLI `eval` command reports them directly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The expression text is empty (or whitespace only).
    #[error("empty expression")]
    EmptyExpression,

    /// A character outside the arithmetic grammar was encountered.
    #[error("unexpected character '{ch}' at byte offset {offset}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset where it was found.
        offset: usize,
    },

    /// A numeric literal could not be parsed (e.g. `1.2.3`).
    #[error("invalid number literal: {literal}")]
    InvalidNumber {
        /// The literal text that failed to parse.
        literal: String,
    },

    /// A token appeared where the grammar does not allow it.
    #[error("unexpected token '{token}'")]
    UnexpectedToken {
        /// Display form of the offending token.
        token: String,
    },

    /// The expression ended where an operand or `)` was required.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// An opening parenthesis was never closed.
    #[error("unmatched parenthesis")]
    UnmatchedParen,

    /// Tokens remained after a complete expression was parsed.
    #[error("trailing input after expression: '{token}'")]
    TrailingInput {
        /// Display form of the first trailing token.
        token: String,
    },

    /// Division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The computed value is not a finite number.
    #[error("result is not a finite number")]
    NonFinite,

    /// Unknown evaluator strategy name.
    #[error("unknown evaluator strategy: {name}")]
    UnknownStrategy {
        /// Name of the unknown strategy.
        name: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
