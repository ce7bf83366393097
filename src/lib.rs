//! # calc-rs
//!
//! Keystroke-driven arithmetic calculator.
//!
//! calc-rs accumulates keystroke tokens into an input buffer, evaluates
//! the buffer as an arithmetic expression on demand, and renders the
//! result (or an error marker) to a display readout. Evaluation is done
//! by a dedicated arithmetic parser restricted to numbers, `+ - * /`,
//! and parentheses — user input is never handed to a general-purpose
//! code evaluator.
//!
//! ## Features
//!
//! - **Session**: input buffer, display readout, and the
//!   accumulating/settled state machine
//! - **Evaluation strategies**: recursive-descent AST fold (default) and
//!   shunting-yard direct evaluation, pluggable behind one trait
//! - **CLI**: one-shot evaluation, token inspection, and an interactive
//!   REPL with text or JSON output

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod eval;
pub mod repl;

// Re-export commonly used types at crate root
pub use error::{CommandError, Error, EvalError, Result};

// Re-export core domain types
pub use crate::core::{CLEAR_READOUT, ERROR_MARKER, Readout, Session, SessionState};

// Re-export evaluation types
pub use eval::{
    DEFAULT_STRATEGY, Evaluator, Expr, Lexeme, Parser, RecursiveEvaluator, ShuntingEvaluator,
    Token, available_strategies, create_evaluator, default_evaluator, format_value, tokenize,
};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
