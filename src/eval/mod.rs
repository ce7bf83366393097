//! Expression evaluation for calc-rs.
//!
//! This module provides a trait-based system for evaluating arithmetic
//! expression text. Two strategies are available:
//!
//! - **Recursive**: tokenize, parse to an AST, fold the tree (default)
//! - **Shunting**: tokenize and evaluate directly with a shunting-yard
//!   operator/value stack pair
//!
//! Both accept the same grammar and agree on every valid input.

pub mod ast;
pub mod recursive;
pub mod shunting;
pub mod token;
pub mod traits;

pub use ast::{BinaryOp, Expr, Parser, UnaryOp};
pub use recursive::RecursiveEvaluator;
pub use shunting::ShuntingEvaluator;
pub use token::{Lexeme, Token, tokenize};
pub use traits::Evaluator;

/// Name of the default evaluation strategy.
pub const DEFAULT_STRATEGY: &str = "recursive";

/// Creates the default evaluator (recursive-descent).
#[must_use]
pub const fn default_evaluator() -> RecursiveEvaluator {
    RecursiveEvaluator::new()
}

/// Creates an evaluator by strategy name.
///
/// # Arguments
///
/// * `name` - Strategy name: "recursive" or "shunting".
///
/// # Returns
///
/// A boxed evaluator trait object, or an error for unknown strategies.
///
/// # Errors
///
/// Returns [`crate::error::EvalError::UnknownStrategy`] if the strategy
/// name is not recognized.
pub fn create_evaluator(name: &str) -> crate::error::Result<Box<dyn Evaluator>> {
    match name.to_lowercase().as_str() {
        "recursive" => Ok(Box::new(RecursiveEvaluator::new())),
        "shunting" => Ok(Box::new(ShuntingEvaluator::new())),
        _ => Err(crate::error::EvalError::UnknownStrategy {
            name: name.to_string(),
        }
        .into()),
    }
}

/// Lists available evaluation strategy names.
#[must_use]
pub fn available_strategies() -> Vec<&'static str> {
    vec!["recursive", "shunting"]
}

/// Formats an evaluation result for display.
///
/// Uses `f64` `Display` semantics (integral values print without a
/// fractional part, never scientific notation); negative zero is
/// normalized to `"0"`.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
