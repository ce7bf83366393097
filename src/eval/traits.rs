//! Evaluator trait definition.
//!
//! Defines the interface for all evaluation strategies, enabling
//! pluggable arithmetic back ends behind the calculator session.

use crate::error::EvalError;

/// Trait for evaluating arithmetic expression text.
///
/// Implementations must be `Send + Sync` so a session can be moved
/// across threads. Every strategy accepts the same grammar (numbers,
/// `+ - * /`, parentheses, unary sign) and must produce the same value
/// for the same valid input.
///
/// # Examples
///
/// ```
/// use calc_rs::eval::{Evaluator, RecursiveEvaluator};
///
/// let evaluator = RecursiveEvaluator::new();
/// assert_eq!(evaluator.evaluate("2+3*4").unwrap(), 14.0);
/// ```
pub trait Evaluator: Send + Sync {
    /// Evaluates expression text to a value.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if the text cannot be tokenized or
    /// parsed, for a zero divisor, or when the result is non-finite.
    fn evaluate(&self, input: &str) -> Result<f64, EvalError>;

    /// Returns the name of the evaluation strategy.
    fn name(&self) -> &'static str;

    /// Returns a description of the evaluation strategy.
    fn description(&self) -> &'static str;
}
