//! Recursive-descent evaluation strategy.
//!
//! Tokenizes, parses to an AST, then folds the tree. This is the default
//! strategy.

use crate::error::EvalError;
use crate::eval::ast::Parser;
use crate::eval::token::tokenize;
use crate::eval::traits::Evaluator;

/// Evaluator that parses to an AST and folds it.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveEvaluator;

impl RecursiveEvaluator {
    /// Creates a new recursive-descent evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Evaluator for RecursiveEvaluator {
    fn evaluate(&self, input: &str) -> Result<f64, EvalError> {
        let lexemes = tokenize(input)?;
        let expr = Parser::parse(&lexemes)?;
        let value = expr.evaluate()?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite)
        }
    }

    fn name(&self) -> &'static str {
        "recursive"
    }

    fn description(&self) -> &'static str {
        "Recursive-descent parse to an AST, then fold (default)"
    }
}
