//! Shunting-yard evaluation strategy.
//!
//! Evaluates the token stream directly with an operator stack and a
//! value stack, without building an AST. Produces the same values as the
//! recursive strategy for every valid expression.

use crate::error::EvalError;
use crate::eval::token::{Lexeme, Token, tokenize};
use crate::eval::traits::Evaluator;

/// Operator stack entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Negate,
    Open,
}

impl StackOp {
    const fn precedence(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
            Self::Negate => 3,
        }
    }
}

/// Evaluator using the shunting-yard algorithm over two stacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShuntingEvaluator;

impl ShuntingEvaluator {
    /// Creates a new shunting-yard evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn unexpected(lexeme: &Lexeme) -> EvalError {
    EvalError::UnexpectedToken {
        token: lexeme.token.to_string(),
    }
}

fn apply(op: StackOp, values: &mut Vec<f64>) -> Result<(), EvalError> {
    if op == StackOp::Negate {
        let operand = values.pop().ok_or(EvalError::UnexpectedEnd)?;
        values.push(-operand);
        return Ok(());
    }

    let rhs = values.pop().ok_or(EvalError::UnexpectedEnd)?;
    let lhs = values.pop().ok_or(EvalError::UnexpectedEnd)?;
    let value = match op {
        StackOp::Add => lhs + rhs,
        StackOp::Subtract => lhs - rhs,
        StackOp::Multiply => lhs * rhs,
        StackOp::Divide => {
            if rhs == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            lhs / rhs
        }
        StackOp::Negate | StackOp::Open => return Err(EvalError::UnexpectedEnd),
    };
    values.push(value);
    Ok(())
}

impl Evaluator for ShuntingEvaluator {
    fn evaluate(&self, input: &str) -> Result<f64, EvalError> {
        let lexemes = tokenize(input)?;
        if lexemes.is_empty() {
            return Err(EvalError::EmptyExpression);
        }

        let mut values: Vec<f64> = Vec::new();
        let mut ops: Vec<StackOp> = Vec::new();
        // Whether the next token must start an operand; drives the
        // unary/binary reading of '+' and '-'.
        let mut expect_operand = true;

        for lexeme in &lexemes {
            match lexeme.token {
                Token::Number(value) => {
                    if !expect_operand {
                        return Err(unexpected(lexeme));
                    }
                    values.push(value);
                    expect_operand = false;
                }
                Token::OpenParen => {
                    if !expect_operand {
                        return Err(unexpected(lexeme));
                    }
                    ops.push(StackOp::Open);
                }
                Token::CloseParen => {
                    if expect_operand {
                        return Err(unexpected(lexeme));
                    }
                    loop {
                        match ops.pop() {
                            Some(StackOp::Open) => break,
                            Some(op) => apply(op, &mut values)?,
                            None => return Err(EvalError::UnmatchedParen),
                        }
                    }
                }
                Token::Plus | Token::Minus | Token::Star | Token::Slash => {
                    if expect_operand {
                        match lexeme.token {
                            Token::Minus => ops.push(StackOp::Negate),
                            // Unary plus has no effect
                            Token::Plus => {}
                            _ => return Err(unexpected(lexeme)),
                        }
                    } else {
                        let op = match lexeme.token {
                            Token::Plus => StackOp::Add,
                            Token::Minus => StackOp::Subtract,
                            Token::Star => StackOp::Multiply,
                            _ => StackOp::Divide,
                        };
                        while let Some(&top) = ops.last() {
                            if top == StackOp::Open || top.precedence() < op.precedence() {
                                break;
                            }
                            ops.pop();
                            apply(top, &mut values)?;
                        }
                        ops.push(op);
                        expect_operand = true;
                    }
                }
            }
        }

        if expect_operand {
            return Err(EvalError::UnexpectedEnd);
        }

        while let Some(op) = ops.pop() {
            if op == StackOp::Open {
                return Err(EvalError::UnmatchedParen);
            }
            apply(op, &mut values)?;
        }

        let value = values.pop().ok_or(EvalError::UnexpectedEnd)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite)
        }
    }

    fn name(&self) -> &'static str {
        "shunting"
    }

    fn description(&self) -> &'static str {
        "Shunting-yard direct evaluation over operator and value stacks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("2+2", 4.0 ; "addition")]
    #[test_case("10-4", 6.0 ; "subtraction")]
    #[test_case("2+3*4", 14.0 ; "precedence")]
    #[test_case("(2+3)*4", 20.0 ; "grouping")]
    #[test_case("8-2-1", 5.0 ; "left assoc subtraction")]
    #[test_case("16/4/2", 2.0 ; "left assoc division")]
    #[test_case("-5+3", -2.0 ; "unary minus")]
    #[test_case("--5", 5.0 ; "double negation")]
    #[test_case("2*-3", -6.0 ; "negated operand")]
    #[test_case("-(2+3)", -5.0 ; "negated group")]
    fn test_shunting_evaluate(input: &str, expected: f64) {
        let evaluator = ShuntingEvaluator::new();
        assert_eq!(evaluator.evaluate(input).unwrap(), expected);
    }

    #[test]
    fn test_shunting_rejects_invalid() {
        let evaluator = ShuntingEvaluator::new();
        assert_eq!(
            evaluator.evaluate("").unwrap_err(),
            EvalError::EmptyExpression
        );
        assert_eq!(
            evaluator.evaluate("2+").unwrap_err(),
            EvalError::UnexpectedEnd
        );
        assert_eq!(
            evaluator.evaluate("(1+2").unwrap_err(),
            EvalError::UnmatchedParen
        );
        assert!(evaluator.evaluate("()").is_err());
        assert!(evaluator.evaluate("2 3").is_err());
        assert!(evaluator.evaluate("*2").is_err());
    }

    #[test]
    fn test_shunting_division_by_zero() {
        let evaluator = ShuntingEvaluator::new();
        assert_eq!(
            evaluator.evaluate("1/0").unwrap_err(),
            EvalError::DivisionByZero
        );
        assert_eq!(
            evaluator.evaluate("5/(3-3)").unwrap_err(),
            EvalError::DivisionByZero
        );
    }

    #[test]
    fn test_shunting_metadata() {
        let evaluator = ShuntingEvaluator::new();
        assert_eq!(evaluator.name(), "shunting");
        assert!(!evaluator.description().is_empty());
    }
}
