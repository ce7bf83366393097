//! Expression AST and recursive-descent parser.
//!
//! Grammar, with standard precedence and left associativity:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := unary (('*' | '/') unary)*
//! unary      := ('-' | '+') unary | primary
//! primary    := NUMBER | '(' expression ')'
//! ```

use crate::error::EvalError;
use crate::eval::token::{Lexeme, Token};

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Arithmetic negation (`-x`).
    Negate,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

/// A parsed arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Number literal.
    Number(f64),

    /// Unary operation.
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        operand: Box<Expr>,
    },

    /// Binary operation.
    Binary {
        /// The operator.
        op: BinaryOp,
        /// Left-hand side.
        lhs: Box<Expr>,
        /// Right-hand side.
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Evaluates the expression tree to a value.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DivisionByZero`] for a zero divisor.
    pub fn evaluate(&self) -> std::result::Result<f64, EvalError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Unary {
                op: UnaryOp::Negate,
                operand,
            } => Ok(-operand.evaluate()?),
            Self::Binary { op, lhs, rhs } => {
                let lhs = lhs.evaluate()?;
                let rhs = rhs.evaluate()?;
                match op {
                    BinaryOp::Add => Ok(lhs + rhs),
                    BinaryOp::Subtract => Ok(lhs - rhs),
                    BinaryOp::Multiply => Ok(lhs * rhs),
                    BinaryOp::Divide => {
                        if rhs == 0.0 {
                            Err(EvalError::DivisionByZero)
                        } else {
                            Ok(lhs / rhs)
                        }
                    }
                }
            }
        }
    }
}

/// Recursive-descent parser over a lexeme stream.
#[derive(Debug)]
pub struct Parser<'a> {
    lexemes: &'a [Lexeme],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Parses a complete expression from a lexeme stream.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::EmptyExpression`] for an empty stream,
    /// [`EvalError::TrailingInput`] if tokens remain after a complete
    /// expression, and the parse errors of the grammar rules otherwise.
    pub fn parse(lexemes: &'a [Lexeme]) -> std::result::Result<Expr, EvalError> {
        if lexemes.is_empty() {
            return Err(EvalError::EmptyExpression);
        }

        let mut parser = Self { lexemes, pos: 0 };
        let expr = parser.expression()?;

        if let Some(lexeme) = parser.peek() {
            return Err(EvalError::TrailingInput {
                token: lexeme.token.to_string(),
            });
        }

        Ok(expr)
    }

    fn peek(&self) -> Option<&Lexeme> {
        self.lexemes.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn expression(&mut self) -> std::result::Result<Expr, EvalError> {
        let mut lhs = self.term()?;

        while let Some(lexeme) = self.peek() {
            let op = match lexeme.token {
                Token::Plus => BinaryOp::Add,
                Token::Minus => BinaryOp::Subtract,
                _ => break,
            };
            self.advance();
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn term(&mut self) -> std::result::Result<Expr, EvalError> {
        let mut lhs = self.unary()?;

        while let Some(lexeme) = self.peek() {
            let op = match lexeme.token {
                Token::Star => BinaryOp::Multiply,
                Token::Slash => BinaryOp::Divide,
                _ => break,
            };
            self.advance();
            let rhs = self.unary()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn unary(&mut self) -> std::result::Result<Expr, EvalError> {
        match self.peek().map(|lexeme| lexeme.token) {
            Some(Token::Minus) => {
                self.advance();
                Ok(Expr::Unary {
                    op: UnaryOp::Negate,
                    operand: Box::new(self.unary()?),
                })
            }
            // Unary plus is accepted and has no effect
            Some(Token::Plus) => {
                self.advance();
                self.unary()
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> std::result::Result<Expr, EvalError> {
        let Some(lexeme) = self.peek() else {
            return Err(EvalError::UnexpectedEnd);
        };

        match lexeme.token {
            Token::Number(value) => {
                self.advance();
                Ok(Expr::Number(value))
            }
            Token::OpenParen => {
                self.advance();
                let expr = self.expression()?;
                match self.peek() {
                    Some(lexeme) if lexeme.token == Token::CloseParen => {
                        self.advance();
                        Ok(expr)
                    }
                    Some(lexeme) => Err(EvalError::UnexpectedToken {
                        token: lexeme.token.to_string(),
                    }),
                    None => Err(EvalError::UnmatchedParen),
                }
            }
            token => Err(EvalError::UnexpectedToken {
                token: token.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::token::tokenize;

    fn parse(input: &str) -> std::result::Result<Expr, EvalError> {
        Parser::parse(&tokenize(input).unwrap())
    }

    fn eval(input: &str) -> std::result::Result<f64, EvalError> {
        parse(input)?.evaluate()
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse("42").unwrap(), Expr::Number(42.0));
    }

    #[test]
    fn test_parse_precedence() {
        // 2+3*4 parses as 2+(3*4)
        let expr = parse("2+3*4").unwrap();
        assert_eq!(
            expr,
            Expr::Binary {
                op: BinaryOp::Add,
                lhs: Box::new(Expr::Number(2.0)),
                rhs: Box::new(Expr::Binary {
                    op: BinaryOp::Multiply,
                    lhs: Box::new(Expr::Number(3.0)),
                    rhs: Box::new(Expr::Number(4.0)),
                }),
            }
        );
    }

    #[test]
    fn test_parse_left_associativity() {
        // 8-2-1 parses as (8-2)-1, not 8-(2-1)
        assert_eq!(eval("8-2-1").unwrap(), 5.0);
        assert_eq!(eval("16/4/2").unwrap(), 2.0);
    }

    #[test]
    fn test_parse_parentheses() {
        assert_eq!(eval("(2+3)*4").unwrap(), 20.0);
        assert_eq!(eval("((1))").unwrap(), 1.0);
    }

    #[test]
    fn test_parse_unary() {
        assert_eq!(eval("-5").unwrap(), -5.0);
        assert_eq!(eval("--5").unwrap(), 5.0);
        assert_eq!(eval("+5").unwrap(), 5.0);
        assert_eq!(eval("2*-3").unwrap(), -6.0);
        assert_eq!(eval("-(2+3)").unwrap(), -5.0);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse("").unwrap_err(), EvalError::EmptyExpression);
    }

    #[test]
    fn test_parse_dangling_operator() {
        assert_eq!(parse("2+").unwrap_err(), EvalError::UnexpectedEnd);
        assert_eq!(parse("2*").unwrap_err(), EvalError::UnexpectedEnd);
    }

    #[test]
    fn test_parse_unmatched_paren() {
        assert_eq!(parse("(1+2").unwrap_err(), EvalError::UnmatchedParen);
    }

    #[test]
    fn test_parse_trailing_input() {
        assert_eq!(
            parse("1 2").unwrap_err(),
            EvalError::TrailingInput {
                token: "2".to_string()
            }
        );
        assert_eq!(
            parse("1)").unwrap_err(),
            EvalError::TrailingInput {
                token: ")".to_string()
            }
        );
    }

    #[test]
    fn test_parse_unexpected_token() {
        assert_eq!(
            parse("*2").unwrap_err(),
            EvalError::UnexpectedToken {
                token: "*".to_string()
            }
        );
        assert_eq!(
            parse("(1+2*)").unwrap_err(),
            EvalError::UnexpectedToken {
                token: ")".to_string()
            }
        );
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        assert_eq!(eval("1/0").unwrap_err(), EvalError::DivisionByZero);
        assert_eq!(eval("0/0").unwrap_err(), EvalError::DivisionByZero);
        assert_eq!(eval("1/(2-2)").unwrap_err(), EvalError::DivisionByZero);
    }

    #[test]
    fn test_evaluate_decimal() {
        assert_eq!(eval("0.5*4").unwrap(), 2.0);
        assert_eq!(eval("1/4").unwrap(), 0.25);
    }
}
