//! Recursive-descent parser for expressions in `x`.
//!
//! ```text
//! expression := term (("+" | "-") term)*
//! term       := unary (("*" | "/") unary | unary)*     // juxtaposition multiplies
//! unary      := ("-" | "+") unary | power
//! power      := atom ("^" unary)?                      // right associative
//! atom       := number | "x" | "e" | "pi" | func "(" expression ")" | "(" expression ")"
//! ```
//!
//! Implicit multiplication binds like `*`, so `1/2x` is `(1/2) * x`.
//! `e^u` is parsed as `exp(u)`.

use std::f64::consts::{E, PI};
use std::ops::Range;

use super::errors::ExpressionError;
use super::expr::{BinOp, Expr, Func};
use super::lexer::{lex, Token};

/// Parses `source` into an [`Expr`].
pub fn parse(source: &str) -> Result<Expr, ExpressionError> {
    let tokens = lex(source)?;
    if tokens.is_empty() {
        return Err(ExpressionError::Empty);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expression()?;

    match parser.next() {
        None => Ok(expr),
        Some((token, span)) => Err(ExpressionError::UnexpectedToken {
            found: token.to_string(),
            expected: "operator or end of input",
            span,
        }),
    }
}

struct Parser {
    tokens: Vec<(Token, Range<usize>)>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn next(&mut self) -> Option<(Token, Range<usize>)> {
        let item = self.tokens.get(self.pos).cloned();
        if item.is_some() {
            self.pos += 1;
        }
        item
    }

    fn expect(&mut self, wanted: Token, expected: &'static str) -> Result<(), ExpressionError> {
        match self.next() {
            Some((token, _)) if token == wanted => Ok(()),
            Some((token, span)) => Err(ExpressionError::UnexpectedToken {
                found: token.to_string(),
                expected,
                span,
            }),
            None => Err(ExpressionError::UnexpectedEnd { expected }),
        }
    }

    fn expression(&mut self) -> Result<Expr, ExpressionError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinOp::Add,
                Some(Token::Minus) => BinOp::Sub,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    fn term(&mut self) -> Result<Expr, ExpressionError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    BinOp::Mul
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    BinOp::Div
                }
                Some(Token::Number(_) | Token::Identifier(_) | Token::LParen) => BinOp::Mul,
                _ => return Ok(lhs),
            };
            let rhs = self.unary()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    fn unary(&mut self) -> Result<Expr, ExpressionError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(Expr::Neg(Box::new(self.unary()?)))
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr, ExpressionError> {
        let base = self.atom()?;
        if let Some(Token::Caret) = self.peek() {
            self.pos += 1;
            let exponent = self.unary()?;
            if base == Expr::Num(E) {
                return Ok(Expr::call(Func::Exp, exponent));
            }
            return Ok(Expr::binary(BinOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr, ExpressionError> {
        const EXPECTED: &str = "number, `x`, function or `(`";

        let Some((token, span)) = self.next() else {
            return Err(ExpressionError::UnexpectedEnd { expected: EXPECTED });
        };

        match token {
            Token::Number(v) => Ok(Expr::Num(v)),
            Token::LParen => {
                let inner = self.expression()?;
                self.expect(Token::RParen, "`)`")?;
                Ok(inner)
            }
            Token::Identifier(name) => self.identifier(name, span),
            other => Err(ExpressionError::UnexpectedToken {
                found: other.to_string(),
                expected: EXPECTED,
                span,
            }),
        }
    }

    fn identifier(&mut self, name: String, span: Range<usize>) -> Result<Expr, ExpressionError> {
        match name.as_str() {
            "x" => return Ok(Expr::Var),
            "e" => return Ok(Expr::Num(E)),
            "pi" => return Ok(Expr::Num(PI)),
            _ => {}
        }

        let followed_by_paren = matches!(self.peek(), Some(Token::LParen));
        match (Func::from_name(&name), followed_by_paren) {
            (Some(func), true) => {
                self.pos += 1;
                let arg = self.expression()?;
                self.expect(Token::RParen, "`)`")?;
                Ok(Expr::call(func, arg))
            }
            (Some(_), false) => match self.next() {
                Some((token, span)) => Err(ExpressionError::UnexpectedToken {
                    found: token.to_string(),
                    expected: "`(`",
                    span,
                }),
                None => Err(ExpressionError::UnexpectedEnd { expected: "`(`" }),
            },
            (None, true) => Err(ExpressionError::UnknownFunction { name, span }),
            (None, false) => Err(ExpressionError::UnknownIdentifier { name, span }),
        }
    }
}
