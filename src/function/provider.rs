//! Function provider: turns user input into a [`ScalarFunction`].

use std::fmt;

use crate::root_finding::errors::EvalError;
use crate::root_finding::evaluate::ScalarFunction;

use super::errors::ExpressionError;
use super::expr::Expr;
use super::horner::Polynomial;
use super::parser::parse;
use super::registry::NamedFunction;

/// A function of `x` ready for the solvers.
///
/// - [`Function::Polynomial`] : expression compacted to coefficients, Horner-evaluated
/// - [`Function::Expression`] : general expression tree
/// - [`Function::Named`]      : predefined function from the registry
#[derive(Debug, Clone, PartialEq)]
pub enum Function {
    Polynomial(Polynomial),
    Expression(Expr),
    Named(NamedFunction),
}

impl Function {
    /// Parses `source`; polynomial expressions are compacted for Horner evaluation.
    pub fn parse(source: &str) -> Result<Self, ExpressionError> {
        let expr = parse(source)?;
        Ok(match expr.to_polynomial() {
            Some(poly) => Function::Polynomial(poly),
            None => Function::Expression(expr),
        })
    }

    /// Looks up a predefined function by name.
    pub fn named(name: &str) -> Result<Self, ExpressionError> {
        name.parse().map(Function::Named)
    }

    pub fn is_polynomial(&self) -> bool {
        matches!(self, Function::Polynomial(_) | Function::Named(NamedFunction::Polynomial))
    }
}

impl ScalarFunction for Function {
    fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Function::Polynomial(p) => p.evaluate(x),
            Function::Expression(e) => e.evaluate(x),
            Function::Named(n) => n.evaluate(x),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Function::Polynomial(p) => write!(f, "{}", p),
            Function::Expression(e) => write!(f, "{}", e),
            Function::Named(n) => write!(f, "{}", n.formula()),
        }
    }
}
