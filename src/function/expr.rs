//! Expression tree for user-supplied functions of `x`.
//!
//! Produced by [`parse`](super::parser::parse) and evaluated recursively;
//! no text is ever executed.

use std::fmt;

use crate::root_finding::errors::EvalError;
use crate::root_finding::evaluate::ScalarFunction;

use super::horner::Polynomial;

/// Largest integer exponent expanded when compacting into a [`Polynomial`].
pub const MAX_POLYNOMIAL_POWER: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Pow => "^",
        }
    }
}

/// Built-in unary functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Exp,
    Log,
    Sqrt,
    Abs,
}

impl Func {
    pub const ALL: [Func; 7] = [
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Exp,
        Func::Log,
        Func::Sqrt,
        Func::Abs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Exp => "exp",
            Func::Log => "log",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
        }
    }

    /// Looks up a function by its lower-case name. `ln` is an alias of `log`.
    pub fn from_name(name: &str) -> Option<Func> {
        match name {
            "ln" => Some(Func::Log),
            _ => Func::ALL.into_iter().find(|f| f.name() == name),
        }
    }

    /// Applies the function to `v`; `x` is the evaluation point reported on failure.
    fn apply(self, x: f64, v: f64) -> Result<f64, EvalError> {
        let out = match self {
            Func::Sin => v.sin(),
            Func::Cos => v.cos(),
            Func::Tan => v.tan(),
            Func::Exp => v.exp(),
            Func::Log if v <= 0.0 => return Err(EvalError::Domain { x }),
            Func::Log => v.ln(),
            Func::Sqrt if v < 0.0 => return Err(EvalError::Domain { x }),
            Func::Sqrt => v.sqrt(),
            Func::Abs => v.abs(),
        };
        EvalError::classify(x, out)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    Var,
    Neg(Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
    Call(Func, Box<Expr>),
}

impl Expr {
    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn call(func: Func, arg: Expr) -> Expr {
        Expr::Call(func, Box::new(arg))
    }

    /// Evaluates the tree at `x`.
    ///
    /// # Errors
    /// - [`EvalError::Domain`]   : log of a non-positive value, sqrt of a
    ///   negative value, division by zero, or a NaN-producing power
    /// - [`EvalError::Overflow`] : any intermediate result is infinite
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Expr::Num(v) => Ok(*v),
            Expr::Var => Ok(x),
            Expr::Neg(inner) => inner.eval(x).map(|v| -v),
            Expr::Call(func, arg) => func.apply(x, arg.eval(x)?),
            Expr::Binary(op, lhs, rhs) => {
                let l = lhs.eval(x)?;
                let r = rhs.eval(x)?;
                let out = match op {
                    BinOp::Add => l + r,
                    BinOp::Sub => l - r,
                    BinOp::Mul => l * r,
                    BinOp::Div if r == 0.0 => return Err(EvalError::Domain { x }),
                    BinOp::Div => l / r,
                    BinOp::Pow => l.powf(r),
                };
                EvalError::classify(x, out)
            }
        }
    }

    /// Expands the tree into a [`Polynomial`] if it is polynomial in `x`.
    ///
    /// Accepts sums, differences, products, division by non-zero constants
    /// and integer powers up to [`MAX_POLYNOMIAL_POWER`]. Any function call
    /// or non-constant exponent gives `None`.
    pub fn to_polynomial(&self) -> Option<Polynomial> {
        let poly = match self {
            Expr::Num(v) => Polynomial::constant(*v),
            Expr::Var => Polynomial::identity(),
            Expr::Neg(inner) => inner.to_polynomial()?.scale(-1.0),
            Expr::Call(..) => return None,
            Expr::Binary(op, lhs, rhs) => {
                let l = lhs.to_polynomial()?;
                let r = rhs.to_polynomial()?;
                match op {
                    BinOp::Add => l.add(&r),
                    BinOp::Sub => l.sub(&r),
                    BinOp::Mul => l.mul(&r),
                    BinOp::Div => {
                        let c = r.as_constant()?;
                        if c == 0.0 {
                            return None;
                        }
                        l.scale(1.0 / c)
                    }
                    BinOp::Pow => {
                        let n = r.as_constant()?;
                        if n.fract() != 0.0 || n < 0.0 || n > f64::from(MAX_POLYNOMIAL_POWER) {
                            return None;
                        }
                        l.pow(n as u32)
                    }
                }
            }
        };

        poly.is_finite().then_some(poly)
    }
}

impl ScalarFunction for Expr {
    fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        self.eval(x)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Num(v) if *v == std::f64::consts::E => write!(f, "e"),
            Expr::Num(v) if *v == std::f64::consts::PI => write!(f, "pi"),
            Expr::Num(v) => write!(f, "{}", v),
            Expr::Var => write!(f, "x"),
            Expr::Neg(inner) => write!(f, "-({})", inner),
            Expr::Call(func, arg) => write!(f, "{}({})", func.name(), arg),
            Expr::Binary(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
        }
    }
}
