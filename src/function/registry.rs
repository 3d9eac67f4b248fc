//! Predefined functions selectable by name.

use std::fmt;
use std::str::FromStr;

use crate::root_finding::errors::EvalError;
use crate::root_finding::evaluate::ScalarFunction;

use super::errors::ExpressionError;
use super::horner::horner;

/// `x^3 - 2x^2 + 4x - 8`, highest degree first.
const POLYNOMIAL: [f64; 4] = [1.0, -2.0, 4.0, -8.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedFunction {
    Polynomial,
    Trigonometric,
    Exponential,
    Composite,
}

impl NamedFunction {
    pub const ALL: [NamedFunction; 4] = [
        NamedFunction::Polynomial,
        NamedFunction::Trigonometric,
        NamedFunction::Exponential,
        NamedFunction::Composite,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NamedFunction::Polynomial => "polynomial",
            NamedFunction::Trigonometric => "trigonometric",
            NamedFunction::Exponential => "exponential",
            NamedFunction::Composite => "composite",
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            NamedFunction::Polynomial => "x^3 - 2x^2 + 4x - 8",
            NamedFunction::Trigonometric => "sin(x) + cos(x)",
            NamedFunction::Exponential => "e^x - 2",
            NamedFunction::Composite => "sin(x^2) + e^(-x)",
        }
    }

    pub fn eval(self, x: f64) -> f64 {
        match self {
            NamedFunction::Polynomial => horner(x, &POLYNOMIAL),
            NamedFunction::Trigonometric => x.sin() + x.cos(),
            NamedFunction::Exponential => x.exp() - 2.0,
            NamedFunction::Composite => (x * x).sin() + (-x).exp(),
        }
    }
}

impl ScalarFunction for NamedFunction {
    fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        EvalError::classify(x, self.eval(x))
    }
}

impl FromStr for NamedFunction {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        NamedFunction::ALL
            .into_iter()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| ExpressionError::UnknownNamed { name: s.to_string() })
    }
}

impl fmt::Display for NamedFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
