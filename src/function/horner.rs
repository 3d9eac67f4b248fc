//! Polynomials evaluated by
//! [Horner's scheme](https://en.wikipedia.org/wiki/Horner%27s_method).
//!
//! Coefficients are stored highest degree first:
//! `[a_n, ..., a_1, a_0]` is `a_n x^n + ... + a_1 x + a_0`.

use std::fmt;

use crate::root_finding::errors::EvalError;
use crate::root_finding::evaluate::ScalarFunction;


/// Evaluates `coefficients` (highest degree first) at `x` in nested form:
///
/// ```text
/// p(x) = (...((a_n x + a_{n-1}) x + a_{n-2}) x ...) + a_0
/// ```
///
/// An empty slice is the zero polynomial.
#[inline]
pub fn horner(x: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}


#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Builds a polynomial from coefficients, highest degree first.
    /// Leading zeros are dropped; an empty input is the zero polynomial.
    pub fn new(coefficients: Vec<f64>) -> Self {
        let lead = coefficients
            .iter()
            .position(|&c| c != 0.0)
            .unwrap_or(coefficients.len().saturating_sub(1));
        let mut coefficients = coefficients;
        coefficients.drain(..lead);
        if coefficients.is_empty() {
            coefficients.push(0.0);
        }
        Self { coefficients }
    }

    pub fn constant(c: f64) -> Self {
        Self { coefficients: vec![c] }
    }

    /// `p(x) = x`
    pub fn identity() -> Self {
        Self { coefficients: vec![1.0, 0.0] }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn as_constant(&self) -> Option<f64> {
        match self.coefficients.as_slice() {
            [c] => Some(*c),
            _ => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_finite())
    }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        horner(x, &self.coefficients)
    }

    pub fn scale(&self, k: f64) -> Self {
        Self::new(self.coefficients.iter().map(|c| c * k).collect())
    }

    pub fn add(&self, other: &Self) -> Self {
        let n = self.coefficients.len().max(other.coefficients.len());
        let mut out = vec![0.0; n];
        // align constant terms at the right end
        for (slot, c) in out.iter_mut().rev().zip(self.coefficients.iter().rev()) {
            *slot += c;
        }
        for (slot, c) in out.iter_mut().rev().zip(other.coefficients.iter().rev()) {
            *slot += c;
        }
        Self::new(out)
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.scale(-1.0))
    }

    pub fn mul(&self, other: &Self) -> Self {
        let mut out = vec![0.0; self.coefficients.len() + other.coefficients.len() - 1];
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        Self::new(out)
    }

    pub fn pow(&self, n: u32) -> Self {
        (0..n).fold(Self::constant(1.0), |acc, _| acc.mul(self))
    }
}

impl ScalarFunction for Polynomial {
    #[inline]
    fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        EvalError::classify(x, self.eval(x))
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let degree = self.degree();
        let mut first = true;

        for (i, &c) in self.coefficients.iter().enumerate() {
            if c == 0.0 && !(first && i == degree) {
                continue;
            }
            let power = degree - i;
            let magnitude = c.abs();

            if first {
                if c < 0.0 {
                    write!(f, "-")?;
                }
            } else {
                write!(f, " {} ", if c < 0.0 { "-" } else { "+" })?;
            }

            match (power, magnitude == 1.0) {
                (0, _) => write!(f, "{}", magnitude)?,
                (1, true) => write!(f, "x")?,
                (1, false) => write!(f, "{}x", magnitude)?,
                (_, true) => write!(f, "x^{}", power)?,
                (_, false) => write!(f, "{}x^{}", magnitude, power)?,
            }
            first = false;
        }

        Ok(())
    }
}
