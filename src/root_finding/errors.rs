//! Root-finding error types.
//!
//! ┌ [`EvalError`]   : function evaluation failures
//! │   ├ domain error (mathematically undefined, e.g. log(-1))
//! │   └ overflow (non-finite magnitude)
//! │
//! └ [`ConfigError`] : invalid solver parameters
//!     ├ invalid tolerance (`epsilon`)
//!     ├ invalid iteration budget (`max_iter`)
//!     └ invalid bracket / seeds
//!
//! Solvers never return these to the caller: evaluation failures are
//! absorbed into the [`IterationResult`](super::report::IterationResult),
//! and configuration errors only surface from the `set_*` builders.


use thiserror::Error;


/// Scalar function evaluation failures.
///
/// Both variants mean "f is undefined at `x`" to the solvers; they are kept
/// apart so callers can tell a singularity from a domain violation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvalError {
    #[error("function undefined at x={x}")]
    Domain   { x: f64 },

    #[error("function overflowed at x={x}")]
    Overflow { x: f64 },
}
impl EvalError {
    /// Classifies a raw value produced at `x`.
    /// NaN is a domain error, ±inf an overflow, anything else is `Ok`.
    #[inline]
    pub fn classify(x: f64, fx: f64) -> Result<f64, EvalError> {
        if fx.is_nan() {
            Err(EvalError::Domain { x })
        } else if fx.is_infinite() {
            Err(EvalError::Overflow { x })
        } else {
            Ok(fx)
        }
    }

    /// Point at which evaluation failed.
    pub fn x(&self) -> f64 {
        match self {
            EvalError::Domain { x } | EvalError::Overflow { x } => *x,
        }
    }
}


/// Solver configuration errors.
///
/// ┌ Invalid `epsilon` (must be finite and > 0)
/// ├ Invalid `max_iter` (must be >= 1)
/// ├ Invalid bracket (finite with a < b)
/// └ Invalid seeds (finite, distinct)
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid `epsilon`: must be finite and > 0. got {got}")]
    InvalidEpsilon { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid bracket: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBracket { a: f64, b: f64 },

    #[error("invalid seeds: x0 and x1 must be finite and distinct. got ({x0}, {x1})")]
    InvalidSeeds   { x0: f64, x1: f64 },
}
