//! Sign utilities and the root-existence check.
//! - `opposite_sign`        : `true` if values are strictly on opposite sides of zero
//! - [`check_root_existence`] : classifies a bracket before solving

use super::errors::EvalError;
use super::evaluate::ScalarFunction;


/// Returns `true` if `x` and `y` are strictly on opposite sides of zero.
///
/// Zero (either sign) and NaN are never opposite to anything. Compared
/// directly rather than through `x * y` so tiny values cannot underflow.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}


/// What the endpoint values say about roots inside `[a, b]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootExistence {
    /// `f(a)` and `f(b)` share a sign: zero or an even number of roots.
    NoRootGuaranteed,
    /// Sign change across the bracket: at least one root.
    AtLeastOneRoot,
    /// `f(a) == 0`.
    RootAtA(f64),
    /// `f(b) == 0` and `f(a) != 0`.
    RootAtB(f64),
}

impl RootExistence {
    /// Root sitting exactly on an endpoint, if any.
    pub fn endpoint_root(&self) -> Option<f64> {
        match self {
            RootExistence::RootAtA(x) | RootExistence::RootAtB(x) => Some(*x),
            _ => None,
        }
    }
}

impl std::fmt::Display for RootExistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RootExistence::NoRootGuaranteed =>
                write!(f, "no root guaranteed in this interval (same signs at endpoints)"),
            RootExistence::AtLeastOneRoot =>
                write!(f, "at least one root exists in this interval"),
            RootExistence::RootAtA(x) | RootExistence::RootAtB(x) =>
                write!(f, "root found at x = {x}"),
        }
    }
}


/// Evaluates `f` at both endpoints and classifies the bracket.
///
/// Caller-facing; the solvers do their own precondition check.
///
/// # Errors
/// - [`EvalError`] if `f` is undefined at `a` or `b`.
pub fn check_root_existence<F>(f: &F, a: f64, b: f64) -> Result<RootExistence, EvalError>
where F: ScalarFunction + ?Sized {
    let fa = f.evaluate(a)?;
    let fb = f.evaluate(b)?;

    let existence = if fa == 0.0 {
        RootExistence::RootAtA(a)
    } else if fb == 0.0 {
        RootExistence::RootAtB(b)
    } else if opposite_sign(fa, fb) {
        RootExistence::AtLeastOneRoot
    } else {
        RootExistence::NoRootGuaranteed
    };

    Ok(existence)
}
