//! Guarded evaluation of scalar functions.
//!
//! [`ScalarFunction`] is the contract every function provider implements.
//! Plain `Fn(f64) -> f64` closures qualify automatically (NaN becomes a
//! domain error, ±inf an overflow); closures that already know where they
//! are undefined can be wrapped in [`Partial`].
//!
//! [`Evaluator`] is what the solvers actually call: it counts evaluations
//! and perturbation retries for the final report.


use super::errors::EvalError;


/// A possibly partial function ℝ→ℝ.
///
/// Implementations must not hold state the solver can observe; the engine
/// calls [`ScalarFunction::evaluate`] any number of times at any points.
pub trait ScalarFunction {
    fn evaluate(&self, x: f64) -> Result<f64, EvalError>;
}

impl<F> ScalarFunction for F
where F: Fn(f64) -> f64 + ?Sized {
    #[inline]
    fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        EvalError::classify(x, self(x))
    }
}


/// Adapter for closures that report their own [`EvalError`].
///
/// Finite results are still checked, so a closure returning `Ok(NaN)` is
/// treated the same as one returning `Err(EvalError::Domain)`.
#[derive(Debug, Clone, Copy)]
pub struct Partial<F>(pub F);

impl<F> ScalarFunction for Partial<F>
where F: Fn(f64) -> Result<f64, EvalError> {
    #[inline]
    fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        (self.0)(x).and_then(|fx| EvalError::classify(x, fx))
    }
}


/// Counting wrapper around a [`ScalarFunction`] for one solve.
///
/// Also the handle passed to [`BisectionState::step`] and [`SecantState::step`]
/// when driving a solver one iteration at a time.
///
/// [`BisectionState::step`]: super::bisection::BisectionState::step
/// [`SecantState::step`]: super::secant::SecantState::step
pub struct Evaluator<'f, F: ScalarFunction + ?Sized> {
    func: &'f F,
    evaluations: usize,
    perturbations: usize,
}

impl<'f, F: ScalarFunction + ?Sized> Evaluator<'f, F> {
    pub fn new(func: &'f F) -> Self {
        Self { func, evaluations: 0, perturbations: 0 }
    }

    #[inline]
    pub fn eval(&mut self, x: f64) -> Result<f64, EvalError> {
        self.evaluations += 1;
        self.func.evaluate(x)
    }

    /// Evaluates at `x`; if undefined there, retries once at `x - epsilon`.
    ///
    /// # Returns
    /// - `Ok((x_used, f(x_used)))` : `x_used` is `x` or the perturbed point
    /// - `Err(e)`                  : the retry failed as well
    pub fn eval_or_perturb(&mut self, x: f64, epsilon: f64) -> Result<(f64, f64), EvalError> {
        match self.eval(x) {
            Ok(fx) => Ok((x, fx)),
            Err(_) => {
                self.perturbations += 1;
                let shifted = x - epsilon;
                self.eval(shifted).map(|fx| (shifted, fx))
            }
        }
    }

    pub fn evaluations(&self)   -> usize { self.evaluations }
    pub fn perturbations(&self) -> usize { self.perturbations }
}
