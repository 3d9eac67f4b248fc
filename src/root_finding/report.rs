//! Defines the [`IterationResult`] struct returned by both solvers.

use super::algorithms::Algorithm;
use super::evaluate::{Evaluator, ScalarFunction};


/// Reasons a root-finding algorithm may terminate.
///
/// ├ [`Termination::ExactRoot`]       : `f(c) == 0` hit exactly
/// ├ [`Termination::Converged`]       : displacement below `epsilon`
/// ├ [`Termination::IterationLimit`]  : `FixedIterations` ran its full count
/// ├ [`Termination::BudgetExhausted`] : `EpsilonDelta` never settled
/// ├ [`Termination::NoSignChange`]    : bisection precondition failed
/// ├ [`Termination::Undefined`]       : `f` undefined with no recovery left
/// └ [`Termination::InvalidInput`]    : rejected parameters, nothing evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    ExactRoot,
    Converged,
    IterationLimit,
    BudgetExhausted,
    NoSignChange,
    Undefined,
    InvalidInput,
}


/// Final report returned by [`bisect`](super::bisection::bisect) and
/// [`secant`](super::secant::secant).
///
/// [`IterationResult`]
/// - `root`          : root estimate, `None` when absent
/// - `iterations`    : iterations performed
/// - `evaluations`   : total function evaluations
/// - `perturbations` : domain-error retries at `x - epsilon`
/// - `fallbacks`     : secant steps replaced by a midpoint step
/// - `termination`   : why the solver stopped ([`Termination`])
/// - `algorithm`     : algorithm name (e.g. `"bisection"`)
///
/// `root` is the only failure signal; `iterations` is diagnostic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationResult {
    pub root          : Option<f64>,
    pub iterations    : usize,
    pub evaluations   : usize,
    pub perturbations : usize,
    pub fallbacks     : usize,
    pub termination   : Termination,
    pub algorithm     : &'static str,
}

impl IterationResult {
    /// Result for parameters rejected before any evaluation.
    pub(crate) fn rejected(algorithm: Algorithm) -> Self {
        Self {
            root          : None,
            iterations    : 0,
            evaluations   : 0,
            perturbations : 0,
            fallbacks     : 0,
            termination   : Termination::InvalidInput,
            algorithm     : algorithm.algorithm_name(),
        }
    }

    /// Result carrying the evaluator's counters.
    pub(crate) fn finish<F>(
        eval: &Evaluator<'_, F>,
        algorithm: Algorithm,
        root: Option<f64>,
        iterations: usize,
        fallbacks: usize,
        termination: Termination,
    ) -> Self
    where F: ScalarFunction + ?Sized {
        Self {
            root,
            iterations,
            evaluations   : eval.evaluations(),
            perturbations : eval.perturbations(),
            fallbacks,
            termination,
            algorithm     : algorithm.algorithm_name(),
        }
    }

    pub fn root(&self) -> Option<f64> { self.root }

    pub fn iterations(&self) -> usize { self.iterations }

    pub fn is_found(&self) -> bool { self.root.is_some() }

    /// `(root, iterations)` pair.
    pub fn pair(&self) -> (Option<f64>, usize) { (self.root, self.iterations) }
}
