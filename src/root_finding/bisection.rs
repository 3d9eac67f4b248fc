use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, CommonCfg, StopCondition, TerminationPolicy};
use super::errors::ConfigError;
use super::evaluate::{Evaluator, ScalarFunction};
use super::report::{IterationResult, Termination};
use super::signs::opposite_sign;

const ALGORITHM: Algorithm = Algorithm::Bisection;


/// Bisection configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `epsilon`, optional `max_iter`, stop condition.
///
/// # Construction
/// - Use [`BisectionCfg::new`] then optional setters.
///
/// # Defaults
/// ┌ `epsilon`  = [`DEFAULT_EPSILON`](super::config::DEFAULT_EPSILON)
/// ├ `max_iter` = [`Algorithm::default_max_iter`]
/// └ `stop`     = [`StopCondition::EpsilonDelta`]
#[derive(Debug, Copy, Clone, Default)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[inline] #[must_use]
    pub fn max_iter(&self) -> usize { self.common.resolved_max_iter(ALGORITHM) }

    #[inline] #[must_use]
    pub fn policy(&self) -> TerminationPolicy { self.common.policy(ALGORITHM) }
}
impl_common_cfg!(BisectionCfg);


/// Finite interval `[lo, hi]` with `lo < hi`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bracket {
    lo: f64,
    hi: f64,
}
impl Bracket {
    pub fn new(lo: f64, hi: f64) -> Result<Self, ConfigError> {
        if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
            return Err(ConfigError::InvalidBracket { a: lo, b: hi });
        }
        Ok(Self { lo, hi })
    }

    pub fn lo(&self) -> f64 { self.lo }
    pub fn hi(&self) -> f64 { self.hi }
}


/// Calculates midpoint of [a, b] as `(a + b) / 2`.
///
/// Stays finite for brackets whose width `b - a` overflows.
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    (a + b) * 0.5
}


/// Loop state of one bisection run.
///
/// ├ `a`, `b`     : live bracket
/// ├ `previous`   : last midpoint (starts at `a`) for the displacement test
/// ├ `midpoint`   : last midpoint actually evaluated, `None` before the first step
/// └ `iteration`  : completed iterations
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BisectionState {
    a: f64,
    b: f64,
    previous: f64,
    midpoint: Option<f64>,
    iteration: usize,
}

/// Outcome of [`BisectionState::step`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BisectionStep {
    Next(BisectionState),
    Root { x: f64, iterations: usize, termination: Termination },
    Undefined { iterations: usize },
}

impl BisectionState {
    pub fn new(bracket: Bracket) -> Self {
        let (a, b) = (bracket.lo(), bracket.hi());
        Self { a, b, previous: a, midpoint: None, iteration: 0 }
    }

    pub fn bracket(&self)   -> (f64, f64)  { (self.a, self.b) }
    pub fn midpoint(&self)  -> Option<f64> { self.midpoint }
    pub fn iteration(&self) -> usize       { self.iteration }

    /// Performs one bisection iteration and returns the next state.
    ///
    /// 1. `c = (a + b) / 2`, evaluated with one retry at `c - epsilon`
    /// 2. `f(c) == 0` is an exact root
    /// 3. displacement `|c - previous| < epsilon` stops under `EpsilonDelta`
    /// 4. `f(a)` is re-evaluated at the current `a` to pick the half
    pub fn step<F>(self, eval: &mut Evaluator<'_, F>, epsilon: f64, policy: &TerminationPolicy) -> BisectionStep
    where F: ScalarFunction + ?Sized {
        let i = self.iteration;

        let (c, fc) = match eval.eval_or_perturb(calculate_bisection(self.a, self.b), epsilon) {
            Ok(point) => point,
            Err(_)    => return BisectionStep::Undefined { iterations: i },
        };

        if fc == 0.0 {
            return BisectionStep::Root { x: c, iterations: i + 1, termination: Termination::ExactRoot };
        }

        if policy.is_settled(self.previous, c) {
            return BisectionStep::Root { x: c, iterations: i + 1, termination: Termination::Converged };
        }

        let fa = match eval.eval(self.a) {
            Ok(fa) => fa,
            Err(_) => return BisectionStep::Undefined { iterations: i },
        };

        let (a, b) = if opposite_sign(fa, fc) { (self.a, c) } else { (c, self.b) };

        BisectionStep::Next(Self {
            a,
            b,
            previous: c,
            midpoint: Some(c),
            iteration: i + 1,
        })
    }
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - Lower bound of the search interval. Must be finite and less than `b`.
/// ├ `b`    - Upper bound of the search interval. Must be finite and greater than `a`.
/// └ `cfg`  - [`BisectionCfg`] (`epsilon`, `max_iter`, stop condition)
///
/// # Returns
///
/// [`IterationResult`] with `root = None` when
/// ├ `[a, b]` is not a finite ordered bracket    ([`Termination::InvalidInput`])
/// ├ `f(a)` or `f(b)` is undefined               ([`Termination::Undefined`], 0 iterations)
/// ├ `f(a) * f(b) >= 0`                          ([`Termination::NoSignChange`], 0 iterations)
/// ├ `f` stays undefined after the perturbation  ([`Termination::Undefined`])
/// └ `EpsilonDelta` never settles within budget  ([`Termination::BudgetExhausted`])
///
/// # Notes
/// ├ `FixedIterations` always runs the full count and returns the last midpoint.
/// └ `EpsilonDelta` stops on iterate displacement, not on `|f(c)|`.
pub fn bisection<F>(func: &F, a: f64, b: f64, cfg: BisectionCfg) -> IterationResult
where F: ScalarFunction + ?Sized {

    let bracket = match Bracket::new(a, b) {
        Ok(bracket) => bracket,
        Err(_)      => return IterationResult::rejected(ALGORITHM),
    };

    let epsilon = cfg.epsilon();
    let policy  = cfg.policy();
    let budget  = policy.budget(cfg.max_iter());

    let mut eval = Evaluator::new(func);
    let report = |eval: &Evaluator<'_, F>, root: Option<f64>, iterations: usize, termination: Termination| {
        IterationResult::finish(eval, ALGORITHM, root, iterations, 0, termination)
    };

    let endpoints = eval.eval(a).and_then(|fa| eval.eval(b).map(|fb| (fa, fb)));
    let (fa, fb) = match endpoints {
        Ok(values) => values,
        Err(_)     => return report(&eval, None, 0, Termination::Undefined),
    };
    if !opposite_sign(fa, fb) {
        return report(&eval, None, 0, Termination::NoSignChange);
    }

    let mut state = BisectionState::new(bracket);
    while state.iteration() < budget {
        match state.step(&mut eval, epsilon, &policy) {
            BisectionStep::Next(next) => state = next,
            BisectionStep::Root { x, iterations, termination } =>
                return report(&eval, Some(x), iterations, termination),
            BisectionStep::Undefined { iterations } =>
                return report(&eval, None, iterations, Termination::Undefined),
        }
    }

    match policy.stop_condition() {
        StopCondition::FixedIterations => report(&eval, state.midpoint(), budget, Termination::IterationLimit),
        StopCondition::EpsilonDelta    => report(&eval, None, budget, Termination::BudgetExhausted),
    }
}


/// `bisect(f, a, b, epsilon, max_iterations, policy)` convenience form.
///
/// Invalid `epsilon` or `max_iterations` yield an absent root with
/// [`Termination::InvalidInput`] instead of an error.
pub fn bisect<F>(
    func: &F,
    a: f64,
    b: f64,
    epsilon: f64,
    max_iterations: usize,
    policy: StopCondition,
) -> IterationResult
where F: ScalarFunction + ?Sized {
    let cfg = BisectionCfg::new()
        .with_stop(policy)
        .set_epsilon(epsilon)
        .and_then(|cfg| cfg.set_max_iter(max_iterations));

    match cfg {
        Ok(cfg) => bisection(func, a, b, cfg),
        Err(_)  => IterationResult::rejected(ALGORITHM),
    }
}
