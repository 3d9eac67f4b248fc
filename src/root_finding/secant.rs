use super::algorithms::{Algorithm, DENOMINATOR_FLOOR};
use super::config::{impl_common_cfg, CommonCfg, StopCondition, TerminationPolicy};
use super::errors::ConfigError;
use super::evaluate::{Evaluator, ScalarFunction};
use super::report::{IterationResult, Termination};

const ALGORITHM: Algorithm = Algorithm::Secant;


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `epsilon`, optional `max_iter`, stop condition.
///
/// # Construction
/// - Use [`SecantCfg::new`] then optional setters.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`secant_method`] resolves it using
///   [`Algorithm::default_max_iter`] for [`Algorithm::Secant`].
#[derive(Debug, Copy, Clone, Default)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[inline] #[must_use]
    pub fn max_iter(&self) -> usize { self.common.resolved_max_iter(ALGORITHM) }

    #[inline] #[must_use]
    pub fn policy(&self) -> TerminationPolicy { self.common.policy(ALGORITHM) }
}
impl_common_cfg!(SecantCfg);


/// Original seed pair of a secant run.
///
/// Fixes the two guards for the whole solve:
/// - excursion bound `|x1 - x0|` on a single extrapolated step
/// - clamp range `[min(x0, x1), max(x0, x1)]` for every iterate
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SeedPair {
    x0: f64,
    x1: f64,
}
impl SeedPair {
    pub fn new(x0: f64, x1: f64) -> Result<Self, ConfigError> {
        if !(x0.is_finite() && x1.is_finite()) || x0 == x1 {
            return Err(ConfigError::InvalidSeeds { x0, x1 });
        }
        Ok(Self { x0, x1 })
    }

    pub fn x0(&self) -> f64 { self.x0 }
    pub fn x1(&self) -> f64 { self.x1 }

    #[inline]
    pub fn excursion(&self) -> f64 {
        (self.x1 - self.x0).abs()
    }

    #[inline]
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.x0.min(self.x1), self.x0.max(self.x1))
    }
}


/// Calculates the secant x-intercept for the line
/// connecting `(x_prev, f_prev)` and `(x_curr, f_curr)`.
///
/// # Returns
/// - `Some(x_secant)` if `|f_curr - f_prev| >= DENOMINATOR_FLOOR`
/// - `None` if the denominator collapsed
#[inline]
pub(crate) fn calculate_secant_x_intercept(
    (x_prev, f_prev): (f64, f64),
    (x_curr, f_curr): (f64, f64),
) -> Option<f64> {
    let denom = f_curr - f_prev;
    if denom.abs() < DENOMINATOR_FLOOR {
        return None;
    }

    Some(x_curr - f_curr * (x_curr - x_prev) / denom)
}


/// Loop state of one secant run: the last two iterates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SecantState {
    x_prev: f64,
    x_curr: f64,
    iteration: usize,
}

/// Outcome of [`SecantState::step`].
///
/// `fallback` is `true` when the step was the midpoint of the last two
/// iterates instead of a secant extrapolation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SecantStep {
    Next { state: SecantState, fallback: bool },
    Root { x: f64, iterations: usize, fallback: bool },
}

impl SecantState {
    pub fn new(seeds: SeedPair) -> Self {
        Self { x_prev: seeds.x0(), x_curr: seeds.x1(), iteration: 0 }
    }

    pub fn previous(&self)  -> f64   { self.x_prev }
    pub fn current(&self)   -> f64   { self.x_curr }
    pub fn iteration(&self) -> usize { self.iteration }

    #[inline]
    fn midpoint(&self) -> f64 {
        (self.x_curr + self.x_prev) * 0.5
    }

    /// Proposes the next iterate before clamping.
    ///
    /// Falls back to the midpoint when either evaluation fails, the
    /// denominator is below [`DENOMINATOR_FLOOR`], or the extrapolated step
    /// is non-finite or longer than the seed excursion.
    fn propose<F>(&self, eval: &mut Evaluator<'_, F>, seeds: &SeedPair) -> (f64, bool)
    where F: ScalarFunction + ?Sized {
        let values = eval
            .eval(self.x_prev)
            .and_then(|f_prev| eval.eval(self.x_curr).map(|f_curr| (f_prev, f_curr)));

        let Ok((f_prev, f_curr)) = values else {
            return (self.midpoint(), true);
        };

        match calculate_secant_x_intercept((self.x_prev, f_prev), (self.x_curr, f_curr)) {
            Some(x) if x.is_finite() && (x - self.x_curr).abs() <= seeds.excursion() => (x, false),
            _ => (self.midpoint(), true),
        }
    }

    /// Performs one secant iteration and returns the next state.
    ///
    /// Under `EpsilonDelta`, a settled step is only accepted when `f` is
    /// defined at the new iterate; otherwise iteration continues.
    pub fn step<F>(self, eval: &mut Evaluator<'_, F>, seeds: &SeedPair, policy: &TerminationPolicy) -> SecantStep
    where F: ScalarFunction + ?Sized {
        let (proposed, fallback) = self.propose(eval, seeds);
        let x_next = seeds.clamp(proposed);

        if policy.is_settled(self.x_curr, x_next) && eval.eval(x_next).is_ok() {
            return SecantStep::Root { x: x_next, iterations: self.iteration + 1, fallback };
        }

        SecantStep::Next {
            state: Self {
                x_prev: self.x_curr,
                x_curr: x_next,
                iteration: self.iteration + 1,
            },
            fallback,
        }
    }
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First seed.  Must be finite and not equal to `x1`
/// - `x1`   : Second seed. Must be finite and not equal to `x0`
/// - `cfg`  : [`SecantCfg`] (`epsilon`, `max_iter`, stop condition)
///
/// # Behavior
/// - Update:
///     - secant step:
///       x_{k+1} = x_k - f(x_k) * (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))
///     - `|f(x_k) - f(x_{k-1})| < 1e-10`, an undefined `f`, or a step longer
///       than `|x1 - x0|` falls back to the midpoint of x_k and x_{k-1}
///     - every iterate is clamped into `[min(x0, x1), max(x0, x1)]`
/// - `EpsilonDelta`: stop once `|x_{k+1} - x_k| < epsilon` and f(x_{k+1}) is defined
/// - `FixedIterations`: run exactly `count` steps, then confirm f(x_k)
///
/// # Returns
/// [`IterationResult`] with `root = None` when
/// - seeds are non-finite or equal           ([`Termination::InvalidInput`])
/// - `f(x0)` or `f(x1)` is undefined         ([`Termination::Undefined`], 0 iterations)
/// - the final iterate is undefined          ([`Termination::Undefined`], `FixedIterations`)
/// - `EpsilonDelta` never settles in budget  ([`Termination::BudgetExhausted`])
///
/// # Warning
/// - The guards keep the iteration inside the seed interval, so a root
///   outside `[min(x0, x1), max(x0, x1)]` is never reported.
pub fn secant_method<F>(func: &F, x0: f64, x1: f64, cfg: SecantCfg) -> IterationResult
where F: ScalarFunction + ?Sized {

    let seeds = match SeedPair::new(x0, x1) {
        Ok(seeds) => seeds,
        Err(_)    => return IterationResult::rejected(ALGORITHM),
    };

    let policy = cfg.policy();
    let budget = policy.budget(cfg.max_iter());

    let mut eval      = Evaluator::new(func);
    let mut fallbacks = 0;
    let report = |eval: &Evaluator<'_, F>, fallbacks: usize, root: Option<f64>, iterations: usize, termination: Termination| {
        IterationResult::finish(eval, ALGORITHM, root, iterations, fallbacks, termination)
    };

    if eval.eval(x0).and_then(|_| eval.eval(x1)).is_err() {
        return report(&eval, fallbacks, None, 0, Termination::Undefined);
    }

    let mut state = SecantState::new(seeds);
    while state.iteration() < budget {
        match state.step(&mut eval, &seeds, &policy) {
            SecantStep::Next { state: next, fallback } => {
                fallbacks += usize::from(fallback);
                state = next;
            }
            SecantStep::Root { x, iterations, fallback } => {
                fallbacks += usize::from(fallback);
                return report(&eval, fallbacks, Some(x), iterations, Termination::Converged);
            }
        }
    }

    match policy.stop_condition() {
        StopCondition::FixedIterations => {
            let x = state.current();
            match eval.eval(x) {
                Ok(_)  => report(&eval, fallbacks, Some(x), budget, Termination::IterationLimit),
                Err(_) => report(&eval, fallbacks, None, budget, Termination::Undefined),
            }
        }
        StopCondition::EpsilonDelta => report(&eval, fallbacks, None, budget, Termination::BudgetExhausted),
    }
}


/// `secant(f, x0, x1, epsilon, max_iterations, policy)` convenience form.
///
/// Invalid `epsilon` or `max_iterations` yield an absent root with
/// [`Termination::InvalidInput`] instead of an error.
pub fn secant<F>(
    func: &F,
    x0: f64,
    x1: f64,
    epsilon: f64,
    max_iterations: usize,
    policy: StopCondition,
) -> IterationResult
where F: ScalarFunction + ?Sized {
    let cfg = SecantCfg::new()
        .with_stop(policy)
        .set_epsilon(epsilon)
        .and_then(|cfg| cfg.set_max_iter(max_iterations));

    match cfg {
        Ok(cfg) => secant_method(func, x0, x1, cfg),
        Err(_)  => IterationResult::rejected(ALGORITHM),
    }
}
