//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum along with the numeric constants shared
//! by the solvers: [`DENOMINATOR_FLOOR`] and [`EPSILON_DELTA_CEILING`].


/// Smallest `|f(x_curr) - f(x_prev)|` accepted as a secant denominator.
/// Anything below triggers a bisection-style midpoint step instead.
///
/// Independent of the user `epsilon`.
pub const DENOMINATOR_FLOOR: f64 = 1e-10;

/// Hard cap on iterations under [`StopCondition::EpsilonDelta`].
///
/// The effective budget is `min(max_iter, EPSILON_DELTA_CEILING)`, so a
/// function undefined around a candidate root cannot keep the secant
/// confirmation loop spinning forever.
///
/// [`StopCondition::EpsilonDelta`]: super::config::StopCondition::EpsilonDelta
pub const EPSILON_DELTA_CEILING: usize = 10_000;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bisection`] : bracketing, needs a sign change
/// - [`Algorithm::Secant`]    : open, two seeds
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bisection,
    Secant,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Bisection, Algorithm::Secant];

    /// Default iteration budget if `max_iter` is unset in config.
    pub const fn default_max_iter(self) -> usize {
        match self {
            Algorithm::Bisection => 100,
            Algorithm::Secant    => 100,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection => "bisection",
            Algorithm::Secant    => "secant",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
