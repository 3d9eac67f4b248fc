//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with default tolerance, iteration budget and stop
//! condition, used by [`BisectionCfg`] and [`SecantCfg`].
//!
//! [`CommonCfg`] : universal fields
//! ├ `epsilon`  : displacement tolerance, also the domain-error perturbation
//! ├ `max_iter` : iteration budget (optional, algorithm default otherwise)
//! └ `stop`     : [`StopCondition`] selector
//!
//! [`CommonCfg::policy`] folds the selector and its parameter into the
//! tagged [`TerminationPolicy`] consumed by the solvers.
//!
//! [`BisectionCfg`]: super::bisection::BisectionCfg
//! [`SecantCfg`]: super::secant::SecantCfg


use super::algorithms::{Algorithm, EPSILON_DELTA_CEILING};


pub const DEFAULT_EPSILON : f64 = 1e-4;


/// Which stop condition the solver honours.
/// - [`StopCondition::EpsilonDelta`]    : `|x_i - x_(i-1)| < epsilon`
/// - [`StopCondition::FixedIterations`] : exactly `max_iter` iterations
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum StopCondition {
    #[default]
    EpsilonDelta,
    FixedIterations,
}


/// Termination policy for a single solve. Immutable once built.
///
/// `EpsilonDelta` prioritises iterate stability over residual smallness:
/// on a very flat function it can settle on a point that is not close to a
/// true root.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TerminationPolicy {
    EpsilonDelta    { epsilon: f64 },
    FixedIterations { count: usize },
}

impl TerminationPolicy {
    pub fn stop_condition(&self) -> StopCondition {
        match self {
            TerminationPolicy::EpsilonDelta { .. }    => StopCondition::EpsilonDelta,
            TerminationPolicy::FixedIterations { .. } => StopCondition::FixedIterations,
        }
    }

    /// Number of loop iterations the solver may run.
    ///
    /// `EpsilonDelta` is capped by [`EPSILON_DELTA_CEILING`];
    /// `FixedIterations` runs exactly `count`.
    pub fn budget(&self, max_iter: usize) -> usize {
        match self {
            TerminationPolicy::EpsilonDelta { .. }      => max_iter.min(EPSILON_DELTA_CEILING),
            TerminationPolicy::FixedIterations { count } => *count,
        }
    }

    /// `true` if consecutive iterates `prev`, `next` satisfy the displacement
    /// stop. Always `false` under `FixedIterations`.
    #[inline]
    pub fn is_settled(&self, prev: f64, next: f64) -> bool {
        match self {
            TerminationPolicy::EpsilonDelta { epsilon } => (next - prev).abs() < *epsilon,
            TerminationPolicy::FixedIterations { .. }   => false,
        }
    }
}


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    epsilon:  f64,
    max_iter: Option<usize>,
    stop:     StopCondition,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            epsilon  : DEFAULT_EPSILON,
            max_iter : None,
            stop     : StopCondition::EpsilonDelta,
        }
    }

    // getters
    pub fn epsilon(&self)  -> f64 { self.epsilon }
    pub fn stop(&self)     -> StopCondition { self.stop }
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    /// Iteration budget, falling back to [`Algorithm::default_max_iter`].
    pub fn resolved_max_iter(&self, algorithm: Algorithm) -> usize {
        self.max_iter.unwrap_or(algorithm.default_max_iter())
    }

    /// Tagged policy for `algorithm` built from the current fields.
    pub fn policy(&self, algorithm: Algorithm) -> TerminationPolicy {
        match self.stop {
            StopCondition::EpsilonDelta    => TerminationPolicy::EpsilonDelta { epsilon: self.epsilon },
            StopCondition::FixedIterations => TerminationPolicy::FixedIterations {
                count: self.resolved_max_iter(algorithm),
            },
        }
    }

    // setters (internal)
    pub(crate) fn with_epsilon  (&mut self, v: f64)           { self.epsilon  = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize)         { self.max_iter = Some(v); }
    pub(crate) fn with_stop     (&mut self, v: StopCondition) { self.stop     = v; }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_epsilon(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ConfigError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ConfigError::InvalidEpsilon { got: v }
                    );
                }
                self.common.with_epsilon(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::ConfigError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::ConfigError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }
            pub fn with_stop(
                mut self, v: $crate::root_finding::config::StopCondition
            ) -> Self {
                self.common.with_stop(v);
                self
            }

            #[inline] #[must_use] pub fn epsilon(&self) -> f64 { self.common.epsilon() }
            #[inline] #[must_use] pub fn stop(&self) -> $crate::root_finding::config::StopCondition {
                self.common.stop()
            }
        }
    };
}
pub(crate) use impl_common_cfg;
