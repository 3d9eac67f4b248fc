//! tests for the guarded secant root finding algorithm
use std::f64::consts::LN_2;

use approx::assert_abs_diff_eq;
use zeroth::root_finding::algorithms::EPSILON_DELTA_CEILING;
use zeroth::root_finding::config::{StopCondition, TerminationPolicy};
use zeroth::root_finding::errors::ConfigError;
use zeroth::root_finding::evaluate::Evaluator;
use zeroth::root_finding::report::Termination;
use zeroth::root_finding::secant::{secant, secant_method, SecantCfg, SecantState, SecantStep, SeedPair};

type TestResult = Result<(), ConfigError>;

const EPS: f64 = 1e-4;
const MAX_ITER: usize = 100;

#[test]
fn finds_ln_two() {
    let f   = |x: f64| x.exp() - 2.0;
    let res = secant(&f, 0.0, 2.0, EPS, MAX_ITER, StopCondition::EpsilonDelta);

    assert_abs_diff_eq!(res.root().expect("converges"), LN_2, epsilon = 1e-5);
    assert_eq!(res.termination, Termination::Converged);
    assert!(res.iterations() < 20);
}

#[test]
fn double_root_found_through_midpoint_fallback() {
    // f(-2) == f(0): the first step is the midpoint, which is the root
    let f   = |x: f64| x * x + 2.0 * x + 1.0;
    let res = secant(&f, -2.0, 0.0, EPS, MAX_ITER, StopCondition::EpsilonDelta);

    assert_eq!(res.pair(), (Some(-1.0), 2));
    assert_eq!(res.fallbacks, 1);
}

#[test]
fn cubic_converges_from_wide_seeds() {
    let f   = |x: f64| x.powi(3) - 2.0 * x.powi(2) + 4.0 * x - 8.0;
    let res = secant(&f, 0.0, 4.0, EPS, MAX_ITER, StopCondition::EpsilonDelta);

    assert_abs_diff_eq!(res.root().expect("converges"), 2.0, epsilon = 1e-4);
}

#[test]
fn iterates_stay_clamped_and_steps_bounded() {
    let cases: [(&dyn Fn(f64) -> f64, f64, f64); 5] = [
        (&|x: f64| x.tan(), 1.0, 2.0),
        (&|x: f64| 1.0 / x - 0.5, 0.5, 6.0),
        (&|x: f64| x.powi(3) - 10.0, -4.0, 1.0),
        (&|x: f64| 1e-3 * x + 1.0, 0.0, 1.0),
        (&|x: f64| (x * x).sin() + (-x).exp(), 3.0, 0.0),
    ];
    let policy = TerminationPolicy::FixedIterations { count: 50 };

    for (f, x0, x1) in cases {
        let seeds = SeedPair::new(x0, x1).expect("valid seeds");
        let (lo, hi) = (x0.min(x1), x0.max(x1));
        let mut eval  = Evaluator::new(f);
        let mut state = SecantState::new(seeds);

        for _ in 0..50 {
            state = match state.step(&mut eval, &seeds, &policy) {
                SecantStep::Next { state, .. } => state,
                other => panic!("fixed policy never settles: {other:?}"),
            };
            let x = state.current();
            assert!((lo..=hi).contains(&x), "{x} escaped [{lo}, {hi}]");
            assert!((x - state.previous()).abs() <= seeds.excursion());
        }
    }
}

#[test]
fn fixed_iterations_runs_exact_count() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new()
        .with_stop(StopCondition::FixedIterations)
        .set_max_iter(8)?;

    let res = secant_method(&f, 1.0, 2.0, cfg);

    assert_eq!(res.iterations(), 8);
    assert_eq!(res.termination, Termination::IterationLimit);
    assert_abs_diff_eq!(res.root().expect("defined"), 2f64.sqrt(), epsilon = 1e-8);
    Ok(())
}

#[test]
fn fixed_iterations_final_iterate_must_be_defined() {
    let f   = |x: f64| if (0.5..1.5).contains(&x) { f64::NAN } else { x - 1.0 };
    let res = secant(&f, 0.0, 2.0, EPS, 1, StopCondition::FixedIterations);

    assert_eq!(res.pair(), (None, 1));
    assert_eq!(res.termination, Termination::Undefined);
}

#[test]
fn settled_step_on_a_hole_is_not_accepted() {
    let f   = |x: f64| if x == 1.0 { f64::NAN } else { x - 1.0 };
    let res = secant(&f, 0.0, 2.0, EPS, MAX_ITER, StopCondition::EpsilonDelta);

    let root = res.root().expect("settles next to the hole");
    assert_ne!(root, 1.0);
    assert_abs_diff_eq!(root, 1.0, epsilon = 1e-3);
    assert!(res.fallbacks > 0);
}

#[test]
fn undefined_everywhere_runs_to_ceiling() {
    // every settled candidate fails confirmation: only the ceiling stops it
    let f   = |x: f64| if x == 0.0 || x == 2.0 { x - 1.0 } else { f64::NAN };
    let res = secant(&f, 0.0, 2.0, EPS, usize::MAX, StopCondition::EpsilonDelta);

    assert_eq!(res.pair(), (None, EPSILON_DELTA_CEILING));
    assert_eq!(res.termination, Termination::BudgetExhausted);
}

#[test]
fn repeated_calls_are_identical() {
    let f = |x: f64| x.sin() + x.cos();
    let first  = secant(&f, 2.0, 4.0, EPS, MAX_ITER, StopCondition::EpsilonDelta);
    let second = secant(&f, 2.0, 4.0, EPS, MAX_ITER, StopCondition::EpsilonDelta);

    assert_eq!(first, second);
}

#[test]
fn undefined_seed_is_absent() {
    let f   = |x: f64| x.sqrt() - 1.0;
    let res = secant(&f, -1.0, 3.0, EPS, MAX_ITER, StopCondition::EpsilonDelta);

    assert_eq!(res.pair(), (None, 0));
    assert_eq!(res.termination, Termination::Undefined);
}

#[test]
fn invalid_inputs_are_rejected() {
    let f = |x: f64| x;
    for res in [
        secant(&f, 1.0, 1.0, EPS, MAX_ITER, StopCondition::EpsilonDelta),
        secant(&f, f64::NAN, 1.0, EPS, MAX_ITER, StopCondition::EpsilonDelta),
        secant(&f, 0.0, f64::INFINITY, EPS, MAX_ITER, StopCondition::EpsilonDelta),
        secant(&f, 0.0, 1.0, -EPS, MAX_ITER, StopCondition::EpsilonDelta),
        secant(&f, 0.0, 1.0, EPS, 0, StopCondition::EpsilonDelta),
    ] {
        assert_eq!(res.pair(), (None, 0));
        assert_eq!(res.termination, Termination::InvalidInput);
        assert_eq!(res.algorithm, "secant");
    }
}
