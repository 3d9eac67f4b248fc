//! tests for the command-line flow
use clap::Parser;
use zeroth::cli::{list_functions, run, Cli, CliError};
use zeroth::root_finding::report::Termination;
use zeroth::root_finding::signs::RootExistence;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("zeroth").chain(args.iter().copied()))
        .expect("arguments parse")
}

#[test]
fn same_sign_bracket_is_skipped_without_force() -> TestResult {
    let summary = run(&cli(&["--expr", "x^2 + 2x + 1", "-a", "-2", "-b", "0"]))?;

    assert_eq!(summary.existence, RootExistence::NoRootGuaranteed);
    assert!(summary.skipped);
    assert!(summary.results.is_empty());
    assert!(summary.to_string().contains("--force"));
    Ok(())
}

#[test]
fn force_runs_both_solvers() -> TestResult {
    let summary = run(&cli(&["--expr", "x^2 + 2x + 1", "-a", "-2", "-b", "0", "--force"]))?;

    assert!(!summary.skipped);
    assert_eq!(summary.results.len(), 2);

    let bisection = summary.result("bisection").expect("bisection ran");
    assert_eq!(bisection.termination, Termination::NoSignChange);
    let secant = summary.result("secant").expect("secant ran");
    assert_eq!(secant.root(), Some(-1.0));

    let text = summary.to_string();
    assert!(text.contains("no root found (NoSignChange)"));
    assert!(text.contains("root:       -1.000000"));
    Ok(())
}

#[test]
fn method_selects_single_solver() -> TestResult {
    let summary = run(&cli(&["--function", "polynomial", "-a", "0", "-b", "4", "--method", "bisection"]))?;

    assert_eq!(summary.existence, RootExistence::AtLeastOneRoot);
    assert_eq!(summary.results.len(), 1);
    assert_eq!(summary.results[0].pair(), (Some(2.0), 1));
    assert!(summary.result("secant").is_none());
    Ok(())
}

#[test]
fn endpoint_root_is_reported_and_solvers_still_run() -> TestResult {
    let summary = run(&cli(&["--expr", "x - 1", "-a", "1", "-b", "3"]))?;

    assert_eq!(summary.existence, RootExistence::RootAtA(1.0));
    assert!(!summary.skipped);
    assert!(summary.to_string().contains("root found at x = 1"));
    assert_eq!(
        summary.result("bisection").map(|r| r.termination),
        Some(Termination::NoSignChange)
    );
    Ok(())
}

#[test]
fn fixed_iterations_flag_reaches_solvers() -> TestResult {
    let summary = run(&cli(&[
        "--function", "exponential", "-a", "0", "-b", "2",
        "--stop", "fixed-iterations", "--max-iter", "7",
    ]))?;

    for result in &summary.results {
        assert_eq!(result.pair().1, 7);
        assert_eq!(result.termination, Termination::IterationLimit);
    }
    Ok(())
}

#[test]
fn errors_are_classified() {
    let parse = run(&cli(&["--expr", "x +", "-a", "0", "-b", "1"]));
    assert!(matches!(parse, Err(CliError::Expression(_))));

    let named = run(&cli(&["--function", "quartic", "-a", "0", "-b", "1"]));
    assert!(matches!(named, Err(CliError::Expression(_))));

    let config = run(&cli(&["--expr", "x", "-a", "-1", "-b", "1", "--epsilon", "0"]));
    assert!(matches!(config, Err(CliError::Config(_))));

    let endpoint = run(&cli(&["--expr", "ln(x)", "-a", "-1", "-b", "2"]));
    assert!(matches!(endpoint, Err(CliError::Endpoint(_))));
}

#[test]
fn argument_rules() {
    assert!(Cli::try_parse_from(["zeroth", "--expr", "x", "-a", "0"]).is_err());
    assert!(Cli::try_parse_from(["zeroth", "--expr", "x", "--function", "composite", "-a", "0", "-b", "1"]).is_err());
    assert!(Cli::try_parse_from(["zeroth", "--list"]).is_ok());
}

#[test]
fn list_names_every_predefined_function() {
    let listing = list_functions();
    for name in ["polynomial", "trigonometric", "exponential", "composite"] {
        assert!(listing.contains(name));
    }
    assert_eq!(listing.lines().count(), 4);
}
