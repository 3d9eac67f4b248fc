//! tests for the root existence check
use zeroth::root_finding::errors::EvalError;
use zeroth::root_finding::signs::{check_root_existence, RootExistence};

type TestResult = Result<(), EvalError>;

#[test]
fn sign_change_guarantees_a_root() -> TestResult {
    let f = |x: f64| x.sin() + x.cos();
    assert_eq!(check_root_existence(&f, 2.0, 4.0)?, RootExistence::AtLeastOneRoot);
    Ok(())
}

#[test]
fn same_sign_guarantees_nothing() -> TestResult {
    let f = |x: f64| x * x + 2.0 * x + 1.0;
    assert_eq!(check_root_existence(&f, -2.0, 0.0)?, RootExistence::NoRootGuaranteed);

    let g = |x: f64| x * x + 1.0;
    assert_eq!(check_root_existence(&g, -1.0, 1.0)?, RootExistence::NoRootGuaranteed);
    Ok(())
}

#[test]
fn endpoint_roots_are_reported() -> TestResult {
    let f = |x: f64| x * (x - 3.0);

    assert_eq!(check_root_existence(&f, 0.0, 1.0)?, RootExistence::RootAtA(0.0));
    assert_eq!(check_root_existence(&f, 1.0, 3.0)?, RootExistence::RootAtB(3.0));
    // both endpoints are roots: a wins
    assert_eq!(check_root_existence(&f, 0.0, 3.0)?.endpoint_root(), Some(0.0));
    Ok(())
}

#[test]
fn undefined_endpoint_is_an_error() {
    let f = |x: f64| x.ln();
    assert_eq!(check_root_existence(&f, -1.0, 2.0), Err(EvalError::Domain { x: -1.0 }));
}

#[test]
fn messages_describe_the_bracket() {
    assert_eq!(
        RootExistence::AtLeastOneRoot.to_string(),
        "at least one root exists in this interval"
    );
    assert_eq!(RootExistence::RootAtB(3.0).to_string(), "root found at x = 3");
}
