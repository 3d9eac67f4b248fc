//! tests for turning user input into solver-ready functions
use zeroth::function::registry::NamedFunction;
use zeroth::function::{ExpressionError, Function};
use zeroth::root_finding::errors::EvalError;
use zeroth::root_finding::evaluate::ScalarFunction;

type TestResult = Result<(), ExpressionError>;

#[test]
fn polynomial_input_is_compacted() -> TestResult {
    let f = Function::parse("x^3 - 2x^2 + 4x - 8")?;

    assert!(f.is_polynomial());
    match &f {
        Function::Polynomial(p) => assert_eq!(p.coefficients(), &[1.0, -2.0, 4.0, -8.0]),
        other => panic!("expected polynomial, got {other:?}"),
    }
    assert_eq!(f.evaluate(2.0), Ok(0.0));
    assert_eq!(f.to_string(), "x^3 - 2x^2 + 4x - 8");
    Ok(())
}

#[test]
fn expanded_products_are_polynomials() -> TestResult {
    let f = Function::parse("(x + 1)^2 - 2x")?;
    match f {
        Function::Polynomial(p) => assert_eq!(p.coefficients(), &[1.0, 0.0, 1.0]),
        other => panic!("expected polynomial, got {other:?}"),
    }
    Ok(())
}

#[test]
fn scientific_coefficients_are_kept() -> TestResult {
    match Function::parse("1e-3*x - 1")? {
        Function::Polynomial(p) => assert_eq!(p.coefficients(), &[1e-3, -1.0]),
        other => panic!("expected polynomial, got {other:?}"),
    }
    match Function::parse(".5x^2 - 2.5E+1")? {
        Function::Polynomial(p) => assert_eq!(p.coefficients(), &[0.5, 0.0, -25.0]),
        other => panic!("expected polynomial, got {other:?}"),
    }
    Ok(())
}

#[test]
fn transcendental_input_stays_an_expression() -> TestResult {
    for src in ["sin(x) + cos(x)", "e^x - 2", "sin(x^2) + e^(-x)", "x^0.5", "1 / x"] {
        let f = Function::parse(src)?;
        assert!(!f.is_polynomial(), "{src} compacted");
    }
    Ok(())
}

#[test]
fn expression_values_match_closures() -> TestResult {
    let f = Function::parse("sin(x^2) + e^(-x)")?;
    for x in [0.0_f64, 0.5, 1.7, 3.0] {
        let expected = (x * x).sin() + (-x).exp();
        let got = f.evaluate(x).map_err(|_| ExpressionError::Empty)?;
        assert!((got - expected).abs() < 1e-12);
    }
    Ok(())
}

#[test]
fn partial_expressions_report_domain_errors() -> TestResult {
    assert_eq!(Function::parse("ln(x)")?.evaluate(-1.0), Err(EvalError::Domain { x: -1.0 }));
    assert_eq!(Function::parse("sqrt(x - 1)")?.evaluate(0.0), Err(EvalError::Domain { x: 0.0 }));
    assert_eq!(Function::parse("1 / x")?.evaluate(0.0), Err(EvalError::Domain { x: 0.0 }));
    assert_eq!(Function::parse("exp(x)")?.evaluate(1000.0), Err(EvalError::Overflow { x: 1000.0 }));
    Ok(())
}

#[test]
fn named_functions_resolve() -> TestResult {
    let f = Function::named("Trigonometric")?;

    assert_eq!(f, Function::Named(NamedFunction::Trigonometric));
    assert_eq!(f.to_string(), "sin(x) + cos(x)");
    assert!(Function::named("polynomial")?.is_polynomial());
    assert_eq!(
        Function::named("quartic"),
        Err(ExpressionError::UnknownNamed { name: "quartic".into() })
    );
    Ok(())
}

#[test]
fn malformed_input_is_rejected() {
    assert_eq!(Function::parse("   "), Err(ExpressionError::Empty));
    assert!(matches!(Function::parse("x $ 2"), Err(ExpressionError::UnexpectedChar { .. })));
    assert!(matches!(Function::parse("sin(x"), Err(ExpressionError::UnexpectedEnd { .. })));
    assert!(matches!(Function::parse("foo(x)"), Err(ExpressionError::UnknownFunction { .. })));
    assert!(matches!(Function::parse("y + 1"), Err(ExpressionError::UnknownIdentifier { .. })));
    assert!(matches!(Function::parse("x +"), Err(ExpressionError::UnexpectedEnd { .. })));
}
