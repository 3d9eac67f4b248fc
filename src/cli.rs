//! Command-line front end.
//!
//! ┌ [`Cli`]     : `clap` arguments
//! ├ [`run`]     : existence check, `--force` gating, selected solvers
//! └ [`Summary`] : everything `run` decided, rendered by its `Display`

use std::fmt;

use clap::{Parser, ValueEnum};

use crate::function::registry::NamedFunction;
use crate::function::{ExpressionError, Function};
use crate::root_finding::bisection::{bisection, BisectionCfg};
use crate::root_finding::config::StopCondition;
use crate::root_finding::errors::{ConfigError, EvalError};
use crate::root_finding::evaluate::ScalarFunction;
use crate::root_finding::report::IterationResult;
use crate::root_finding::secant::{secant_method, SecantCfg};
use crate::root_finding::signs::{check_root_existence, RootExistence};


#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Stop {
    /// |x_i - x_(i-1)| < epsilon
    EpsilonDelta,
    /// exactly --max-iter iterations
    FixedIterations,
}

impl From<Stop> for StopCondition {
    fn from(stop: Stop) -> Self {
        match stop {
            Stop::EpsilonDelta    => StopCondition::EpsilonDelta,
            Stop::FixedIterations => StopCondition::FixedIterations,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Bisection,
    Secant,
    Both,
}

impl Method {
    fn runs_bisection(self) -> bool { matches!(self, Method::Bisection | Method::Both) }
    fn runs_secant(self)    -> bool { matches!(self, Method::Secant | Method::Both) }
}


/// Find a root of f(x) on [a, b] with bisection and secant iteration.
#[derive(Debug, Parser)]
#[command(name = "zeroth", version, allow_negative_numbers = true)]
pub struct Cli {
    /// Function of x, e.g. "x^3 - 2x^2 + 4x - 8" or "sin(x) + cos(x)"
    #[arg(long, conflicts_with = "function", required_unless_present_any = ["function", "list"])]
    pub expr: Option<String>,

    /// Predefined function name (see --list)
    #[arg(long)]
    pub function: Option<String>,

    /// Interval start (secant seed x0)
    #[arg(short, long, required_unless_present = "list")]
    pub a: Option<f64>,

    /// Interval end (secant seed x1)
    #[arg(short, long, required_unless_present = "list")]
    pub b: Option<f64>,

    /// Convergence tolerance, also the domain-error perturbation
    #[arg(long, default_value_t = 1e-4)]
    pub epsilon: f64,

    /// Iteration budget
    #[arg(long, default_value_t = 100)]
    pub max_iter: usize,

    #[arg(long, value_enum, default_value_t = Stop::EpsilonDelta)]
    pub stop: Stop,

    #[arg(long, value_enum, default_value_t = Method::Both)]
    pub method: Method,

    /// Keep going when f(a) and f(b) share a sign
    #[arg(long)]
    pub force: bool,

    /// List predefined functions and exit
    #[arg(long)]
    pub list: bool,
}


#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Expression(#[from] ExpressionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("function undefined at an endpoint: {0}")]
    Endpoint(#[from] EvalError),

    #[error("missing argument {0}")]
    Missing(&'static str),
}


/// Outcome of one CLI invocation.
///
/// ├ `skipped` : no root guaranteed and `--force` absent, nothing solved
/// └ `results` : one report per solver that ran, in bisection, secant order
#[derive(Debug, Clone)]
pub struct Summary {
    pub function  : Function,
    pub a         : f64,
    pub b         : f64,
    pub existence : RootExistence,
    pub skipped   : bool,
    pub results   : Vec<IterationResult>,
}

impl Summary {
    /// Report of the named solver, if it ran.
    pub fn result(&self, algorithm: &str) -> Option<&IterationResult> {
        self.results.iter().find(|r| r.algorithm == algorithm)
    }
}


/// `name  formula` lines for `--list`.
pub fn list_functions() -> String {
    NamedFunction::ALL
        .iter()
        .map(|named| format!("{:<14} {}\n", named.name(), named.formula()))
        .collect()
}


/// Resolves the function, validates the configuration, runs the existence
/// check and then the selected solvers.
///
/// # Errors
/// - [`CliError::Expression`] : unparsable `--expr` or unknown `--function`
/// - [`CliError::Config`]     : invalid `--epsilon` or `--max-iter`
/// - [`CliError::Endpoint`]   : `f` undefined at `a` or `b`
pub fn run(cli: &Cli) -> Result<Summary, CliError> {
    let function = match (&cli.expr, &cli.function) {
        (Some(expr), _)    => Function::parse(expr)?,
        (None, Some(name)) => Function::named(name)?,
        (None, None)       => return Err(CliError::Missing("--expr or --function")),
    };
    let a = cli.a.ok_or(CliError::Missing("-a"))?;
    let b = cli.b.ok_or(CliError::Missing("-b"))?;

    let bisection_cfg = BisectionCfg::new()
        .with_stop(cli.stop.into())
        .set_epsilon(cli.epsilon)?
        .set_max_iter(cli.max_iter)?;
    let secant_cfg = SecantCfg::new()
        .with_stop(cli.stop.into())
        .set_epsilon(cli.epsilon)?
        .set_max_iter(cli.max_iter)?;

    let existence = check_root_existence(&function, a, b)?;
    let skipped   = existence == RootExistence::NoRootGuaranteed && !cli.force;

    let mut results = Vec::new();
    if !skipped {
        if cli.method.runs_bisection() {
            results.push(bisection(&function, a, b, bisection_cfg));
        }
        if cli.method.runs_secant() {
            results.push(secant_method(&function, a, b, secant_cfg));
        }
    }

    Ok(Summary { function, a, b, existence, skipped, results })
}


impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "f(x) = {}", self.function)?;
        writeln!(f, "interval: [{}, {}]", self.a, self.b)?;
        writeln!(f, "root existence check: {}", self.existence)?;

        if self.skipped {
            writeln!(f, "f(a) and f(b) share a sign: either no root or an even number of roots.")?;
            writeln!(f, "re-run with --force to search anyway.")?;
            return Ok(());
        }

        for result in &self.results {
            writeln!(f)?;
            writeln!(f, "{}:", result.algorithm)?;
            match result.root() {
                Some(root) => {
                    writeln!(f, "  root:       {root:.6}")?;
                    writeln!(f, "  iterations: {}", result.iterations())?;
                    match self.function.evaluate(root) {
                        Ok(fx)   => writeln!(f, "  f(root) =   {fx:.10}")?,
                        Err(err) => writeln!(f, "  f(root):    {err}")?,
                    }
                }
                None => {
                    writeln!(f, "  no root found ({:?})", result.termination)?;
                    writeln!(f, "  iterations performed: {}", result.iterations())?;
                }
            }
            writeln!(
                f,
                "  evaluations: {}, perturbations: {}, fallbacks: {}",
                result.evaluations, result.perturbations, result.fallbacks
            )?;
        }

        Ok(())
    }
}
