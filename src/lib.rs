//! Bracketing and open root finding for partial scalar functions.
//!
//! ┌ [`root_finding`] : bisection and secant solvers, termination policies,
//! │                    guarded evaluation, root-existence check
//! ├ [`function`]     : function provider (expression parser, Horner
//! │                    polynomials, named registry)
//! └ [`cli`]          : argument parsing and the `zeroth` binary's flow

pub mod cli;
pub mod function;
pub mod root_finding;
