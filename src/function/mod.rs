//! Function provider for the solvers.
//!
//! ┌ [`lexer`]    : `logos` tokenizer
//! ├ [`parser`]   : recursive-descent parser into [`expr::Expr`]
//! ├ [`horner`]   : polynomials evaluated by Horner's scheme
//! ├ [`registry`] : predefined named functions
//! └ [`provider`] : [`provider::Function`], the type handed to the solvers

pub mod errors;
pub mod expr;
pub mod horner;
pub mod lexer;
pub mod parser;
pub mod provider;
pub mod registry;

pub use errors::ExpressionError;
pub use provider::Function;
