use std::ops::Range;

use thiserror::Error;

/// Expression lexing and parsing errors.
///
/// Every variant carries the byte span of the offending input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpressionError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character {found:?} at {span:?}")]
    UnexpectedChar { found: String, span: Range<usize> },

    #[error("unexpected token {found:?} at {span:?}, expected {expected}")]
    UnexpectedToken { found: String, expected: &'static str, span: Range<usize> },

    #[error("unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unknown function `{name}` at {span:?}")]
    UnknownFunction { name: String, span: Range<usize> },

    #[error("unknown identifier `{name}` at {span:?}")]
    UnknownIdentifier { name: String, span: Range<usize> },

    #[error("unknown predefined function `{name}`")]
    UnknownNamed { name: String },
}
