use std::fmt;
use std::ops::Range;

use logos::Logos;

use super::errors::ExpressionError;

#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\n\f\r]+")]
pub enum Token {
    // --- Literals ---
    // `1`, `2.5`, `3.`, `.5`, `1e-3`, `2.5E+2`; `2e^x` stops at `2`
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // Identifiers are matched case-insensitively by lower-casing here
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_ascii_lowercase())]
    Identifier(String),

    // --- Operators ---
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("^")]
    #[token("**")]
    Caret,

    // --- Delimiters ---
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Tokenize an expression, keeping the byte span of every token.
///
/// Fails on the first character that starts no token.
pub fn lex(source: &str) -> Result<Vec<(Token, Range<usize>)>, ExpressionError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(_) => {
                return Err(ExpressionError::UnexpectedChar {
                    found: lexer.slice().to_string(),
                    span: lexer.span(),
                });
            }
        }
    }

    Ok(tokens)
}
