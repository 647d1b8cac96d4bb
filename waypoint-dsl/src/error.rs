//! Error types for route-language processing

use crate::lexer::Span;
use thiserror::Error;

/// Why the lexer stopped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexErrorReason {
    #[error("unexpected character {0:?}")]
    InvalidCharacter(char),

    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unterminated regular expression literal")]
    UnterminatedRegex,

    #[error("malformed number literal {0:?}")]
    MalformedNumber(String),
}

/// Lexical error: the first unrecognized character or unterminated literal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("lex error at {span}: {reason}")]
pub struct LexError {
    pub span: Span,
    pub reason: LexErrorReason,
}

/// Structural error in the token sequence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("parse error at {span}: expected {expected}, found {found}")]
pub struct ParseError {
    pub span: Span,
    pub expected: String,
    pub found: String,
}

/// Errors raised while turning a route definition into a route.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("invalid arguments for {predicate} predicate: expected {expected}")]
    InvalidArguments { predicate: String, expected: String },

    #[error("duplicate {predicate} predicate")]
    DuplicatePredicate { predicate: String },

    #[error("load balanced backend without endpoints")]
    EmptyEndpoints,
}

/// Any failure of a top-level operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Result type alias for route-language operations.
pub type RouteResult<T> = Result<T, RouteError>;

/// Configuration errors for the trace tool.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

// =============================================================================
// TESTS
// =============================================================================
