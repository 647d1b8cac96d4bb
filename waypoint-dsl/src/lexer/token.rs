//! Lexer token types

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// LEXER TYPES
// ============================================================================

/// Token kinds for the route language.
///
/// Literal payloads are already decoded: quoted strings and regex literals
/// carry their unescaped text, numbers carry the parsed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    Identifier(String),
    String(String),
    Regex(String),
    Number(f64),

    // Operators
    Arrow,
    And,
    Any,

    // Delimiters
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
    LAngle,
    RAngle,

    // Special
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(name) => write!(f, "identifier `{}`", name),
            TokenKind::String(s) => write!(f, "string {:?}", s),
            TokenKind::Regex(r) => write!(f, "regex /{}/", r),
            TokenKind::Number(n) => write!(f, "number {}", n),
            TokenKind::Arrow => f.write_str("'->'"),
            TokenKind::And => f.write_str("'&&'"),
            TokenKind::Any => f.write_str("'*'"),
            TokenKind::LParen => f.write_str("'('"),
            TokenKind::RParen => f.write_str("')'"),
            TokenKind::Comma => f.write_str("','"),
            TokenKind::Colon => f.write_str("':'"),
            TokenKind::Semicolon => f.write_str("';'"),
            TokenKind::LAngle => f.write_str("'<'"),
            TokenKind::RAngle => f.write_str("'>'"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

/// Source location span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Default for Span {
    fn default() -> Self {
        Self {
            start: 0,
            end: 0,
            line: 1,
            column: 1,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A token with its kind and source location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// The raw source text this token was scanned from.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.start..self.span.end).unwrap_or("")
    }
}
