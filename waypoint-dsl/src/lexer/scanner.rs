//! Lexer implementation

use super::token::*;
use crate::decode::{decode_number, decode_regex, decode_string};
use crate::error::{LexError, LexErrorReason};
use std::iter::Peekable;
use std::str::CharIndices;

// ============================================================================
// LEXER IMPLEMENTATION
// ============================================================================

/// Lexer for the route language.
pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    line: usize,
    column: usize,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            column: 1,
            pos: 0,
        }
    }

    /// Tokenize the entire source. The last token is always `Eof`.
    ///
    /// Stops at the first unrecognized character or unterminated literal.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }

    /// Get the next token from the source.
    fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let start = self.span_here();

        let kind = match self.peek_char() {
            None => TokenKind::Eof,
            Some(c) => match c {
                '(' => self.single(TokenKind::LParen),
                ')' => self.single(TokenKind::RParen),
                ',' => self.single(TokenKind::Comma),
                ':' => self.single(TokenKind::Colon),
                ';' => self.single(TokenKind::Semicolon),
                '*' => self.single(TokenKind::Any),
                '<' => self.single(TokenKind::LAngle),
                '>' => self.single(TokenKind::RAngle),

                '&' => {
                    self.advance();
                    if self.peek_char() == Some('&') {
                        self.advance();
                        TokenKind::And
                    } else {
                        return Err(self.error_at(start, LexErrorReason::InvalidCharacter('&')));
                    }
                }

                '-' => {
                    if self.peek_next_char() == Some('>') {
                        self.advance();
                        self.advance();
                        TokenKind::Arrow
                    } else if self
                        .peek_next_char()
                        .map(|c| c.is_ascii_digit() || c == '.')
                        .unwrap_or(false)
                    {
                        self.scan_number(start)?
                    } else {
                        self.advance();
                        return Err(self.error_at(start, LexErrorReason::InvalidCharacter('-')));
                    }
                }

                '"' => self.scan_string(start)?,

                '/' => self.scan_regex(start)?,

                c if c.is_ascii_digit() || c == '.' => self.scan_number(start)?,

                c if c.is_ascii_alphabetic() || c == '_' => self.scan_identifier(),

                c => {
                    self.advance();
                    return Err(self.error_at(start, LexErrorReason::InvalidCharacter(c)));
                }
            },
        };

        Ok(Token {
            kind,
            span: Span {
                end: self.pos,
                ..start
            },
        })
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Scan an identifier.
    fn scan_identifier(&mut self) -> TokenKind {
        let start = self.pos;

        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        TokenKind::Identifier(self.source[start..self.pos].to_string())
    }

    /// Scan a quoted string literal. The body is decoded by `decode_string`.
    fn scan_string(&mut self, start: Span) -> Result<TokenKind, LexError> {
        self.advance(); // consume opening quote
        let body_start = self.pos;

        loop {
            match self.advance() {
                None => return Err(self.error_at(start, LexErrorReason::UnterminatedString)),
                Some('"') => break,
                Some('\\') => {
                    if self.advance().is_none() {
                        return Err(self.error_at(start, LexErrorReason::UnterminatedString));
                    }
                }
                Some(_) => {}
            }
        }

        let body = &self.source[body_start..self.pos - 1];
        Ok(TokenKind::String(decode_string(body)))
    }

    /// Scan a regex literal. An unescaped `/` inside a bracket expression does
    /// not terminate the literal. The body is decoded by `decode_regex`.
    fn scan_regex(&mut self, start: Span) -> Result<TokenKind, LexError> {
        self.advance(); // consume opening slash
        let body_start = self.pos;
        let mut in_class = false;

        loop {
            match self.advance() {
                None => return Err(self.error_at(start, LexErrorReason::UnterminatedRegex)),
                Some('/') if !in_class => break,
                Some('[') => in_class = true,
                Some(']') => in_class = false,
                Some('\\') => {
                    if self.advance().is_none() {
                        return Err(self.error_at(start, LexErrorReason::UnterminatedRegex));
                    }
                }
                Some(_) => {}
            }
        }

        let body = &self.source[body_start..self.pos - 1];
        Ok(TokenKind::Regex(decode_regex(body)))
    }

    /// Scan the maximal run of number characters and validate it.
    fn scan_number(&mut self, start: Span) -> Result<TokenKind, LexError> {
        let begin = self.pos;

        if self.peek_char() == Some('-') {
            self.advance();
        }

        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() || c == '.' {
                self.advance();
            } else {
                break;
            }
        }

        let literal = &self.source[begin..self.pos];
        decode_number(literal).map(TokenKind::Number).ok_or_else(|| {
            self.error_at(start, LexErrorReason::MalformedNumber(literal.to_string()))
        })
    }

    /// Skip whitespace, including newlines.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn span_here(&self) -> Span {
        Span {
            start: self.pos,
            end: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    fn error_at(&self, start: Span, reason: LexErrorReason) -> LexError {
        LexError {
            span: Span {
                end: self.pos,
                ..start
            },
            reason,
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next_char(&self) -> Option<char> {
        let mut iter = self.source[self.pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let (i, c) = self.chars.next()?;
        self.pos = i + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }
}

/// Tokenize a source string in one call.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
