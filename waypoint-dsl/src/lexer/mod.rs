//! Lexer module for the route language

pub mod token;
pub mod scanner;

pub use token::*;
pub use scanner::*;
