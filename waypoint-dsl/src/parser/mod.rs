//! Parser module for the route language

pub mod ast;
pub mod parser;

pub use ast::*;
pub use parser::*;
