//! WAYPOINT DSL - Route Language Parser
//!
//! This crate turns route-language documents into route values for an HTTP
//! gateway, and prints routes back into canonical text.
//!
//! Architecture:
//! ```text
//! Route document (text)
//!     ↓
//! Lexer (tokens with decoded literals)
//!     ↓
//! Parser (RouteDef AST)
//!     ↓
//! RouteBuilder (promote well-known predicates, classify backend)
//!     ↓
//! Route (model)
//!     ↓
//! Printer (for round-trip testing)
//! ```
//!
//! Every entry point is a pure function of its input, so all of them can be
//! called from any number of threads at once.

pub mod config;
pub mod decode;
pub mod error;
pub mod fragment;
pub mod lexer;
pub mod model;
pub mod parser;
pub mod printer;

// Re-export key types for convenience
pub use config::{OutputFormat, TraceConfig};
pub use error::*;
pub use fragment::{parse_filters, parse_predicates};
pub use lexer::{tokenize, Lexer, Span, Token, TokenKind};
pub use model::*;
pub use parser::*;
pub use printer::{print_filters, print_predicates, print_routes, PrintOptions};

/// Parse a route document into routes, one per definition, in order.
pub fn parse(document: &str) -> RouteResult<Vec<Route>> {
    let result = parse_definitions(document)
        .and_then(|defs| RouteBuilder::build_all(&defs).map_err(RouteError::from));

    match &result {
        Ok(routes) => tracing::debug!(routes = routes.len(), "parsed route document"),
        Err(err) => tracing::debug!(error = %err, "failed to parse route document"),
    }
    result
}

/// Parse a document and print it back in canonical compact form.
pub fn round_trip(document: &str) -> RouteResult<String> {
    let routes = parse(document)?;
    Ok(print_routes(&routes, &PrintOptions::default()))
}
