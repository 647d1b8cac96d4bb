//! Route model
//!
//! Route definitions from the parser are turned into [`Route`] values by the
//! [`RouteBuilder`]. Well-known predicates are lifted into dedicated fields;
//! everything else stays in the generic predicate list.

pub mod builder;
pub mod route;

pub use builder::*;
pub use route::*;
