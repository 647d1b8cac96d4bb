//! Printer for routes and route-language fragments
//!
//! Output always parses back to an equivalent value. Strings and regexes are
//! re-escaped by [`escape_string`] and [`escape_regex`]; numbers use the
//! shortest text that reads back to the same `f64`; an empty match expression
//! is written as `*`.

use crate::decode::{escape_regex, escape_string};
use crate::model::Route;
use crate::parser::ast::{Arg, Backend, Filter, Predicate, RouteDef};
use std::fmt::{self, Write};

/// Layout options for printed documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// One route per line when false; one clause per line when true.
    pub pretty: bool,
    /// Continuation line prefix used in pretty mode.
    pub indent: String,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: "    ".to_string(),
        }
    }
}

impl PrintOptions {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }
}

// ============================================================================
// DISPLAY IMPLS
// ============================================================================

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::String(s) => write!(f, "\"{}\"", escape_string(s)),
            Arg::Regex(r) => write!(f, "/{}/", escape_regex(r)),
            Arg::Number(n) => write!(f, "{}", n),
        }
    }
}

fn write_call(f: &mut impl Write, name: &str, args: &[Arg]) -> fmt::Result {
    write!(f, "{}(", name)?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", arg)?;
    }
    f.write_char(')')
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_call(f, &self.name, &self.args)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_call(f, &self.name, &self.args)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Network { url } => write!(f, "\"{}\"", escape_string(url)),
            Backend::Shunt => f.write_str("<shunt>"),
            Backend::LoopBack => f.write_str("<loopback>"),
            Backend::LoadBalanced {
                algorithm,
                endpoints,
            } => {
                f.write_char('<')?;
                if let Some(algorithm) = algorithm {
                    write!(f, "{}, ", algorithm)?;
                }
                for (i, endpoint) in endpoints.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "\"{}\"", escape_string(endpoint))?;
                }
                f.write_char('>')
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let predicates = self.all_predicates();
        write_route(
            f,
            self.id.as_deref(),
            &predicates,
            &self.filters,
            &self.backend,
            &PrintOptions::default(),
        )
    }
}

impl fmt::Display for RouteDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_route(
            f,
            self.id.as_deref(),
            &self.matchers,
            &self.filters,
            &self.backend,
            &PrintOptions::default(),
        )
    }
}

// ============================================================================
// ROUTE LAYOUT
// ============================================================================

fn write_route(
    out: &mut impl Write,
    id: Option<&str>,
    predicates: &[Predicate],
    filters: &[Filter],
    backend: &Backend,
    options: &PrintOptions,
) -> fmt::Result {
    let (and, arrow) = if options.pretty {
        (format!("\n{}&& ", options.indent), format!("\n{}-> ", options.indent))
    } else {
        (" && ".to_string(), " -> ".to_string())
    };

    if let Some(id) = id {
        write!(out, "{}: ", id)?;
    }

    if predicates.is_empty() {
        out.write_char('*')?;
    }
    for (i, predicate) in predicates.iter().enumerate() {
        if i > 0 {
            out.write_str(&and)?;
        }
        write!(out, "{}", predicate)?;
    }

    for filter in filters {
        write!(out, "{}{}", arrow, filter)?;
    }

    write!(out, "{}{}", arrow, backend)
}

// ============================================================================
// PRINTING ENTRY POINTS
// ============================================================================

/// Print a route document. Definitions are separated by `;`.
///
/// A document with more than one definition needs an id on each, so routes
/// without one are printed as `route<N>`, where N is the position in `routes`.
pub fn print_routes(routes: &[Route], options: &PrintOptions) -> String {
    let separator = if options.pretty { ";\n\n" } else { ";\n" };
    let mut output = String::new();

    for (i, route) in routes.iter().enumerate() {
        if i > 0 {
            output.push_str(separator);
        }
        let id = match &route.id {
            None if routes.len() > 1 => Some(format!("route{}", i)),
            id => id.clone(),
        };
        let predicates = route.all_predicates();
        // Writing into a String cannot fail.
        let _ = write_route(
            &mut output,
            id.as_deref(),
            &predicates,
            &route.filters,
            &route.backend,
            options,
        );
    }

    output
}

/// Print a match expression. An empty list prints as `*`.
pub fn print_predicates(predicates: &[Predicate]) -> String {
    if predicates.is_empty() {
        return "*".to_string();
    }

    predicates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" && ")
}

/// Print a filter chain. An empty list prints as the empty string.
pub fn print_filters(filters: &[Filter]) -> String {
    filters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
