//! Route builder - transform route definitions into routes
//!
//! The builder validates what the grammar cannot: the argument shape of
//! promoted predicates, repeated single-valued predicates, and load balancer
//! endpoint lists on definitions that were constructed by hand.
//!
//! ```text
//! Source → Lexer → Parser → RouteDef → RouteBuilder → Route
//! ```

use super::route::{names, Route};
use crate::error::BuildError;
use crate::parser::ast::{Arg, Backend, Predicate, RouteDef};

pub type BuildResult<T> = Result<T, BuildError>;

/// Sets a dedicated route field from a predicate occurrence.
type Promote = fn(&mut Route, &Predicate) -> BuildResult<()>;

/// Predicate name to setter. Names not listed stay generic.
const PROMOTIONS: &[(&str, Promote)] = &[
    (names::PATH, promote_path),
    (names::METHOD, promote_method),
    (names::HOST, promote_host),
    (names::HOST_REGEXP, promote_host),
    (names::PATH_REGEXP, promote_path_regexp),
    (names::HEADER, promote_header),
    (names::HEADER_REGEXP, promote_header_regexp),
];

/// Turns route definitions into routes.
pub struct RouteBuilder;

impl RouteBuilder {
    /// Build one route from one definition.
    pub fn build(def: &RouteDef) -> BuildResult<Route> {
        Self::validate_backend(&def.backend)?;

        let mut route = Route::new(def.backend.clone());
        route.id = def.id.clone();

        for matcher in &def.matchers {
            match Self::lookup(&matcher.name) {
                Some(promote) => promote(&mut route, matcher)?,
                None => route.predicates.push(matcher.clone()),
            }
        }

        route.filters = def.filters.clone();
        Ok(route)
    }

    /// Build every definition, preserving order.
    pub fn build_all(defs: &[RouteDef]) -> BuildResult<Vec<Route>> {
        defs.iter().map(Self::build).collect()
    }

    fn lookup(name: &str) -> Option<Promote> {
        PROMOTIONS
            .iter()
            .find(|(promoted, _)| *promoted == name)
            .map(|(_, promote)| *promote)
    }

    fn validate_backend(backend: &Backend) -> BuildResult<()> {
        match backend {
            Backend::LoadBalanced { endpoints, .. }
                if endpoints.iter().all(|e| e.trim().is_empty()) =>
            {
                Err(BuildError::EmptyEndpoints)
            }
            _ => Ok(()),
        }
    }
}

// ============================================================================
// PROMOTION SETTERS
// ============================================================================

fn promote_path(route: &mut Route, predicate: &Predicate) -> BuildResult<()> {
    let value = single_text(predicate)?;
    set_once(&mut route.path, value, predicate)
}

fn promote_method(route: &mut Route, predicate: &Predicate) -> BuildResult<()> {
    let value = single_text(predicate)?;
    set_once(&mut route.method, value, predicate)
}

fn promote_host(route: &mut Route, predicate: &Predicate) -> BuildResult<()> {
    let value = single_text(predicate)?;
    route.host_regexps.push(value);
    Ok(())
}

fn promote_path_regexp(route: &mut Route, predicate: &Predicate) -> BuildResult<()> {
    let value = single_text(predicate)?;
    route.path_regexps.push(value);
    Ok(())
}

fn promote_header(route: &mut Route, predicate: &Predicate) -> BuildResult<()> {
    let (name, value) = text_pair(predicate)?;
    route.headers.insert(name, value);
    Ok(())
}

fn promote_header_regexp(route: &mut Route, predicate: &Predicate) -> BuildResult<()> {
    let (name, pattern) = text_pair(predicate)?;
    route.header_regexps.entry(name).or_default().push(pattern);
    Ok(())
}

fn set_once(slot: &mut Option<String>, value: String, predicate: &Predicate) -> BuildResult<()> {
    if slot.is_some() {
        return Err(BuildError::DuplicatePredicate {
            predicate: predicate.name.clone(),
        });
    }
    *slot = Some(value);
    Ok(())
}

fn single_text(predicate: &Predicate) -> BuildResult<String> {
    match predicate.args.as_slice() {
        [arg] => text(arg, predicate, "one string or regex argument"),
        _ => Err(invalid(predicate, "one string or regex argument")),
    }
}

fn text_pair(predicate: &Predicate) -> BuildResult<(String, String)> {
    const EXPECTED: &str = "two string or regex arguments";
    match predicate.args.as_slice() {
        [first, second] => Ok((
            text(first, predicate, EXPECTED)?,
            text(second, predicate, EXPECTED)?,
        )),
        _ => Err(invalid(predicate, EXPECTED)),
    }
}

fn text(arg: &Arg, predicate: &Predicate, expected: &str) -> BuildResult<String> {
    arg.as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(predicate, expected))
}

fn invalid(predicate: &Predicate, expected: &str) -> BuildError {
    BuildError::InvalidArguments {
        predicate: predicate.name.clone(),
        expected: expected.to_string(),
    }
}
