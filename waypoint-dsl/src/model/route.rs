//! Exported route type

use crate::decode::fits_regex_literal;
use crate::parser::ast::{Arg, Backend, BackendType, Filter, Predicate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known predicate names that are lifted into dedicated route fields.
pub mod names {
    pub const PATH: &str = "Path";
    pub const METHOD: &str = "Method";
    pub const HOST: &str = "Host";
    pub const HOST_REGEXP: &str = "HostRegexp";
    pub const PATH_REGEXP: &str = "PathRegexp";
    pub const HEADER: &str = "Header";
    pub const HEADER_REGEXP: &str = "HeaderRegexp";

    /// Every promoted name, in the order the builder looks them up.
    pub const PROMOTED: &[&str] = &[
        PATH,
        METHOD,
        HOST,
        HOST_REGEXP,
        PATH_REGEXP,
        HEADER,
        HEADER_REGEXP,
    ];

    pub fn is_promoted(name: &str) -> bool {
        PROMOTED.contains(&name)
    }
}

/// A route ready for the matching tree.
///
/// `predicates` holds only the predicates that were not promoted into one of
/// the dedicated fields. [`Route::all_predicates`] regenerates the complete
/// list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: Option<String>,
    pub path: Option<String>,
    pub method: Option<String>,
    pub host_regexps: Vec<String>,
    pub path_regexps: Vec<String>,
    pub headers: BTreeMap<String, String>,
    pub header_regexps: BTreeMap<String, Vec<String>>,
    pub predicates: Vec<Predicate>,
    pub filters: Vec<Filter>,
    pub backend: Backend,
}

impl Route {
    /// A catch-all route with no filters.
    pub fn new(backend: Backend) -> Self {
        Self {
            id: None,
            path: None,
            method: None,
            host_regexps: Vec::new(),
            path_regexps: Vec::new(),
            headers: BTreeMap::new(),
            header_regexps: BTreeMap::new(),
            predicates: Vec::new(),
            filters: Vec::new(),
            backend,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn backend_type(&self) -> BackendType {
        self.backend.backend_type()
    }

    /// Address of a network backend.
    pub fn backend_url(&self) -> Option<&str> {
        match &self.backend {
            Backend::Network { url } => Some(url),
            _ => None,
        }
    }

    pub fn lb_algorithm(&self) -> Option<&str> {
        match &self.backend {
            Backend::LoadBalanced { algorithm, .. } => algorithm.as_deref(),
            _ => None,
        }
    }

    pub fn lb_endpoints(&self) -> &[String] {
        match &self.backend {
            Backend::LoadBalanced { endpoints, .. } => endpoints,
            _ => &[],
        }
    }

    /// True when the route has no conditions at all.
    pub fn is_catch_all(&self) -> bool {
        self.path.is_none()
            && self.method.is_none()
            && self.host_regexps.is_empty()
            && self.path_regexps.is_empty()
            && self.headers.is_empty()
            && self.header_regexps.is_empty()
            && self.predicates.is_empty()
    }

    /// The full predicate list: promoted fields first, then the generic ones.
    ///
    /// Parsing a match expression built from this list yields the same route.
    pub fn all_predicates(&self) -> Vec<Predicate> {
        let mut all = Vec::new();

        if let Some(path) = &self.path {
            all.push(Predicate::new(names::PATH, vec![Arg::from(path.as_str())]));
        }
        for pattern in &self.host_regexps {
            all.push(Predicate::new(
                names::HOST_REGEXP,
                vec![pattern_arg(pattern)],
            ));
        }
        for pattern in &self.path_regexps {
            all.push(Predicate::new(
                names::PATH_REGEXP,
                vec![pattern_arg(pattern)],
            ));
        }
        if let Some(method) = &self.method {
            all.push(Predicate::new(
                names::METHOD,
                vec![Arg::from(method.as_str())],
            ));
        }
        for (name, value) in &self.headers {
            all.push(Predicate::new(
                names::HEADER,
                vec![Arg::from(name.as_str()), Arg::from(value.as_str())],
            ));
        }
        for (name, patterns) in &self.header_regexps {
            for pattern in patterns {
                all.push(Predicate::new(
                    names::HEADER_REGEXP,
                    vec![Arg::from(name.as_str()), pattern_arg(pattern)],
                ));
            }
        }

        all.extend(self.predicates.iter().cloned());
        all
    }
}

/// Promoted patterns print as regex literals unless the text cannot lex as
/// one; the builder accepts either form.
fn pattern_arg(pattern: &str) -> Arg {
    if fits_regex_literal(pattern) {
        Arg::Regex(pattern.to_string())
    } else {
        Arg::from(pattern)
    }
}
