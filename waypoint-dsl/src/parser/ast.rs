//! Abstract Syntax Tree types

use crate::lexer::Span;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// AST TYPES
// ============================================================================

/// A decoded argument value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Arg {
    String(String),
    Number(f64),
    /// Regex pattern, already unescaped.
    Regex(String),
}

impl Arg {
    /// Text of a string or regex argument.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Arg::String(s) | Arg::Regex(s) => Some(s),
            Arg::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Arg::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::String(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::String(s)
    }
}

impl From<f64> for Arg {
    fn from(n: f64) -> Self {
        Arg::Number(n)
    }
}

/// A predicate occurrence in a match expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    pub name: String,
    pub args: Vec<Arg>,
}

/// Predicates are called matchers while they still sit in a route definition.
pub type Matcher = Predicate;

/// A filter occurrence in a filter chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub name: String,
    pub args: Vec<Arg>,
}

impl Predicate {
    pub fn new(name: impl Into<String>, args: Vec<Arg>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

impl Filter {
    pub fn new(name: impl Into<String>, args: Vec<Arg>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// The dispatch target of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Backend {
    /// A single network address.
    Network { url: String },
    /// No network call; the response is produced by the filters.
    Shunt,
    /// Re-enter the routing table.
    LoopBack,
    /// A set of network addresses with an optional selection algorithm.
    LoadBalanced {
        algorithm: Option<String>,
        endpoints: Vec<String>,
    },
}

impl Backend {
    pub fn network(url: impl Into<String>) -> Self {
        Backend::Network { url: url.into() }
    }

    pub fn backend_type(&self) -> BackendType {
        match self {
            Backend::Network { .. } => BackendType::Network,
            Backend::Shunt => BackendType::Shunt,
            Backend::LoopBack => BackendType::LoopBack,
            Backend::LoadBalanced { .. } => BackendType::LoadBalanced,
        }
    }
}

/// Backend discriminant without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackendType {
    Network,
    Shunt,
    LoopBack,
    LoadBalanced,
}

impl BackendType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendType::Network => "network",
            BackendType::Shunt => "shunt",
            BackendType::LoopBack => "loopback",
            BackendType::LoadBalanced => "lb",
        }
    }
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "network" => Ok(BackendType::Network),
            "shunt" => Ok(BackendType::Shunt),
            "loopback" => Ok(BackendType::LoopBack),
            "lb" => Ok(BackendType::LoadBalanced),
            other => Err(format!("unsupported backend type: {}", other)),
        }
    }
}

/// One parsed route definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDef {
    pub id: Option<String>,
    pub matchers: Vec<Matcher>,
    pub filters: Vec<Filter>,
    pub backend: Backend,
    /// Where the definition starts in the source.
    pub span: Span,
}
