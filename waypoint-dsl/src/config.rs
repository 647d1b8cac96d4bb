//! Trace tool configuration

use crate::error::ConfigError;
use crate::printer::PrintOptions;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_LOG_FILTER: &str = "waypoint_dsl=info";

/// What the trace tool prints for the built routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Canonical route-language text.
    #[default]
    Routes,
    /// The route model as JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Routes => f.write_str("routes"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "routes" => Ok(OutputFormat::Routes),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                field: "WAYPOINT_OUTPUT".to_string(),
                value: s.to_string(),
                reason: "expected routes or json".to_string(),
            }),
        }
    }
}

/// Settings for the `trace_routes` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    pub print: PrintOptions,
    pub output: OutputFormat,
    /// `EnvFilter` directive for the log subscriber.
    pub log_filter: String,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            print: PrintOptions::default(),
            output: OutputFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl TraceConfig {
    /// Read the configuration from the process environment.
    ///
    /// Environment variables:
    /// - `WAYPOINT_PRETTY`: "true" or "false" (default: false)
    /// - `WAYPOINT_INDENT`: spaces per continuation line in pretty mode (default: 4)
    /// - `WAYPOINT_OUTPUT`: "routes" or "json" (default: routes)
    /// - `WAYPOINT_LOG`: log filter, falls back to `RUST_LOG` (default: waypoint_dsl=info)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("WAYPOINT_PRETTY") {
            config.print.pretty = parse_bool("WAYPOINT_PRETTY", &value)?;
        }

        if let Some(value) = lookup("WAYPOINT_INDENT") {
            let width: usize = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "WAYPOINT_INDENT".to_string(),
                value: value.clone(),
                reason: "expected a number of spaces".to_string(),
            })?;
            config.print.indent = " ".repeat(width);
        }

        if let Some(value) = lookup("WAYPOINT_OUTPUT") {
            config.output = value.parse()?;
        }

        if let Some(filter) = lookup("WAYPOINT_LOG").or_else(|| lookup("RUST_LOG")) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        Ok(config)
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<TraceConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TraceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, TraceConfig::default());
        assert!(!config.print.pretty);
        assert_eq!(config.output, OutputFormat::Routes);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("WAYPOINT_PRETTY", "true"),
            ("WAYPOINT_INDENT", "2"),
            ("WAYPOINT_OUTPUT", "JSON"),
            ("WAYPOINT_LOG", "waypoint_dsl=debug"),
        ])
        .unwrap();
        assert!(config.print.pretty);
        assert_eq!(config.print.indent, "  ");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter, "waypoint_dsl=debug");
    }

    #[test]
    fn test_rust_log_fallback() {
        let config = config_from(&[("RUST_LOG", "trace")]).unwrap();
        assert_eq!(config.log_filter, "trace");

        let config = config_from(&[("RUST_LOG", "trace"), ("WAYPOINT_LOG", "warn")]).unwrap();
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_invalid_values() {
        for (key, value) in [
            ("WAYPOINT_PRETTY", "maybe"),
            ("WAYPOINT_INDENT", "-1"),
            ("WAYPOINT_OUTPUT", "yaml"),
        ] {
            let err = config_from(&[(key, value)]).unwrap_err();
            let ConfigError::InvalidValue { field, .. } = err;
            assert_eq!(field, key);
        }
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Routes.to_string(), "routes");
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    }
}
