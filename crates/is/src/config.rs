//! Configuration for failure rendering and tracing.
//!
//! Settings are read once from the environment and shared read-only by every
//! assertion in the process.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::ConfigError;

/// Environment variable selecting the type name style.
pub const TYPE_NAMES_VAR: &str = "IS_TYPE_NAMES";

/// Environment variable toggling tracing events for failures.
pub const TRACE_FAILURES_VAR: &str = "IS_TRACE_FAILURES";

static GLOBAL: Lazy<Settings> = Lazy::new(Settings::load);

/// How runtime type names appear in failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeNames {
    /// Last path segment only, e.g. `Option<&i32>`.
    #[default]
    Short,
    /// Fully qualified, e.g. `core::option::Option<&i32>`.
    Full,
}

impl FromStr for TypeNames {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(TypeNames::Short),
            "full" => Ok(TypeNames::Full),
            _ => Err(ConfigError::InvalidTypeNames(s.to_string())),
        }
    }
}

impl fmt::Display for TypeNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNames::Short => write!(f, "short"),
            TypeNames::Full => write!(f, "full"),
        }
    }
}

/// Assertion settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Type name style in failure messages
    #[serde(default)]
    pub type_names: TypeNames,

    /// Emit a tracing event for every failed expectation
    #[serde(default = "default_trace_failures")]
    pub trace_failures: bool,
}

fn default_trace_failures() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            type_names: TypeNames::default(),
            trace_failures: default_trace_failures(),
        }
    }
}

impl Settings {
    /// Load settings from environment variables, keeping defaults for
    /// missing or invalid values.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// The process-wide settings, loaded on first use.
    pub fn global() -> &'static Settings {
        &GLOBAL
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(value) = lookup(TYPE_NAMES_VAR) {
            match value.parse::<TypeNames>() {
                Ok(type_names) => settings.type_names = type_names,
                Err(err) => warn!(%err, "Ignoring {}", TYPE_NAMES_VAR),
            }
        }

        if let Some(value) = lookup(TRACE_FAILURES_VAR) {
            match parse_bool(TRACE_FAILURES_VAR, &value) {
                Ok(enabled) => settings.trace_failures = enabled,
                Err(err) => warn!(%err, "Ignoring {}", TRACE_FAILURES_VAR),
            }
        }

        settings
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let settings = Settings::from_lookup(lookup(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.type_names, TypeNames::Short);
        assert!(settings.trace_failures);
    }

    #[test]
    fn test_overrides_from_environment() {
        let settings = Settings::from_lookup(lookup(&[
            (TYPE_NAMES_VAR, "FULL"),
            (TRACE_FAILURES_VAR, "off"),
        ]));
        assert_eq!(settings.type_names, TypeNames::Full);
        assert!(!settings.trace_failures);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let settings = Settings::from_lookup(lookup(&[
            (TYPE_NAMES_VAR, "medium"),
            (TRACE_FAILURES_VAR, "maybe"),
        ]));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"type_names": "full"}"#).unwrap();
        assert_eq!(settings.type_names, TypeNames::Full);
        assert!(settings.trace_failures);

        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["type_names"], "short");
    }

    #[test]
    fn test_type_names_parse() {
        assert_eq!("short".parse::<TypeNames>(), Ok(TypeNames::Short));
        assert_eq!(
            "long".parse::<TypeNames>(),
            Err(ConfigError::InvalidTypeNames("long".to_string()))
        );
    }
}
