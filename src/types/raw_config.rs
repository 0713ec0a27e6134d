//! The unparsed allow-list configuration value.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

use super::provenance::Provenance;

/// Conventional environment variable holding the comma-separated allow-list.
pub const ALLOWED_USER_IDS_VAR: &str = "ALLOWED_USER_IDS";

/// A raw configuration value, read once at startup.
///
/// Tracks whether the value was supplied at all: an unset variable is
/// distinguishable from one set to the empty string (see [`Provenance`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawConfig {
    value: Option<String>,
}

impl RawConfig {
    /// A configuration value that was never supplied.
    pub fn absent() -> Self {
        RawConfig { value: None }
    }

    /// A configuration value that was explicitly supplied, possibly empty.
    pub fn new(value: impl Into<String>) -> Self {
        RawConfig {
            value: Some(value.into()),
        }
    }

    /// Read `var` from the process environment.
    ///
    /// An unset variable yields an absent config. A value that is not valid
    /// UTF-8 is an error rather than a panic.
    pub fn from_env(var: &str) -> Result<Self, PolicyError> {
        match env::var(var) {
            Ok(value) => Ok(RawConfig::new(value)),
            Err(env::VarError::NotPresent) => Ok(RawConfig::absent()),
            Err(env::VarError::NotUnicode(raw)) => Err(PolicyError::InvalidEncoding(format!(
                "{var}: {}",
                raw.to_string_lossy()
            ))),
        }
    }

    /// Absent, empty, or set.
    pub fn provenance(&self) -> Provenance {
        match &self.value {
            None => Provenance::Absent,
            Some(v) if v.trim().is_empty() => Provenance::Empty,
            Some(_) => Provenance::Set,
        }
    }

    /// The raw string, if one was supplied.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_provenance() {
        assert_eq!(RawConfig::absent().provenance(), Provenance::Absent);
    }

    #[test]
    fn test_empty_provenance() {
        assert_eq!(RawConfig::new("").provenance(), Provenance::Empty);
        assert_eq!(RawConfig::new("   ").provenance(), Provenance::Empty);
    }

    #[test]
    fn test_set_provenance() {
        assert_eq!(RawConfig::new("123,456").provenance(), Provenance::Set);
    }

    #[test]
    fn test_absent_and_empty_are_distinct() {
        let absent = RawConfig::absent();
        let empty = RawConfig::new("");
        assert_ne!(absent.provenance(), empty.provenance());
        assert_ne!(absent, empty);
    }

    #[test]
    fn test_from_env_missing_variable_is_absent() {
        let config = RawConfig::from_env("ALLOWLIST_CORE_TEST_UNSET_VARIABLE").unwrap();
        assert_eq!(config.provenance(), Provenance::Absent);
        assert_eq!(config.value(), None);
    }

    #[test]
    fn test_value_accessor() {
        assert_eq!(RawConfig::new("1,2").value(), Some("1,2"));
        assert_eq!(RawConfig::absent().value(), None);
    }
}
