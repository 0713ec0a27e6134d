//! Provenance of the raw configuration value.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Whether the configuration value was supplied at all.
///
/// Absent (never set) and empty (set to `""` or whitespace) both produce an
/// empty membership set, but they carry different security implications, so
/// callers can distinguish them when choosing a default posture.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// The variable was never set.
    Absent,
    /// The variable was set to an empty or whitespace-only string.
    Empty,
    /// The variable was set to a non-empty string.
    Set,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_provenance_display() {
        assert_eq!(Provenance::Absent.to_string(), "absent");
        assert_eq!(Provenance::Empty.to_string(), "empty");
        assert_eq!(Provenance::Set.to_string(), "set");
    }

    #[test]
    fn test_provenance_from_str() {
        assert_eq!(Provenance::from_str("absent").unwrap(), Provenance::Absent);
        assert!(Provenance::from_str("bogus").is_err());
    }

    #[test]
    fn test_provenance_serialization() {
        let serialized = serde_json::to_value(Provenance::Empty).unwrap();
        assert_eq!(serialized, serde_json::json!("empty"));
        let deserialized: Provenance = serde_json::from_value(serialized).unwrap();
        assert_eq!(deserialized, Provenance::Empty);
    }
}
