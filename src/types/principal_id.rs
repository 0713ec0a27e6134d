//! Canonical principal identifier.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::scheme::IdScheme;

/// A canonical identifier for a user/account.
///
/// Only produced through [`PrincipalId::parse`], so it is guaranteed
/// non-empty, free of the list delimiter, and normalized under its scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct PrincipalId(String);

impl PrincipalId {
    /// Normalize `raw` under `scheme`.
    ///
    /// The `Err` value carries a human-readable reason suitable for a
    /// malformed-entry diagnostic.
    pub fn parse(raw: &str, scheme: IdScheme) -> Result<Self, String> {
        scheme.normalize(raw).map(PrincipalId)
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PrincipalId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        let id = PrincipalId::parse("123", IdScheme::Numeric).unwrap();
        assert_eq!(id.as_str(), "123");
    }

    #[test]
    fn test_parse_normalizes_equivalent_forms() {
        let a = PrincipalId::parse(" 007 ", IdScheme::Numeric).unwrap();
        let b = PrincipalId::parse("+7", IdScheme::Numeric).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(PrincipalId::parse("abc", IdScheme::Numeric).is_err());
        assert!(PrincipalId::parse("", IdScheme::Opaque).is_err());
    }

    #[test]
    fn test_display_matches_canonical_form() {
        let id = PrincipalId::parse("alice", IdScheme::Opaque).unwrap();
        assert_eq!(format!("{id}"), "alice");
    }

    #[test]
    fn test_serialization_round_trip() {
        let id = PrincipalId::parse("456", IdScheme::Numeric).unwrap();
        let serialized = serde_json::to_value(&id).unwrap();
        let deserialized: PrincipalId = serde_json::from_value(serialized).unwrap();
        assert_eq!(id, deserialized);
    }
}
