//! Identifier-shape validation and normalization.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use crate::token_pattern;

/// The shape rule for principal identifiers.
///
/// `Numeric` fits platforms that identify accounts by integer ids (e.g. chat
/// ids); it is the default. `Opaque` accepts arbitrary tokens matched against
/// the process-wide pattern registered via
/// [`set_token_pattern`](crate::set_token_pattern).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    #[default]
    Numeric,
    Opaque,
}

impl IdScheme {
    /// Normalize a raw token into its canonical form.
    ///
    /// Numeric ids are canonicalized through `i64`, so `"+7"`, `"007"` and
    /// `"7"` are the same identifier. The `Err` value carries a
    /// human-readable reason suitable for a malformed-entry diagnostic.
    pub fn normalize(&self, token: &str) -> Result<String, String> {
        let token = token.trim();
        if token.is_empty() {
            return Err("empty after trimming".to_string());
        }
        match self {
            IdScheme::Numeric => token
                .parse::<i64>()
                .map(|n| n.to_string())
                .map_err(|e| format!("not a valid numeric id: {e}")),
            IdScheme::Opaque => {
                if token_pattern::matches(token) {
                    Ok(token.to_string())
                } else {
                    Err("does not match the configured token pattern".to_string())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_numeric_accepts_digits() {
        assert_eq!(IdScheme::Numeric.normalize("123").unwrap(), "123");
    }

    #[test]
    fn test_numeric_canonicalizes_sign_and_zero_padding() {
        assert_eq!(IdScheme::Numeric.normalize("+7").unwrap(), "7");
        assert_eq!(IdScheme::Numeric.normalize("007").unwrap(), "7");
        assert_eq!(IdScheme::Numeric.normalize("-42").unwrap(), "-42");
    }

    #[test]
    fn test_numeric_trims_whitespace() {
        assert_eq!(IdScheme::Numeric.normalize("  123  ").unwrap(), "123");
    }

    #[test]
    fn test_numeric_rejects_non_digits() {
        assert!(IdScheme::Numeric.normalize("abc").is_err());
        assert!(IdScheme::Numeric.normalize("12x").is_err());
    }

    #[test]
    fn test_numeric_rejects_overflow() {
        assert!(IdScheme::Numeric.normalize("99999999999999999999").is_err());
    }

    #[test]
    fn test_empty_token_is_rejected() {
        assert!(IdScheme::Numeric.normalize("").is_err());
        assert!(IdScheme::Opaque.normalize("   ").is_err());
    }

    #[test]
    fn test_opaque_accepts_default_pattern_tokens() {
        assert_eq!(IdScheme::Opaque.normalize("alice").unwrap(), "alice");
        assert_eq!(
            IdScheme::Opaque.normalize("svc:report@prod").unwrap(),
            "svc:report@prod"
        );
    }

    #[test]
    fn test_opaque_rejects_embedded_whitespace() {
        assert!(IdScheme::Opaque.normalize("bad token").is_err());
    }

    #[test]
    fn test_scheme_from_str() {
        assert_eq!(IdScheme::from_str("numeric").unwrap(), IdScheme::Numeric);
        assert_eq!(IdScheme::from_str("opaque").unwrap(), IdScheme::Opaque);
        assert!(IdScheme::from_str("uuid").is_err());
    }

    #[test]
    fn test_scheme_default_is_numeric() {
        assert_eq!(IdScheme::default(), IdScheme::Numeric);
    }
}
