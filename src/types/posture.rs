//! Default posture for an empty allow-list.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// What an empty membership set means for queries.
///
/// `DenyAll` fails closed and is the default. `AllowAll` reproduces the
/// legacy behavior where an unset allow-list disables the restriction
/// entirely; pick it deliberately.
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
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DefaultPosture {
    #[default]
    DenyAll,
    AllowAll,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_is_deny_all() {
        assert_eq!(DefaultPosture::default(), DefaultPosture::DenyAll);
    }

    #[test]
    fn test_posture_display_and_from_str() {
        assert_eq!(DefaultPosture::DenyAll.to_string(), "deny_all");
        assert_eq!(
            DefaultPosture::from_str("allow_all").unwrap(),
            DefaultPosture::AllowAll
        );
    }
}
