use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::AllowListPolicy;

#[derive(Debug, Error, Serialize, Deserialize)]
pub enum PolicyError {
    #[error("configuration value is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    #[error("Poisoned lock error: {0}")]
    PoisonedLockError(String),
}

impl From<std::sync::PoisonError<std::sync::RwLockReadGuard<'_, AllowListPolicy>>>
    for PolicyError
{
    fn from(
        err: std::sync::PoisonError<std::sync::RwLockReadGuard<'_, AllowListPolicy>>,
    ) -> Self {
        PolicyError::PoisonedLockError(err.to_string())
    }
}

impl From<std::sync::PoisonError<std::sync::RwLockWriteGuard<'_, AllowListPolicy>>>
    for PolicyError
{
    fn from(
        err: std::sync::PoisonError<std::sync::RwLockWriteGuard<'_, AllowListPolicy>>,
    ) -> Self {
        PolicyError::PoisonedLockError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PolicyError::InvalidEncoding("ALLOWED_USER_IDS: \u{fffd}".to_string());
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_error_serialization() {
        let err = PolicyError::PoisonedLockError("poisoned".to_string());
        let serialized = serde_json::to_value(&err).unwrap();
        let deserialized: PolicyError = serde_json::from_value(serialized).unwrap();
        assert!(matches!(deserialized, PolicyError::PoisonedLockError(_)));
    }
}
