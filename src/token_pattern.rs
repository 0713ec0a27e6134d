use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::RwLock;

/// Shape accepted for opaque principal identifiers unless overridden.
const DEFAULT_TOKEN_PATTERN: &str = r"^[A-Za-z0-9_.:@-]+$";

/// A global static variable holding the compiled pattern used to validate
/// opaque identifiers.
static TOKEN_PATTERN: Lazy<RwLock<Regex>> = Lazy::new(|| {
    RwLock::new(Regex::new(DEFAULT_TOKEN_PATTERN).expect("default token pattern must compile"))
});

/// Replaces the process-wide token pattern used by the opaque identifier
/// scheme. Call once at startup, before parsing any configuration, so the
/// allow-list and later candidates are validated against the same rule.
pub fn set_token_pattern(pattern: Regex) {
    *TOKEN_PATTERN.write().unwrap() = pattern;
}

pub(crate) fn matches(token: &str) -> bool {
    TOKEN_PATTERN.read().unwrap().is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern() {
        assert!(matches("alice"));
        assert!(matches("svc:report@prod"));
        assert!(!matches("two words"));
        assert!(!matches("a,b"));
    }

    #[test]
    fn test_set_token_pattern() {
        // Widen rather than replace so tests relying on the default pattern
        // stay valid regardless of execution order.
        set_token_pattern(Regex::new(r"^[A-Za-z0-9_.:@#-]+$").unwrap());
        assert!(matches("build#42"));
        assert!(matches("alice"));
        assert!(!matches("still bad"));
    }
}
