use std::collections::HashSet;

use crate::types::{IdScheme, MalformedEntry, ParseReport, PrincipalId, RawConfig};

/// Outcome of parsing a raw allow-list configuration.
#[derive(Debug, Clone)]
pub struct ParsedAllowList {
    /// Unique, well-formed identifiers.
    pub ids: HashSet<PrincipalId>,
    /// Diagnostics for the caller to log at startup.
    pub report: ParseReport,
}

/// Parse a comma-separated allow-list into a set of canonical identifiers.
///
/// Tokens that are empty after trimming (trailing commas, doubled commas)
/// are dropped silently. Tokens that fail identifier-shape validation are
/// skipped and reported, so one corrupt entry cannot disable the whole
/// list. This function never fails and never panics.
///
/// Example:
/// ```rust
/// use allowlist_core::{IdScheme, RawConfig, parse_allow_list};
/// let parsed = parse_allow_list(&RawConfig::new("123,456, 789"), IdScheme::Numeric);
/// assert_eq!(parsed.ids.len(), 3);
/// assert!(parsed.report.is_clean());
/// ```
pub fn parse_allow_list(raw: &RawConfig, scheme: IdScheme) -> ParsedAllowList {
    let mut ids = HashSet::new();
    let mut duplicates = 0;
    let mut malformed = Vec::new();

    if let Some(text) = raw.value() {
        for token in text.split(',') {
            let token = token.trim();
            if token.is_empty() {
                // Trailing or doubled delimiter, not an error.
                continue;
            }
            match PrincipalId::parse(token, scheme) {
                Ok(id) => {
                    if !ids.insert(id) {
                        duplicates += 1;
                    }
                }
                Err(reason) => malformed.push(MalformedEntry {
                    token: token.to_string(),
                    reason,
                }),
            }
        }
    }

    let report = ParseReport {
        provenance: raw.provenance(),
        accepted: ids.len(),
        duplicates,
        malformed,
    };
    ParsedAllowList { ids, report }
}
