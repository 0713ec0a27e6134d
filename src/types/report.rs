//! Startup diagnostics produced when an allow-list is parsed.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::provenance::Provenance;

/// A token that failed identifier-shape validation and was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct MalformedEntry {
    /// The offending token, trimmed.
    pub token: String,
    /// Human-readable reason the token was rejected.
    pub reason: String,
}

impl Display for MalformedEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:?}: {}", self.token, self.reason)
    }
}

/// What the parser saw: provenance, accepted count, and skipped tokens.
///
/// Intended to be logged once at startup so an operator can confirm how the
/// configured string was split and interpreted before trusting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ParseReport {
    /// Whether the configuration was absent, empty, or set.
    pub provenance: Provenance,
    /// Number of unique, well-formed identifiers accepted.
    pub accepted: usize,
    /// Number of well-formed tokens dropped as duplicates.
    pub duplicates: usize,
    /// Tokens that failed validation, in input order.
    pub malformed: Vec<MalformedEntry>,
}

impl ParseReport {
    /// True iff no token failed validation.
    pub fn is_clean(&self) -> bool {
        self.malformed.is_empty()
    }
}

impl Display for ParseReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "provenance={} accepted={} duplicates={} malformed={}",
            self.provenance,
            self.accepted,
            self.duplicates,
            self.malformed.len()
        )
    }
}
