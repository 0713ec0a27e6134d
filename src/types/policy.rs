//! The immutable allow-list policy value.

use std::collections::HashSet;

use itertools::Itertools;

use crate::loader;

use super::decision::{AllowReason, Decision, DenyReason};
use super::posture::DefaultPosture;
use super::principal_id::PrincipalId;
use super::provenance::Provenance;
use super::raw_config::RawConfig;
use super::report::ParseReport;
use super::scheme::IdScheme;

/// A parsed allow-list: a set of canonical ids plus the scheme and posture it
/// was built with.
///
/// Immutable once constructed; queries are read-only, so a policy value can
/// be shared freely across threads. Replacing the configuration means
/// constructing a new policy (see
/// [`AllowListEngine`](crate::AllowListEngine) for atomic swapping).
#[derive(Debug, Clone)]
pub struct AllowListPolicy {
    ids: HashSet<PrincipalId>,
    scheme: IdScheme,
    posture: DefaultPosture,
    report: ParseReport,
}

impl AllowListPolicy {
    /// Parse `raw` into a policy. Never fails: malformed entries are skipped
    /// and surfaced through [`report`](Self::report).
    pub fn from_config(raw: &RawConfig, scheme: IdScheme, posture: DefaultPosture) -> Self {
        let parsed = loader::parse_allow_list(raw, scheme);
        AllowListPolicy {
            ids: parsed.ids,
            scheme,
            posture,
            report: parsed.report,
        }
    }

    /// Full decision for `candidate`, normalized under the policy's scheme
    /// before comparison so incidental whitespace or an equivalent spelling
    /// cannot cause a false negative.
    pub fn evaluate(&self, candidate: &str) -> Decision {
        let id = match PrincipalId::parse(candidate, self.scheme) {
            Ok(id) => id,
            Err(_) => {
                return Decision::Deny {
                    reason: DenyReason::MalformedCandidate,
                };
            }
        };

        if self.ids.contains(&id) {
            return Decision::Allow {
                id,
                reason: AllowReason::Listed,
            };
        }

        if self.ids.is_empty() && self.posture == DefaultPosture::AllowAll {
            return Decision::Allow {
                id,
                reason: AllowReason::OpenPolicy,
            };
        }

        let reason = if self.ids.is_empty() {
            DenyReason::NoEntriesConfigured
        } else {
            DenyReason::NotListed
        };
        Decision::Deny { reason }
    }

    /// Boolean projection of [`evaluate`](Self::evaluate).
    pub fn is_allowed(&self, candidate: &str) -> bool {
        self.evaluate(candidate).is_allow()
    }

    /// Membership check for an already-canonical id.
    pub fn contains(&self, id: &PrincipalId) -> bool {
        self.ids.contains(id)
    }

    /// Number of accepted identifiers.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True iff no identifiers were accepted.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn scheme(&self) -> IdScheme {
        self.scheme
    }

    pub fn posture(&self) -> DefaultPosture {
        self.posture
    }

    pub fn provenance(&self) -> Provenance {
        self.report.provenance
    }

    /// The startup diagnostics recorded at construction.
    pub fn report(&self) -> &ParseReport {
        &self.report
    }

    /// Accepted ids as a sorted list of strings, for stable log output.
    pub fn ids_sorted(&self) -> Vec<String> {
        self.ids.iter().map(|id| id.to_string()).sorted().collect()
    }
}
