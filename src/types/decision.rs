//! Authorization decision types.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use strum_macros::Display as StrumDisplay;
use utoipa::ToSchema;

use super::principal_id::PrincipalId;

/// Why a candidate was allowed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, StrumDisplay, ToSchema,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AllowReason {
    /// The candidate is a member of the configured set.
    Listed,
    /// The set is empty and the policy posture is allow-all.
    OpenPolicy,
}

/// Why a candidate was denied.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, StrumDisplay, ToSchema,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// The candidate is well-formed but not a member of the set.
    NotListed,
    /// The set is empty and the policy posture is deny-all.
    NoEntriesConfigured,
    /// The candidate does not normalize under the policy's identifier scheme.
    MalformedCandidate,
}

/// Allow or deny decision, with a machine-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Decision {
    Allow {
        id: PrincipalId,
        reason: AllowReason,
    },
    Deny {
        reason: DenyReason,
    },
}

impl Decision {
    /// True iff this is an `Allow`.
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow { .. })
    }
}

impl Display for Decision {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Decision::Allow { id, reason } => write!(f, "Allow({id}; {reason})"),
            Decision::Deny { reason } => write!(f, "Deny({reason})"),
        }
    }
}
