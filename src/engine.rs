use std::sync::{Arc, RwLock};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::PolicyError;
use crate::metrics;
use crate::types::{
    ALLOWED_USER_IDS_VAR, AllowListPolicy, Decision, DefaultPosture, IdScheme, ParseReport,
    Provenance, RawConfig,
};

/// The main engine handle. Cloneable and thread-safe.
///
/// Holds the current [`AllowListPolicy`] behind a read-write lock; queries
/// take a read lock, and [`reload`](Self::reload) swaps in a complete new
/// policy atomically, so in-flight queries always observe a consistent set.
#[derive(Clone)]
pub struct AllowListEngine {
    inner: Arc<RwLock<AllowListPolicy>>,
}

impl AllowListEngine {
    /// Wrap an already-constructed policy, logging its startup diagnostics.
    pub fn new(policy: AllowListPolicy) -> Self {
        log_report(policy.report(), &policy.ids_sorted());
        AllowListEngine {
            inner: Arc::new(RwLock::new(policy)),
        }
    }

    /// Build from a raw configuration string with the default numeric scheme
    /// and fail-closed posture.
    pub fn new_from_str(raw: &str) -> Self {
        AllowListEngine::new(AllowListPolicy::from_config(
            &RawConfig::new(raw),
            IdScheme::default(),
            DefaultPosture::default(),
        ))
    }

    /// Build from the conventional `ALLOWED_USER_IDS` environment variable,
    /// with the default numeric scheme and fail-closed posture.
    pub fn new_from_env() -> Result<Self, PolicyError> {
        AllowListEngine::new_from_var(ALLOWED_USER_IDS_VAR)
    }

    /// Build from an arbitrary environment variable.
    pub fn new_from_var(var: &str) -> Result<Self, PolicyError> {
        let raw = RawConfig::from_env(var)?;
        Ok(AllowListEngine::new(AllowListPolicy::from_config(
            &raw,
            IdScheme::default(),
            DefaultPosture::default(),
        )))
    }

    /// Replace the current policy with one parsed from `raw`, keeping the
    /// current scheme and posture.
    pub fn reload_from_str(&self, raw: &str) -> Result<(), PolicyError> {
        let (scheme, posture) = {
            let guard = self.inner.read()?;
            (guard.scheme(), guard.posture())
        };
        self.reload(AllowListPolicy::from_config(
            &RawConfig::new(raw),
            scheme,
            posture,
        ))
    }

    /// Atomically swap in a new policy, logging its diagnostics.
    pub fn reload(&self, policy: AllowListPolicy) -> Result<(), PolicyError> {
        let start = Instant::now();
        log_report(policy.report(), &policy.ids_sorted());
        let accepted = policy.report().accepted;
        let malformed = policy.report().malformed.len();
        *self.inner.write()? = policy;
        metrics::record_reload(start.elapsed(), accepted, malformed);
        Ok(())
    }

    /// Authorization decision for `candidate`.
    ///
    /// The candidate is normalized under the policy's identifier scheme
    /// before the membership check; see [`AllowListPolicy::evaluate`].
    pub fn evaluate(&self, candidate: &str) -> Result<Decision, PolicyError> {
        let start = Instant::now();
        let guard = self.inner.read()?;
        let decision = guard.evaluate(candidate);
        drop(guard);

        debug!(
            event = "Query",
            phase = "Result",
            candidate = candidate,
            decision = decision.to_string()
        );
        metrics::record_evaluation(decision.is_allow(), start.elapsed(), candidate.to_string());
        Ok(decision)
    }

    /// Boolean projection of [`evaluate`](Self::evaluate).
    pub fn is_allowed(&self, candidate: &str) -> Result<bool, PolicyError> {
        Ok(self.evaluate(candidate)?.is_allow())
    }

    /// The startup diagnostics of the current policy.
    pub fn report(&self) -> Result<ParseReport, PolicyError> {
        Ok(self.inner.read()?.report().clone())
    }

    /// Provenance of the configuration the current policy was built from.
    pub fn provenance(&self) -> Result<Provenance, PolicyError> {
        Ok(self.inner.read()?.provenance())
    }

    /// Number of accepted identifiers in the current policy.
    pub fn len(&self) -> Result<usize, PolicyError> {
        Ok(self.inner.read()?.len())
    }

    /// True iff the current policy accepted no identifiers.
    pub fn is_empty(&self) -> Result<bool, PolicyError> {
        Ok(self.inner.read()?.is_empty())
    }
}

/// Emit the startup diagnostics an operator needs to confirm how the
/// configured string was interpreted: provenance, accepted ids, and one
/// warning per skipped token.
fn log_report(report: &ParseReport, ids: &[String]) {
    info!(
        event = "AllowList",
        phase = "Loaded",
        provenance = report.provenance.to_string(),
        accepted = report.accepted,
        duplicates = report.duplicates,
        ids = ids.join(",")
    );
    for entry in &report.malformed {
        warn!(
            event = "AllowList",
            phase = "Malformed",
            token = entry.token.as_str(),
            reason = entry.reason.as_str()
        );
    }
}
