//! Vendor-agnostic metrics collection via a pluggable sink.
//!
//! Implement [`MetricsSink`] to route query and reload events to any backend
//! (Prometheus, OpenTelemetry, CloudWatch, etc.) without tying the library to
//! a specific metrics crate. If no sink is set, a built-in no-op sink is used
//! and events are silently dropped.
//!
//! ```rust
//! use allowlist_core::metrics::{EvaluationStats, MetricsSink, ReloadStats, set_sink};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//!
//! struct CounterSink {
//!     denies: AtomicU64,
//! }
//!
//! impl MetricsSink for CounterSink {
//!     fn on_evaluation(&self, stats: &EvaluationStats) {
//!         if !stats.allowed {
//!             self.denies.fetch_add(1, Ordering::Relaxed);
//!         }
//!     }
//!     fn on_reload(&self, _stats: &ReloadStats) {}
//! }
//!
//! set_sink(Arc::new(CounterSink { denies: AtomicU64::new(0) }));
//! ```

use serde::Serialize;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::warn;

/// Snapshot of a single query, passed to [`MetricsSink::on_evaluation`].
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationStats {
    /// Total wall-clock time for the query.
    pub duration: Duration,
    /// Whether the decision was Allow (true) or Deny (false).
    pub allowed: bool,
    /// The candidate identifier as supplied by the caller.
    pub candidate: String,
}

/// Snapshot of a policy load or reload, passed to [`MetricsSink::on_reload`].
#[derive(Debug, Clone, Serialize)]
pub struct ReloadStats {
    /// Time spent parsing and swapping in the new policy.
    pub duration: Duration,
    /// Unique identifiers accepted by the new policy.
    pub accepted: usize,
    /// Tokens the new policy skipped as malformed.
    pub malformed: usize,
}

/// Trait for consuming query and reload metrics.
///
/// Invoked synchronously on the query path, so implementations must be
/// thread-safe and should not block.
pub trait MetricsSink: Send + Sync {
    /// Called after each authorization query with timing and outcome.
    fn on_evaluation(&self, stats: &EvaluationStats);

    /// Called after each policy load or reload.
    fn on_reload(&self, stats: &ReloadStats);
}

/// No-op sink; metrics are silently dropped.
struct NoOpSink;

impl MetricsSink for NoOpSink {
    fn on_evaluation(&self, _stats: &EvaluationStats) {}
    fn on_reload(&self, _stats: &ReloadStats) {}
}

static SINK: OnceLock<Arc<dyn MetricsSink>> = OnceLock::new();

fn sink() -> Arc<dyn MetricsSink> {
    SINK.get_or_init(|| Arc::new(NoOpSink)).clone()
}

/// Set the global metrics sink.
///
/// Call once at application startup, before the first query. The sink cannot
/// be replaced after it has been set; later calls are ignored with a warning.
pub fn set_sink(new_sink: Arc<dyn MetricsSink>) {
    if SINK.set(new_sink).is_err() {
        warn!("Metrics sink was already initialized. Ignoring subsequent set_sink call.");
    }
}

pub(crate) fn record_evaluation(allowed: bool, duration: Duration, candidate: String) {
    sink().on_evaluation(&EvaluationStats {
        duration,
        allowed,
        candidate,
    });
}

pub(crate) fn record_reload(duration: Duration, accepted: usize, malformed: usize) {
    sink().on_reload(&ReloadStats {
        duration,
        accepted,
        malformed,
    });
}
