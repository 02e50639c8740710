use std::sync::Arc;

use crate::restart::RestartDecision;

/// Outcome of a single `schedule` dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// Backend reconciled scheduling objects.
    Success,
    /// Backend returned an error.
    Failure,
}

impl ScheduleOutcome {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            ScheduleOutcome::Success => "success",
            ScheduleOutcome::Failure => "failure",
        }
    }
}

/// Backend metrics collection interface.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record the result of a restart evaluation.
    fn record_restart_decision(&self, decision: RestartDecision);
    /// Record a scheduler dispatch with outcome and duration.
    ///
    /// # Arguments
    /// - `scheduler`: Scheduler name
    /// - `outcome`: Whether the backend succeeded
    /// - `duration_ms`: Time spent inside the backend in milliseconds
    fn record_schedule(&self, scheduler: &str, outcome: ScheduleOutcome, duration_ms: u64);
    /// Record a scheduler failure by category.
    ///
    /// Called alongside `record_schedule` with `Failure`, and for lookups of unregistered names
    /// (`error_kind = "not_found"`).
    fn record_scheduler_error(&self, scheduler: &str, error_kind: &str);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
