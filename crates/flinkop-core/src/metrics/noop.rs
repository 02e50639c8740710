use crate::metrics::backend::{MetricsBackend, ScheduleOutcome};
use crate::restart::RestartDecision;

/// No-op metrics backend that compiles to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_restart_decision(&self, _: RestartDecision) {}

    #[inline(always)]
    fn record_schedule(&self, _: &str, _: ScheduleOutcome, _: u64) {}

    #[inline(always)]
    fn record_scheduler_error(&self, _: &str, _: &str) {}
}
