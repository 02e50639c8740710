//! Metrics collection abstraction for the controller core.
//!
//! Backends (prometheus, statsd, etc) implement [`MetricsBackend`] and are injected into the
//! [`crate::SchedulerRegistry`] or handed to the reconciliation loop directly.
mod backend;
pub use backend::{MetricsBackend, MetricsHandle, ScheduleOutcome};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
