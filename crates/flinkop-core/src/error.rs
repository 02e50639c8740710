use thiserror::Error;

use crate::scheduler::ScheduleError;

/// Errors surfaced to the reconciliation loop.
///
/// Everything here points at a misconfigured system or a failed backend call;
/// ambiguous job data (bad timestamps, unknown policies) is resolved locally and never ends up here.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("no batch scheduler registered under name: {0}")]
    SchedulerNotFound(String),

    #[error("batch scheduler already registered: {0}")]
    DuplicateScheduler(String),

    #[error("batch scheduler '{scheduler}' failed: {source}")]
    Schedule {
        scheduler: &'static str,
        #[source]
        source: ScheduleError,
    },
}
