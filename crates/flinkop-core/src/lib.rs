pub mod error;
pub mod metrics;
pub mod restart;
pub mod savepoint;
pub mod scheduler;

mod ext;
pub use ext::JobStatusExt;

pub use error::CoreError;
pub use metrics::{MetricsBackend, MetricsHandle, NoOpMetrics, ScheduleOutcome, noop_metrics};
pub use restart::{RestartDecision, is_job_terminated, restart_decision, should_restart};
pub use savepoint::is_savepoint_up_to_date;
pub use scheduler::{
    BatchScheduler, DefaultScheduler, ScheduleError, SchedulerRegistry, register_default_scheduler,
};

pub mod prelude {
    pub use crate::error::CoreError;
    pub use crate::ext::JobStatusExt;
    pub use crate::restart::RestartDecision;
    pub use crate::scheduler::{BatchScheduler, ScheduleError, SchedulerRegistry};
}
