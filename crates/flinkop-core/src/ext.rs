use flinkop_model::{JobSpec, JobStatus};
use time::OffsetDateTime;

use crate::{restart, savepoint};

/// Method-call form of the job decisions, evaluated against a [`JobStatus`] snapshot.
pub trait JobStatusExt {
    /// See [`savepoint::is_savepoint_up_to_date`].
    fn is_savepoint_up_to_date(&self, spec: &JobSpec, completion: Option<OffsetDateTime>) -> bool;

    /// See [`restart::should_restart`].
    fn should_restart(&self, spec: &JobSpec) -> bool;

    /// See [`restart::is_job_terminated`].
    fn is_terminated(&self, spec: &JobSpec) -> bool;
}

impl JobStatusExt for JobStatus {
    fn is_savepoint_up_to_date(&self, spec: &JobSpec, completion: Option<OffsetDateTime>) -> bool {
        savepoint::is_savepoint_up_to_date(self, spec, completion)
    }

    fn should_restart(&self, spec: &JobSpec) -> bool {
        restart::should_restart(self, spec)
    }

    fn is_terminated(&self, spec: &JobSpec) -> bool {
        restart::is_job_terminated(self, spec)
    }
}
