//! Savepoint freshness.
//!
//! A savepoint may be used to restore a failed job only if it is recent relative to the moment the job stopped.
//! "Recent" is bounded by [`JobSpec::max_state_age_to_restore_seconds`].
use flinkop_model::{JobSpec, JobStatus, TimeConverter};
use time::OffsetDateTime;
use tracing::{debug, trace};

/// Decide whether the job's latest savepoint is fresh enough to restore from.
///
/// `completion` is the reference point the savepoint age is measured against, normally
/// [`JobStatus::completion_time`]. The wall clock is never consulted.
///
/// Rules, first match wins:
/// 1. a final savepoint (taken during terminal shutdown) is always up to date;
/// 2. without `max_state_age_to_restore_seconds` no savepoint is usable;
/// 3. without a savepoint location there is no savepoint;
/// 4. an unreadable savepoint time makes the savepoint unusable;
/// 5. without a completion time the age cannot be measured, so the savepoint is unusable;
/// 6. otherwise the savepoint is up to date iff `completion - savepoint_time <= max age`.
///
/// The age is counted in whole seconds, truncated toward zero, and compared inclusively.
/// A savepoint recorded *after* completion has a negative age and is accepted.
pub fn is_savepoint_up_to_date(
    status: &JobStatus,
    spec: &JobSpec,
    completion: Option<OffsetDateTime>,
) -> bool {
    if status.final_savepoint {
        trace!("final savepoint is always up to date");
        return true;
    }
    let Some(max_age) = spec.max_state_age_to_restore_seconds else {
        trace!("no max state age configured");
        return false;
    };
    if !status.has_savepoint() {
        trace!("no savepoint location recorded");
        return false;
    }
    let savepoint_time = match TimeConverter::from_string(&status.savepoint_time) {
        Ok(t) => t,
        Err(e) => {
            debug!(
                location = %status.savepoint_location,
                error = %e,
                "ignoring savepoint with unreadable time"
            );
            return false;
        }
    };
    let Some(completion) = completion else {
        debug!(
            location = %status.savepoint_location,
            "no completion time to measure savepoint age against"
        );
        return false;
    };

    let age = (completion - savepoint_time).whole_seconds();
    let fresh = age <= i64::from(max_age);
    trace!(age_secs = age, max_age_secs = max_age, fresh, "savepoint age evaluated");
    fresh
}
