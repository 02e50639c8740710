//! Restart-on-failure decisions.
//!
//! Once the state and policy gates pass, restart eligibility reduces to savepoint freshness
//! (see [`crate::savepoint`]).
use std::fmt;

use flinkop_model::{JobRestartPolicy, JobSpec, JobState, JobStatus};
use tracing::{debug, warn};

use crate::savepoint::is_savepoint_up_to_date;

/// Outcome of a restart evaluation, with the reason when the answer is "no".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestartDecision {
    /// Restart from the latest savepoint.
    Restart,
    /// The job is not in the `Failed` state.
    NotFailed,
    /// No restart policy configured.
    NoPolicy,
    /// Restart policy is `Never`.
    PolicyNever,
    /// Policy allows a restart but no usable savepoint is fresh enough.
    StaleSavepoint,
    /// Policy value unknown to this build; fails closed.
    UnrecognizedPolicy,
}

impl RestartDecision {
    /// Returns `true` only for [`RestartDecision::Restart`].
    #[inline]
    pub fn should_restart(&self) -> bool {
        matches!(self, RestartDecision::Restart)
    }

    /// Return label value for logs and metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            RestartDecision::Restart => "restart",
            RestartDecision::NotFailed => "not_failed",
            RestartDecision::NoPolicy => "no_policy",
            RestartDecision::PolicyNever => "policy_never",
            RestartDecision::StaleSavepoint => "stale_savepoint",
            RestartDecision::UnrecognizedPolicy => "unrecognized_policy",
        }
    }
}

impl fmt::Display for RestartDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Evaluate whether a job should be restarted, keeping the reason.
///
/// Only jobs observed in exactly [`JobState::Failed`] are candidates;
/// `Lost` and `DeployFailed` are left to the reconciliation loop.
pub fn restart_decision(status: &JobStatus, spec: &JobSpec) -> RestartDecision {
    if status.state != JobState::Failed {
        return RestartDecision::NotFailed;
    }

    let decision = match &spec.restart_policy {
        None => RestartDecision::NoPolicy,
        Some(JobRestartPolicy::Never) => RestartDecision::PolicyNever,
        Some(JobRestartPolicy::FromSavepointOnFailure) => {
            if is_savepoint_up_to_date(status, spec, status.completion_time) {
                RestartDecision::Restart
            } else {
                RestartDecision::StaleSavepoint
            }
        }
        Some(JobRestartPolicy::Unrecognized(raw)) => {
            warn!(policy = %raw, "unrecognized restart policy; not restarting");
            RestartDecision::UnrecognizedPolicy
        }
    };
    debug!(job = %status.id, decision = %decision, "restart evaluated for failed job");
    decision
}

/// Returns `true` if the controller should restart the job from its savepoint.
pub fn should_restart(status: &JobStatus, spec: &JobSpec) -> bool {
    restart_decision(status, spec).should_restart()
}

/// The job stopped and will not be restarted automatically.
pub fn is_job_terminated(status: &JobStatus, spec: &JobSpec) -> bool {
    status.state.is_stopped() && !should_restart(status, spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Duration, OffsetDateTime, macros::datetime};

    const LOCATION: &str = "gs://my-bucket/savepoint-123";

    fn savepoint_time() -> OffsetDateTime {
        datetime!(2024-03-01 12:00:00 UTC)
    }

    fn spec(policy: Option<JobRestartPolicy>) -> JobSpec {
        JobSpec {
            restart_policy: policy,
            max_state_age_to_restore_seconds: Some(300),
            ..Default::default()
        }
    }

    fn failed_with_savepoint(completed_after_secs: i64) -> JobStatus {
        JobStatus::new(JobState::Failed)
            .with_savepoint(LOCATION, savepoint_time())
            .unwrap()
            .with_completion_time(savepoint_time() + Duration::seconds(completed_after_secs))
    }

    #[test]
    fn restarts_with_up_to_date_savepoint() {
        let status = failed_with_savepoint(60);
        let spec = spec(Some(JobRestartPolicy::FromSavepointOnFailure));

        assert_eq!(restart_decision(&status, &spec), RestartDecision::Restart);
        assert!(should_restart(&status, &spec));
    }

    #[test]
    fn restarts_when_completed_100s_after_savepoint() {
        let status = failed_with_savepoint(100);
        assert!(should_restart(
            &status,
            &spec(Some(JobRestartPolicy::FromSavepointOnFailure))
        ));
    }

    #[test]
    fn does_not_restart_without_savepoint() {
        let status = JobStatus::new(JobState::Failed)
            .with_completion_time(savepoint_time() + Duration::seconds(60));
        let spec = spec(Some(JobRestartPolicy::FromSavepointOnFailure));

        assert_eq!(restart_decision(&status, &spec), RestartDecision::StaleSavepoint);
        assert!(!should_restart(&status, &spec));
    }

    #[test]
    fn does_not_restart_with_empty_location() {
        let status = JobStatus {
            savepoint_location: String::new(),
            ..failed_with_savepoint(100)
        };
        assert!(!should_restart(
            &status,
            &spec(Some(JobRestartPolicy::FromSavepointOnFailure))
        ));
    }

    #[test]
    fn never_policy_does_not_restart() {
        for completed_after in [60, 300] {
            let status = failed_with_savepoint(completed_after);
            let spec = spec(Some(JobRestartPolicy::Never));
            assert_eq!(restart_decision(&status, &spec), RestartDecision::PolicyNever);
            assert!(!should_restart(&status, &spec));
        }
    }

    #[test]
    fn missing_policy_does_not_restart() {
        let status = failed_with_savepoint(60);
        assert_eq!(restart_decision(&status, &spec(None)), RestartDecision::NoPolicy);
    }

    #[test]
    fn stale_savepoint_does_not_restart() {
        let status = failed_with_savepoint(301);
        let spec = spec(Some(JobRestartPolicy::FromSavepointOnFailure));
        assert_eq!(restart_decision(&status, &spec), RestartDecision::StaleSavepoint);
    }

    #[test]
    fn missing_completion_time_does_not_restart() {
        let status = JobStatus {
            completion_time: None,
            ..failed_with_savepoint(60)
        };
        assert!(!should_restart(
            &status,
            &spec(Some(JobRestartPolicy::FromSavepointOnFailure))
        ));
    }

    #[test]
    fn final_savepoint_restarts_without_timestamps() {
        let status = JobStatus {
            final_savepoint: true,
            ..JobStatus::new(JobState::Failed)
        };
        let spec = JobSpec::default().with_restart_policy(JobRestartPolicy::FromSavepointOnFailure);
        assert!(should_restart(&status, &spec));
    }

    #[test]
    fn only_failed_state_is_considered() {
        let spec = spec(Some(JobRestartPolicy::FromSavepointOnFailure));
        let others = [
            JobState::Pending,
            JobState::Updating,
            JobState::Restarting,
            JobState::Running,
            JobState::Succeeded,
            JobState::Cancelled,
            JobState::Lost,
            JobState::Unknown,
            JobState::DeployFailed,
        ];

        for state in others {
            let status = JobStatus {
                state,
                ..failed_with_savepoint(60)
            };
            assert_eq!(
                restart_decision(&status, &spec),
                RestartDecision::NotFailed,
                "state {state} must not be restarted"
            );
        }
    }

    #[test]
    fn unrecognized_policy_fails_closed() {
        let status = failed_with_savepoint(60);
        let spec = spec(Some(JobRestartPolicy::Unrecognized("Always".into())));

        assert_eq!(
            restart_decision(&status, &spec),
            RestartDecision::UnrecognizedPolicy
        );
        assert!(!should_restart(&status, &spec));
    }

    #[test]
    fn unrecognized_policy_from_wire_fails_closed() {
        let spec: JobSpec = serde_json::from_str(
            r#"{"restartPolicy": "FromCheckpointAlways", "maxStateAgeToRestoreSeconds": 300}"#,
        )
        .unwrap();
        assert!(!should_restart(&failed_with_savepoint(60), &spec));
    }

    #[test]
    fn policy_spelling_variants_from_wire_fail_closed() {
        let status = failed_with_savepoint(60);
        for raw in [
            "from-savepoint-on-failure",
            "fromsavepointonfailure",
            " FROMSAVEPOINTONFAILURE ",
        ] {
            let spec: JobSpec = serde_json::from_value(serde_json::json!({
                "restartPolicy": raw,
                "maxStateAgeToRestoreSeconds": 300,
            }))
            .unwrap();

            assert_eq!(
                restart_decision(&status, &spec),
                RestartDecision::UnrecognizedPolicy,
                "policy {raw:?} must not restart"
            );
        }
    }

    #[test]
    fn terminated_when_stopped_and_not_restarting() {
        let restart = spec(Some(JobRestartPolicy::FromSavepointOnFailure));
        let never = spec(Some(JobRestartPolicy::Never));

        let failed = failed_with_savepoint(60);
        assert!(!is_job_terminated(&failed, &restart));
        assert!(is_job_terminated(&failed, &never));

        let succeeded = JobStatus::new(JobState::Succeeded);
        assert!(is_job_terminated(&succeeded, &restart));

        let running = JobStatus::new(JobState::Running);
        assert!(!is_job_terminated(&running, &never));
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(RestartDecision::Restart.as_label(), "restart");
        assert_eq!(RestartDecision::StaleSavepoint.to_string(), "stale_savepoint");
        assert!(!RestartDecision::UnrecognizedPolicy.should_restart());
    }
}
