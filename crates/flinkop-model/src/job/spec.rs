use serde::{Deserialize, Serialize};

use super::JobRestartPolicy;

/// Job configuration declared on the cluster object.
///
/// Set by the user, read-only to the controller.
/// Optional fields stay `None` when absent so "not configured" never collapses into a zero value.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSpec {
    /// What to do when the job fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart_policy: Option<JobRestartPolicy>,
    /// Oldest savepoint (relative to job completion) that may still be used to restore state.
    ///
    /// `None` means no savepoint is ever considered usable for automatic recovery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_state_age_to_restore_seconds: Option<u32>,
    /// Interval between savepoints triggered by the controller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_savepoint_seconds: Option<u32>,
    /// Directory savepoints are written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savepoints_dir: Option<String>,
}

impl JobSpec {
    /// Set the restart policy.
    pub fn with_restart_policy(mut self, policy: JobRestartPolicy) -> Self {
        self.restart_policy = Some(policy);
        self
    }

    /// Set the maximum savepoint age accepted for restore.
    pub fn with_max_state_age(mut self, seconds: u32) -> Self {
        self.max_state_age_to_restore_seconds = Some(seconds);
        self
    }
}
