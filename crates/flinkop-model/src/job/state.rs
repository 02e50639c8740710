use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Observed lifecycle state of a job, as written by the controller.
///
/// Wire names are PascalCase (`"Running"`, `"DeployFailed"`, ...).
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobState {
    /// Submitted, not yet observed running.
    Pending,
    /// Being updated to a new spec.
    Updating,
    /// Being restarted after a failure.
    Restarting,
    Running,
    Succeeded,
    Cancelled,
    Failed,
    /// The job disappeared from the cluster without a terminal state.
    Lost,
    /// No observation yet.
    #[default]
    Unknown,
    /// The job submitter failed before the job started.
    DeployFailed,
}

impl JobState {
    /// Returns the wire name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobState::Pending => "Pending",
            JobState::Updating => "Updating",
            JobState::Restarting => "Restarting",
            JobState::Running => "Running",
            JobState::Succeeded => "Succeeded",
            JobState::Cancelled => "Cancelled",
            JobState::Failed => "Failed",
            JobState::Lost => "Lost",
            JobState::Unknown => "Unknown",
            JobState::DeployFailed => "DeployFailed",
        }
    }

    /// The job is on its way to running.
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            JobState::Pending | JobState::Updating | JobState::Restarting
        )
    }

    /// The job is running.
    pub fn is_active(&self) -> bool {
        matches!(self, JobState::Running)
    }

    /// The job reached a state it will not leave on its own.
    pub fn is_stopped(&self) -> bool {
        matches!(
            self,
            JobState::Succeeded
                | JobState::Cancelled
                | JobState::Failed
                | JobState::Lost
                | JobState::DeployFailed
        )
    }

    /// The job stopped abnormally.
    ///
    /// Broader than `== Failed`: restart decisions only look at `Failed`.
    pub fn is_failed(&self) -> bool {
        matches!(
            self,
            JobState::Failed | JobState::Lost | JobState::DeployFailed
        )
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JobState {
    const ALL: [JobState; 10] = [
        JobState::Pending,
        JobState::Updating,
        JobState::Restarting,
        JobState::Running,
        JobState::Succeeded,
        JobState::Cancelled,
        JobState::Failed,
        JobState::Lost,
        JobState::Unknown,
        JobState::DeployFailed,
    ];
}

/// Exact wire names only; the empty string is `Unknown`.
impl FromStr for JobState {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        if s.is_empty() {
            return Ok(JobState::Unknown);
        }
        JobState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ModelError::UnknownJobState(s.to_string()))
    }
}

/// Stored states written by other controller versions read as `Unknown`.
impl From<String> for JobState {
    fn from(raw: String) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl From<JobState> for String {
    fn from(state: JobState) -> Self {
        state.as_str().to_string()
    }
}
