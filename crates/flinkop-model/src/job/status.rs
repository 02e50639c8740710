use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::JobState;
use crate::{error::ModelResult, timestamp::TimeConverter};

/// Controller-written observation of a job.
///
/// The decision logic only reads these fields; the reconciliation loop owns all writes.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    /// Flink job id.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Flink job name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub state: JobState,
    /// Where the latest savepoint lives; empty when there is none.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub savepoint_location: String,
    /// When the latest savepoint was taken, in [`TimeConverter`] format.
    ///
    /// Only meaningful when `savepoint_location` is set.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub savepoint_time: String,
    /// The savepoint was taken as part of the job's terminal shutdown.
    #[serde(default)]
    pub final_savepoint: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_time: String,
    /// When the job stopped.
    #[serde(
        default,
        with = "crate::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub completion_time: Option<OffsetDateTime>,
    #[serde(default)]
    pub restart_count: u32,
}

impl JobStatus {
    /// Create a status in the given state with everything else empty.
    pub fn new(state: JobState) -> Self {
        Self {
            state,
            ..Default::default()
        }
    }

    /// Record a savepoint taken at `taken_at`.
    ///
    /// Fails when `taken_at` has no stored representation.
    pub fn with_savepoint(
        mut self,
        location: impl Into<String>,
        taken_at: OffsetDateTime,
    ) -> ModelResult<Self> {
        self.savepoint_time = TimeConverter::to_string(taken_at)?;
        self.savepoint_location = location.into();
        Ok(self)
    }

    /// Record the completion time.
    pub fn with_completion_time(mut self, at: OffsetDateTime) -> Self {
        self.completion_time = Some(at);
        self
    }

    /// Returns `true` when a savepoint location is recorded.
    pub fn has_savepoint(&self) -> bool {
        !self.savepoint_location.is_empty()
    }
}
