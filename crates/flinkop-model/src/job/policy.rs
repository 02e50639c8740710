use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

const NEVER: &str = "Never";
const FROM_SAVEPOINT_ON_FAILURE: &str = "FromSavepointOnFailure";

/// Restart policy of a job; values unknown to this build are kept as `Unrecognized`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobRestartPolicy {
    Never,
    FromSavepointOnFailure,
    /// Raw value that did not match any known policy.
    Unrecognized(String),
}

impl JobRestartPolicy {
    /// Returns the wire name of the policy.
    pub fn as_str(&self) -> &str {
        match self {
            JobRestartPolicy::Never => NEVER,
            JobRestartPolicy::FromSavepointOnFailure => FROM_SAVEPOINT_ON_FAILURE,
            JobRestartPolicy::Unrecognized(raw) => raw,
        }
    }

    /// Returns `true` for every known policy.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, JobRestartPolicy::Unrecognized(_))
    }
}

impl fmt::Display for JobRestartPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing: only the exact wire names are accepted.
impl FromStr for JobRestartPolicy {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s {
            NEVER => Ok(JobRestartPolicy::Never),
            FROM_SAVEPOINT_ON_FAILURE => Ok(JobRestartPolicy::FromSavepointOnFailure),
            other => Err(ModelError::UnrecognizedPolicy(other.to_string())),
        }
    }
}

impl From<String> for JobRestartPolicy {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            NEVER => JobRestartPolicy::Never,
            FROM_SAVEPOINT_ON_FAILURE => JobRestartPolicy::FromSavepointOnFailure,
            _ => JobRestartPolicy::Unrecognized(raw),
        }
    }
}

impl From<JobRestartPolicy> for String {
    fn from(p: JobRestartPolicy) -> Self {
        match p {
            JobRestartPolicy::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}
