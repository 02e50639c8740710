use thiserror::Error;

/// Error returned by a [`super::BatchScheduler`] backend.
///
/// Passed to the reconciliation loop unchanged (wrapped in [`crate::CoreError::Schedule`]);
/// the loop decides whether to retry.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid cluster: {0}")]
    InvalidCluster(String),

    #[error("missing desired component: {0}")]
    MissingComponent(&'static str),

    #[error("cluster api error: {0}")]
    Api(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ScheduleError {
    /// Return label value for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ScheduleError::InvalidCluster(_) => "invalid_cluster",
            ScheduleError::MissingComponent(_) => "missing_component",
            ScheduleError::Api(_) => "api",
            ScheduleError::Internal(_) => "internal",
        }
    }
}
