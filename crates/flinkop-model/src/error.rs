use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("malformed timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("timestamp cannot be stored: {0}")]
    TimestampOutOfRange(String),

    #[error("unrecognized restart policy: {0}")]
    UnrecognizedPolicy(String),

    #[error("unknown job state: {0}")]
    UnknownJobState(String),

    #[error("invalid model: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
