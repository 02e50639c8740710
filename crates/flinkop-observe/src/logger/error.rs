use thiserror::Error;

/// Logger setup failure.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("unknown log format {0:?} (text|json|journald)")]
    InvalidFormat(String),

    #[error("unknown log timezone {0:?} (utc|local)")]
    InvalidTimeZone(String),

    #[error("bad log filter: {0}")]
    InvalidLevel(String),

    #[error("{var}={value:?} is not a valid setting")]
    InvalidEnv { var: &'static str, value: String },

    #[error("journald output is only available on linux")]
    JournaldNotSupported,

    #[error("journald connection failed: {0}")]
    JournaldInitFailed(String),

    #[error("global logger is already installed")]
    AlreadyInitialized,
}

pub type LoggerResult<T> = Result<T, LoggerError>;
