use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::error::LoggerError;

const DEFAULT_LEVEL: &str = "info";

/// Validated `EnvFilter` expression, e.g. `"info"` or `"flinkop_core=debug,warn"`.
///
/// The raw string is kept so the value can be serialized back into config;
/// validation happens once, on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// Validate and wrap a filter expression.
    ///
    /// ```
    /// use flinkop_observe::LoggerLevel;
    ///
    /// let lvl = LoggerLevel::new("flinkop_core=trace,info").unwrap();
    /// assert_eq!(lvl.as_str(), "flinkop_core=trace,info");
    /// assert!(LoggerLevel::new("flinkop_core=loud").is_err());
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        let s = s.into();
        EnvFilter::try_new(&s).map_err(|e| LoggerError::InvalidLevel(format!("{s}: {e}")))?;
        Ok(Self(s))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the filter for the subscriber.
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.0).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self(DEFAULT_LEVEL.to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}
