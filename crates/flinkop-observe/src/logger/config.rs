use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::logger::{
    error::{LoggerError, LoggerResult},
    object::{LoggerFormat, LoggerLevel, LoggerTimeZone},
};

/// Environment variable overriding [`LoggerConfig::format`].
pub const ENV_LOG_FORMAT: &str = "FLINKOP_LOG_FORMAT";
/// Environment variable overriding [`LoggerConfig::level`].
pub const ENV_LOG_LEVEL: &str = "FLINKOP_LOG";
/// Environment variable overriding [`LoggerConfig::tz`].
pub const ENV_LOG_TZ: &str = "FLINKOP_LOG_TZ";
/// Environment variable overriding [`LoggerConfig::use_color`] (`true|false|1|0`).
pub const ENV_LOG_COLOR: &str = "FLINKOP_LOG_COLOR";

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Log level filter expression (e.g., "info", "flinkop_core=debug,info").
    pub level: LoggerLevel,
    /// Timezone for timestamps.
    pub tz: LoggerTimeZone,
    /// Whether to include module/target names in log output.
    pub with_targets: bool,
    /// Whether to use colored output.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Apply `FLINKOP_LOG*` environment overrides on top of `self`.
    pub fn with_env_overrides(self) -> LoggerResult<Self> {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable source.
    ///
    /// Unset variables keep the current value; set but invalid ones are an error.
    pub fn with_overrides<F>(mut self, lookup: F) -> LoggerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_LOG_FORMAT) {
            self.format = v.parse()?;
        }
        if let Some(v) = lookup(ENV_LOG_LEVEL) {
            self.level = v.parse()?;
        }
        if let Some(v) = lookup(ENV_LOG_TZ) {
            self.tz = v.parse()?;
        }
        if let Some(v) = lookup(ENV_LOG_COLOR) {
            self.use_color = match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(LoggerError::InvalidEnv {
                        var: ENV_LOG_COLOR,
                        value: v,
                    });
                }
            };
        }
        Ok(self)
    }

    /// Color is used only when enabled in config and stdout is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}
