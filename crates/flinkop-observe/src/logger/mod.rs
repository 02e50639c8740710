mod config;
mod error;
mod init;
mod object;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel, LoggerTimeZone, init_local_offset};

/// Initializes the global tracing subscriber with the given configuration.
///
/// Once initialized, all `tracing` macros (`info!`, `debug!`, etc.) use this configuration.
/// Calling it twice returns [`LoggerError::AlreadyInitialized`].
///
/// For `LoggerTimeZone::Local`, call [`init_local_offset`] in `main()` before any threads are spawned;
/// otherwise timestamps fall back to UTC.
///
/// # Examples
/// ```rust
/// use flinkop_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("Failed to initialize logger");
///
/// tracing::info!("Logger initialized successfully");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => init::logger_text(cfg),
        LoggerFormat::Json => init::logger_json(cfg),
        LoggerFormat::Journald => init::logger_journald(cfg),
    }
}
