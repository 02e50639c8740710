use std::fmt;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

use super::LoggerTimeZone;

/// RFC3339 timestamps in the configured timezone.
#[derive(Debug, Clone, Copy)]
pub struct LoggerTimer {
    tz: LoggerTimeZone,
}

impl LoggerTimer {
    pub fn new(tz: LoggerTimeZone) -> Self {
        Self { tz }
    }
}

impl FormatTime for LoggerTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let now = OffsetDateTime::now_utc().to_offset(self.tz.offset());
        match now.format(&Rfc3339) {
            Ok(ts) => write!(w, "{ts}"),
            Err(_) => write!(w, "<invalid-time>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_rfc3339_utc() {
        let mut out = String::new();
        LoggerTimer::new(LoggerTimeZone::Utc)
            .format_time(&mut Writer::new(&mut out))
            .unwrap();

        assert!(out.ends_with('Z'), "unexpected timestamp: {out}");
        assert!(OffsetDateTime::parse(&out, &Rfc3339).is_ok());
    }
}
