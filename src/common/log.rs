//! Lightweight logging utilities emitting JSON lines on stderr.

/// Severity of a log line; compared against the configured log level.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Level {
    Info = 1,
    Debug = 2,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// Whether this level passes the configured threshold (0 silences everything).
    pub fn enabled(self, configured: u8) -> bool {
        self as u8 <= configured
    }
}

/// Render a JSON line matching the documented schema.
pub fn format_json(ts: u128, level: Level, module: &str, event: &str, code: u32, dur_ms: u128) -> String {
    format!(
        "{{\"ts\":{ts},\"level\":\"{}\",\"mod\":\"{module}\",\"ev\":\"{event}\",\"code\":{code},\"dur_ms\":{dur_ms}}}",
        level.as_str()
    )
}

/// Emit a JSON line if `level` passes `configured`.
pub fn log_json(configured: u8, level: Level, module: &str, event: &str, code: u32, dur_ms: u128) {
    if !level.enabled(configured) {
        return;
    }
    let ts = crate::common::time::now_ms();
    eprintln!("{}", format_json(ts, level, module, event, code, dur_ms));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_is_stable() {
        let line = format_json(42, Level::Info, "report", "report.row", 0, 3);
        assert_eq!(
            line,
            "{\"ts\":42,\"level\":\"info\",\"mod\":\"report\",\"ev\":\"report.row\",\"code\":0,\"dur_ms\":3}"
        );
    }

    #[test]
    fn level_gating() {
        assert!(!Level::Info.enabled(0));
        assert!(Level::Info.enabled(1));
        assert!(!Level::Debug.enabled(1));
        assert!(Level::Debug.enabled(2));
    }
}
