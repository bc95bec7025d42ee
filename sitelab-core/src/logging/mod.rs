//! Process-wide logger for the standard `log` crate
//!
//! Configure once at startup, then use `log::info!` and friends anywhere.
//!
//! ```rust,no_run
//! use sitelab_core::config::LoggingConfig;
//!
//! sitelab_core::logging::init_logging(&LoggingConfig::default()).unwrap();
//! log::info!("Server starting on port {}", 5000);
//! ```

pub mod formatter;

pub use formatter::{LogEntry, LogFormat};

use crate::config::LoggingConfig;
use std::io::Write;
use std::str::FromStr;
use std::sync::Once;

static INIT: Once = Once::new();

/// Log levels in order of severity (compatible with the standard log crate)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Trace => LogLevel::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ParseLogSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(ParseLogSettingError::Level(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseLogSettingError {
    #[error("unknown log level '{0}' (expected error, warn, info, debug or trace)")]
    Level(String),
    #[error("unknown log format '{0}' (expected human or json)")]
    Format(String),
}

/// Install the Sitelab logger.
///
/// Only the first call installs anything; later calls (and calls made after
/// another logger was set, as in tests) are no-ops.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let level = config.log_level()?;
    let format = config.log_format()?;

    INIT.call_once(|| {
        if log::set_boxed_logger(Box::new(SitelabLogger { level, format })).is_ok() {
            log::set_max_level(level.to_level_filter());
        }
    });
    Ok(())
}

/// Writes formatted lines to stderr
struct SitelabLogger {
    level: LogLevel,
    format: LogFormat,
}

impl log::Log for SitelabLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        LogLevel::from(metadata.level()) <= self.level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogEntry::from_record(record);
        let line = self.format.format_entry(&entry);
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering_matches_log_crate() {
        assert!(LogLevel::Error < LogLevel::Info);
        assert!(LogLevel::Trace > LogLevel::Debug);
        assert_eq!(LogLevel::from(log::Level::Warn), LogLevel::Warn);
        assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_init_rejects_bad_config_and_is_idempotent() {
        let bad = LoggingConfig { level: "loud".to_string(), ..Default::default() };
        assert!(init_logging(&bad).is_err());

        let good = LoggingConfig::default();
        assert!(init_logging(&good).is_ok());
        assert!(init_logging(&good).is_ok());
    }
}
