//! Log line formatting

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{LogLevel, ParseLogSettingError};

/// How log lines are rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    /// Example: {"timestamp":"2024-01-15T10:30:00.000Z","level":"INFO","target":"sitelab_core::app","message":"..."}
    Json,

    /// Human-readable format (development default)
    /// Example: 2024-01-15T10:30:00.000Z INFO  [sitelab_core::app] ...
    Human,
}

impl FromStr for LogFormat {
    type Err = ParseLogSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "human" | "text" => Ok(LogFormat::Human),
            other => Err(ParseLogSettingError::Format(other.to_string())),
        }
    }
}

/// A single record ready to be rendered
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn from_record(record: &log::Record) -> Self {
        Self {
            timestamp: Utc::now(),
            level: record.level().into(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        }
    }
}

impl LogFormat {
    /// Format a log entry according to this format
    pub fn format_entry(&self, entry: &LogEntry) -> String {
        match self {
            LogFormat::Json => format_json(entry),
            LogFormat::Human => format_human(entry),
        }
    }
}

fn format_json(entry: &LogEntry) -> String {
    serde_json::json!({
        "timestamp": entry.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        "level": entry.level.as_str(),
        "target": entry.target,
        "message": entry.message,
    })
    .to_string()
}

fn format_human(entry: &LogEntry) -> String {
    format!(
        "{} {:5} [{}] {}",
        entry.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        entry.level.as_str(),
        entry.target,
        entry.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry() -> LogEntry {
        LogEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            level: LogLevel::Info,
            target: "sitelab_core::app".to_string(),
            message: "GET /api/sites 200".to_string(),
        }
    }

    #[test]
    fn test_human_format() {
        let line = LogFormat::Human.format_entry(&entry());
        assert_eq!(line, "2024-01-15T10:30:00.000Z INFO  [sitelab_core::app] GET /api/sites 200");
    }

    #[test]
    fn test_json_format() {
        let line = LogFormat::Json.format_entry(&entry());
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["level"], "INFO");
        assert_eq!(value["target"], "sitelab_core::app");
        assert_eq!(value["message"], "GET /api/sites 200");
        assert_eq!(value["timestamp"], "2024-01-15T10:30:00.000Z");
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("human".parse::<LogFormat>().unwrap(), LogFormat::Human);
        assert!("yaml".parse::<LogFormat>().is_err());
    }
}
