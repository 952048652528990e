//! Timestamp encoding for JSON records

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// How the record timestamp is written
///
/// # Examples
///
/// ```
/// use rust_monolog::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.timestamp_millis_opt(1_736_332_245_123).unwrap();
/// assert_eq!(TimestampFormat::EpochMillis.encode(&ts), serde_json::json!(1_736_332_245_123_i64));
/// assert_eq!(TimestampFormat::Iso8601.encode(&ts), serde_json::json!("2025-01-08T10:30:45.123Z"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Seconds since the epoch as a float: `1736332245.123`
    ///
    /// This is the default, as monolog pipelines expect.
    #[default]
    EpochSeconds,

    /// Milliseconds since the epoch as an integer: `1736332245123`
    EpochMillis,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 with offset: `2025-01-08T10:30:45.123+00:00`
    Rfc3339,
}

impl TimestampFormat {
    pub fn encode(&self, timestamp: &DateTime<Utc>) -> serde_json::Value {
        match self {
            TimestampFormat::EpochSeconds => {
                let secs = timestamp.timestamp_micros() as f64 / 1_000_000.0;
                serde_json::Number::from_f64(secs)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null)
            }
            TimestampFormat::EpochMillis => {
                serde_json::Value::Number(timestamp.timestamp_millis().into())
            }
            TimestampFormat::Iso8601 => serde_json::Value::String(
                timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
            TimestampFormat::Rfc3339 => serde_json::Value::String(
                timestamp.to_rfc3339_opts(SecondsFormat::Millis, false),
            ),
        }
    }

    /// Plain-text rendering, used for error-output lines
    pub fn format(&self, timestamp: &DateTime<Utc>) -> String {
        match self.encode(timestamp) {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        }
    }
}
