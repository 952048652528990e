//! Logger configuration
//!
//! `LoggerConfig` is what options mutate and what sinks are built from.

use super::atomic_level::AtomicLevel;
use super::error::{LoggerError, Result};
use super::sink::BuildSink;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Key names and timestamp encoding used by the JSON sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderConfig {
    pub message_key: String,
    pub level_key: String,
    pub time_key: String,
    pub caller_key: String,
    pub stacktrace_key: String,
    pub timestamp_format: TimestampFormat,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            message_key: "msg".to_string(),
            level_key: "level".to_string(),
            time_key: "ts".to_string(),
            caller_key: "caller".to_string(),
            stacktrace_key: "stacktrace".to_string(),
            timestamp_format: TimestampFormat::default(),
        }
    }
}

/// Where a sink writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputTarget {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl FromStr for OutputTarget {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" => Err(LoggerError::config("output path", "path must not be empty")),
            "stdout" => Ok(OutputTarget::Stdout),
            "stderr" => Ok(OutputTarget::Stderr),
            path => Ok(OutputTarget::File(PathBuf::from(path))),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => write!(f, "stdout"),
            OutputTarget::Stderr => write!(f, "stderr"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Accumulated logger configuration
///
/// Defaults: level `Info`, JSON encoding, caller and stack trace annotations
/// off, records to stdout, internal errors to stderr.
#[derive(Clone)]
pub struct LoggerConfig {
    pub level: AtomicLevel,
    pub disable_caller: bool,
    pub disable_stacktrace: bool,
    pub encoding: String,
    pub encoder: EncoderConfig,
    pub output_paths: Vec<OutputTarget>,
    pub error_output_paths: Vec<OutputTarget>,
    /// Custom sink factory; `None` builds a [`JsonSink`](crate::sinks::JsonSink)
    pub sink_builder: Option<Arc<dyn BuildSink>>,
}

impl LoggerConfig {
    pub const JSON_ENCODING: &'static str = "json";
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: AtomicLevel::default(),
            disable_caller: true,
            disable_stacktrace: true,
            encoding: Self::JSON_ENCODING.to_string(),
            encoder: EncoderConfig::default(),
            output_paths: vec![OutputTarget::Stdout],
            error_output_paths: vec![OutputTarget::Stderr],
            sink_builder: None,
        }
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("level", &self.level)
            .field("disable_caller", &self.disable_caller)
            .field("disable_stacktrace", &self.disable_stacktrace)
            .field("encoding", &self.encoding)
            .field("encoder", &self.encoder)
            .field("output_paths", &self.output_paths)
            .field("error_output_paths", &self.error_output_paths)
            .field("custom_sink", &self.sink_builder.is_some())
            .finish()
    }
}
