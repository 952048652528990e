//! Log entry structure

use super::field::Field;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::panic::Location;

/// One record on its way to a sink
///
/// `fields` is the fully composed per-call list (`extra` composite, `context`
/// namespace marker, call-site fields). Fields attached with `Logger::with`
/// live in the sink, not here.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub caller: Option<&'static Location<'static>>,
    pub stack: Option<String>,
    pub fields: Vec<Field>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            caller: None,
            stack: None,
            fields,
        }
    }

    pub fn with_caller(mut self, caller: &'static Location<'static>) -> Self {
        self.caller = Some(caller);
        self
    }

    pub fn with_stack(mut self, stack: String) -> Self {
        self.stack = Some(stack);
        self
    }

    /// `file:line` of the call site, if captured
    pub fn caller_string(&self) -> Option<String> {
        self.caller
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
    }
}
