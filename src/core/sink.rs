//! Sink traits for record output

use super::config::LoggerConfig;
use super::error::Result;
use super::field::Field;
use super::log_entry::LogEntry;
use std::sync::Arc;

/// Serializes and writes records
///
/// The logger decides *whether* to emit; a sink only decides *how*. A sink
/// must serialize its own writes and must not panic on write failure.
pub trait Sink: Send + Sync {
    /// Derive a sink that adds `fields` to every record it writes
    fn with_fields(&self, fields: &[Field]) -> Arc<dyn Sink>;

    /// Write one record
    fn emit(&self, entry: &LogEntry) -> Result<()>;

    fn name(&self) -> &str;
}

/// Builds a sink from the final configuration
pub trait BuildSink: Send + Sync {
    fn build(&self, config: &LoggerConfig) -> Result<Arc<dyn Sink>>;
}

impl<F> BuildSink for F
where
    F: Fn(&LoggerConfig) -> Result<Arc<dyn Sink>> + Send + Sync,
{
    fn build(&self, config: &LoggerConfig) -> Result<Arc<dyn Sink>> {
        self(config)
    }
}
