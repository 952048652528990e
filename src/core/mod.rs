//! Core logger types and traits

pub mod atomic_level;
pub mod config;
pub mod error;
pub mod field;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod processor;
pub mod sink;
pub mod timestamp;

pub use atomic_level::AtomicLevel;
pub use config::{EncoderConfig, LoggerConfig, OutputTarget};
pub use error::{LoggerError, Result};
pub use field::{encode_fields, Field, FieldValue};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, CONTEXT_KEY, EXTRA_KEY};
pub use metrics::LoggerMetrics;
pub use options::LoggerOption;
pub use processor::{Processor, ProcessorRef, Processors};
pub use sink::{BuildSink, Sink};
pub use timestamp::TimestampFormat;
