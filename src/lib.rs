//! # Rust Monolog
//!
//! Structured JSON logging in the monolog record shape:
//!
//! ```text
//! {"level":"info","ts":1736332245.123,"msg":"hello world","extra":{"pid":4242},"context":{"user":"alice"}}
//! ```
//!
//! ## Features
//!
//! - **Shared level**: every logger derived from a root reads and writes one atomic level
//! - **Child loggers**: `with` adds permanent fields without touching the parent
//! - **Processors**: per-record dynamic fields collected under `extra`
//! - **Cheap when disabled**: a disabled call does no work beyond one atomic load
//!
//! ## Example
//!
//! ```
//! use rust_monolog::prelude::*;
//!
//! let mut logger = Logger::builder().output_paths(["stderr"]).build()?;
//! logger.add_processor(processors::process_id());
//!
//! let requests = logger.with(&[Field::string("component", "http")]);
//! requests.info("request served", &fields!["status" => 200, "path" => "/health"]);
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod processors;
pub mod sinks;

pub use crate::core::options;

pub mod prelude {
    pub use crate::core::{
        options, AtomicLevel, Field, FieldValue, LogLevel, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, Processor, Result, Sink,
    };
    pub use crate::fields;
    pub use crate::processors;
    pub use crate::sinks::JsonSink;
}

pub use crate::core::{
    AtomicLevel, BuildSink, EncoderConfig, Field, FieldValue, LogEntry, LogLevel, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, LoggerOption, OutputTarget,
    Processor, Result, Sink, TimestampFormat, CONTEXT_KEY, EXTRA_KEY,
};
pub use sinks::JsonSink;
