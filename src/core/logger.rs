//! Main logger implementation

use super::{
    atomic_level::AtomicLevel,
    config::LoggerConfig,
    error::{LoggerError, Result},
    field::Field,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    options::{self, LoggerOption},
    processor::{Processor, Processors},
    sink::Sink,
};
use crate::sinks::JsonSink;
use std::backtrace::Backtrace;
use std::panic::{self, AssertUnwindSafe, Location};
use std::sync::Arc;

/// Key of the composite holding processor output
pub const EXTRA_KEY: &str = "extra";

/// Namespace under which call-site fields are written
pub const CONTEXT_KEY: &str = "context";

/// Structured logger writing monolog-shaped records
///
/// Every record carries the processor output under `extra` and the call-site
/// fields under `context`. Loggers derived with [`Logger::with`] share the
/// level, sink outputs and metrics of their parent, but own their context
/// fields and processor list.
pub struct Logger {
    sink: Arc<dyn Sink>,
    config: Arc<LoggerConfig>,
    level: AtomicLevel,
    context: Arc<[Field]>,
    processors: Processors,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Build a logger from the default configuration plus `options`
    ///
    /// Options run in order; the first failure aborts construction before any
    /// sink is built.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_monolog::{options, Logger, LogLevel};
    ///
    /// let logger = Logger::new([options::level(LogLevel::Debug)]).unwrap();
    /// assert!(logger.enabled(LogLevel::Debug));
    /// ```
    pub fn new<I>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = LoggerOption>,
    {
        let mut config = LoggerConfig::default();
        for option in options {
            option(&mut config).map_err(LoggerError::options)?;
        }

        let sink = match config.sink_builder {
            Some(ref builder) => builder.build(&config),
            None => JsonSink::build(&config).map(|sink| Arc::new(sink) as Arc<dyn Sink>),
        }
        .map_err(LoggerError::sink_build)?;

        Ok(Self {
            sink,
            level: config.level.clone(),
            config: Arc::new(config),
            context: Arc::from(Vec::new()),
            processors: Processors::new(),
            metrics: Arc::new(LoggerMetrics::new()),
        })
    }

    /// Derive a child logger that adds `fields` to every record
    ///
    /// The child shares level, configuration and metrics with `self`. Its
    /// processor list starts as a copy of the parent's; later additions on
    /// either side stay local.
    #[must_use]
    pub fn with(&self, fields: &[Field]) -> Logger {
        let added: Vec<Field> = fields.iter().filter(|f| f.is_valid()).cloned().collect();
        let context: Vec<Field> = self.context.iter().chain(added.iter()).cloned().collect();

        Logger {
            sink: self.sink.with_fields(&added),
            config: Arc::clone(&self.config),
            level: self.level.clone(),
            context: Arc::from(context),
            processors: self.processors.clone(),
            metrics: Arc::clone(&self.metrics),
        }
    }

    /// Append a processor; affects this logger and loggers derived from it later
    pub fn add_processor<P: Processor + 'static>(&mut self, processor: P) {
        self.processors.push(Arc::new(processor));
    }

    pub fn processors(&self) -> &Processors {
        &self.processors
    }

    /// Fields added through `with`, root first
    pub fn context_fields(&self) -> &[Field] {
        &self.context
    }

    /// The level handle shared by this logger's whole hierarchy
    pub fn level(&self) -> &AtomicLevel {
        &self.level
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.set_level(level);
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.level.enabled(level)
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Emit one record at `level`
    ///
    /// Returns immediately, without running processors or allocating, when
    /// `level` is below the shared threshold. Write failures are counted in
    /// [`LoggerMetrics`] and never surface here.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: &str, fields: &[Field]) {
        if !self.level.enabled(level) {
            return;
        }

        let mut record = Vec::with_capacity(fields.len() + 2);
        record.push(Field::object(EXTRA_KEY, self.run_processors()));
        record.push(Field::namespace(CONTEXT_KEY));
        for field in fields {
            if field.is_valid() {
                record.push(field.clone());
            } else {
                self.metrics.record_invalid_field();
            }
        }

        let mut entry = LogEntry::new(level, message, record);
        if !self.config.disable_caller {
            entry = entry.with_caller(Location::caller());
        }
        if !self.config.disable_stacktrace && level >= LogLevel::Error {
            entry = entry.with_stack(Backtrace::force_capture().to_string());
        }

        self.write(&entry);
    }

    /// Run every processor in order, keeping valid results
    ///
    /// A panicking processor counts as an absent field.
    fn run_processors(&self) -> Vec<Field> {
        let mut extras = Vec::with_capacity(self.processors.len());
        for processor in self.processors.iter() {
            match panic::catch_unwind(AssertUnwindSafe(|| processor.process())) {
                Ok(field) if field.is_valid() => {
                    extras.push(field);
                }
                Ok(_) => {
                    self.metrics.record_invalid_field();
                }
                Err(_) => {
                    self.metrics.record_processor_failure();
                }
            }
        }
        extras
    }

    fn write(&self, entry: &LogEntry) {
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.sink.emit(entry)));
        match result {
            Ok(Ok(())) => {
                self.metrics.record_written();
            }
            Ok(Err(_)) | Err(_) => {
                // The sink has already reported to its error outputs
                self.metrics.record_write_failure();
            }
        }
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Trace, message, fields);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Debug, message, fields);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Info, message, fields);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Warn, message, fields);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Error, message, fields);
    }

    /// Log at `Fatal`; the process keeps running
    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Fatal, message, fields);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("sink", &self.sink.name())
            .field("context", &self.context)
            .field("processors", &self.processors)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Each method queues the matching [`options`] function; `build` hands them
/// to [`Logger::new`].
///
/// # Example
/// ```
/// use rust_monolog::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .output_paths(["stderr"])
///     .build()
///     .unwrap();
/// assert!(logger.enabled(LogLevel::Debug));
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    options: Vec<LoggerOption>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Queue an arbitrary option
    #[must_use = "builder methods return a new value"]
    pub fn option(mut self, option: LoggerOption) -> Self {
        self.options.push(option);
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(self, level: LogLevel) -> Self {
        self.option(options::level(level))
    }

    #[must_use = "builder methods return a new value"]
    pub fn caller(self) -> Self {
        self.option(options::with_caller())
    }

    #[must_use = "builder methods return a new value"]
    pub fn stacktrace(self) -> Self {
        self.option(options::with_stacktrace())
    }

    #[must_use = "builder methods return a new value"]
    pub fn output_paths<I, S>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.option(options::output_paths(paths))
    }

    #[must_use = "builder methods return a new value"]
    pub fn error_output_paths<I, S>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.option(options::error_output_paths(paths))
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<F>(self, build: F) -> Self
    where
        F: Fn(&LoggerConfig) -> Result<Arc<dyn Sink>> + Send + Sync + 'static,
    {
        self.option(options::sink(build))
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        Logger::new(self.options)
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
