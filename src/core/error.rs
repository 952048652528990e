//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// An option passed to `Logger::new` failed
    #[error("options function failed: {source}")]
    Options {
        #[source]
        source: Box<LoggerError>,
    },

    /// The sink could not be built from the final configuration
    #[error("failed to build logger: {source}")]
    SinkBuild {
        #[source]
        source: Box<LoggerError>,
    },

    /// An output could not be opened or written
    #[error("{operation} {target} failed: {source}")]
    IoOperation {
        operation: String,
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("io: {0}")]
    IoError(#[from] std::io::Error),

    /// A record could not be serialized
    #[error("encoding record: {0}")]
    JsonError(#[from] serde_json::Error),

    /// An option carried a value the logger cannot use
    #[error("invalid {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Encoding other than JSON requested
    #[error("unsupported encoding '{0}', only \"json\" is available")]
    UnsupportedEncoding(String),

    /// Level string that does not name a level
    #[error("{0}")]
    InvalidLevel(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Wrap an error raised while applying options
    pub fn options(source: LoggerError) -> Self {
        LoggerError::Options {
            source: Box::new(source),
        }
    }

    /// Wrap an error raised while building the sink
    pub fn sink_build(source: LoggerError) -> Self {
        LoggerError::SinkBuild {
            source: Box::new(source),
        }
    }

    /// `operation` failed on the output named `target`
    pub fn io_operation(
        operation: impl Into<String>,
        target: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            target: target.into(),
            source,
        }
    }

    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        LoggerError::Other(message.into())
    }

    /// True for errors produced by `Logger::new` itself
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            LoggerError::Options { .. } | LoggerError::SinkBuild { .. }
        )
    }
}
