//! Construction options
//!
//! An option is a fallible function over the in-progress [`LoggerConfig`].
//! `Logger::new` applies options in order and stops at the first failure.

use super::config::{EncoderConfig, LoggerConfig, OutputTarget};
use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::sink::{BuildSink, Sink};
use super::timestamp::TimestampFormat;
use std::sync::Arc;

/// A single construction option
pub type LoggerOption = Box<dyn FnOnce(&mut LoggerConfig) -> Result<()> + Send>;

/// Wrap a closure as a [`LoggerOption`]
pub fn custom<F>(f: F) -> LoggerOption
where
    F: FnOnce(&mut LoggerConfig) -> Result<()> + Send + 'static,
{
    Box::new(f)
}

/// Set the initial minimum level
pub fn level(level: LogLevel) -> LoggerOption {
    custom(move |config| {
        config.level.set_level(level);
        Ok(())
    })
}

/// Set the initial minimum level from its name (`"debug"`, `"WARN"`, ...)
pub fn level_str(name: impl Into<String>) -> LoggerOption {
    let name = name.into();
    custom(move |config| {
        let parsed = name.parse::<LogLevel>().map_err(LoggerError::InvalidLevel)?;
        config.level.set_level(parsed);
        Ok(())
    })
}

/// Annotate records with the `file:line` of the call site
pub fn with_caller() -> LoggerOption {
    custom(|config| {
        config.disable_caller = false;
        Ok(())
    })
}

/// Attach a stack trace to records at `Error` and above
pub fn with_stacktrace() -> LoggerOption {
    custom(|config| {
        config.disable_stacktrace = false;
        Ok(())
    })
}

/// Record destinations: `"stdout"`, `"stderr"` or file paths
pub fn output_paths<I, S>(paths: I) -> LoggerOption
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let paths: Vec<String> = paths.into_iter().map(|p| p.as_ref().to_string()).collect();
    custom(move |config| {
        config.output_paths = parse_targets("output_paths", &paths)?;
        Ok(())
    })
}

/// Destinations for the sink's own write failures
pub fn error_output_paths<I, S>(paths: I) -> LoggerOption
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let paths: Vec<String> = paths.into_iter().map(|p| p.as_ref().to_string()).collect();
    custom(move |config| {
        config.error_output_paths = parse_targets("error_output_paths", &paths)?;
        Ok(())
    })
}

/// Select the record encoding; only `"json"` builds
pub fn encoding(name: impl Into<String>) -> LoggerOption {
    let name = name.into();
    custom(move |config| {
        config.encoding = name;
        Ok(())
    })
}

pub fn timestamp_format(format: TimestampFormat) -> LoggerOption {
    custom(move |config| {
        config.encoder.timestamp_format = format;
        Ok(())
    })
}

/// Replace the encoder key names and timestamp format
pub fn encoder_config(encoder: EncoderConfig) -> LoggerOption {
    custom(move |config| {
        let keys = [
            ("message_key", &encoder.message_key),
            ("level_key", &encoder.level_key),
            ("time_key", &encoder.time_key),
        ];
        for (name, key) in keys {
            if key.is_empty() {
                return Err(LoggerError::config("encoder", format!("{} must not be empty", name)));
            }
        }
        config.encoder = encoder;
        Ok(())
    })
}

/// Build records through a custom sink instead of the JSON sink
pub fn sink<F>(build: F) -> LoggerOption
where
    F: Fn(&LoggerConfig) -> Result<Arc<dyn Sink>> + Send + Sync + 'static,
{
    sink_builder(Arc::new(build))
}

/// Like [`sink`], for an existing [`BuildSink`] implementation
pub fn sink_builder(builder: Arc<dyn BuildSink>) -> LoggerOption {
    custom(move |config| {
        config.sink_builder = Some(builder);
        Ok(())
    })
}

fn parse_targets(component: &str, paths: &[String]) -> Result<Vec<OutputTarget>> {
    if paths.is_empty() {
        return Err(LoggerError::config(component, "at least one path is required"));
    }
    paths
        .iter()
        .map(|p| p.parse::<OutputTarget>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn apply(option: LoggerOption) -> Result<LoggerConfig> {
        let mut config = LoggerConfig::default();
        option(&mut config)?;
        Ok(config)
    }

    #[test]
    fn test_level_options() {
        let config = apply(level(LogLevel::Debug)).unwrap();
        assert_eq!(config.level.level(), LogLevel::Debug);

        let config = apply(level_str("warning")).unwrap();
        assert_eq!(config.level.level(), LogLevel::Warn);

        let err = apply(level_str("loud")).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel(_)));
    }

    #[test]
    fn test_annotation_options() {
        let config = apply(with_caller()).unwrap();
        assert!(!config.disable_caller);
        assert!(config.disable_stacktrace);

        let config = apply(with_stacktrace()).unwrap();
        assert!(!config.disable_stacktrace);
    }

    #[test]
    fn test_output_paths() {
        let config = apply(output_paths(["stderr", "/tmp/app.log"])).unwrap();
        assert_eq!(
            config.output_paths,
            vec![
                OutputTarget::Stderr,
                OutputTarget::File(PathBuf::from("/tmp/app.log"))
            ]
        );

        let empty: [&str; 0] = [];
        let err = apply(output_paths(empty)).unwrap_err();
        assert!(err.to_string().contains("output_paths"));

        let err = apply(error_output_paths([""])).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_encoder_config_rejects_empty_keys() {
        let encoder = EncoderConfig {
            message_key: String::new(),
            ..EncoderConfig::default()
        };
        assert!(apply(encoder_config(encoder)).is_err());

        let encoder = EncoderConfig {
            message_key: "message".to_string(),
            ..EncoderConfig::default()
        };
        let config = apply(encoder_config(encoder)).unwrap();
        assert_eq!(config.encoder.message_key, "message");
    }

    #[test]
    fn test_encoding_is_recorded_not_validated() {
        let config = apply(encoding("console")).unwrap();
        assert_eq!(config.encoding, "console");
    }
}
