//! JSON sink for structured logging
//!
//! Writes each record as a single-line JSON object (JSONL), in the shape
//! consumed by monolog-style pipelines:
//!
//! ```text
//! {"level":"info","ts":1736332245.123,"msg":"hello world","extra":{"foo":"bar"},"context":{"hello":"world"}}
//! ```

use super::output::Output;
use crate::core::field::encode_into;
use crate::core::{EncoderConfig, Field, LogEntry, LoggerConfig, LoggerError, Result, Sink};
use chrono::Utc;
use serde_json::{Map, Value};
use std::io::Write;
use std::sync::Arc;

struct Outputs {
    records: Vec<Output>,
    errors: Vec<Output>,
}

/// JSON lines sink
///
/// Fields attached through [`Sink::with_fields`] are written at the top level
/// of every record, ahead of the per-call fields.
pub struct JsonSink {
    encoder: Arc<EncoderConfig>,
    outputs: Arc<Outputs>,
    context: Arc<[Field]>,
}

impl JsonSink {
    /// Build from the final logger configuration
    ///
    /// Fails when the encoding is not JSON or an output cannot be opened.
    pub fn build(config: &LoggerConfig) -> Result<Self> {
        if !config.encoding.eq_ignore_ascii_case(LoggerConfig::JSON_ENCODING) {
            return Err(LoggerError::UnsupportedEncoding(config.encoding.clone()));
        }

        let records = Output::open_all(&config.output_paths)?;
        let errors = Output::open_all(&config.error_output_paths)?;

        Ok(Self::from_outputs(config.encoder.clone(), records, errors))
    }

    /// Sink writing records to `writer`, errors to stderr
    pub fn from_writer<W: Write + Send + 'static>(encoder: EncoderConfig, writer: W) -> Self {
        Self::from_outputs(encoder, vec![Output::writer(writer)], vec![Output::Stderr])
    }

    /// Sink writing records to `writer` and its own write failures to `error_writer`
    pub fn from_writers<W, E>(encoder: EncoderConfig, writer: W, error_writer: E) -> Self
    where
        W: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self::from_outputs(
            encoder,
            vec![Output::writer(writer)],
            vec![Output::writer(error_writer)],
        )
    }

    fn from_outputs(encoder: EncoderConfig, records: Vec<Output>, errors: Vec<Output>) -> Self {
        Self {
            encoder: Arc::new(encoder),
            outputs: Arc::new(Outputs { records, errors }),
            context: Arc::from(Vec::new()),
        }
    }

    /// Sink sharing these outputs that also writes `fields` on every record
    pub fn with_context(&self, fields: &[Field]) -> JsonSink {
        let context: Vec<Field> = self
            .context
            .iter()
            .chain(fields.iter().filter(|f| f.is_valid()))
            .cloned()
            .collect();

        Self {
            encoder: Arc::clone(&self.encoder),
            outputs: Arc::clone(&self.outputs),
            context: Arc::from(context),
        }
    }

    /// Fields this sink adds to every record
    pub fn context(&self) -> &[Field] {
        &self.context
    }

    /// Encode a record into its JSON object
    ///
    /// Top-level fields named like one of the encoder keys are dropped so
    /// they cannot replace the record's own level, time, caller, message or
    /// stack trace.
    pub fn encode(&self, entry: &LogEntry) -> Map<String, Value> {
        let enc = &self.encoder;
        let mut map = Map::new();

        map.insert(
            enc.level_key.clone(),
            Value::String(entry.level.as_lowercase().to_string()),
        );
        map.insert(
            enc.time_key.clone(),
            enc.timestamp_format.encode(&entry.timestamp),
        );
        if !enc.caller_key.is_empty() {
            if let Some(caller) = entry.caller_string() {
                map.insert(enc.caller_key.clone(), Value::String(caller));
            }
        }
        map.insert(enc.message_key.clone(), Value::String(entry.message.clone()));

        let mut fields = Map::new();
        encode_into(&mut fields, &mut self.context.iter().chain(entry.fields.iter()));
        for (key, value) in fields {
            if !self.is_reserved(&key) {
                map.insert(key, value);
            }
        }

        if !enc.stacktrace_key.is_empty() {
            if let Some(ref stack) = entry.stack {
                map.insert(enc.stacktrace_key.clone(), Value::String(stack.clone()));
            }
        }

        map
    }

    fn is_reserved(&self, key: &str) -> bool {
        let enc = &self.encoder;
        [
            &enc.level_key,
            &enc.time_key,
            &enc.caller_key,
            &enc.message_key,
            &enc.stacktrace_key,
        ]
        .iter()
        .any(|reserved| !reserved.is_empty() && reserved.as_str() == key)
    }

    fn report_error(&self, target: &str, err: &std::io::Error) {
        let line = format!(
            "{} write error on {}: {}\n",
            self.encoder.timestamp_format.format(&Utc::now()),
            target,
            err
        );
        for output in &self.outputs.errors {
            // Nowhere left to report a failing error output
            let _ = output.write_line(line.as_bytes());
        }
    }
}

impl Sink for JsonSink {
    fn with_fields(&self, fields: &[Field]) -> Arc<dyn Sink> {
        Arc::new(self.with_context(fields))
    }

    fn emit(&self, entry: &LogEntry) -> Result<()> {
        let mut line = serde_json::to_string(&Value::Object(self.encode(entry)))?;
        line.push('\n');

        let mut first_error = None;
        for output in &self.outputs.records {
            if let Err(e) = output.write_line(line.as_bytes()) {
                self.report_error(output.name(), &e);
                if first_error.is_none() {
                    first_error = Some(LoggerError::io_operation(
                        "writing record",
                        output.name(),
                        e,
                    ));
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "json"
    }
}
