//! Property-based tests for rust_monolog using proptest

use proptest::prelude::*;
use rust_monolog::core::log_entry::LogEntry;
use rust_monolog::prelude::*;
use rust_monolog::core::field::encode_fields;
use rust_monolog::{EncoderConfig, LoggerConfig};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

/// A call-site field, or `None` for an unknown-type field
fn maybe_field() -> impl Strategy<Value = Option<(String, i64)>> {
    prop::option::of(("[a-z]{1,8}", any::<i64>()))
}

#[derive(Clone, Default)]
struct Collect(Arc<Mutex<Vec<LogEntry>>>);

impl Sink for Collect {
    fn with_fields(&self, _fields: &[Field]) -> Arc<dyn Sink> {
        Arc::new(self.clone())
    }

    fn emit(&self, entry: &LogEntry) -> rust_monolog::Result<()> {
        self.0.lock().push(entry.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "collect"
    }
}

fn collecting_logger() -> (Logger, Arc<Mutex<Vec<LogEntry>>>) {
    let sink = Collect::default();
    let entries = Arc::clone(&sink.0);
    let logger = Logger::builder()
        .sink(move |_: &LoggerConfig| Ok(Arc::new(sink.clone()) as Arc<dyn Sink>))
        .build()
        .unwrap();
    (logger, entries)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);

        let lower: LogLevel = level.as_lowercase().parse().unwrap();
        prop_assert_eq!(level, lower);
    }

    /// Test that LogLevel ordering follows the numeric value
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 > level2, val1 > val2);
    }

    /// Garbage never parses as a level
    #[test]
    fn test_log_level_rejects_unknown_names(name in "[0-9]{1,6}") {
        prop_assert!(name.parse::<LogLevel>().is_err());
    }
}

// ============================================================================
// Gate Tests
// ============================================================================

proptest! {
    /// A record is written iff its level is at or above the shared threshold
    #[test]
    fn test_gate_matches_threshold(threshold in any_level(), level in any_level()) {
        let (logger, entries) = collecting_logger();
        logger.set_level(threshold);

        logger.log(level, "probe", &[]);

        let written = entries.lock().len();
        prop_assert_eq!(written == 1, level >= threshold);
        prop_assert_eq!(logger.enabled(level), level >= threshold);
    }

    /// The threshold set through any descendant is the one every logger sees
    #[test]
    fn test_descendants_share_threshold(depth in 1usize..6, threshold in any_level()) {
        let (root, _) = collecting_logger();
        let mut leaf = root.with(&[]);
        for i in 1..depth {
            leaf = leaf.with(&[Field::uint("depth", i as u64)]);
        }

        leaf.set_level(threshold);
        prop_assert_eq!(root.level().level(), threshold);

        let level = AtomicLevel::new(threshold);
        for candidate in LogLevel::ALL {
            prop_assert_eq!(root.enabled(candidate), level.enabled(candidate));
        }
    }
}

// ============================================================================
// Field Filtering Tests
// ============================================================================

proptest! {
    /// Unknown fields are dropped; the rest keep their relative order
    #[test]
    fn test_invalid_fields_filtered_in_order(
        shapes in prop::collection::vec(maybe_field(), 0..12)
    ) {
        let (logger, entries) = collecting_logger();
        let fields: Vec<Field> = shapes
            .iter()
            .map(|shape| match shape {
                Some((key, value)) => Field::int(key.clone(), *value),
                None => Field::skip(),
            })
            .collect();

        logger.info("fields", &fields);

        let expected: Vec<Field> = fields.iter().filter(|f| f.is_valid()).cloned().collect();
        let skipped = (fields.len() - expected.len()) as u64;

        let entries = entries.lock();
        prop_assert_eq!(&entries[0].fields[2..], expected.as_slice());
        prop_assert_eq!(logger.metrics().invalid_fields(), skipped);
    }

    /// Processor output keeps processor order and drops unknowns
    #[test]
    fn test_processor_output_in_order(shapes in prop::collection::vec(maybe_field(), 0..8)) {
        let (mut logger, entries) = collecting_logger();
        for (i, shape) in shapes.iter().enumerate() {
            let field = match shape {
                Some((key, value)) => Field::int(format!("{}{}", key, i), *value),
                None => Field::skip(),
            };
            logger.add_processor(move || field.clone());
        }

        logger.warn("extras", &[]);

        let expected: Vec<String> = shapes
            .iter()
            .enumerate()
            .filter_map(|(i, shape)| shape.as_ref().map(|(key, _)| format!("{}{}", key, i)))
            .collect();

        let entries = entries.lock();
        let keys: Vec<String> = match &entries[0].fields[0].value {
            FieldValue::Object(extra) => extra.iter().map(|f| f.key.clone()).collect(),
            other => panic!("expected extra object, got {:?}", other),
        };
        prop_assert_eq!(keys, expected);
    }
}

// ============================================================================
// Encoding Tests
// ============================================================================

proptest! {
    /// Every encoded record is one line of valid JSON holding the message
    #[test]
    fn test_encoded_record_is_single_json_line(message in ".*", value in any::<i64>()) {
        let sink = JsonSink::from_writer(EncoderConfig::default(), std::io::sink());
        let entry = LogEntry::new(
            LogLevel::Info,
            message.as_str(),
            vec![
                Field::object("extra", Vec::new()),
                Field::namespace("context"),
                Field::int("value", value),
            ],
        );

        let line = serde_json::to_string(&Value::Object(sink.encode(&entry))).unwrap();
        prop_assert!(!line.contains('\n'));

        let parsed: Value = serde_json::from_str(&line).unwrap();
        prop_assert_eq!(parsed["msg"].as_str().unwrap(), message.as_str());
        prop_assert_eq!(parsed["context"]["value"].as_i64().unwrap(), value);
    }

    /// Fields after a namespace marker all land inside it
    #[test]
    fn test_namespace_captures_following_fields(
        before in prop::collection::btree_set("[a-m]{1,4}", 0..4),
        after in prop::collection::btree_set("[n-z]{1,4}", 0..4),
    ) {
        let mut fields: Vec<Field> = before.iter().map(|k| Field::bool(k.clone(), true)).collect();
        fields.push(Field::namespace("ns"));
        fields.extend(after.iter().map(|k| Field::bool(k.clone(), false)));

        let map = encode_fields(&fields);
        prop_assert_eq!(map.len(), before.len() + 1);
        let nested = map["ns"].as_object().unwrap();
        prop_assert_eq!(nested.len(), after.len());
        for key in &after {
            prop_assert_eq!(&nested[key], &Value::Bool(false));
        }
    }
}
