//! Criterion benchmarks for rust_monolog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_monolog::core::log_entry::LogEntry;
use rust_monolog::prelude::*;
use rust_monolog::{EncoderConfig, LoggerConfig};
use std::io;
use std::sync::Arc;

/// Logger encoding to JSON and discarding the bytes
fn discard_logger(level: LogLevel) -> Logger {
    Logger::builder()
        .min_level(level)
        .sink(|config: &LoggerConfig| {
            Ok(Arc::new(JsonSink::from_writer(config.encoder.clone(), io::sink())) as Arc<dyn Sink>)
        })
        .build()
        .expect("Failed to create logger")
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new", |b| {
        b.iter(|| {
            let logger = discard_logger(LogLevel::Info);
            black_box(logger)
        });
    });

    let root = discard_logger(LogLevel::Info);
    group.bench_function("with_two_fields", |b| {
        b.iter(|| {
            let child = root.with(&[
                Field::string("service", "billing"),
                Field::uint("shard", black_box(3)),
            ]);
            black_box(child)
        });
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(LogLevel::Trace);

    group.bench_function("info_no_fields", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"), &[]);
        });
    });

    group.bench_function("info_three_fields", |b| {
        b.iter(|| {
            logger.info(
                black_box("Info message"),
                &fields!["user" => "alice", "attempt" => 3, "ok" => true],
            );
        });
    });

    let child = logger.with(&[Field::string("component", "http")]);
    group.bench_function("child_info", |b| {
        b.iter(|| {
            child.info(black_box("Child message"), &[]);
        });
    });

    group.finish();
}

fn bench_processors(c: &mut Criterion) {
    let mut group = c.benchmark_group("processors");
    group.throughput(Throughput::Elements(1));

    let mut logger = discard_logger(LogLevel::Info);
    logger.add_processor(processors::process_id());
    logger.add_processor(processors::thread());
    logger.add_processor(processors::uid(8));

    group.bench_function("three_processors", |b| {
        b.iter(|| {
            logger.info(black_box("Processed message"), &[]);
        });
    });

    group.finish();
}

// ============================================================================
// Level Gate Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let mut logger = discard_logger(LogLevel::Warn);
    logger.add_processor(processors::uid(16));

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            logger.debug(black_box("This should be filtered"), &[]);
        });
    });

    group.bench_function("below_threshold_macro", |b| {
        b.iter(|| {
            rust_monolog::debug!(logger, "filtered {}", black_box(42); "k" => 1);
        });
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| {
            logger.error(black_box("This should be logged"), &[]);
        });
    });

    group.finish();
}

// ============================================================================
// Encoding Benchmarks
// ============================================================================

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    group.throughput(Throughput::Elements(1));

    let sink = JsonSink::from_writer(EncoderConfig::default(), io::sink());
    let entry = LogEntry::new(
        LogLevel::Info,
        "Test message",
        vec![
            Field::object("extra", vec![Field::uint("pid", 4242)]),
            Field::namespace("context"),
            Field::string("user", "alice"),
            Field::float("elapsed_ms", 12.5),
        ],
    );

    group.bench_function("encode", |b| {
        b.iter(|| {
            let map = sink.encode(black_box(&entry));
            black_box(map)
        });
    });

    group.bench_function("emit", |b| {
        b.iter(|| {
            sink.emit(black_box(&entry)).unwrap();
        });
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let logger = Arc::new(discard_logger(LogLevel::Info));

    group.bench_function("multi_thread_4", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        logger.info(black_box("Concurrent message"), &[]);
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_logging,
    bench_processors,
    bench_level_filtering,
    bench_encoding,
    bench_concurrent_logging
);

criterion_main!(benches);
