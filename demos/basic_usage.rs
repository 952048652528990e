//! Basic logger usage example
//!
//! Demonstrates monolog-shaped records on stdout: processors under `extra`,
//! call fields under `context`, child loggers and the shared level.
//!
//! Run with: cargo run --example basic_usage

use rust_monolog::prelude::*;
use rust_monolog::{info, warn};

fn main() -> Result<()> {
    println!("=== Rust Monolog - Basic Usage Example ===\n");

    // Default configuration: info level, JSON on stdout
    let mut logger = Logger::new([options::level(LogLevel::Debug), options::with_caller()])?;

    // Fields computed for every record land under "extra"
    logger.add_processor(processors::process_id());
    logger.add_processor(processors::thread());
    logger.add_processor(|| Field::string("foo", "bar"));

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message (hidden)", &[]);
    logger.debug("This is a debug message", &[]);
    logger.info("hello world", &[Field::string("hello", "world")]);
    logger.warn("This is a warning message", &fields!["retries" => 3]);

    println!("\n2. Child loggers:");
    let mut requests = logger.with(&[Field::string("component", "http")]);
    requests.add_processor(processors::uid(8));
    requests.info("request served", &fields!["status" => 200, "path" => "/health"]);
    logger.info("parent keeps its own processors", &[]);

    println!("\n3. Macros:");
    let user = "alice";
    info!(requests, "user {} signed in", user; "method" => "password");

    println!("\n4. Shared level:");
    requests.set_level(LogLevel::Error);
    println!("   Level raised to ERROR through the child - the parent is silenced too:");
    logger.info("Info message (hidden)", &[]);
    warn!(logger, "Warning message (hidden)");
    logger.error("Error message (visible)", &[]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
