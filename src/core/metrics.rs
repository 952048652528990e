//! Logger metrics for observability
//!
//! Counters shared by every logger in one hierarchy. Logging never reports
//! failures to the caller, so this is where they become visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_monolog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.records_written(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// assert_eq!(metrics.failure_rate(), 50.0);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records the sink accepted
    records_written: AtomicU64,

    /// Records the sink failed to write
    write_failures: AtomicU64,

    /// Processors that panicked instead of returning a field
    processor_failures: AtomicU64,

    /// Processor results and call-site fields dropped for carrying the unknown tag
    invalid_fields: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            records_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            processor_failures: AtomicU64::new(0),
            invalid_fields: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_written(&self) -> u64 {
        self.records_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn processor_failures(&self) -> u64 {
        self.processor_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn invalid_fields(&self) -> u64 {
        self.invalid_fields.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) {
        self.records_written.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_write_failure(&self) {
        self.write_failures.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_processor_failure(&self) {
        self.processor_failures.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_invalid_field(&self) {
        self.invalid_fields.fetch_add(1, Ordering::Relaxed);
    }

    /// Share of emitted records that failed to write, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been emitted.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = self.records_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.records_written.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.processor_failures.store(0, Ordering::Relaxed);
        self.invalid_fields.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            records_written: AtomicU64::new(self.records_written()),
            write_failures: AtomicU64::new(self.write_failures()),
            processor_failures: AtomicU64::new(self.processor_failures()),
            invalid_fields: AtomicU64::new(self.invalid_fields()),
        }
    }
}
