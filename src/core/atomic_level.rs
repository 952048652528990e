//! Shared, atomically updated minimum level
//!
//! One `AtomicLevel` is created with a root logger and handed by reference to
//! every logger derived from it, so changing it anywhere changes it everywhere.

use super::log_level::LogLevel;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Severity gate shared across a logger hierarchy
///
/// Cloning an `AtomicLevel` produces another handle to the same cell.
///
/// # Example
///
/// ```
/// use rust_monolog::{AtomicLevel, LogLevel};
///
/// let level = AtomicLevel::new(LogLevel::Info);
/// let shared = level.clone();
///
/// shared.set_level(LogLevel::Warn);
/// assert!(!level.enabled(LogLevel::Info));
/// assert!(level.enabled(LogLevel::Error));
/// ```
#[derive(Clone)]
pub struct AtomicLevel {
    inner: Arc<AtomicU8>,
}

impl AtomicLevel {
    pub fn new(level: LogLevel) -> Self {
        Self {
            inner: Arc::new(AtomicU8::new(level as u8)),
        }
    }

    /// Current threshold
    #[inline]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.inner.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn set_level(&self, level: LogLevel) {
        self.inner.store(level as u8, Ordering::Relaxed);
    }

    /// True iff `level` is at or above the current threshold
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level as u8 >= self.inner.load(Ordering::Relaxed)
    }

    /// Whether both handles point at the same cell
    pub fn ptr_eq(&self, other: &AtomicLevel) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for AtomicLevel {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl fmt::Debug for AtomicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicLevel").field(&self.level()).finish()
    }
}
