//! Dynamic field producers
//!
//! A processor computes one field each time a record is emitted. Returning
//! [`Field::skip`] leaves it out of that record.

use super::field::Field;
use std::fmt;
use std::sync::Arc;

/// Producer of one `extra` field per emitted record
///
/// Implementations must be safe to call repeatedly and from several threads
/// at once. Any `Fn() -> Field + Send + Sync` closure is a processor.
///
/// # Example
///
/// ```
/// use rust_monolog::{Field, Processor};
///
/// let p = || Field::string("foo", "bar");
/// assert_eq!(p.process(), Field::string("foo", "bar"));
/// ```
pub trait Processor: Send + Sync {
    fn process(&self) -> Field;
}

impl<F> Processor for F
where
    F: Fn() -> Field + Send + Sync,
{
    fn process(&self) -> Field {
        self()
    }
}

/// Shared handle to a processor; clones refer to the same producer
pub type ProcessorRef = Arc<dyn Processor>;

/// Ordered processor list owned by a single logger
///
/// Cloning copies the list into a new backing vector. The producers
/// themselves are shared, the list is not.
#[derive(Clone, Default)]
pub struct Processors {
    items: Vec<ProcessorRef>,
}

impl Processors {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, processor: ProcessorRef) {
        self.items.push(processor);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessorRef> {
        self.items.iter()
    }

    /// Whether both lists hold the same producers in the same order
    pub fn same_producers(&self, other: &Processors) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(other.items.iter())
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }
}

impl fmt::Debug for Processors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Processors")
            .field("len", &self.items.len())
            .finish()
    }
}
