//! Stock processors
//!
//! Ready-made producers for the fields most monolog pipelines expect in
//! `extra`.

use crate::core::{Field, FieldValue};
use rand::Rng;
use std::cell::RefCell;

// Thread-local cache for the thread label to avoid repeated allocations
thread_local! {
    static THREAD_LABEL_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Get cached thread label (name, or id for unnamed threads)
fn thread_label() -> String {
    THREAD_LABEL_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| {
                let current = std::thread::current();
                match current.name() {
                    Some(name) => name.to_string(),
                    None => format!("{:?}", current.id()),
                }
            })
            .clone()
    })
}

/// `pid`: the current process id
pub fn process_id() -> impl Fn() -> Field + Send + Sync {
    let pid = std::process::id();
    move || Field::uint("pid", pid as u64)
}

/// `thread`: name of the emitting thread, falling back to its id
pub fn thread() -> impl Fn() -> Field + Send + Sync {
    || Field::string("thread", thread_label())
}

/// `hostname`: from the `HOSTNAME` environment variable, omitted when unset
pub fn hostname() -> impl Fn() -> Field + Send + Sync {
    || match std::env::var("HOSTNAME") {
        Ok(host) if !host.is_empty() => Field::string("hostname", host),
        _ => Field::skip(),
    }
}

/// `uid`: a random hex id of `length` characters, fixed for the processor's lifetime
///
/// Useful to correlate all records written by one logger instance.
pub fn uid(length: usize) -> impl Fn() -> Field + Send + Sync {
    const HEX: &[u8] = b"0123456789abcdef";
    let mut rng = rand::thread_rng();
    let id: String = (0..length.max(1))
        .map(|_| HEX[rng.gen_range(0..HEX.len())] as char)
        .collect();
    move || Field::string("uid", id.clone())
}

/// The same field on every record
pub fn constant(key: impl Into<String>, value: impl Into<FieldValue>) -> impl Fn() -> Field + Send + Sync {
    let field = Field::new(key, value);
    move || field.clone()
}
