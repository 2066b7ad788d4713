//! Key-value storage backends
//!
//! The catalog persists each collection as one snapshot under a fixed key.
//! Backends only need to read a key and atomically write a batch of keys.

pub mod memory;
pub mod redb_store;
pub mod tables;

pub use memory::MemoryStorage;
pub use redb_store::{RedbStorage, open_database};

use crate::error::Result;

/// Durable string-keyed byte storage
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write every entry or none of them
    fn write_batch(&self, entries: &[(&str, Vec<u8>)]) -> Result<()>;
}
