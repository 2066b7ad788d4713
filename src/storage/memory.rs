use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use super::KeyValueStore;
use crate::error::{Result, StoreError};

/// In-memory key-value storage
///
/// Nothing survives the process. Can be made read-only to reproduce a
/// storage medium that rejects writes (quota exceeded, private browsing).
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, Vec<u8>>>,
    read_only: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject (or accept again) every subsequent write
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.data.read().map(|data| data.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let data = self
            .data
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(data.get(key).cloned())
    }

    fn write_batch(&self, entries: &[(&str, Vec<u8>)]) -> Result<()> {
        if self.read_only.load(Ordering::SeqCst) {
            tracing::warn!("Rejected write of {} key(s) to read-only storage", entries.len());
            return Err(StoreError::WriteRejected(
                "storage is read-only".to_string(),
            ));
        }

        let mut data = self
            .data
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        for (key, value) in entries {
            data.insert((*key).to_string(), value.clone());
        }
        Ok(())
    }
}
