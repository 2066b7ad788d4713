use redb::{Database, ReadableDatabase};
use std::path::Path;
use std::sync::Arc;

use super::{KeyValueStore, tables};
use crate::error::Result;

/// Database handle type (Arc-wrapped so handles can be cloned cheaply)
pub type Db = Arc<Database>;

/// Open or create the redb database at the given path
///
/// Creates the snapshots table on first run.
pub fn open_database(path: impl AsRef<Path>) -> Result<Db> {
    tracing::info!("Opening database at: {:?}", path.as_ref());

    // Create parent directory if it doesn't exist
    if let Some(parent) = path.as_ref().parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            tracing::error!("Failed to create database directory: {}", e);
            e
        })?;
    }

    let db = Database::create(path)?;

    let write_txn = db.begin_write()?;
    {
        write_txn.open_table(tables::SNAPSHOTS)?;
    }
    write_txn.commit()?;

    tracing::info!("Database initialized successfully");

    Ok(Arc::new(db))
}

/// Snapshot storage in a redb database file
#[derive(Clone)]
pub struct RedbStorage {
    db: Db,
}

impl RedbStorage {
    /// Open (or create) the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            db: open_database(path)?,
        })
    }
}

impl KeyValueStore for RedbStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(tables::SNAPSHOTS)?;
        Ok(table.get(key)?.map(|value| value.value().to_vec()))
    }

    fn write_batch(&self, entries: &[(&str, Vec<u8>)]) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(tables::SNAPSHOTS)?;
            for (key, value) in entries {
                table.insert(*key, value.as_slice())?;
            }
        }
        write_txn.commit()?;

        tracing::debug!("Flushed {} snapshot(s)", entries.len());
        Ok(())
    }
}
