use serde::Serialize;
use thiserror::Error;

use crate::constants::ERR_STORAGE_UNAVAILABLE;

/// Store error type
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database open error: {0}")]
    DatabaseOpen(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot encoding error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Write rejected: {0}")]
    WriteRejected(String),

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

/// Coarse classification of [`StoreError`], stable across backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Conflict,
    Auth,
    NotFound,
    Storage,
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Validation(_) => ErrorKind::Validation,
            StoreError::Conflict(_) => ErrorKind::Conflict,
            StoreError::Auth(_) => ErrorKind::Auth,
            StoreError::NotFound(_) => ErrorKind::NotFound,
            StoreError::DatabaseOpen(_)
            | StoreError::Transaction(_)
            | StoreError::Table(_)
            | StoreError::Storage(_)
            | StoreError::Commit(_)
            | StoreError::Io(_)
            | StoreError::Snapshot(_)
            | StoreError::WriteRejected(_)
            | StoreError::LockPoisoned => ErrorKind::Storage,
        }
    }

    /// Message safe to show an end user
    ///
    /// Domain errors carry their own message. Storage failures are logged
    /// here and replaced with a generic message.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Storage => {
                tracing::error!("Storage failure: {:?}", self);
                ERR_STORAGE_UNAVAILABLE.to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for store results
pub type Result<T> = std::result::Result<T, StoreError>;
