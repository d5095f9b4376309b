//! # Storage Traits
//!
//! Storage abstraction traits that let the domain layer work against
//! different backends (JSON files today, anything else tomorrow) without
//! modification. All operations are synchronous; this is a desktop-only
//! single-user app.

use shared::Transaction;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the storage layer.
///
/// A failed read is non-fatal to the app: callers render an empty list
/// and show a warning. A failed write leaves the previous blob intact.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt data in {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Interface for transaction persistence.
pub trait TransactionStorage {
    /// Read every stored transaction, in stored (append) order.
    /// A missing file is an empty ledger, not an error.
    fn list_transactions(&self) -> Result<Vec<Transaction>, StorageError>;

    /// Append a transaction and rewrite the blob.
    fn store_transaction(&self, transaction: &Transaction) -> Result<(), StorageError>;

    /// Delete a transaction by id. Idempotent: deleting an absent id is
    /// a no-op and returns `Ok(false)`.
    fn delete_transaction(&self, id: &str) -> Result<bool, StorageError>;
}

/// Interface for app settings persistence (currently just the theme flag).
pub trait SettingsStorage {
    /// Read the persisted dark-mode flag; defaults to `false` when unset.
    fn read_dark_mode(&self) -> Result<bool, StorageError>;

    /// Persist the dark-mode flag.
    fn write_dark_mode(&self, dark: bool) -> Result<(), StorageError>;
}
