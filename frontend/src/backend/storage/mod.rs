//! # Storage Module
//!
//! File-based persistence for the ledger. The domain layer only sees the
//! traits in [`traits`]; the concrete implementation is a JSON blob per
//! collection, rewritten whole on every mutation ([`json`]).

pub mod json;
pub mod traits;

pub use json::JsonConnection;
pub use traits::{SettingsStorage, StorageError, TransactionStorage};
