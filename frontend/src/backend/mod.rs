//! # Backend Module
//!
//! Embedded synchronous backend for the egui frontend: domain services
//! over file-based storage, no async, no IO/REST layer. Everything the
//! UI needs goes through the [`Backend`] struct built once at app start.

use anyhow::Result;
use directories::ProjectDirs;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

pub mod domain;
pub mod storage;

use storage::json::{JsonConnection, SettingsRepository, TransactionRepository};

/// Main backend struct that orchestrates all services.
pub struct Backend {
    pub ledger_service: domain::LedgerService<TransactionRepository>,
    pub theme_service: domain::ThemeService<SettingsRepository>,
}

impl Backend {
    /// Create a backend rooted at the platform data directory
    /// (e.g. `~/.local/share/pocket-ledger` on Linux).
    pub fn new() -> Result<Self> {
        Self::with_data_directory(Self::default_data_directory())
    }

    /// Create a backend rooted at an explicit directory. Used by tests
    /// and by `new`.
    pub fn with_data_directory(data_dir: PathBuf) -> Result<Self> {
        info!("opening data directory {}", data_dir.display());
        let connection = Arc::new(JsonConnection::new(&data_dir)?);

        let transaction_repository = Arc::new(TransactionRepository::new(connection.clone()));
        let settings_repository = Arc::new(SettingsRepository::new(connection));

        Ok(Self {
            ledger_service: domain::LedgerService::new(transaction_repository),
            theme_service: domain::ThemeService::new(settings_repository),
        })
    }

    fn default_data_directory() -> PathBuf {
        match ProjectDirs::from("com", "pocket-ledger", "pocket-ledger") {
            Some(dirs) => dirs.data_dir().to_path_buf(),
            None => std::env::temp_dir().join("pocket-ledger"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TransactionType;

    #[test]
    fn test_ledger_and_theme_survive_backend_restart() {
        let temp_dir = tempfile::tempdir().unwrap();

        {
            let mut backend =
                Backend::with_data_directory(temp_dir.path().to_path_buf()).unwrap();
            backend
                .ledger_service
                .create_transaction(TransactionType::Credit, 500.0, "Salary")
                .unwrap();
            backend.theme_service.toggle();
        }

        let backend = Backend::with_data_directory(temp_dir.path().to_path_buf()).unwrap();
        assert_eq!(backend.ledger_service.balance().unwrap(), 500.0);
        let transactions = backend.ledger_service.list_transactions().unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].note, "Salary");
        assert!(backend.theme_service.is_dark());
    }
}
