//! JSON-backed settings repository (theme preference).

use crate::backend::storage::json::JsonConnection;
use crate::backend::storage::traits::{SettingsStorage, StorageError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Settings {
    #[serde(default)]
    dark_mode: bool,
}

#[derive(Clone)]
pub struct SettingsRepository {
    connection: Arc<JsonConnection>,
}

impl SettingsRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }

    fn read(&self) -> Result<Settings, StorageError> {
        self.connection
            .read_blob(&self.connection.settings_file(), Settings::default())
    }
}

impl SettingsStorage for SettingsRepository {
    fn read_dark_mode(&self) -> Result<bool, StorageError> {
        Ok(self.read()?.dark_mode)
    }

    fn write_dark_mode(&self, dark: bool) -> Result<(), StorageError> {
        let mut settings = self.read()?;
        settings.dark_mode = dark;
        self.connection
            .write_blob(&self.connection.settings_file(), &settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_repository() -> (SettingsRepository, tempfile::TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        (SettingsRepository::new(connection), temp_dir)
    }

    #[test]
    fn test_defaults_to_light_mode() {
        let (repo, _dir) = create_test_repository();
        assert!(!repo.read_dark_mode().unwrap());
    }

    #[test]
    fn test_write_then_read_back() {
        let (repo, _dir) = create_test_repository();
        repo.write_dark_mode(true).unwrap();
        assert!(repo.read_dark_mode().unwrap());
        repo.write_dark_mode(false).unwrap();
        assert!(!repo.read_dark_mode().unwrap());
    }
}
