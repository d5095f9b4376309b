//! Shared filesystem handle for the JSON repositories.

use crate::backend::storage::traits::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Owns the data directory and the read/write primitives the
/// repositories share.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection rooted at `base_directory`, creating the
    /// directory if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self, StorageError> {
        let base_directory = base_directory.as_ref().to_path_buf();
        fs::create_dir_all(&base_directory).map_err(|source| StorageError::Io {
            path: base_directory.clone(),
            source,
        })?;
        Ok(Self { base_directory })
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.base_directory.join("transactions.json")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_directory.join("settings.json")
    }

    /// Read and deserialize a whole blob. A missing file yields the
    /// provided default.
    pub fn read_blob<T: DeserializeOwned>(
        &self,
        path: &Path,
        default: T,
    ) -> Result<T, StorageError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => return Ok(default),
            Err(source) => {
                return Err(StorageError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize and write a whole blob atomically: write to a sibling
    /// temp file, then rename over the target. A failed write leaves the
    /// previous file untouched.
    pub fn write_blob<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(value).map_err(|source| StorageError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, raw).map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, path).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
