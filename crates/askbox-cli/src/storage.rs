//! File-backed credential storage.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::warn;

use askbox_core::Storage;
use askbox_core::error::StorageError;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stores key/value pairs as a JSON object in a single file.
///
/// A missing file reads as empty. The file is removed once its last key is
/// removed, and is only readable by the owner on Unix.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage in the user data directory (`$XDG_DATA_HOME/askbox` on Linux).
    pub fn default_location() -> Result<Self> {
        let dirs =
            ProjectDirs::from("", "", "askbox").context("Could not determine data directory")?;
        Ok(Self::new(dirs.data_dir().join("session.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self, key: &str) -> Result<BTreeMap<String, String>, StorageError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(read_error(key, e)),
        };
        serde_json::from_str(&json).map_err(|e| read_error(key, e))
    }

    fn persist(&self, key: &str, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if entries.is_empty() {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(write_error(key, e)),
                _ => Ok(()),
            };
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_error(key, e))?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|e| write_error(key, e))?;
        fs::write(&self.path, json).map_err(|e| write_error(key, e))?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&self.path)
                .map_err(|e| write_error(key, e))?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms).map_err(|e| write_error(key, e))?;
        }

        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load(key)?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load(key)?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(key, &entries)
    }

    /// Removes `key`. An unreadable file cannot hold a usable session, so it
    /// is deleted outright.
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = match self.load(key) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Removing unreadable session file"
                );
                return self.persist(key, &BTreeMap::new());
            }
        };
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.persist(key, &entries)
    }
}

fn read_error(key: &str, err: impl std::fmt::Display) -> StorageError {
    StorageError::Read {
        key: key.to_string(),
        message: err.to_string(),
    }
}

fn write_error(key: &str, err: impl std::fmt::Display) -> StorageError {
    StorageError::Write {
        key: key.to_string(),
        message: err.to_string(),
    }
}
