use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::error::StorageError;

/// Whole-file access to the list. Each call opens, reads or writes, and closes
/// the file; nothing is held open between calls and nothing is locked.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    pub fn path(&self) -> &Path { &self.path }

    /// False when the file is missing or zero-length.
    pub fn is_initialized(&self) -> Result<bool, StorageError> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() != 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StorageError::Stat { path: self.path.clone(), source }),
        }
    }

    pub fn read(&self) -> Result<Vec<u8>, StorageError> {
        fs::read(&self.path).map_err(|source| StorageError::Read { path: self.path.clone(), source })
    }

    /// Overwrites in place. A crash mid-write can leave a truncated file.
    pub fn write(&self, bytes: &[u8]) -> Result<(), StorageError> {
        fs::write(&self.path, bytes).map_err(|source| StorageError::Write { path: self.path.clone(), source })
    }
}
