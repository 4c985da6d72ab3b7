use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::id::{ItemId, ParseIdError};

/// Failures of the raw list file and its JSON encoding.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("unable to read list at {}", path.display())]
    Read { path: PathBuf, #[source] source: io::Error },

    #[error("unable to write list at {}", path.display())]
    Write { path: PathBuf, #[source] source: io::Error },

    #[error("unable to stat list at {}", path.display())]
    Stat { path: PathBuf, #[source] source: io::Error },

    #[error("unable to encode list")]
    Encode(#[source] serde_json::Error),

    #[error("unable to decode list at {}", path.display())]
    Decode { path: PathBuf, #[source] source: serde_json::Error },

    #[error("list at {} is inconsistent: {reason}", path.display())]
    Inconsistent { path: PathBuf, reason: String },
}

#[derive(Debug, Error)]
pub enum TodoError {
    #[error(transparent)]
    Parse(#[from] ParseIdError),

    #[error("item {0} not found")]
    NotFound(ItemId),

    #[error("no ids left after {0}")]
    IdsExhausted(ItemId),

    /// Loading the list failed; nothing was changed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Saving after a mutation failed. The in-memory list already reflects
    /// the change and stays ahead of the file until the next successful save.
    #[error("unable to save changes after {action}")]
    Persist { action: String, #[source] source: StorageError },
}

impl TodoError {
    pub fn is_not_found(&self) -> bool { matches!(self, TodoError::NotFound(_)) }
}

pub type TodoResult<T> = Result<T, TodoError>;
