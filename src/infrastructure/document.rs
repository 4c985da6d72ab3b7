//! On-disk shape of the list file.
//!
//! ```json
//! {"last_id":1,"items":{"0":{"id":0,"complete":true,"description":"buy milk"}}}
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{error::StorageError, id::ItemId, item::Item};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDocument {
    /// Highest id ever handed out; `-1` until the first create.
    pub last_id: ItemId,
    #[serde(default)]
    pub items: BTreeMap<ItemId, ItemRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub complete: bool,
    pub description: String,
}

impl Default for ListDocument {
    fn default() -> Self { Self { last_id: ItemId::NONE, items: BTreeMap::new() } }
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self { id: item.id, complete: item.complete, description: item.description.clone() }
    }
}

impl From<&ItemRecord> for Item {
    fn from(record: &ItemRecord) -> Self {
        Self { id: record.id, description: record.description.clone(), complete: record.complete }
    }
}

impl ListDocument {
    pub fn encode(&self) -> Result<Vec<u8>, StorageError> {
        serde_json::to_vec(self).map_err(StorageError::Encode)
    }

    /// Parses and checks a stored list. A list that fails either step is
    /// reported, never patched up.
    pub fn decode(path: &Path, bytes: &[u8]) -> Result<Self, StorageError> {
        let doc: ListDocument = serde_json::from_slice(bytes)
            .map_err(|source| StorageError::Decode { path: path.to_path_buf(), source })?;
        doc.check()
            .map_err(|reason| StorageError::Inconsistent { path: path.to_path_buf(), reason })?;
        Ok(doc)
    }

    fn check(&self) -> Result<(), String> {
        if self.last_id < ItemId::NONE {
            return Err(format!("last_id {} is below {}", self.last_id, ItemId::NONE));
        }
        for (key, record) in &self.items {
            if *key != record.id {
                return Err(format!("item stored under key {key} has id {}", record.id));
            }
            if *key > self.last_id {
                return Err(format!("item {key} is above last_id {}", self.last_id));
            }
        }
        Ok(())
    }
}
