use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::{
    error::{TodoError, TodoResult},
    id::ItemId,
    item::Item,
    repository::{CleanupPolicy, TodoRepository},
};

use super::document::{ItemRecord, ListDocument};
use super::storage::FileStorage;

/// Repository over a single JSON file. The whole list lives in memory and is
/// rewritten after every mutation.
///
/// There is no locking: two processes working on the same file will lose each
/// other's updates.
#[derive(Debug)]
pub struct JsonTodoRepository {
    storage: FileStorage,
    list: ListDocument,
    cleanup: CleanupPolicy,
}

impl JsonTodoRepository {
    pub fn open(path: impl Into<PathBuf>) -> TodoResult<Self> {
        Self::open_with_policy(path, CleanupPolicy::default())
    }

    /// Loads the list at `path`, writing an empty one first if the file is
    /// missing or empty.
    pub fn open_with_policy(path: impl Into<PathBuf>, cleanup: CleanupPolicy) -> TodoResult<Self> {
        let storage = FileStorage::new(path);
        let list = if storage.is_initialized()? {
            let bytes = storage.read()?;
            debug!(path = %storage.path().display(), bytes = bytes.len(), "loaded list");
            ListDocument::decode(storage.path(), &bytes)?
        } else {
            let list = ListDocument::default();
            storage.write(&list.encode()?)?;
            info!(path = %storage.path().display(), "initialized empty list");
            list
        };
        Ok(Self { storage, list, cleanup })
    }

    pub fn last_id(&self) -> ItemId { self.list.last_id }

    fn save(&self, action: String) -> TodoResult<()> {
        let bytes = self.list.encode().map_err(|source| TodoError::Persist { action: action.clone(), source })?;
        self.storage
            .write(&bytes)
            .map_err(|source| TodoError::Persist { action: action.clone(), source })?;
        debug!(path = %self.storage.path().display(), bytes = bytes.len(), %action, "saved list");
        Ok(())
    }

    fn modify(&mut self, id: ItemId, action: &str, change: impl FnOnce(&mut ItemRecord)) -> TodoResult<Item> {
        let record = self.list.items.get_mut(&id).ok_or(TodoError::NotFound(id))?;
        change(record);
        let item = Item::from(&*record);
        self.save(format!("{action} item {id}"))?;
        info!(%id, action, "item changed");
        Ok(item)
    }

    fn reindex(&mut self) {
        let survivors = std::mem::take(&mut self.list.items);
        let mut last = ItemId::NONE;
        for (n, (_, mut record)) in (0..).zip(survivors) {
            last = ItemId(n);
            record.id = last;
            self.list.items.insert(last, record);
        }
        self.list.last_id = last;
    }
}

impl TodoRepository for JsonTodoRepository {
    fn all(&self) -> Vec<Item> { self.list.items.values().map(Item::from).collect() }

    fn count(&self) -> usize { self.list.items.len() }

    fn find(&self, id: ItemId) -> Option<Item> { self.list.items.get(&id).map(Item::from) }

    fn create(&mut self, description: &str) -> TodoResult<Item> {
        let id = self.list.last_id.next().ok_or(TodoError::IdsExhausted(self.list.last_id))?;
        self.list.last_id = id;
        let item = Item::new(id, description);
        self.list.items.insert(id, ItemRecord::from(&item));
        self.save(format!("creating item {id}"))?;
        info!(%id, "item created");
        Ok(item)
    }

    fn update(&mut self, id: ItemId, description: &str) -> TodoResult<Item> {
        self.modify(id, "updating", |record| record.description = description.to_string())
    }

    fn complete(&mut self, id: ItemId) -> TodoResult<Item> {
        self.modify(id, "completing", |record| record.complete = true)
    }

    fn un_complete(&mut self, id: ItemId) -> TodoResult<Item> {
        self.modify(id, "un-completing", |record| record.complete = false)
    }

    fn delete(&mut self, id: ItemId) -> TodoResult<Item> {
        let record = self.list.items.remove(&id).ok_or(TodoError::NotFound(id))?;
        self.save(format!("deleting item {id}"))?;
        info!(%id, "item deleted");
        Ok(Item::from(&record))
    }

    fn delete_all(&mut self) -> TodoResult<()> {
        let removed = self.list.items.len();
        self.list.items.clear();
        self.save("deleting all items".to_string())?;
        info!(removed, "all items deleted");
        Ok(())
    }

    fn clean_completed(&mut self) -> TodoResult<usize> {
        let before = self.list.items.len();
        self.list.items.retain(|_, record| !record.complete);
        let removed = before - self.list.items.len();
        if self.cleanup == CleanupPolicy::Reindex {
            self.reindex();
        }
        self.save("cleaning completed items".to_string())?;
        info!(removed, policy = %self.cleanup, "completed items cleaned");
        Ok(removed)
    }
}
