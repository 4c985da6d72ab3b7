use std::fmt;
use std::str::FromStr;

use super::error::TodoResult;
use super::id::ItemId;
use super::item::Item;

/// What happens to surviving ids when completed items are cleaned up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CleanupPolicy {
    /// Survivors keep their ids; ids are never handed out twice.
    #[default]
    PreserveIds,
    /// Survivors are renumbered from 0 in id order and the allocation counter
    /// restarts after the last of them.
    Reindex,
}

impl FromStr for CleanupPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "preserve" => Ok(CleanupPolicy::PreserveIds),
            "reindex" => Ok(CleanupPolicy::Reindex),
            other => Err(format!("unknown cleanup policy {other:?} (expected \"preserve\" or \"reindex\")")),
        }
    }
}

impl fmt::Display for CleanupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { CleanupPolicy::PreserveIds => "preserve", CleanupPolicy::Reindex => "reindex" })
    }
}

/// Checklist storage. Every mutating call persists the whole list before it
/// returns `Ok`.
pub trait TodoRepository {
    /// Items in ascending id order.
    fn all(&self) -> Vec<Item>;
    fn count(&self) -> usize;
    fn find(&self, id: ItemId) -> Option<Item>;
    fn create(&mut self, description: &str) -> TodoResult<Item>;
    fn update(&mut self, id: ItemId, description: &str) -> TodoResult<Item>;
    fn complete(&mut self, id: ItemId) -> TodoResult<Item>;
    fn un_complete(&mut self, id: ItemId) -> TodoResult<Item>;
    /// Returns the removed item.
    fn delete(&mut self, id: ItemId) -> TodoResult<Item>;
    fn delete_all(&mut self) -> TodoResult<()>;
    /// Removes every completed item and returns how many went.
    fn clean_completed(&mut self) -> TodoResult<usize>;
}
