use crate::domain::item::Item;

pub const EMPTY_LIST: &str = "Your to-do list is empty!";
pub const PURGED: &str = "Removed all items from to-do list!";
pub const CLEANING: &str = "Removing all completed items...";
pub const CLEANED: &str = "Cleanup complete!";

pub fn empty_notice(is_empty: bool) -> Option<&'static str> {
    is_empty.then_some(EMPTY_LIST)
}

/// `Added →   0: ❌  buy milk`
pub fn action_line(label: &str, item: &Item) -> String {
    format!("{label} → {}", item.display_string())
}
