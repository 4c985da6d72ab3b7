use std::fmt;

use super::id::ItemId;

const DONE_GLYPH: &str = "✅";
const PENDING_GLYPH: &str = "❌";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub complete: bool,
}

impl Item {
    pub fn new(id: ItemId, description: impl Into<String>) -> Self {
        Self { id, description: description.into(), complete: false }
    }

    pub fn status_glyph(&self) -> &'static str {
        if self.complete { DONE_GLYPH } else { PENDING_GLYPH }
    }

    /// Fixed-width id, completion glyph, then the description.
    pub fn display_string(&self) -> String {
        format!("{:>3}: {:<2} {}", self.id, self.status_glyph(), self.description)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.display_string()) }
}
