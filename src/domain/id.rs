use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a single checklist item. Serialized as a bare integer, and as
/// its decimal string when used as a JSON object key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl ItemId {
    /// Sentinel meaning "nothing allocated yet".
    pub const NONE: ItemId = ItemId(-1);

    /// `None` once the id space is used up.
    pub fn next(self) -> Option<Self> { self.0.checked_add(1).map(ItemId) }
}

#[derive(Debug, Error)]
#[error("unable to parse id {input:?}")]
pub struct ParseIdError {
    pub input: String,
    #[source]
    pub source: ParseIntError,
}

impl FromStr for ItemId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(ItemId)
            .map_err(|source| ParseIdError { input: s.to_string(), source })
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
}
