//! History entry: one recorded scan.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ClassifiedKind;

/// A recorded scan in the local history database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,

    /// The raw decoded string, stored as-is.
    pub value: String,

    /// Classification of `value` at the time it was recorded.
    pub kind: ClassifiedKind,

    /// Physical format reported by the scanner, opaque to Glyph.
    pub symbology: String,

    pub scanned_at: Timestamp,

    pub favorite: bool,
}
