//! Core data model for Glyph.
//!
//! These types represent the conceptual architecture:
//! payloads to encode, scan results, and history entries.

mod history;
mod payload;
mod scan;

pub use history::HistoryEntry;
pub use payload::{Payload, WifiSecurity};
pub use scan::{ClassifiedKind, ScanResult};
