//! Output formatting for CLI display.

use crate::model::HistoryEntry;

/// Longest value preview shown in list output.
const PREVIEW_LEN: usize = 60;

/// Format a history entry as one list line.
///
/// `a3b0fc12  ★ [url]    2024-06-15T09:30:00Z  https://example.com/menu`
pub(super) fn format_entry(entry: &HistoryEntry) -> String {
    let short_id = &entry.id.to_string()[..8];
    let star = if entry.favorite { "★" } else { " " };
    format!(
        "{short_id}  {star} [{:<5}]  {}  {}",
        entry.kind.label(),
        entry.scanned_at,
        preview(&entry.value),
    )
}

/// First line of a value, truncated to a displayable width.
///
/// Multi-line payloads (vCards, VEVENTs) would otherwise break the
/// one-line-per-entry listing.
fn preview(value: &str) -> String {
    let first_line = value.lines().next().unwrap_or("");
    let mut chars = first_line.chars();
    let truncated: String = chars.by_ref().take(PREVIEW_LEN).collect();
    if chars.next().is_some() || value.lines().nth(1).is_some() {
        format!("{truncated}…")
    } else {
        truncated
    }
}
