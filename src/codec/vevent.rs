//! iCalendar VEVENT serializer for calendar payloads.

use jiff::Timestamp;

/// Basic ISO 8601 at second precision, e.g. `20240101T120000Z`.
///
/// The trailing `Z` is literal: timestamps render in UTC.
const DTSTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Renders a standalone VEVENT fragment.
///
/// Location and description lines are always emitted, blank or not —
/// the original format kept fixed line positions rather than omitting.
pub(super) fn event(
    title: &str,
    start: Timestamp,
    end: Timestamp,
    location: &str,
    description: &str,
) -> String {
    let dtstart = start.strftime(DTSTAMP_FORMAT);
    let dtend = end.strftime(DTSTAMP_FORMAT);
    format!(
        "BEGIN:VEVENT\n\
         SUMMARY:{title}\n\
         LOCATION:{location}\n\
         DTSTART:{dtstart}\n\
         DTEND:{dtend}\n\
         DESCRIPTION:{description}\n\
         END:VEVENT"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_render_at_second_precision() {
        let start: Timestamp = "2024-06-15T09:30:45.123Z".parse().unwrap();
        let end: Timestamp = "2024-06-15T10:00:00Z".parse().unwrap();
        let block = event("Review", start, end, "", "");
        assert!(block.contains("DTSTART:20240615T093045Z"));
        assert!(block.contains("DTEND:20240615T100000Z"));
    }

    #[test]
    fn blank_fields_keep_their_lines() {
        let at: Timestamp = "2024-01-01T00:00:00Z".parse().unwrap();
        let block = event("New Year", at, at, "", "");
        assert!(block.contains("\nLOCATION:\n"));
        assert!(block.contains("\nDESCRIPTION:\n"));
    }
}
