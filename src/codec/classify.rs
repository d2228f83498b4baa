//! Classification of scanned raw strings.

use crate::model::ClassifiedKind;

/// Names the best-matching kind for a scanned string.
///
/// Total function: scan input comes from the environment, so an
/// unrecognized shape falls back to [`ClassifiedKind::PlainText`]
/// instead of failing and stalling the scan pipeline.
///
/// Rules are a priority list, checked top to bottom — scheme prefixes
/// before the URL pattern, since a URL could appear inside another
/// scheme's payload.
pub fn classify(raw: &str) -> ClassifiedKind {
    if raw.starts_with("tel:") {
        ClassifiedKind::Phone
    } else if raw.starts_with("mailto:") {
        ClassifiedKind::Email
    } else if raw.starts_with("sms:") {
        ClassifiedKind::Sms
    } else if raw.starts_with("geo:") {
        ClassifiedKind::Geo
    } else if raw.starts_with("BEGIN:VCARD") {
        ClassifiedKind::VCard
    } else if super::URL_PATTERN.is_match(raw) {
        ClassifiedKind::Url
    } else {
        ClassifiedKind::PlainText
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_prefixes() {
        assert_eq!(classify("tel:+15551234567"), ClassifiedKind::Phone);
        assert_eq!(classify("mailto:a@b.com?subject=&body="), ClassifiedKind::Email);
        assert_eq!(classify("sms:5551234?body=hi"), ClassifiedKind::Sms);
        assert_eq!(classify("geo:12.34,56.78"), ClassifiedKind::Geo);
        assert_eq!(
            classify("BEGIN:VCARD\nVERSION:3.0\nFN:X\nEND:VCARD"),
            ClassifiedKind::VCard
        );
    }

    #[test]
    fn urls_match_case_insensitively() {
        assert_eq!(classify("https://example.com"), ClassifiedKind::Url);
        assert_eq!(classify("HTTP://EXAMPLE.COM"), ClassifiedKind::Url);
        assert_eq!(classify("ftp://example.com"), ClassifiedKind::PlainText);
    }

    #[test]
    fn everything_else_is_plain_text() {
        assert_eq!(classify("hello world"), ClassifiedKind::PlainText);
        assert_eq!(classify(""), ClassifiedKind::PlainText);
        assert_eq!(classify("WIFI:S:HomeNet;T:WPA;P:pw;;"), ClassifiedKind::PlainText);
    }

    #[test]
    fn scheme_wins_over_embedded_url() {
        // `sms:` body may contain a URL; the prefix decides.
        assert_eq!(
            classify("sms:5551234?body=https://example.com"),
            ClassifiedKind::Sms
        );
    }
}
