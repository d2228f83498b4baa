//! URI serializers: `tel:`, `mailto:`, `sms:`, and `geo:`.
//!
//! Values are interpolated verbatim; percent-encoding is left to callers
//! that need it. Validation happens before these are reached.

pub(super) fn tel(number: &str) -> String {
    format!("tel:{number}")
}

/// `mailto:<address>?subject=<subject>&body=<body>`.
///
/// Both query keys are always present, even when their values are blank,
/// so the output never ends in a dangling `?` or `&`.
pub(super) fn mailto(address: &str, subject: &str, body: &str) -> String {
    format!("mailto:{address}?subject={subject}&body={body}")
}

pub(super) fn sms(number: &str, body: &str) -> String {
    format!("sms:{number}?body={body}")
}

/// `geo:<lat>,<lon>`, with `?q=<query>` appended only when a query was given.
pub(super) fn geo(latitude: &str, longitude: &str, query: &str) -> String {
    if query.is_empty() {
        format!("geo:{latitude},{longitude}")
    } else {
        format!("geo:{latitude},{longitude}?q={query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_with_subject_and_body() {
        assert_eq!(
            mailto("jane@example.com", "Lunch", "Friday?"),
            "mailto:jane@example.com?subject=Lunch&body=Friday?"
        );
    }

    #[test]
    fn mailto_blank_subject_keeps_key() {
        assert_eq!(
            mailto("jane@example.com", "", "Friday?"),
            "mailto:jane@example.com?subject=&body=Friday?"
        );
    }

    #[test]
    fn geo_query_appends_q() {
        assert_eq!(geo("1.0", "2.0", "pizza"), "geo:1.0,2.0?q=pizza");
        assert_eq!(geo("1.0", "2.0", ""), "geo:1.0,2.0");
    }
}
