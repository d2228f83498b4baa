//! vCard 3.0 serializer for contact payloads.

/// Renders a minimal vCard 3.0 block.
///
/// `FN:` is always present; the optional lines appear only when their
/// field is non-empty, in a fixed order so output is deterministic.
pub(super) fn contact(
    full_name: &str,
    organization: &str,
    address: &str,
    phone: &str,
    email: &str,
    notes: &str,
) -> String {
    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{full_name}"),
    ];
    for (property, value) in [
        ("ORG", organization),
        ("ADR", address),
        ("TEL", phone),
        ("EMAIL", email),
        ("NOTE", notes),
    ] {
        if !value.is_empty() {
            lines.push(format!("{property}:{value}"));
        }
    }
    lines.push("END:VCARD".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_card_keeps_property_order() {
        let card = contact(
            "Jane Doe",
            "Acme",
            "1 Main St",
            "555-1212",
            "jane@example.com",
            "met at conf",
        );
        assert_eq!(
            card,
            "BEGIN:VCARD\n\
             VERSION:3.0\n\
             FN:Jane Doe\n\
             ORG:Acme\n\
             ADR:1 Main St\n\
             TEL:555-1212\n\
             EMAIL:jane@example.com\n\
             NOTE:met at conf\n\
             END:VCARD"
        );
    }

    #[test]
    fn name_only_card_has_no_optional_lines() {
        let card = contact("Jane Doe", "", "", "", "", "");
        assert_eq!(card, "BEGIN:VCARD\nVERSION:3.0\nFN:Jane Doe\nEND:VCARD");
    }
}
