//! Payload codec: the two pure operations at the heart of Glyph.
//!
//! [`encode`] turns a typed [`Payload`] into the canonical string embedded
//! in a QR or barcode symbol. [`classify`] looks at a scanned raw string
//! and names the best-matching kind for display.
//!
//! Both are deterministic functions over in-memory strings: no I/O, no
//! shared state, safe to call from anywhere without coordination.
//!
//! Field values pass through verbatim. In particular, `;`, `:`, and
//! newlines inside vCard, VEVENT, and Wi-Fi fields are not escaped even
//! though those text formats define escapes for them — callers that need
//! well-formed output for hostile input must pre-sanitize.

mod classify;
mod uri;
mod vcard;
mod vevent;
mod wifi;

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Payload;

pub use classify::classify;

/// `http://` or `https://`, any case, at the start of the string.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap());

/// Optional leading `+`, then 7 to 15 digits, nothing else.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{7,15}$").unwrap());

/// Why a payload could not be encoded.
///
/// All three are local validation failures: deterministic, never worth
/// retrying with the same input, surfaced to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("nothing to encode: input is empty")]
    EmptyInput,

    #[error("required field is empty: {0}")]
    MissingField(&'static str),

    #[error("invalid {what}: {value:?}")]
    InvalidFormat { what: &'static str, value: String },
}

pub type Result<T> = core::result::Result<T, EncodeError>;

/// Encodes a payload into its canonical QR/barcode string.
///
/// Pure function: identical payloads produce byte-identical output.
/// Calendar timestamps are rendered at second precision in basic
/// ISO 8601 form (`20240101T120000Z`).
pub fn encode(payload: &Payload) -> Result<String> {
    match payload {
        Payload::PlainText { message } => verbatim(message),
        Payload::Clipboard { text } => verbatim(text),
        Payload::Other { info } => verbatim(info),

        Payload::Url { url } => {
            if !URL_PATTERN.is_match(url) {
                return Err(EncodeError::InvalidFormat {
                    what: "URL",
                    value: url.clone(),
                });
            }
            Ok(url.clone())
        }

        Payload::Phone { number } => {
            if !PHONE_PATTERN.is_match(number) {
                return Err(EncodeError::InvalidFormat {
                    what: "phone number",
                    value: number.clone(),
                });
            }
            Ok(uri::tel(number))
        }

        Payload::Email {
            address,
            subject,
            body,
        } => {
            if address.is_empty() {
                return Err(EncodeError::MissingField("address"));
            }
            Ok(uri::mailto(address, subject, body))
        }

        Payload::Sms { number, body } => {
            if number.is_empty() {
                return Err(EncodeError::MissingField("number"));
            }
            if body.is_empty() {
                return Err(EncodeError::MissingField("body"));
            }
            Ok(uri::sms(number, body))
        }

        Payload::Geo {
            latitude,
            longitude,
            query,
        } => {
            if latitude.is_empty() {
                return Err(EncodeError::MissingField("latitude"));
            }
            if longitude.is_empty() {
                return Err(EncodeError::MissingField("longitude"));
            }
            Ok(uri::geo(latitude, longitude, query))
        }

        Payload::CalendarEvent {
            title,
            start,
            end,
            location,
            description,
        } => {
            if title.is_empty() {
                return Err(EncodeError::MissingField("title"));
            }
            Ok(vevent::event(title, *start, *end, location, description))
        }

        Payload::Wifi {
            ssid,
            password,
            security,
        } => {
            if ssid.is_empty() {
                return Err(EncodeError::MissingField("ssid"));
            }
            Ok(wifi::network(ssid, password, *security))
        }

        Payload::Contact {
            full_name,
            organization,
            address,
            phone,
            email,
            notes,
        } => {
            if full_name.is_empty() {
                return Err(EncodeError::MissingField("full-name"));
            }
            Ok(vcard::contact(
                full_name,
                organization,
                address,
                phone,
                email,
                notes,
            ))
        }
    }
}

/// Verbatim passthrough for the free-text variants.
fn verbatim(value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(EncodeError::EmptyInput);
    }
    Ok(value.to_string())
}
