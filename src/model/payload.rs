//! Payload: what a generated code carries.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A typed record to encode as QR/barcode content.
///
/// One variant is active per encode request. Each variant owns exactly
/// the fields its output format needs, so required fields are enforced
/// by construction rather than checked against a shared field bag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Payload {
    /// Free text, embedded verbatim.
    PlainText { message: String },

    /// A web address. Must carry an `http://` or `https://` scheme.
    Url { url: String },

    /// A phone number: optional leading `+`, 7 to 15 digits.
    Phone { number: String },

    /// An email draft.
    Email {
        address: String,
        subject: String,
        body: String,
    },

    /// An SMS draft.
    Sms { number: String, body: String },

    /// A geographic point with an optional search query.
    ///
    /// Coordinates are carried as the caller typed them; no numeric
    /// validation is performed.
    Geo {
        latitude: String,
        longitude: String,
        query: String,
    },

    /// A calendar event, rendered as an iCalendar VEVENT fragment.
    CalendarEvent {
        title: String,
        start: Timestamp,
        end: Timestamp,
        location: String,
        description: String,
    },

    /// Wi-Fi join credentials.
    Wifi {
        ssid: String,
        password: String,
        security: WifiSecurity,
    },

    /// A contact card, rendered as vCard 3.0.
    ///
    /// Only `full_name` is required; blank optional fields produce no
    /// vCard line at all.
    Contact {
        full_name: String,
        organization: String,
        address: String,
        phone: String,
        email: String,
        notes: String,
    },

    /// Clipboard contents, embedded verbatim.
    Clipboard { text: String },

    /// Anything else, embedded verbatim.
    Other { info: String },
}

/// Wi-Fi security mode, serialized into the `T:` field of the Wi-Fi string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WifiSecurity {
    #[default]
    Wpa,
    Wep,
    /// An open network, serialized as `nopass`.
    Open,
}

impl WifiSecurity {
    /// The token used in the `T:` field of the encoded Wi-Fi string.
    pub fn token(self) -> &'static str {
        match self {
            Self::Wpa => "WPA",
            Self::Wep => "WEP",
            Self::Open => "nopass",
        }
    }
}
