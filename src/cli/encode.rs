//! Encodable targets — what glyph can turn into a QR payload.
//!
//! Each variant is a subcommand accepted by `glyph encode`. Adding a
//! payload type means adding a variant here and mapping it to the domain
//! [`Payload`].

use clap::{Subcommand, ValueEnum};
use jiff::Timestamp;

use crate::config::Config;
use crate::model::{Payload, WifiSecurity};

/// What glyph can encode.
#[derive(Debug, Subcommand)]
pub enum EncodeTarget {
    /// Free text, embedded verbatim.
    Text {
        /// The text to embed.
        message: String,
    },

    /// A web address (`http://` or `https://`).
    Url {
        /// The address, scheme included.
        url: String,
    },

    /// A phone number: optional leading `+`, 7 to 15 digits.
    Phone {
        /// The number, e.g. `+15551234567`.
        number: String,
    },

    /// An email draft (`mailto:` URI).
    Email {
        /// Recipient address.
        address: String,

        /// Subject line.
        #[arg(long, default_value = "")]
        subject: String,

        /// Message body.
        #[arg(long, default_value = "")]
        body: String,
    },

    /// An SMS draft (`sms:` URI).
    Sms {
        /// Recipient number.
        number: String,

        /// Message body.
        body: String,
    },

    /// A geographic point (`geo:` URI).
    ///
    /// Coordinates are embedded as typed; no numeric validation.
    Geo {
        latitude: String,

        longitude: String,

        /// Search query appended as `?q=`.
        #[arg(long, default_value = "")]
        query: String,
    },

    /// A calendar event (VEVENT fragment).
    Event {
        /// Event title (`SUMMARY:` line).
        title: String,

        /// Start time, RFC 3339 (e.g. `2024-06-15T09:30:00Z`).
        #[arg(long)]
        start: Timestamp,

        /// End time, RFC 3339.
        #[arg(long)]
        end: Timestamp,

        /// Event location.
        #[arg(long, default_value = "")]
        location: String,

        /// Event description.
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Wi-Fi join credentials.
    Wifi {
        /// Network name.
        ssid: String,

        /// Network password. Emitted even when empty.
        #[arg(long, default_value = "")]
        password: String,

        /// Security mode. Defaults to the configured
        /// `default-wifi-security` (WPA out of the box).
        #[arg(long, value_enum)]
        security: Option<SecurityArg>,
    },

    /// A contact card (vCard 3.0).
    Contact {
        /// Full display name (`FN:` line).
        full_name: String,

        #[arg(long, default_value = "")]
        organization: String,

        #[arg(long, default_value = "")]
        address: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Clipboard contents, embedded verbatim.
    Clipboard {
        /// The clipboard text.
        text: String,
    },

    /// Anything else, embedded verbatim.
    Other {
        /// The text to embed.
        info: String,
    },
}

/// CLI-facing Wi-Fi security mode, mapped to the domain [`WifiSecurity`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SecurityArg {
    Wpa,
    Wep,
    /// Open network, no password.
    Open,
}

impl SecurityArg {
    fn to_domain(self) -> WifiSecurity {
        match self {
            Self::Wpa => WifiSecurity::Wpa,
            Self::Wep => WifiSecurity::Wep,
            Self::Open => WifiSecurity::Open,
        }
    }
}

impl EncodeTarget {
    /// Maps the parsed subcommand to a domain payload, filling defaults
    /// from config where a flag was omitted.
    pub(super) fn to_payload(&self, config: &Config) -> Payload {
        match self {
            Self::Text { message } => Payload::PlainText {
                message: message.clone(),
            },
            Self::Url { url } => Payload::Url { url: url.clone() },
            Self::Phone { number } => Payload::Phone {
                number: number.clone(),
            },
            Self::Email {
                address,
                subject,
                body,
            } => Payload::Email {
                address: address.clone(),
                subject: subject.clone(),
                body: body.clone(),
            },
            Self::Sms { number, body } => Payload::Sms {
                number: number.clone(),
                body: body.clone(),
            },
            Self::Geo {
                latitude,
                longitude,
                query,
            } => Payload::Geo {
                latitude: latitude.clone(),
                longitude: longitude.clone(),
                query: query.clone(),
            },
            Self::Event {
                title,
                start,
                end,
                location,
                description,
            } => Payload::CalendarEvent {
                title: title.clone(),
                start: *start,
                end: *end,
                location: location.clone(),
                description: description.clone(),
            },
            Self::Wifi {
                ssid,
                password,
                security,
            } => Payload::Wifi {
                ssid: ssid.clone(),
                password: password.clone(),
                security: security
                    .map_or(config.default_wifi_security, SecurityArg::to_domain),
            },
            Self::Contact {
                full_name,
                organization,
                address,
                phone,
                email,
                notes,
            } => Payload::Contact {
                full_name: full_name.clone(),
                organization: organization.clone(),
                address: address.clone(),
                phone: phone.clone(),
                email: email.clone(),
                notes: notes.clone(),
            },
            Self::Clipboard { text } => Payload::Clipboard { text: text.clone() },
            Self::Other { info } => Payload::Other { info: info.clone() },
        }
    }

    /// Short noun for "Encoded <what> → <path>" summaries.
    pub(super) fn describe(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Url { .. } => "URL",
            Self::Phone { .. } => "phone number",
            Self::Email { .. } => "email draft",
            Self::Sms { .. } => "SMS draft",
            Self::Geo { .. } => "geo point",
            Self::Event { .. } => "calendar event",
            Self::Wifi { .. } => "Wi-Fi credentials",
            Self::Contact { .. } => "contact card",
            Self::Clipboard { .. } => "clipboard text",
            Self::Other { .. } => "text",
        }
    }
}
