//! Scan types: what came back from the scan pipeline.

use serde::{Deserialize, Serialize};

/// The kind a scanned string was classified as, from its textual shape alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassifiedKind {
    Url,
    Phone,
    Email,
    Sms,
    Geo,
    VCard,
    PlainText,
}

impl ClassifiedKind {
    /// Short lowercase label for display and storage.
    pub fn label(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Geo => "geo",
            Self::VCard => "vcard",
            Self::PlainText => "text",
        }
    }

    /// Parses a stored label back to a kind. Inverse of [`label`](Self::label).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "url" => Some(Self::Url),
            "phone" => Some(Self::Phone),
            "email" => Some(Self::Email),
            "sms" => Some(Self::Sms),
            "geo" => Some(Self::Geo),
            "vcard" => Some(Self::VCard),
            "text" => Some(Self::PlainText),
            _ => None,
        }
    }
}

/// A single decoded scan: the raw string plus where it came from.
///
/// `symbology` is whatever physical format the scan pipeline reported
/// (e.g. `qr`, `ean13`). It is carried through untouched — classification
/// looks only at `raw_value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub raw_value: String,
    pub symbology: String,
    pub classified_kind: ClassifiedKind,
}
