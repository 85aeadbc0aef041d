//! Timestamp text handling shared by the wire format and the trade form.
//!
//! The store speaks naive ISO-8601 date-times. Forms edit at minute precision
//! (`YYYY-MM-DDTHH:MM`) and re-expand to full timestamps on submission.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

/// Format sent to the store.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Minute-precision format used by form drafts.
pub const FORM_FORMAT: &str = "%Y-%m-%dT%H:%M";

const ACCEPTED_NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    FORM_FORMAT,
];

/// Parse a timestamp as the store or a form may present it.
///
/// Naive forms are taken as-is. Offset-carrying RFC 3339 values are
/// converted to local time, the only timezone handling the client does.
pub fn parse(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    ACCEPTED_NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
}

/// Render a timestamp at minute precision for editing.
pub fn to_form_text(value: &NaiveDateTime) -> String {
    value.format(FORM_FORMAT).to_string()
}

/// Truncate free timestamp text to minute precision (`YYYY-MM-DDTHH:MM`).
pub fn truncate_to_minute(text: &str) -> &str {
    match text.char_indices().nth(16) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(WIRE_FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse(&text).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{text}'")))
}

/// Same as the parent module, for nullable timestamps.
pub mod option {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => super::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => super::parse(&text)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{text}'"))),
            None => Ok(None),
        }
    }
}

/// Serializer for patch fields: `Some(None)` is sent as an explicit `null`.
/// Pair with `skip_serializing_if = "Option::is_none"` to leave a field out.
pub mod patch {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub fn serialize<S>(
        value: &Option<Option<NaiveDateTime>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(Some(v)) => super::serialize(v, serializer),
            _ => serializer.serialize_none(),
        }
    }
}
