//! The clinic API speaks zone-less ISO local datetimes. Seconds are optional
//! on the wire (the upstream serializer omits them when zero), so parsing
//! accepts both forms; serialization always emits them.

use chrono::NaiveDateTime;

pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_TIME_FORMAT_SHORT: &str = "%Y-%m-%dT%H:%M";
const DATE_TIME_FORMAT_FRACTIONAL: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn parse_flexible(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT_SHORT))
        .or_else(|_| NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT_FRACTIONAL))
}

/// Minutes-precision rendering for query parameters, matching what the
/// scheduling form submits.
pub fn format_minutes(value: &NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT_SHORT).to_string()
}

/// `#[serde(with = "...")]` adapter for fields carried in the API's local
/// datetime format.
pub mod iso_local {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{parse_flexible, DATE_TIME_FORMAT};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(DATE_TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_flexible(&raw).map_err(de::Error::custom)
    }
}
