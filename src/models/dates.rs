//! Serde wire formats for the `%Y-%m-%d` date columns.
//!
//! The time-series CSV carries calendar dates, not datetimes. An unparsable
//! value must surface as a deserialization error rather than coerce to a
//! default; an empty field reads as `None` so the loader can drop the row.

use serde::{self, Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%Y-%m-%d";

/// `Option<NaiveDate>` in `%Y-%m-%d` format, with the empty string as `None`.
pub mod ymd_opt {
    use super::*;

    pub fn serialize<S>(nd: &Option<chrono::NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match nd {
            Some(nd) => serializer.serialize_str(&nd.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<chrono::NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.trim().is_empty() {
            return Ok(None);
        }
        chrono::NaiveDate::parse_from_str(s.trim(), FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
