//! Format descriptors and extraction responses
//!
//! Decoding is lenient: a field of the wrong JSON type reads as absent and a
//! malformed `formats` element becomes a missing entry, so one bad format
//! never rejects a whole response.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::io::Read;

/// One candidate download variant as reported by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64", skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64", skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64", skip_serializing_if = "Option::is_none")]
    pub filesize: Option<i64>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub format_id: String,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub format_note: Option<String>,
}

impl FormatDescriptor {
    /// The media URL, if present and non-empty
    pub fn media_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }

    pub fn ext_or_empty(&self) -> &str {
        self.ext.as_deref().unwrap_or("")
    }

    pub fn height_or_zero(&self) -> i64 {
        self.height.unwrap_or(0)
    }

    pub fn filesize_or_zero(&self) -> i64 {
        self.filesize.unwrap_or(0)
    }
}

/// Extraction response: display metadata plus the raw format list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uploader: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub duration: Option<f64>,
    /// Raw formats; `None` marks an entry that was null or not an object
    #[serde(default, deserialize_with = "lenient_formats")]
    pub formats: Vec<Option<FormatDescriptor>>,
}

impl MediaInfo {
    /// Parse an extraction response, resolving playlists to their first entry.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Read a whole extraction response from a file or stdin
    pub fn from_reader<R: Read>(mut reader: R) -> crate::Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Ok(Self::from_json(&json)?)
    }

    pub fn from_value(mut value: Value) -> Result<Self, serde_json::Error> {
        let first_entry = value
            .get_mut("entries")
            .and_then(Value::as_array_mut)
            .filter(|entries| !entries.is_empty())
            .map(|entries| entries.swap_remove(0));

        if let Some(entry) = first_entry {
            value = entry;
        }

        serde_json::from_value(value)
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// yt-dlp always sends string ids; hand-written inputs sometimes use numbers.
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(number_as_i64))
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(Value::as_f64))
}

fn lenient_formats<'de, D>(deserializer: D) -> Result<Vec<Option<FormatDescriptor>>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(entries)) => entries,
        _ => return Ok(Vec::new()),
    };

    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            Value::Object(_) => serde_json::from_value(entry).ok(),
            _ => None,
        })
        .collect())
}

/// Integers pass through with their sign; floats truncate toward zero.
fn number_as_i64(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    n.as_i64()
        .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
}
