use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw result of a playlist extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistInfo {
    #[serde(rename = "_type", default, deserialize_with = "deserialize_text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: Option<String>,
    /// `None` when the extractor did not return a collection.
    #[serde(default, deserialize_with = "deserialize_entries")]
    pub entries: Option<Vec<Entry>>,
}

impl PlaylistInfo {
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self {
            kind: Some("playlist".to_string()),
            entries: Some(entries),
            ..Self::default()
        }
    }
}

/// One playlist item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Whole seconds.
    #[serde(default, deserialize_with = "deserialize_seconds")]
    pub duration: Option<u64>,
}

impl Entry {
    pub fn new(url: Option<&str>, duration: Option<u64>) -> Self {
        Self {
            url: url.map(str::to_string),
            duration,
            ..Self::default()
        }
    }
}

// yt-dlp emits `null` for unavailable items of a collection
fn deserialize_entries<'de, D>(deserializer: D) -> Result<Option<Vec<Entry>>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<Option<Entry>>> = Option::deserialize(deserializer)?;
    Ok(entries.map(|items| items.into_iter().flatten().collect()))
}

fn deserialize_seconds<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(seconds_from_value))
}

// Informational fields; numbers are stringified, anything else is dropped
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Accepts integer, float, or numeric-string seconds. Negative values are rejected.
pub(crate) fn seconds_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.round() as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}
