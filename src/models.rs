use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named origin of a [`Response`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "The World Bank")]
    WorldBank,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::WorldBank => "The World Bank",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observation of the series. Annual sources resolve to Dec-31 UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instant {
    pub date: DateTime<Utc>,
    pub value: i64,
}

/// Provider-agnostic time series. `history` keeps the order the source
/// returned; it is not sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub provider: Provider,
    pub history: Vec<Instant>,
}

/// Top-level `<wb:data>` element: paging attributes plus one nested
/// `<wb:data>` per year.
///
/// quick-xml matches elements by local name, so the `wb:` prefix never
/// appears in the field names below.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WireEnvelope {
    #[serde(rename = "@page", default, deserialize_with = "de_number_or_zero")]
    pub page: u32,
    #[serde(rename = "@pages", default, deserialize_with = "de_number_or_zero")]
    pub pages: u32,
    #[serde(rename = "@per_page", default, deserialize_with = "de_number_or_zero")]
    pub per_page: u32,
    #[serde(rename = "@total", default, deserialize_with = "de_number_or_zero")]
    pub total: u32,
    #[serde(rename = "@lastupdated", default)]
    pub lastupdated: String,
    /// Empty when the service has no observation for the requested range.
    #[serde(rename = "data", default)]
    pub entries: Vec<WireEntry>,
}

/// One `<wb:data>` record (one country, one indicator, one year).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireEntry {
    pub indicator: CodeName,
    pub country: CodeName,
    pub countryiso3code: String,
    #[serde(deserialize_with = "de_number_or_zero")]
    pub date: i32,
    #[serde(deserialize_with = "de_number_or_zero")]
    pub value: i64,
    pub unit: String,
    pub obs_status: String,
    #[serde(deserialize_with = "de_number_or_zero")]
    pub decimal: i32,
}

/// Element with an `id` attribute and a display name as text,
/// e.g. `<wb:country id="IT">Italy</wb:country>`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CodeName {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "$text", default)]
    pub name: String,
}

/// `<wb:error>` payload the service sends instead of data on bad requests.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireError {
    #[serde(rename = "message")]
    pub message: WireErrorMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireErrorMessage {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@key", default)]
    pub key: String,
    #[serde(rename = "$text", default)]
    pub text: String,
}

/// Serde helper: numeric text where an empty element means zero.
/// Any other non-numeric content is an error.
fn de_number_or_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: fmt::Display,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(T::default());
    }
    raw.parse::<T>().map_err(serde::de::Error::custom)
}
