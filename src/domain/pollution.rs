//! Pollution data returned by the backend for one location search.
//!
//! These types mirror the JSON body of `GET /api/pollution-data`. Decoding is
//! deliberately lenient: every optional field may be missing or `null`, and list
//! fields that arrive as `null` decode as empty. Categorical fields ([`AqiLevel`],
//! [`Impact`]) keep unrecognized values in an explicit `Other` arm so that every
//! category has defined display behavior.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Decodes `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decodes a blank or whitespace-only level label as no level.
fn blank_level_as_none<'de, D>(deserializer: D) -> Result<Option<AqiLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label
        .filter(|label| !label.trim().is_empty())
        .map(|label| AqiLevel::from_label(&label)))
}

/// Qualitative air quality level derived from the AQI by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AqiLevel {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    /// A level label this client does not recognize.
    Other(String),
}

impl AqiLevel {
    /// Parses a backend level label. Unknown labels are preserved verbatim.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Good" => Self::Good,
            "Moderate" => Self::Moderate,
            "Unhealthy for Sensitive Groups" => Self::UnhealthyForSensitiveGroups,
            "Unhealthy" => Self::Unhealthy,
            "Very Unhealthy" => Self::VeryUnhealthy,
            "Hazardous" => Self::Hazardous,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the label as the backend spells it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for AqiLevel {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<AqiLevel> for String {
    fn from(level: AqiLevel) -> Self {
        level.as_str().to_string()
    }
}

impl fmt::Display for AqiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative impact of a pollution source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Impact {
    High,
    Medium,
    Low,
    /// Missing or unrecognized impact; rendered with neutral colors.
    #[default]
    Unknown,
    Other(String),
}

impl Impact {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            "" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unknown => "",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for Impact {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Impact> for String {
    fn from(impact: Impact) -> Self {
        impact.as_str().to_string()
    }
}

/// AQI index and individual pollutant concentrations (µg/m³).
///
/// Every reading is optional; an absent value is never treated as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AqiData {
    #[serde(default)]
    pub aqi: Option<f64>,
    #[serde(default)]
    pub pm25: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default)]
    pub no2: Option<f64>,
    #[serde(default)]
    pub o3: Option<f64>,
    #[serde(default)]
    pub so2: Option<f64>,
    #[serde(default)]
    pub co: Option<f64>,
}

/// One attributed contributor to local pollution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PollutionSource {
    /// Source name, e.g. "Vehicle Emissions".
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,

    /// Share of total pollution. Expected 0–100 but not enforced.
    #[serde(default, deserialize_with = "null_as_default")]
    pub percentage: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub impact: Impact,
}

/// A recent news article about pollution at the searched location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Publisher name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,

    /// Publication time as sent by the backend; may not parse as a date.
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_at: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default)]
    pub image: Option<String>,
}

/// Geocoded position of the searched location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Normalized response for one successful location search.
///
/// A fresh value is created for every successful fetch and replaces the previous one
/// wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PollutionResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,

    #[serde(default)]
    pub country: Option<String>,

    /// State or region.
    #[serde(default)]
    pub state: Option<String>,

    /// Formatted address from geocoding.
    #[serde(default)]
    pub address: Option<String>,

    /// Absent when the backend sends no label or a blank one.
    #[serde(default, deserialize_with = "blank_level_as_none")]
    pub aqi_level: Option<AqiLevel>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub aqi_data: AqiData,

    #[serde(default, deserialize_with = "null_as_default")]
    pub pollution_sources: Vec<PollutionSource>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub pollution_news: Vec<NewsItem>,

    /// Who published the source breakdown (e.g. an emissions inventory).
    #[serde(default)]
    pub source_data_attribution: Option<String>,

    #[serde(default)]
    pub coordinates: Option<Coordinates>,

    /// Backend generation time of this result.
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_result() {
        let json = r#"{"location":"Delhi","aqi_level":"Unhealthy","aqi_data":{"aqi":180,"pm25":120.4}}"#;
        let result: PollutionResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.location, "Delhi");
        assert_eq!(result.aqi_level, Some(AqiLevel::Unhealthy));
        assert_eq!(result.aqi_data.aqi, Some(180.0));
        assert_eq!(result.aqi_data.pm25, Some(120.4));
        assert_eq!(result.aqi_data.pm10, None);
        assert!(result.pollution_sources.is_empty());
        assert!(result.pollution_news.is_empty());
    }

    #[test]
    fn null_fields_decode_as_absent() {
        let json = r#"{
            "location": "Nowhere",
            "country": null,
            "state": null,
            "aqi_level": null,
            "aqi_data": {"aqi": 42, "co": null},
            "pollution_sources": null,
            "pollution_news": null
        }"#;
        let result: PollutionResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.country, None);
        assert_eq!(result.aqi_level, None);
        assert_eq!(result.aqi_data.co, None);
        assert!(result.pollution_sources.is_empty());
        assert!(result.pollution_news.is_empty());
    }

    #[test]
    fn blank_level_decodes_as_absent() {
        for level in [r#""""#, r#""   ""#] {
            let json = format!(r#"{{"location":"X","aqi_level":{level}}}"#);
            let result: PollutionResult = serde_json::from_str(&json).unwrap();
            assert_eq!(result.aqi_level, None, "level {level}");
        }

        let result: PollutionResult =
            serde_json::from_str(r#"{"location":"X","aqi_level":"Moderate"}"#).unwrap();
        assert_eq!(result.aqi_level, Some(AqiLevel::Moderate));
    }

    #[test]
    fn unknown_categories_are_preserved() {
        let level: AqiLevel = serde_json::from_str(r#""Apocalyptic""#).unwrap();
        assert_eq!(level, AqiLevel::Other("Apocalyptic".to_string()));
        assert_eq!(level.as_str(), "Apocalyptic");

        let source: PollutionSource =
            serde_json::from_str(r#"{"source":"Volcano","percentage":5,"impact":"severe"}"#)
                .unwrap();
        assert_eq!(source.impact, Impact::Other("severe".to_string()));
    }

    #[test]
    fn level_labels_match_backend_spelling() {
        for label in [
            "Good",
            "Moderate",
            "Unhealthy for Sensitive Groups",
            "Unhealthy",
            "Very Unhealthy",
            "Hazardous",
        ] {
            let level = AqiLevel::from_label(label);
            assert!(!matches!(level, AqiLevel::Other(_)), "{label} not recognized");
            assert_eq!(level.as_str(), label);
        }
    }

    #[test]
    fn news_item_tolerates_missing_fields() {
        let item: NewsItem =
            serde_json::from_str(r#"{"title":"Smog returns","published_at":null}"#).unwrap();
        assert_eq!(item.title, "Smog returns");
        assert_eq!(item.published_at, "");
        assert_eq!(item.description, None);
    }
}
