//! Avalanche forecast data types
//!
//! Location replies follow the aprs.fi `what=loc` JSON API, forecast reports
//! follow the `report` member of an Avalanche Canada point product.

use serde::{Deserialize, Deserializer, Serialize};

/// Which part of the forecast a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Selector {
    #[default]
    Danger,
    Highlights,
    AvalancheSummary,
    SnowpackSummary,
    WeatherSummary,
}

impl Selector {
    /// Summary type tag this selector reads, for the summary selectors.
    pub fn summary_type(&self) -> Option<&'static str> {
        match self {
            Selector::AvalancheSummary => Some("avalanche-summary"),
            Selector::SnowpackSummary => Some("snowpack-summary"),
            Selector::WeatherSummary => Some("weather-summary"),
            Selector::Danger | Selector::Highlights => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Selector::Danger => "danger",
            Selector::Highlights => "highlights",
            Selector::AvalancheSummary => "avalanche-summary",
            Selector::SnowpackSummary => "snowpack-summary",
            Selector::WeatherSummary => "weather-summary",
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Reply of the aprs.fi location API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationReply {
    /// "ok" or "fail"
    #[serde(default)]
    pub result: Option<String>,
    /// Failure reason when `result` is "fail"
    #[serde(default)]
    pub description: Option<String>,
    /// Matching stations, most recent first
    #[serde(default)]
    pub entries: Vec<LocationEntry>,
}

impl LocationReply {
    pub fn is_failure(&self) -> bool {
        self.result.as_deref() == Some("fail")
    }
}

/// One station position from aprs.fi
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(deserialize_with = "coordinate")]
    pub lat: f64,
    #[serde(deserialize_with = "coordinate")]
    pub lng: f64,
    /// Unix timestamp of the position report, as a string
    #[serde(default)]
    pub lasttime: Option<String>,
}

/// aprs.fi sends coordinates as decimal strings; accept bare numbers too.
fn coordinate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Point product returned by the forecast API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastProduct {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub report: Option<ForecastReport>,
}

/// Full forecast report for one location
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    /// One entry per forecast day, in service order
    #[serde(default)]
    pub danger_ratings: Option<Vec<DangerRating>>,
    /// HTML fragment; its absence means no forecast exists for the point
    #[serde(default)]
    pub highlights: Option<String>,
    #[serde(default)]
    pub summaries: Option<Vec<Summary>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DangerRating {
    pub date: RatingDate,
    pub ratings: ElevationRatings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingDate {
    /// Day name, e.g. "Monday"
    #[serde(default)]
    pub display: Option<String>,
    /// ISO 8601 timestamp of the day
    #[serde(default)]
    pub value: Option<String>,
}

/// Ratings for the alpine, treeline and below-treeline bands
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElevationRatings {
    #[serde(default)]
    pub alp: Option<BandRating>,
    #[serde(default)]
    pub tln: Option<BandRating>,
    #[serde(default)]
    pub btl: Option<BandRating>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandRating {
    pub rating: RatingValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingValue {
    pub value: String,
    #[serde(default)]
    pub display: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "type")]
    pub kind: SummaryKind,
    /// HTML fragment
    #[serde(default)]
    pub content: Option<String>,
}

/// Summary type tag, either `"weather-summary"` or `{"value": "weather-summary", ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryKind {
    Tag(String),
    Labeled {
        value: String,
        #[serde(default)]
        display: Option<String>,
    },
}

impl SummaryKind {
    pub fn value(&self) -> &str {
        match self {
            SummaryKind::Tag(tag) => tag,
            SummaryKind::Labeled { value, .. } => value,
        }
    }
}
