//! Wire types for the lunch-roulette backend.
//!
//! Field names match the JSON produced and consumed by the backend exactly;
//! optional request fields are omitted (never `null`) when unset.

use serde::{Deserialize, Serialize};

/// Whether a search is anchored to the device's GPS position or to a
/// manually selected named area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationMode {
    Current,
    Area,
}

/// Request body for `POST /roulette`.
///
/// Invariants are enforced by the controller, not here: in `area` mode
/// `middle_area_code` is non-empty, and in `current` mode coordinates are
/// present only when a prior device-location fetch succeeded.
#[derive(Debug, Clone, Serialize)]
pub struct SearchCriteria {
    pub location_mode: LocationMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_walking_time_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_area_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_code: Option<String>,
    /// Lunch filter; the backend expects the literal `1`.
    pub lunch: u8,
}

/// Success/failure envelope returned by `POST /roulette`.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
    #[serde(default)]
    pub restaurant: Option<Restaurant>,
    #[serde(default)]
    pub distance: Option<DistanceInfo>,
    /// Weather block attached by the backend; carried opaquely, never read.
    #[serde(default)]
    pub weather: Option<serde_json::Value>,
}

/// A successful roulette result: the envelope with the restaurant unwrapped.
#[derive(Debug)]
pub struct SearchHit {
    pub restaurant: Restaurant,
    /// Present only for current-location searches.
    pub distance: Option<DistanceInfo>,
    pub weather: Option<serde_json::Value>,
}

/// The restaurant the backend picked.
#[derive(Debug, Clone, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub genre: String,
    pub address: String,
    pub budget_display: String,
    #[serde(default)]
    pub hours: Option<String>,
    /// Tagline; the wire name `catch` is a Rust keyword.
    #[serde(default, rename = "catch")]
    pub catchphrase: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Photo URL, or the sentinel `"no-image"` meaning no photo available.
    #[serde(default)]
    pub photo_url: Option<String>,
    pub map_url: String,
    pub hotpepper_url: String,
}

/// Walking distance from the search origin, pre-formatted by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceInfo {
    /// e.g. `"徒歩約8分"`.
    pub time_display: String,
    /// e.g. `"500m"` or `"1.2km"`.
    pub distance_display: String,
}

/// One selectable genre or area: `{ code, name }`.
///
/// A genre `code` of `""` is the backend's "no preference" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OptionEntry {
    pub code: String,
    pub name: String,
}

/// Response shape of `GET /api/genres`.
#[derive(Debug, Deserialize)]
pub struct GenresResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub genres: Vec<OptionEntry>,
}

/// Response shape of `GET /api/areas`.
#[derive(Debug, Deserialize)]
pub struct AreasResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub areas: Vec<OptionEntry>,
}
