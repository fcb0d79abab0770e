//! Best-effort reverse geocoding against Nominatim.
//!
//! Turns a coordinate pair into a human-readable city/region label for
//! display next to the GPS status. Strictly cosmetic: a failed lookup must
//! never fail the surrounding location fetch, so callers log and fall back
//! to [`PlaceLabel::generic`].

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

/// Label shown when reverse geocoding yields nothing usable.
pub const GENERIC_PLACE: &str = "GPS位置";

/// Errors from the Nominatim lookup.
#[derive(Debug, Error)]
pub enum GeoLookupError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Http { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid reverse-geocoder base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Human-readable place derived from coordinates. Display-only; never feeds
/// search logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceLabel {
    /// City, town, village, or county — first non-empty wins.
    pub city: String,
    /// State or region; empty when neither is known.
    pub region: String,
}

impl PlaceLabel {
    /// The fallback label used when lookup fails or returns no address.
    #[must_use]
    pub fn generic() -> Self {
        Self {
            city: GENERIC_PLACE.to_owned(),
            region: String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Option<AddressParts>,
}

#[derive(Debug, Default, Deserialize)]
struct AddressParts {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    town: Option<String>,
    #[serde(default)]
    village: Option<String>,
    #[serde(default)]
    county: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    region: Option<String>,
}

/// Client for Nominatim's `/reverse` endpoint.
pub struct ReverseGeocoder {
    client: Client,
    base_url: Url,
}

impl ReverseGeocoder {
    /// Creates a geocoder pointed at `base_url` (production:
    /// `https://nominatim.openstreetmap.org`).
    ///
    /// # Errors
    ///
    /// Returns [`GeoLookupError::Network`] if the `reqwest::Client` cannot be
    /// constructed, or [`GeoLookupError::InvalidBaseUrl`] for an unparseable URL.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GeoLookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .map_err(GeoLookupError::Network)?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|e| GeoLookupError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, base_url })
    }

    /// Looks up the place label for a coordinate pair.
    ///
    /// Requests `reverse?format=json&lat=..&lon=..&accept-language=ja` and
    /// reduces the address breakdown to a [`PlaceLabel`].
    ///
    /// # Errors
    ///
    /// - [`GeoLookupError::Network`] if the request never completed.
    /// - [`GeoLookupError::Http`] on a non-2xx status.
    /// - [`GeoLookupError::Deserialize`] if the body is not valid JSON.
    pub async fn lookup(&self, latitude: f64, longitude: f64) -> Result<PlaceLabel, GeoLookupError> {
        let mut url = self
            .base_url
            .join("reverse")
            .unwrap_or_else(|_| self.base_url.clone());
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("lat", &latitude.to_string())
            .append_pair("lon", &longitude.to_string())
            .append_pair("accept-language", "ja");

        tracing::debug!(%url, "reverse geocode lookup");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(GeoLookupError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoLookupError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(GeoLookupError::Network)?;
        let parsed: ReverseResponse =
            serde_json::from_str(&body).map_err(|e| GeoLookupError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        let label = place_label(parsed.address.unwrap_or_default());
        tracing::debug!(city = %label.city, region = %label.region, "reverse geocode resolved");
        Ok(label)
    }
}

/// Reduces a Nominatim address breakdown to the displayed label.
///
/// City chain: city → town → village → county → the generic label.
/// Region chain: state → region → empty.
fn place_label(address: AddressParts) -> PlaceLabel {
    let non_empty = |value: Option<String>| value.filter(|s| !s.is_empty());
    let city = non_empty(address.city)
        .or_else(|| non_empty(address.town))
        .or_else(|| non_empty(address.village))
        .or_else(|| non_empty(address.county))
        .unwrap_or_else(|| GENERIC_PLACE.to_owned());
    let region = non_empty(address.state)
        .or_else(|| non_empty(address.region))
        .unwrap_or_default();
    PlaceLabel { city, region }
}
