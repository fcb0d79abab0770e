//! HTTP client for the lunch-roulette backend.
//!
//! Wraps `reqwest` with typed response deserialization and the error split
//! the UI needs: transport failures, non-2xx statuses, and 2xx responses
//! that signal logical failure are distinct [`RouletteError`] variants.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::RouletteError;
use crate::types::{
    AreasResponse, GenresResponse, OptionEntry, SearchCriteria, SearchEnvelope, SearchHit,
};

const ROULETTE_PATH: &str = "roulette";
const GENRES_PATH: &str = "api/genres";
const AREAS_PATH: &str = "api/areas";

/// Client for the lunch-roulette backend.
///
/// Holds the HTTP client and base URL. Point `base_url` at a mock server in
/// tests; there is no production default because the backend is self-hosted.
pub struct RouletteClient {
    client: Client,
    base_url: Url,
}

impl RouletteClient {
    /// Creates a client with the given base URL, request timeout, and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`RouletteError::Network`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`RouletteError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, RouletteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .map_err(RouletteError::Network)?;

        // Normalise: a trailing slash makes Url::join treat the last segment
        // as a directory instead of replacing it.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| RouletteError::Api {
            message: Some(format!("invalid base URL '{base_url}': {e}")),
            suggestion: None,
        })?;

        Ok(Self { client, base_url })
    }

    /// Runs one roulette spin: `POST /roulette` with the criteria as JSON.
    ///
    /// Success requires an HTTP 2xx status, `success == true`, and a
    /// `restaurant` object in the envelope.
    ///
    /// # Errors
    ///
    /// - [`RouletteError::Network`] if the request never completed.
    /// - [`RouletteError::Http`] on a non-2xx status.
    /// - [`RouletteError::Api`] if the body sets `error: true` or `success: false`.
    /// - [`RouletteError::MissingRestaurant`] if `success: true` but no restaurant.
    /// - [`RouletteError::Deserialize`] if the body is not a valid envelope.
    pub async fn spin(&self, criteria: &SearchCriteria) -> Result<SearchHit, RouletteError> {
        let url = self.endpoint(ROULETTE_PATH);
        tracing::debug!(%url, mode = ?criteria.location_mode, "spinning roulette");

        let response = self
            .client
            .post(url.clone())
            .json(criteria)
            .send()
            .await
            .map_err(RouletteError::Network)?;

        let envelope: SearchEnvelope = Self::read_json(response, &url).await?;

        if envelope.error || !envelope.success {
            return Err(RouletteError::Api {
                message: envelope.message,
                suggestion: envelope.suggestion,
            });
        }

        match envelope.restaurant {
            Some(restaurant) => Ok(SearchHit {
                restaurant,
                distance: envelope.distance,
                weather: envelope.weather,
            }),
            None => Err(RouletteError::MissingRestaurant {
                message: envelope.message,
            }),
        }
    }

    /// Fetches the genre master list from `GET /api/genres`.
    ///
    /// # Errors
    ///
    /// - [`RouletteError::Network`] / [`RouletteError::Http`] as for [`Self::spin`].
    /// - [`RouletteError::Api`] if the body sets `success: false`.
    /// - [`RouletteError::Deserialize`] if the body does not match the shape.
    pub async fn fetch_genres(&self) -> Result<Vec<OptionEntry>, RouletteError> {
        let url = self.endpoint(GENRES_PATH);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(RouletteError::Network)?;
        let body: GenresResponse = Self::read_json(response, &url).await?;
        if !body.success {
            return Err(RouletteError::Api {
                message: body.message,
                suggestion: None,
            });
        }
        Ok(body.genres)
    }

    /// Fetches the area master list from `GET /api/areas`.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::fetch_genres`].
    pub async fn fetch_areas(&self) -> Result<Vec<OptionEntry>, RouletteError> {
        let url = self.endpoint(AREAS_PATH);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(RouletteError::Network)?;
        let body: AreasResponse = Self::read_json(response, &url).await?;
        if !body.success {
            return Err(RouletteError::Api {
                message: body.message,
                suggestion: None,
            });
        }
        Ok(body.areas)
    }

    fn endpoint(&self, path: &str) -> Url {
        // The base URL always ends in '/' (normalised in `new`), so join
        // cannot fail for the fixed relative paths used here.
        self.base_url
            .join(path)
            .unwrap_or_else(|_| self.base_url.clone())
    }

    /// Asserts a 2xx status and parses the response body as JSON.
    async fn read_json<T>(response: reqwest::Response, url: &Url) -> Result<T, RouletteError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            return Err(RouletteError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await.map_err(RouletteError::Network)?;
        serde_json::from_str(&body).map_err(|e| RouletteError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}
