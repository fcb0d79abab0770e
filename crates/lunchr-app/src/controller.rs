//! The search controller: location-mode state, form state, the cached
//! device location, and the orchestration of one search round trip.
//!
//! All collaborators are injected: the backend client and reverse geocoder
//! are concrete HTTP clients (point them at mock servers in tests), the
//! location provider and view are traits.

use std::time::{Duration, Instant};

use thiserror::Error;

use lunchr_api::{LocationMode, RouletteClient, RouletteError, SearchCriteria};
use lunchr_geo::{DeviceLocation, LocationProvider, LocationRequest, PlaceLabel, ReverseGeocoder};

use crate::banner::ErrorBanner;
use crate::card::RestaurantCard;
use crate::messages;
use crate::options::OptionList;
use crate::view::ResultView;

/// Controller-level failures: either the form was invalid before any
/// network activity, or the backend client failed.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Area mode requires a selected area; the request is never sent.
    #[error("no area selected in area mode")]
    AreaNotSelected,

    #[error(transparent)]
    Client(#[from] RouletteError),
}

/// Behavior knobs that varied across the original's parallel copies,
/// unified here as explicit settings.
#[derive(Debug, Clone, Copy)]
pub struct ControllerSettings {
    /// How long the error banner stays up before auto-dismissing.
    pub error_dismiss: Duration,
    /// Whether current-location (GPS) mode is available on this build.
    pub location_capable: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            error_dismiss: Duration::from_millis(10_000),
            location_capable: true,
        }
    }
}

/// Current form state, mirroring the selectors. Empty strings mean
/// "nothing selected", matching the wire convention of omitted fields.
#[derive(Debug, Clone)]
pub struct SearchForm {
    /// Maximum walking time in minutes (current-location mode only).
    pub walking_time_min: u32,
    pub budget_code: String,
    pub genre_code: String,
    pub area_code: String,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            walking_time_min: 10,
            budget_code: String::new(),
            genre_code: String::new(),
            area_code: String::new(),
        }
    }
}

pub struct SearchController<P, V> {
    client: RouletteClient,
    /// Best-effort place labelling; `None` disables the lookup entirely.
    geocoder: Option<ReverseGeocoder>,
    provider: P,
    view: V,
    settings: ControllerSettings,
    mode: LocationMode,
    form: SearchForm,
    /// Last successful device fix; cleared on fetch failure.
    location: Option<DeviceLocation>,
    banner: ErrorBanner,
    genres: OptionList,
    areas: OptionList,
    in_flight: bool,
}

impl<P, V> SearchController<P, V>
where
    P: LocationProvider,
    V: ResultView,
{
    pub fn new(
        client: RouletteClient,
        geocoder: Option<ReverseGeocoder>,
        provider: P,
        view: V,
        settings: ControllerSettings,
    ) -> Self {
        Self {
            client,
            geocoder,
            provider,
            view,
            mode: LocationMode::Current,
            form: SearchForm::default(),
            location: None,
            banner: ErrorBanner::new(settings.error_dismiss),
            genres: OptionList::genres(),
            areas: OptionList::areas(),
            in_flight: false,
            settings,
        }
    }

    #[must_use]
    pub fn mode(&self) -> LocationMode {
        self.mode
    }

    pub fn form_mut(&mut self) -> &mut SearchForm {
        &mut self.form
    }

    #[must_use]
    pub fn genres(&self) -> &OptionList {
        &self.genres
    }

    #[must_use]
    pub fn areas(&self) -> &OptionList {
        &self.areas
    }

    #[must_use]
    pub fn device_location(&self) -> Option<DeviceLocation> {
        self.location
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn error_banner(&self) -> &ErrorBanner {
        &self.banner
    }

    /// Switches between current-location and area mode.
    ///
    /// Ignored when the build has location mode disabled: there is only one
    /// input group to show in that case.
    pub fn switch_mode(&mut self, mode: LocationMode) {
        if !self.settings.location_capable && mode != self.mode {
            tracing::warn!("location-mode switching disabled by configuration");
            return;
        }
        if self.mode != mode {
            self.mode = mode;
            tracing::info!(?mode, "location mode switched");
            self.view.mode_changed(mode);
        }
    }

    /// Runs one search round trip.
    ///
    /// Clears the previous banner and result, validates the form, issues a
    /// single `POST /roulette`, and renders either the result card or the
    /// mapped error banner. The busy state is cleared on every path. A call
    /// while a search is already in flight is a no-op (the trigger is
    /// disabled for the duration).
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::AreaNotSelected`] for an invalid form or
    /// [`ControllerError::Client`] for any backend failure; in both cases
    /// the error banner has already been shown.
    pub async fn execute_search(&mut self) -> Result<(), ControllerError> {
        if self.in_flight {
            return Ok(());
        }
        self.in_flight = true;
        self.view.set_busy(true);
        self.banner.dismiss();
        self.view.clear_error();
        self.view.clear_result();

        let result = self.run_search().await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, "search failed");
            self.show_banner(&messages::search_failure_message(err));
        }

        self.in_flight = false;
        self.view.set_busy(false);
        result
    }

    async fn run_search(&mut self) -> Result<(), ControllerError> {
        let criteria = self.build_criteria()?;
        let hit = self.client.spin(&criteria).await?;
        tracing::info!(restaurant = %hit.restaurant.name, "roulette hit");
        self.view.show_result(&RestaurantCard::from_hit(&hit));
        Ok(())
    }

    /// Assembles the request body from the form and the cached location.
    fn build_criteria(&self) -> Result<SearchCriteria, ControllerError> {
        let mut criteria = SearchCriteria {
            location_mode: self.mode,
            latitude: None,
            longitude: None,
            max_walking_time_min: None,
            middle_area_code: None,
            budget_code: none_if_empty(&self.form.budget_code),
            genre_code: none_if_empty(&self.form.genre_code),
            lunch: 1,
        };

        match self.mode {
            LocationMode::Current => {
                if let Some(location) = self.location {
                    criteria.latitude = Some(location.latitude);
                    criteria.longitude = Some(location.longitude);
                }
                criteria.max_walking_time_min = Some(self.form.walking_time_min);
            }
            LocationMode::Area => {
                criteria.middle_area_code = Some(
                    none_if_empty(&self.form.area_code).ok_or(ControllerError::AreaNotSelected)?,
                );
            }
        }

        Ok(criteria)
    }

    /// Fetches one device position fix.
    ///
    /// High accuracy, 10-second timeout, 5-minute cache tolerance. On
    /// success the fix is cached for subsequent searches and a best-effort
    /// reverse geocode resolves a place label; on failure the cached fix is
    /// cleared and a categorized status message is shown.
    pub async fn acquire_location(&mut self) {
        if !self.settings.location_capable || !self.provider.is_supported() {
            self.view.location_status(messages::GPS_UNSUPPORTED);
            return;
        }

        self.view.location_status(messages::GPS_FETCHING);
        match self
            .provider
            .current_position(&LocationRequest::default())
            .await
        {
            Ok(location) => {
                tracing::info!(
                    latitude = location.latitude,
                    longitude = location.longitude,
                    accuracy_m = location.accuracy_m,
                    "device location acquired"
                );
                self.location = Some(location);
                self.view
                    .location_status(&messages::gps_success(location.accuracy_m));
                self.resolve_place(location).await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "device location fetch failed");
                self.location = None;
                self.view.location_status(messages::gps_failure_message(&err));
            }
        }
    }

    /// Best-effort: a failed lookup only downgrades the label.
    async fn resolve_place(&mut self, location: DeviceLocation) {
        let Some(geocoder) = &self.geocoder else {
            return;
        };
        match geocoder.lookup(location.latitude, location.longitude).await {
            Ok(label) => self.view.place_resolved(&label),
            Err(err) => {
                tracing::warn!(error = %err, "reverse geocoding failed");
                self.view.place_resolved(&PlaceLabel::generic());
            }
        }
    }

    /// Loads the genre master list once at startup. Non-fatal: on failure
    /// the selector keeps its placeholder-only state.
    pub async fn load_genres(&mut self) {
        match self.client.fetch_genres().await {
            Ok(entries) => {
                tracing::info!(count = entries.len(), "genre master loaded");
                self.genres.replace(entries);
            }
            Err(err) => {
                tracing::warn!(error = %err, "genre master load failed; selector stays empty");
            }
        }
    }

    /// Loads the area master list once at startup. Non-fatal like
    /// [`Self::load_genres`].
    pub async fn load_areas(&mut self) {
        match self.client.fetch_areas().await {
            Ok(entries) => {
                tracing::info!(count = entries.len(), "area master loaded");
                self.areas.replace(entries);
            }
            Err(err) => {
                tracing::warn!(error = %err, "area master load failed; selector stays empty");
            }
        }
    }

    /// Hides the error banner (user click) and cancels its auto-dismiss.
    pub fn dismiss_error(&mut self) {
        self.banner.dismiss();
        self.view.clear_error();
    }

    /// Drives the banner auto-dismiss deadline.
    pub fn tick(&mut self, now: Instant) {
        if self.banner.tick(now) {
            self.view.clear_error();
        }
    }

    /// Warning to surface when the host wants to shut down. `Some` only
    /// while a search is in flight; the search itself is never cancelled.
    #[must_use]
    pub fn unload_warning(&self) -> Option<&'static str> {
        self.in_flight.then_some(messages::UNLOAD_WARNING)
    }

    fn show_banner(&mut self, message: &str) {
        self.banner.show(message, Instant::now());
        self.view.show_error(message);
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
