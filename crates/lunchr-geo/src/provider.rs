//! Device-location seam.
//!
//! The controller never talks to positioning hardware directly; it asks a
//! [`LocationProvider`] and gets either a [`DeviceLocation`] or one of the
//! four categorized failures a user can be told about.

use std::future::Future;

use thiserror::Error;

/// A fix obtained from the location provider.
///
/// Lives for the session: overwritten by each new successful fetch and
/// cleared by the controller on fetch failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// Reported accuracy radius in meters.
    pub accuracy_m: f64,
}

/// Options passed to a position request.
#[derive(Debug, Clone, Copy)]
pub struct LocationRequest {
    pub high_accuracy: bool,
    pub timeout_ms: u64,
    /// Maximum age of a cached fix the provider may return.
    pub max_age_ms: u64,
}

impl Default for LocationRequest {
    /// High accuracy, 10-second timeout, 5-minute cache tolerance.
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: 10_000,
            max_age_ms: 300_000,
        }
    }
}

/// Categorized device-level positioning failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    PositionUnavailable,
    #[error("position request timed out")]
    Timeout,
    #[error("location fetch failed: {0}")]
    Unknown(String),
}

/// Capability for asking the host platform where the device is.
pub trait LocationProvider {
    /// Whether the platform offers positioning at all. When `false`, callers
    /// must not invoke [`Self::current_position`].
    fn is_supported(&self) -> bool;

    /// Requests one position fix honoring the given options.
    fn current_position(
        &self,
        request: &LocationRequest,
    ) -> impl Future<Output = Result<DeviceLocation, GeolocationError>> + Send;
}
