//! Location provider backed by command-line coordinates.
//!
//! A terminal has no positioning hardware; the "device location" is
//! whatever the user passed via `--lat`/`--lon`. Without coordinates the
//! provider reports the capability as absent, which the controller turns
//! into the unsupported-feature status without ever calling it.

use lunchr_geo::{DeviceLocation, GeolocationError, LocationProvider, LocationRequest};

pub struct ArgsLocationProvider {
    fix: Option<DeviceLocation>,
}

impl ArgsLocationProvider {
    #[must_use]
    pub fn new(fix: Option<DeviceLocation>) -> Self {
        Self { fix }
    }
}

impl LocationProvider for ArgsLocationProvider {
    fn is_supported(&self) -> bool {
        self.fix.is_some()
    }

    async fn current_position(
        &self,
        _request: &LocationRequest,
    ) -> Result<DeviceLocation, GeolocationError> {
        self.fix.ok_or(GeolocationError::PositionUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_without_fix_is_unsupported() {
        assert!(!ArgsLocationProvider::new(None).is_supported());
    }

    #[tokio::test]
    async fn provider_returns_the_supplied_fix() {
        let fix = DeviceLocation {
            latitude: 35.0,
            longitude: 139.0,
            accuracy_m: 50.0,
        };
        let provider = ArgsLocationProvider::new(Some(fix));
        assert!(provider.is_supported());
        let got = provider
            .current_position(&LocationRequest::default())
            .await
            .unwrap();
        assert_eq!(got, fix);
    }
}
