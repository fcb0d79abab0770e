pub mod provider;
pub mod reverse;

pub use provider::{DeviceLocation, GeolocationError, LocationProvider, LocationRequest};
pub use reverse::{GeoLookupError, PlaceLabel, ReverseGeocoder};
