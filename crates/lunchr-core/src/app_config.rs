/// Runtime configuration for the lunch-roulette client.
///
/// Every field has a default so the client runs with zero environment setup;
/// see [`crate::config::load_app_config`] for the env var names.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the lunch-roulette backend.
    pub server_url: String,
    /// Base URL of the Nominatim reverse-geocoding service.
    pub nominatim_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Timeout for reverse-geocoding requests; shorter than the backend
    /// timeout because the lookup is cosmetic.
    pub geocoder_timeout_secs: u64,
    /// How long the error banner stays visible before auto-dismissing.
    pub error_dismiss_ms: u64,
    /// Capability flag: whether current-location (GPS) mode is available.
    pub location_mode_enabled: bool,
    pub log_level: String,
}
