use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var has an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var has an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_bool = |var: &str, default: bool| -> Result<bool, ConfigError> {
        match lookup(var) {
            Err(_) => Ok(default),
            Ok(raw) => match raw.as_str() {
                "1" | "true" | "yes" => Ok(true),
                "0" | "false" | "no" => Ok(false),
                other => Err(ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: format!("expected a boolean, got \"{other}\""),
                }),
            },
        }
    };

    let server_url = or_default("LUNCHR_SERVER_URL", "http://127.0.0.1:5000");
    let nominatim_url = or_default("LUNCHR_NOMINATIM_URL", "https://nominatim.openstreetmap.org");
    let user_agent = or_default("LUNCHR_USER_AGENT", "lunchr/0.1 (lunch-roulette)");
    let request_timeout_secs = parse_u64("LUNCHR_REQUEST_TIMEOUT_SECS", "30")?;
    let geocoder_timeout_secs = parse_u64("LUNCHR_GEOCODER_TIMEOUT_SECS", "10")?;
    let error_dismiss_ms = parse_u64("LUNCHR_ERROR_DISMISS_MS", "10000")?;
    let location_mode_enabled = parse_bool("LUNCHR_LOCATION_MODE", true)?;
    let log_level = or_default("LUNCHR_LOG_LEVEL", "info");

    Ok(AppConfig {
        server_url,
        nominatim_url,
        user_agent,
        request_timeout_secs,
        geocoder_timeout_secs,
        error_dismiss_ms,
        location_mode_enabled,
        log_level,
    })
}
