//! Build-time API configuration
//!
//! wasm has no process environment, so overrides are baked in at compile
//! time from `POKESEARCH_API_URL` and `POKESEARCH_API_KEY`.

use pokesearch_common::ApiConfig;
use tracing::warn;

pub fn load_config() -> ApiConfig {
    resolve_config(
        option_env!("POKESEARCH_API_URL"),
        option_env!("POKESEARCH_API_KEY"),
    )
}

/// Validated config, or the defaults if the overrides are invalid.
fn resolve_config(api_base_url: Option<&str>, api_key: Option<&str>) -> ApiConfig {
    match ApiConfig::from_values(api_base_url, api_key) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring API configuration: {}", e);
            ApiConfig::from_values(None, api_key).unwrap_or_default()
        }
    }
}
