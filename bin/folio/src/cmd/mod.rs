//! Command implementations.

pub mod check;
pub mod digest;
pub mod serve;

use std::path::Path;

use folio_core::{Config, Result};

/// Load configuration from file and `FOLIO__*` environment, then apply an API key override.
///
/// The override comes from `--api-key` or `BUTTONDOWN_API_KEY` and wins over file and environment.
pub fn load_config(config_path: &Path, api_key: Option<&str>) -> Result<Config> {
    let mut config = Config::load_with_env(config_path)?;

    if let Some(key) = api_key {
        config.newsletter.api_key = key.to_string();
    }

    Ok(config)
}
