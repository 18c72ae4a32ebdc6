//! Site configuration management.

use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Default Buttondown API root.
pub const DEFAULT_API_BASE: &str = "https://api.buttondown.email/v1";

/// Main configuration structure for Folio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Newsletter provider settings.
    #[serde(default)]
    pub newsletter: NewsletterConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Public URL of the site (e.g., "https://example.com").
    #[serde(default)]
    pub base_url: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Default locale.
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind (e.g., "127.0.0.1:3000").
    #[serde(default = "default_addr")]
    pub addr: String,

    /// Directory with the pre-rendered site, served for every non-API path.
    #[serde(default)]
    pub site_dir: Option<String>,
}

/// Newsletter provider configuration.
///
/// The API key is server-side only: it is never serialized and is redacted
/// from `Debug` output.
#[derive(Clone, Serialize, Deserialize)]
pub struct NewsletterConfig {
    /// Provider API root, without the `/emails` resource.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Provider API credential. An empty key is sent as-is and rejected by the provider.
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Number of most recent issues kept in the digest.
    #[serde(default = "default_digest_limit")]
    pub digest_limit: usize,

    /// Whether digest entries carry the provider's numeric `secondary_id`.
    #[serde(default = "default_true")]
    pub include_secondary_id: bool,
}

// Default value functions
fn default_title() -> String {
    "Blog & Portfolio".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_digest_limit() -> usize {
    3
}

fn default_true() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_url: String::new(),
            description: None,
            default_locale: default_locale(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            site_dir: None,
        }
    }
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_key: String::new(),
            digest_limit: default_digest_limit(),
            include_secondary_id: true,
        }
    }
}

impl NewsletterConfig {
    /// Whether a non-blank API key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl fmt::Debug for NewsletterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.has_api_key() {
            "<redacted>"
        } else {
            "<unset>"
        };
        f.debug_struct("NewsletterConfig")
            .field("api_base", &self.api_base)
            .field("api_key", &api_key)
            .field("digest_limit", &self.digest_limit)
            .field("include_secondary_id", &self.include_secondary_id)
            .finish()
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an optional TOML file layered with `FOLIO__*` environment variables.
    ///
    /// `FOLIO__NEWSLETTER__API_KEY=...` sets `newsletter.api_key`.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.server.addr.is_empty() {
            return Err(CoreError::config("server.addr cannot be empty"));
        }

        if self.newsletter.api_base.is_empty() {
            return Err(CoreError::config("newsletter.api_base cannot be empty"));
        }

        if self.newsletter.digest_limit == 0 {
            return Err(CoreError::config(
                "newsletter.digest_limit must be at least 1",
            ));
        }

        for warning in self.warnings() {
            tracing::warn!("{warning}");
        }

        Ok(())
    }

    /// Non-fatal configuration issues.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.newsletter.has_api_key() {
            warnings.push(
                "newsletter.api_key is not set; the provider will reject digest requests"
                    .to_string(),
            );
        }

        if self.newsletter.api_base.starts_with("http://") {
            warnings.push("newsletter.api_base does not use https".to_string());
        }

        if self.site.base_url.ends_with('/') {
            warnings.push("site.base_url should not have a trailing slash".to_string());
        }

        warnings
    }
}
