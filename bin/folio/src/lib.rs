//! Folio CLI Library
//!
//! Server-side pieces of the Folio blog & portfolio site: the newsletter digest
//! endpoint and the commands that host or inspect it.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (serve, digest, check)
//! - [`server`] - HTTP router with the `/api/fetchEmails` endpoint
//!
//! # Example
//!
//! ```no_run
//! use folio::{Config, build_fetcher, server};
//!
//! # fn run() -> color_eyre::eyre::Result<()> {
//! let config = Config::default();
//! let fetcher = build_fetcher(&config)?;
//! let app = server::create_router(server::AppState::new(fetcher), None);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};

pub mod cmd;
pub mod server;

// Re-export core types for convenience
pub use folio_core::Config;
pub use folio_newsletter::{ButtondownClient, DigestEmail, DigestFetcher, DigestOptions};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Build the Buttondown-backed digest fetcher described by `config`.
pub fn build_fetcher(config: &Config) -> Result<DigestFetcher> {
    let client = ButtondownClient::from_config(&config.newsletter)
        .wrap_err("Failed to create newsletter client")?;

    Ok(DigestFetcher::new(
        Arc::new(client),
        DigestOptions::from(&config.newsletter),
    ))
}
