//! Folio Newsletter Library
//!
//! Retrieves sent newsletter issues from Buttondown and trims them to a
//! public-safe digest of the most recent issues.
//!
//! # Modules
//!
//! - [`model`] - Provider response shapes and the digest projection
//! - [`source`] - The `EmailSource` capability the digest is fetched through
//! - [`buttondown`] - HTTP implementation of `EmailSource` for the Buttondown API
//! - [`digest`] - Tail selection and the `DigestFetcher`
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use folio_newsletter::{ButtondownClient, DigestFetcher, DigestOptions};
//!
//! # async fn run() -> folio_newsletter::Result<()> {
//! let client = ButtondownClient::new("https://api.buttondown.email/v1", "api-key")?;
//! let fetcher = DigestFetcher::new(Arc::new(client), DigestOptions::default());
//! let latest = fetcher.fetch_digest().await?;
//! # Ok(())
//! # }
//! ```

pub mod buttondown;
pub mod digest;
pub mod error;
pub mod model;
pub mod source;

pub use buttondown::ButtondownClient;
pub use digest::{DigestFetcher, DigestOptions, select_digest};
pub use error::{NewsletterError, Result};
pub use model::{DigestEmail, RemoteEmail, RemoteEmailListResponse};
pub use source::EmailSource;
