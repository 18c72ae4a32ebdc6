//! Folio Core Library
//!
//! Shared configuration, content shapes, and error handling for the Folio site backend.

pub mod config;
pub mod content;
pub mod error;

pub use config::{Config, NewsletterConfig, ServerConfig, SiteConfig};
pub use content::{Article, Message};
pub use error::{CoreError, Result};
