//! Digest selection.
//!
//! Keeps the last `limit` emails in the order the provider returned them and
//! projects each onto [`DigestEmail`]. The provider lists oldest first, so the
//! tail is the most recent issues; nothing is re-sorted here.

use std::sync::Arc;

use folio_core::NewsletterConfig;
use tracing::debug;

use crate::{
    error::Result,
    model::{DigestEmail, RemoteEmail},
    source::EmailSource,
};

/// Digest shaping options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestOptions {
    /// Maximum number of issues in the digest.
    pub limit: usize,

    /// Whether entries carry `secondary_id`.
    pub include_secondary_id: bool,
}

impl Default for DigestOptions {
    fn default() -> Self {
        Self {
            limit: 3,
            include_secondary_id: true,
        }
    }
}

impl From<&NewsletterConfig> for DigestOptions {
    fn from(config: &NewsletterConfig) -> Self {
        Self {
            limit: config.digest_limit,
            include_secondary_id: config.include_secondary_id,
        }
    }
}

/// Project the last `options.limit` emails, preserving their relative order.
pub fn select_digest(emails: &[RemoteEmail], options: DigestOptions) -> Vec<DigestEmail> {
    let start = emails.len().saturating_sub(options.limit);
    emails[start..]
        .iter()
        .map(|email| DigestEmail::project(email, options.include_secondary_id))
        .collect()
}

/// Fetches the newsletter digest from an [`EmailSource`].
#[derive(Clone)]
pub struct DigestFetcher {
    source: Arc<dyn EmailSource>,
    options: DigestOptions,
}

impl DigestFetcher {
    /// Create a new fetcher.
    pub fn new(source: Arc<dyn EmailSource>, options: DigestOptions) -> Self {
        Self { source, options }
    }

    /// List sent emails once and return the digest.
    ///
    /// Any source failure is returned as-is; there is no partial result.
    pub async fn fetch_digest(&self) -> Result<Vec<DigestEmail>> {
        let listing = self.source.list_sent_emails().await?;
        let digest = select_digest(&listing.results, self.options);

        debug!(
            source = self.source.name(),
            received = listing.results.len(),
            kept = digest.len(),
            "selected newsletter digest"
        );
        Ok(digest)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::{error::NewsletterError, model::RemoteEmailListResponse};

    fn email(n: u64) -> RemoteEmail {
        RemoteEmail {
            id: format!("e{n}"),
            creation_date: format!("2024-01-{n:02}T12:00:00Z"),
            secondary_id: Some(n),
            subject: format!("Issue {n}"),
            absolute_url: format!("https://buttondown.email/folio/archive/issue-{n}"),
            image: (n % 2 == 0).then(|| format!("https://assets.example.com/{n}.png")),
        }
    }

    fn emails(n: u64) -> Vec<RemoteEmail> {
        (1..=n).map(email).collect()
    }

    fn ids(digest: &[DigestEmail]) -> Vec<&str> {
        digest.iter().map(|d| d.id.as_str()).collect()
    }

    struct StaticSource {
        emails: Vec<RemoteEmail>,
        calls: AtomicUsize,
    }

    impl StaticSource {
        fn new(emails: Vec<RemoteEmail>) -> Self {
            Self {
                emails,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl EmailSource for StaticSource {
        fn name(&self) -> &'static str {
            "static"
        }

        async fn list_sent_emails(&self) -> Result<RemoteEmailListResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(RemoteEmailListResponse {
                count: self.emails.len() as u64,
                results: self.emails.clone(),
            })
        }
    }

    struct RejectingSource;

    #[async_trait]
    impl EmailSource for RejectingSource {
        fn name(&self) -> &'static str {
            "rejecting"
        }

        async fn list_sent_emails(&self) -> Result<RemoteEmailListResponse> {
            Err(NewsletterError::status(401, "Invalid token."))
        }
    }

    #[test]
    fn test_keeps_last_three_in_order() {
        let digest = select_digest(&emails(5), DigestOptions::default());
        assert_eq!(ids(&digest), ["e3", "e4", "e5"]);
    }

    #[test]
    fn test_short_input_is_kept_whole() {
        for n in 0..=3 {
            let input = emails(n);
            let digest = select_digest(&input, DigestOptions::default());
            assert_eq!(digest.len(), input.len());
            let expected: Vec<_> = input.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(ids(&digest), expected);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(select_digest(&[], DigestOptions::default()).is_empty());
    }

    #[test]
    fn test_does_not_resort() {
        let input = vec![email(9), email(2), email(7), email(1)];
        let digest = select_digest(&input, DigestOptions::default());
        assert_eq!(ids(&digest), ["e2", "e7", "e1"]);
    }

    #[test]
    fn test_fields_copied_exactly() {
        let input = emails(4);
        let digest = select_digest(&input, DigestOptions::default());

        for (out, src) in digest.iter().zip(&input[1..]) {
            assert_eq!(out.id, src.id);
            assert_eq!(out.subject, src.subject);
            assert_eq!(out.creation_date, src.creation_date);
            assert_eq!(out.absolute_url, src.absolute_url);
            assert_eq!(out.image, src.image);
            assert_eq!(out.secondary_id, src.secondary_id);
        }
    }

    #[test]
    fn test_configurable_limit_and_secondary_id() {
        let options = DigestOptions {
            limit: 2,
            include_secondary_id: false,
        };
        let digest = select_digest(&emails(6), options);

        assert_eq!(ids(&digest), ["e5", "e6"]);
        assert!(digest.iter().all(|d| d.secondary_id.is_none()));
    }

    #[test]
    fn test_options_from_config() {
        let config = NewsletterConfig {
            digest_limit: 5,
            include_secondary_id: false,
            ..NewsletterConfig::default()
        };
        let options = DigestOptions::from(&config);
        assert_eq!(options.limit, 5);
        assert!(!options.include_secondary_id);
        assert_eq!(DigestOptions::from(&NewsletterConfig::default()), DigestOptions::default());
    }

    #[tokio::test]
    async fn test_fetch_digest_makes_one_call() {
        let source = Arc::new(StaticSource::new(emails(5)));
        let fetcher = DigestFetcher::new(source.clone(), DigestOptions::default());

        let digest = fetcher.fetch_digest().await.expect("digest");

        assert_eq!(ids(&digest), ["e3", "e4", "e5"]);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_digest_single_email() {
        let fetcher = DigestFetcher::new(
            Arc::new(StaticSource::new(emails(1))),
            DigestOptions::default(),
        );
        let digest = fetcher.fetch_digest().await.expect("digest");
        assert_eq!(digest, vec![DigestEmail::project(&email(1), true)]);
    }

    #[tokio::test]
    async fn test_fetch_digest_propagates_failure() {
        let fetcher = DigestFetcher::new(Arc::new(RejectingSource), DigestOptions::default());
        let err = fetcher.fetch_digest().await.unwrap_err();
        assert!(err.is_unauthorized());
    }
}
