//! Buttondown API client.

use async_trait::async_trait;
use folio_core::NewsletterConfig;
use reqwest::{Client, header::AUTHORIZATION};
use tracing::debug;

use crate::{
    error::{NewsletterError, Result},
    model::RemoteEmailListResponse,
    source::EmailSource,
};

/// Query narrowing the listing to sent issues and dropping the body field.
const SENT_EMAILS_QUERY: [(&str, &str); 2] = [("status", "sent"), ("excluded_fields", "body")];

/// Buttondown `emails` resource client.
pub struct ButtondownClient {
    api_base: String,
    api_key: String,
    client: Client,
}

impl ButtondownClient {
    /// Create a new client.
    ///
    /// The key is not checked here; an empty key is sent as `Token ` and the
    /// provider's rejection surfaces from [`EmailSource::list_sent_emails`].
    pub fn new(api_base: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            api_base: api_base.into(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Create a client from the newsletter configuration.
    pub fn from_config(config: &NewsletterConfig) -> Result<Self> {
        Self::new(config.api_base.clone(), config.api_key.clone())
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl EmailSource for ButtondownClient {
    fn name(&self) -> &'static str {
        "buttondown"
    }

    async fn list_sent_emails(&self) -> Result<RemoteEmailListResponse> {
        let url = self.emails_url();
        debug!(%url, "listing sent emails");

        let response = self
            .client
            .get(&url)
            .query(&SENT_EMAILS_QUERY)
            .header(AUTHORIZATION, format!("Token {}", self.api_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(%status, "failed to read error response body: {e}");
                    String::new()
                }
            };
            return Err(NewsletterError::status(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        let listing: RemoteEmailListResponse = serde_json::from_slice(&bytes)?;

        debug!(
            results = listing.results.len(),
            count = listing.count,
            "received sent emails"
        );
        Ok(listing)
    }
}
