//! Email source capability.

use async_trait::async_trait;

use crate::{error::Result, model::RemoteEmailListResponse};

/// Anything that can list the newsletter's sent emails.
///
/// One call is one outbound request; implementations do not retry or cache.
#[async_trait]
pub trait EmailSource: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// List sent emails in provider order, without bodies.
    async fn list_sent_emails(&self) -> Result<RemoteEmailListResponse>;
}
