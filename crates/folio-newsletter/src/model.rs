//! Provider response shapes and the public digest projection.

use serde::{Deserialize, Serialize};

/// A sent email as returned by the provider.
///
/// Fields the provider adds beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEmail {
    pub id: String,

    /// Creation timestamp, ISO-8601 by convention. Not validated.
    pub creation_date: String,

    /// Provider's numeric issue number.
    #[serde(default)]
    pub secondary_id: Option<u64>,

    pub subject: String,

    /// Public archive URL of the issue.
    pub absolute_url: String,

    /// Cover image URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// Response body of the provider's "list emails" resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEmailListResponse {
    /// Emails in provider order.
    pub results: Vec<RemoteEmail>,

    /// Total number of matching emails. Unused by the digest.
    #[serde(default)]
    pub count: u64,
}

/// Public-facing digest entry for a newsletter issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestEmail {
    pub id: String,
    pub subject: String,
    pub creation_date: String,
    pub absolute_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_id: Option<u64>,
}

impl DigestEmail {
    /// Copy the public fields of `email`. `secondary_id` is kept only when requested.
    pub fn project(email: &RemoteEmail, include_secondary_id: bool) -> Self {
        Self {
            id: email.id.clone(),
            subject: email.subject.clone(),
            creation_date: email.creation_date.clone(),
            absolute_url: email.absolute_url.clone(),
            image: email.image.clone(),
            secondary_id: if include_secondary_id {
                email.secondary_id
            } else {
                None
            },
        }
    }
}
