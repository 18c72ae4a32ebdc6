//! HTTP server exposing the newsletter digest

use std::{path::Path, sync::Arc};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use folio_newsletter::{DigestEmail, DigestFetcher, NewsletterError};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Path of the digest endpoint.
pub const DIGEST_ROUTE: &str = "/api/fetchEmails";

/// Server state shared across handlers. Immutable after startup.
pub struct AppState {
    /// Digest fetcher bound to the configured provider.
    pub fetcher: DigestFetcher,
}

impl AppState {
    /// Create a new server state.
    pub fn new(fetcher: DigestFetcher) -> Arc<Self> {
        Arc::new(Self { fetcher })
    }
}

/// Create the site router.
///
/// With `site_dir`, every path other than the API is served from that directory.
pub fn create_router(state: Arc<AppState>, site_dir: Option<&Path>) -> Router {
    let mut router = Router::new().route(DIGEST_ROUTE, get(fetch_emails_handler));

    if let Some(dir) = site_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Latest newsletter issues as a JSON array.
async fn fetch_emails_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DigestEmail>>, ApiError> {
    let digest = state.fetcher.fetch_digest().await?;
    Ok(Json(digest))
}

/// Handler failure. Every cause maps to the same generic 500.
#[derive(Debug)]
pub struct ApiError(NewsletterError);

impl From<NewsletterError> for ApiError {
    fn from(err: NewsletterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "newsletter digest request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "Internal Server Error" })),
        )
            .into_response()
    }
}
