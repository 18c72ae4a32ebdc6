//! Digest command - fetch the newsletter digest once and print it

use color_eyre::eyre::{Result, WrapErr};
use folio_core::Config;
use folio_newsletter::DigestEmail;

use crate::build_fetcher;

/// Run the digest command.
///
/// Prints the same JSON array the `/api/fetchEmails` endpoint returns.
pub async fn run(config: &Config) -> Result<()> {
    tracing::info!(
        limit = config.newsletter.digest_limit,
        include_secondary_id = config.newsletter.include_secondary_id,
        "Fetching newsletter digest"
    );

    let fetcher = build_fetcher(config)?;
    let digest = fetcher
        .fetch_digest()
        .await
        .wrap_err("Failed to fetch newsletter digest")?;

    println!("{}", render(&digest)?);
    Ok(())
}

fn render(digest: &[DigestEmail]) -> Result<String> {
    serde_json::to_string_pretty(digest).wrap_err("Failed to serialize digest")
}
