//! Serve command - host the digest endpoint and the pre-rendered site

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use folio_core::Config;
use tokio::net::TcpListener;

use crate::{
    build_fetcher,
    server::{AppState, DIGEST_ROUTE, create_router},
};

/// Run the serve command.
///
/// `addr` and `site_dir` override `server.addr` and `server.site_dir`.
pub async fn run(config: Config, addr: Option<&str>, site_dir: Option<&Path>) -> Result<()> {
    let addr = addr.unwrap_or(&config.server.addr).to_string();
    let site_dir: Option<PathBuf> = site_dir
        .map(Path::to_path_buf)
        .or_else(|| config.server.site_dir.as_ref().map(PathBuf::from));

    tracing::info!(%addr, ?site_dir, title = %config.site.title, "Starting server");

    if let Some(dir) = site_dir.as_deref().filter(|d| !d.is_dir()) {
        tracing::warn!(dir = %dir.display(), "Site directory does not exist");
    }

    let fetcher = build_fetcher(&config)?;
    let app = create_router(AppState::new(fetcher), site_dir.as_deref());

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  Serving {} at http://{addr}", config.site.title);
    println!("  Newsletter digest: http://{addr}{DIGEST_ROUTE}");
    println!("  Press Ctrl+C to stop");
    println!();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}
