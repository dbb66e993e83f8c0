//! userfetch demo
//!
//! Fetches user "123" through both contracts, then shows the validating
//! contract rejecting an empty ID. Point it at a server with
//! `USERFETCH_BASE_URL`.

use tracing_subscriber::EnvFilter;
use userfetch::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let fetcher = UserFetcher::new(HyperTransport::new(), FetcherConfig::from_env()?);
    tracing::info!(
        "Fetching users from {} (default mode: {})",
        fetcher.config().user_url("{id}"),
        fetcher.config().mode
    );

    match fetcher.fetch_permissive("123").await {
        Ok(user) => tracing::info!("Permissive data: {}", user),
        Err(e) => tracing::error!("Permissive error: {}", e),
    }

    match fetcher.fetch_validated("123").await {
        Ok(user) => tracing::info!("Validated data: {}", user),
        Err(e) => tracing::error!("Validated error: {}", e),
    }

    if let Err(e) = fetcher.fetch_validated("").await {
        tracing::error!("Validated error (empty id): {}", e);
    }

    Ok(())
}
