//! CryptoBuddy terminal client
//!
//! Runs one interactive session over stdin/stdout. Logs go to stderr so
//! stdout carries only the conversation.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crypto_buddy::{BuddyConfig, Dataset, Router, Session};

/// Validate the dataset and configuration. Any error here ends the
/// process with a non-zero status before the session starts.
fn build_session(
    load: impl FnOnce() -> crypto_buddy::Result<Dataset>,
    config: &BuddyConfig,
) -> anyhow::Result<Session> {
    let dataset = load().context("embedded coin dataset is invalid")?;
    tracing::info!("Loaded {} coins:", dataset.len());
    for name in dataset.names() {
        tracing::info!("  • {}", name);
    }

    let router = Router::new(Arc::new(dataset), config).context("invalid advisor configuration")?;
    Ok(Session::new(router, config))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = BuddyConfig::default();
    let session = build_session(Dataset::reference, &config)?;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    let summary = session
        .run(stdin, &mut stdout)
        .await
        .context("interactive session failed")?;

    tracing::debug!(replies = summary.replies, "exiting");
    Ok(())
}
