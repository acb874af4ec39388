//! Serve command implementation.
//!
//! Exposes the translator over the JSON API (see `lnu-api`) at `/api/*`.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use lnu_api::{create_api_state, create_app};
use lnu_bridge::Translator;
use tokio::net::TcpListener;
use tracing::info;

/// Execute the serve command.
pub async fn execute(translator: Translator, bind: &str) -> Result<()> {
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("Invalid bind address: {bind}"))?;

    let entries = translator.data().lexicon().len();
    let app = create_app(create_api_state(translator));

    println!();
    println!("🚀 L'nui'suti Server");
    println!("   API: http://{}/api/health", addr);
    println!("   Entries loaded: {}", entries);
    println!();
    println!("   Press Ctrl+C to stop");
    println!();

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
