use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::state::AppState;
use anyhow::{Context, Result};
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod feed;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> Result<()> {
    // 1️⃣ Logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,renting_catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2️⃣ Configuration and shared state
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let state = AppState::from_config(&config).context("Failed to build feed client")?;

    match &config.feed_url {
        Some(url) => tracing::info!("Online catalog: {url}"),
        None => tracing::info!("No FEED_URL set, uploads only"),
    }

    // 3️⃣ Start the server
    tracing::info!("Starting server at http://{}", config.bind_addr);

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests, passing state handle into closure
    server
        .serve(move |req, _info| match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => error_to_response(err),
        })
        .context("Server ended with error")?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}
