use crate::config::AppConfig;
use crate::router::respond;
use crate::sheets::SheetsClient;
use crate::state::AppState;
use anyhow::{Context, Result};
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod sheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,listing_map=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let fetcher = SheetsClient::new(&config.sheets).context("Failed to build Sheets client")?;

    let addr = config.addr;
    let max_workers = config.max_workers;
    let state = AppState::new(config, Box::new(fetcher));

    tracing::info!(%addr, max_workers, "starting server");

    let server = Server::bind(&addr).max_workers(max_workers);

    server
        .serve(move |req: astra::Request, _info| respond(req, &state))
        .context("Server ended with error")?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}
