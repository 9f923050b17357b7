//! Flight search scraping service
//!
//! `GET /scrape?tripType=..&departureDate=d/m/Y&returnDate=d/m/Y&origin=..&destination=..&adults=..&children=..`
//! returns a JSON array of flight offers with prices exactly as the
//! source page displayed them. Each request drives its own headless
//! browser, so expect tens of seconds per scrape.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use tripmaster::{AppConfig, FlightScrapeService, init_logging, server};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = AppConfig::load_or_default().await;
    let service = Arc::new(
        FlightScrapeService::new(&config).context("failed to build flight scrape service")?,
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.flight_port));
    info!("flight search server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, server::flight::router(service))
        .with_graceful_shutdown(server::shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
