//! Hotel search scraping service
//!
//! `GET /scrape?city=..&checkInDate=d/m/Y&checkOutDate=d/m/Y&adults=..&children=..&rooms=..`
//! returns a JSON array of `{hotel_name, url, price}` objects with prices
//! normalized to whole dollars.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use tripmaster::{AppConfig, HotelScrapeService, init_logging, server};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = AppConfig::load_or_default().await;
    let service = Arc::new(
        HotelScrapeService::new(&config).context("failed to build hotel scrape service")?,
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.hotel_port));
    info!("hotel search server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, server::hotel::router(service))
        .with_graceful_shutdown(server::shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
