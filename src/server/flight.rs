//! Flight search service router

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::application::flight::FlightScrapeService;
use crate::domain::{FlightListing, FlightSearchRequest};

use super::error::ApiError;

pub fn router(service: Arc<FlightScrapeService>) -> Router {
    Router::new()
        .route("/scrape", get(scrape))
        .route("/health", get(super::health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn scrape(
    State(service): State<Arc<FlightScrapeService>>,
    Query(request): Query<FlightSearchRequest>,
) -> Result<Json<Vec<FlightListing>>, ApiError> {
    debug!(
        "flight search: {} {}-{}, departing {}, returning {:?}, adults={}, children={}",
        request.trip_type,
        request.origin,
        request.destination,
        request.departure_date,
        request.return_date,
        request.adults,
        request.children
    );

    let listings = service.scrape(&request).await?;
    Ok(Json(listings))
}
