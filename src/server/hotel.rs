//! Hotel search service router

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::application::hotel::HotelScrapeService;
use crate::domain::{HotelListing, HotelSearchRequest};

use super::error::ApiError;

pub fn router(service: Arc<HotelScrapeService>) -> Router {
    Router::new()
        .route("/scrape", get(scrape))
        .route("/health", get(super::health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn scrape(
    State(service): State<Arc<HotelScrapeService>>,
    Query(request): Query<HotelSearchRequest>,
) -> Result<Json<Vec<HotelListing>>, ApiError> {
    debug!(
        "hotel search: city={}, check-in={}, check-out={}, adults={}, children={}, rooms={}",
        request.city,
        request.check_in_date,
        request.check_out_date,
        request.adults,
        request.children,
        request.rooms
    );

    let listings = service.scrape(&request).await?;
    Ok(Json(listings))
}
