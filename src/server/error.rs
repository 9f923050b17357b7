//! Error-to-response mapping
//!
//! Parameter errors are the client's fault (400), acquisition failures
//! are the upstream site's (502), extraction failures are ours (500).

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use crate::application::error::ScrapeError;

/// Response wrapper around [`ScrapeError`].
pub struct ApiError(pub ScrapeError);

impl From<ScrapeError> for ApiError {
    fn from(error: ScrapeError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ScrapeError::InvalidDate { .. } | ScrapeError::MissingReturnDate => {
                StatusCode::BAD_REQUEST
            }
            ScrapeError::Fetch(_) | ScrapeError::Browser(_) => StatusCode::BAD_GATEWAY,
            ScrapeError::Extraction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!("scrape request failed ({status}): {}", self.0);
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
