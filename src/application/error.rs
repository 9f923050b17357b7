//! Request-level error taxonomy
//!
//! One enum covers the three failure classes a scrape request can hit:
//! malformed parameters, upstream acquisition failures, and extraction
//! failures. The server layer maps these onto HTTP status codes.

use thiserror::Error;

use crate::infrastructure::http_client::FetchError;
use crate::infrastructure::parsing::ExtractionError;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("a round trip requires a return date")]
    MissingReturnDate,

    #[error("failed to fetch results page")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Browser(#[from] anyhow::Error),

    #[error("failed to extract listings")]
    Extraction(#[from] ExtractionError),
}

impl ScrapeError {
    pub fn invalid_date(value: &str, reason: impl ToString) -> Self {
        Self::InvalidDate {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True for errors caused by the request's own parameters.
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Self::InvalidDate { .. } | Self::MissingReturnDate)
    }
}
