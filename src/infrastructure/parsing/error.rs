//! Extraction error types
//!
//! Detailed errors for HTML extraction. In the flight pipeline these are
//! caught per card; in the hotel pipeline a price that is present but
//! unparseable fails the whole request.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ExtractionError {
    #[error("invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("required field '{field}' not found in result card")]
    RequiredFieldMissing { field: &'static str },

    #[error("unparseable price text '{text}'")]
    PriceParseFailed { text: String },
}

impl ExtractionError {
    pub fn invalid_selector(selector: &str, reason: impl ToString) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn required_field_missing(field: &'static str) -> Self {
        Self::RequiredFieldMissing { field }
    }
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Compile a CSS selector, mapping the parse failure into an
/// [`ExtractionError`] that names the offending selector.
pub fn compile_selector(selector: &str) -> ExtractionResult<scraper::Selector> {
    scraper::Selector::parse(selector)
        .map_err(|e| ExtractionError::invalid_selector(selector, e))
}
