//! HTML extraction infrastructure
//!
//! Parsers isolate repeated result-card elements in third-party markup
//! and pull a fixed schema of fields from each card. The page structure
//! is version-specific and may break without notice; the contract with
//! the `scraper` library is purely "selector-based query returns
//! zero-or-more elements with readable text and attributes".

pub mod error;
pub mod flight_result_parser;
pub mod hotel_list_parser;
pub mod price;

pub use error::{ExtractionError, ExtractionResult};
pub use flight_result_parser::FlightResultParser;
pub use hotel_list_parser::HotelListParser;

use scraper::{ElementRef, Selector};

/// Text of the first descendant matching `selector`, trimmed; `None` when
/// the element is absent or its text is empty.
pub(crate) fn first_text(element: &ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|e| e.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}
