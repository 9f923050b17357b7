//! Tripmaster - travel search-result scraping services
//!
//! Two independent HTTP services scrape travel search-result pages and
//! return structured listings as JSON: hotel listings fetched statically
//! from a booking site, and flight listings acquired from a fare
//! aggregator through a headless browser that waits out client-side
//! rendering and lazy-loaded content.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod server;

// Re-export the common entry points for the service binaries
pub use application::error::ScrapeError;
pub use application::flight::FlightScrapeService;
pub use application::hotel::HotelScrapeService;
pub use infrastructure::config::AppConfig;
pub use infrastructure::logging::init_logging;
