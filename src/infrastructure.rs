//! Infrastructure layer
//!
//! Everything that touches the outside world: the static HTTP fetcher,
//! the headless-browser driver for dynamically rendered pages, the HTML
//! extraction machinery, configuration and logging.

pub mod browser;
pub mod config;
pub mod http_client;
pub mod logging;
pub mod parsing;

pub use browser::DynamicPageFetcher;
pub use http_client::{FetchError, PageFetcher};
