//! Configuration infrastructure
//!
//! Contains the application configuration for both scraping services,
//! loadable from an optional JSON file and backed by compiled-in defaults.
//! Site-specific constants (base URLs, markup hooks) live in the `booking`
//! and `kayak` modules below.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{info, warn};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_PATH_ENV: &str = "TRIPMASTER_CONFIG";

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Listen ports for the two services
    #[serde(default)]
    pub server: ServerConfig,

    /// Static page fetching (hotel pipeline)
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Headless-browser acquisition (flight pipeline)
    #[serde(default)]
    pub browser: BrowserConfig,

    /// Price normalization (hotel pipeline)
    #[serde(default)]
    pub pricing: PricingConfig,
}

/// Listen ports; both services bind all interfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "defaults::hotel_port")]
    pub hotel_port: u16,

    #[serde(default = "defaults::flight_port")]
    pub flight_port: u16,
}

/// Settings for the static single-fetch page acquirer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Browser-like request identity, reduces the chance of being served
    /// a bot-detection page
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::request_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Settings for the headless-browser page acquirer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Lower bound of the randomized settle delay, milliseconds
    #[serde(default = "defaults::settle_delay_min_ms")]
    pub settle_delay_min_ms: u64,

    /// Upper bound (exclusive) of the randomized settle delay, milliseconds
    #[serde(default = "defaults::settle_delay_max_ms")]
    pub settle_delay_max_ms: u64,

    /// Upper bound on scroll rounds. The source scraper loops until page
    /// height stabilizes with no cap; the cap bounds worst-case latency.
    #[serde(default = "defaults::max_scroll_rounds")]
    pub max_scroll_rounds: u32,
}

/// Settings for hotel price normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// ILS to USD exchange rate used to convert displayed prices
    #[serde(default = "defaults::ils_to_usd_rate")]
    pub ils_to_usd_rate: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            hotel_port: defaults::hotel_port(),
            flight_port: defaults::flight_port(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_seconds: defaults::request_timeout_seconds(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            settle_delay_min_ms: defaults::settle_delay_min_ms(),
            settle_delay_max_ms: defaults::settle_delay_max_ms(),
            max_scroll_rounds: defaults::max_scroll_rounds(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            ils_to_usd_rate: defaults::ils_to_usd_rate(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Load the file named by `TRIPMASTER_CONFIG`, falling back to
    /// defaults when the variable is unset or the file is unreadable.
    pub async fn load_or_default() -> Self {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => match Self::load(Path::new(&path)).await {
                Ok(config) => {
                    info!("loaded configuration from {path}");
                    config
                }
                Err(error) => {
                    warn!("failed to load configuration from {path}: {error:#}; using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

/// Default values for all configuration settings
pub mod defaults {
    pub fn hotel_port() -> u16 {
        8086
    }

    pub fn flight_port() -> u16 {
        8085
    }

    /// Fixed desktop-Chrome identity used for both acquirers
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3"
            .to_string()
    }

    pub fn request_timeout_seconds() -> u64 {
        15
    }

    pub fn settle_delay_min_ms() -> u64 {
        5_000
    }

    pub fn settle_delay_max_ms() -> u64 {
        10_000
    }

    pub fn max_scroll_rounds() -> u32 {
        20
    }

    pub fn ils_to_usd_rate() -> f64 {
        3.75
    }
}

/// Constants for the hotel booking site
pub mod booking {
    /// Search-results endpoint the hotel query builder targets
    pub const SEARCH_RESULTS_BASE: &str = "https://www.booking.com/searchresults.html";

    /// Result-card container
    pub const PROPERTY_CARD: &str = r#"div[data-testid="property-card"]"#;

    /// Title link inside a card; carries the hotel name and href
    pub const TITLE_LINK: &str = r#"a[data-testid="title-link"]"#;

    /// Displayed (possibly discounted) price inside a card
    pub const PRICE: &str = r#"span[data-testid="price-and-discounted-price"]"#;

    /// Accessibility suffix appended to every title link text
    pub const NEW_WINDOW_SUFFIX: &str = "Opens in new window";
}

/// Constants for the flight fare aggregator
pub mod kayak {
    /// Flight-search base; route and date segments are appended as path
    pub const FLIGHTS_BASE: &str = "https://booking.kayak.com/flights";

    /// Fixed sort directive appended to every search URL
    pub const SORT_DIRECTIVE: &str = "sort=bestflight_a";

    /// The source scraper assumes this age for every child regardless of
    /// input. Preserved as-is; see DESIGN.md.
    pub const PLACEHOLDER_CHILD_AGE: &str = "11";

    /// One flight result card
    pub const RESULT_CARD: &str = ".resultInner";

    /// Booking link inside a card; its aria-label carries price and airline
    pub const BOOKING_LINK: &str = ".booking-link";

    /// One leg of a flight offer
    pub const FLIGHT_LEG: &str = ".flight";

    pub const DEPART_TIME: &str = ".depart-time";
    pub const ARRIVAL_TIME: &str = ".arrival-time";
    pub const TIME_MERIDIEM: &str = ".time-meridiem";

    /// Boilerplate occasionally prefixed to the airline name in aria-labels
    pub const AIRLINE_BOILERPLATE_PREFIX: &str = "all passengers., for ";
}
