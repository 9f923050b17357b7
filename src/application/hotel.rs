//! Hotel scrape service
//!
//! One request end-to-end: build the search URL, fetch the page once
//! with a browser-like identity, extract and normalize the property
//! cards. Requests share nothing but this immutable service.

use scraper::Html;
use tracing::{debug, info};

use crate::domain::{HotelListing, HotelSearchRequest};
use crate::infrastructure::config::{AppConfig, PricingConfig};
use crate::infrastructure::http_client::PageFetcher;
use crate::infrastructure::parsing::HotelListParser;

use super::error::ScrapeError;
use super::query;

pub struct HotelScrapeService {
    fetcher: PageFetcher,
    parser: HotelListParser,
    pricing: PricingConfig,
}

impl HotelScrapeService {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new(&config.fetch)?,
            parser: HotelListParser::new()?,
            pricing: config.pricing.clone(),
        })
    }

    /// Scrape hotel listings for one search request.
    pub async fn scrape(
        &self,
        request: &HotelSearchRequest,
    ) -> Result<Vec<HotelListing>, ScrapeError> {
        let url = query::hotel_search_url(request)?;
        debug!("hotel search url: {url}");

        let body = self.fetcher.fetch_text(&url).await?;

        let document = Html::parse_document(&body);
        let listings = self.parser.extract_listings(&document, &self.pricing)?;

        info!("scraped {} hotel listings for {}", listings.len(), request.city);
        Ok(listings)
    }
}
