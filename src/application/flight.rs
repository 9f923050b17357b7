//! Flight scrape service
//!
//! One request end-to-end: build the search URL, acquire the rendered
//! page through a dedicated headless browser, extract flight cards. The
//! browser drive is synchronous, so it runs on a blocking thread; the
//! browser itself lives and dies within that closure.

use std::sync::Arc;

use anyhow::Context;
use scraper::Html;
use tracing::{debug, info};

use crate::domain::{FlightListing, FlightSearchRequest};
use crate::infrastructure::browser::DynamicPageFetcher;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::parsing::FlightResultParser;

use super::error::ScrapeError;
use super::query;

pub struct FlightScrapeService {
    fetcher: Arc<DynamicPageFetcher>,
    parser: FlightResultParser,
}

impl FlightScrapeService {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            fetcher: Arc::new(DynamicPageFetcher::new(
                config.fetch.user_agent.clone(),
                config.browser.clone(),
            )),
            parser: FlightResultParser::new()?,
        })
    }

    /// Scrape flight listings for one search request.
    pub async fn scrape(
        &self,
        request: &FlightSearchRequest,
    ) -> Result<Vec<FlightListing>, ScrapeError> {
        let url = query::flight_search_url(request)?;
        debug!("flight search url: {url}");

        let fetcher = Arc::clone(&self.fetcher);
        let html = tokio::task::spawn_blocking(move || fetcher.fetch_rendered(&url))
            .await
            .context("browser acquisition task failed")??;

        let document = Html::parse_document(&html);
        let listings = self.parser.extract_listings(&document);

        info!(
            "scraped {} flight listings for {}-{}",
            listings.len(),
            request.origin,
            request.destination
        );
        Ok(listings)
    }
}
