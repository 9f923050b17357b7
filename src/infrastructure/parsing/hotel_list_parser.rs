//! Hotel result-card extraction
//!
//! Walks the fetched search-results markup, isolates property-card
//! elements and extracts name, link and normalized price from each. Cards
//! missing the title link or the price element are skipped silently; a
//! price that is present but unparseable fails the whole extraction.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::domain::HotelListing;
use crate::infrastructure::config::{PricingConfig, booking};

use super::error::{ExtractionResult, compile_selector};
use super::price;

/// CSS selectors locating the pieces of one hotel result card.
#[derive(Debug, Clone)]
pub struct HotelSelectors {
    pub card: String,
    pub title_link: String,
    pub price: String,
}

impl Default for HotelSelectors {
    fn default() -> Self {
        Self {
            card: booking::PROPERTY_CARD.to_string(),
            title_link: booking::TITLE_LINK.to_string(),
            price: booking::PRICE.to_string(),
        }
    }
}

/// Parser for hotel search-results pages
pub struct HotelListParser {
    card_selector: Selector,
    title_link_selector: Selector,
    price_selector: Selector,
}

impl HotelListParser {
    /// Create a parser with the default booking-site selectors.
    pub fn new() -> ExtractionResult<Self> {
        Self::with_selectors(&HotelSelectors::default())
    }

    pub fn with_selectors(selectors: &HotelSelectors) -> ExtractionResult<Self> {
        Ok(Self {
            card_selector: compile_selector(&selectors.card)?,
            title_link_selector: compile_selector(&selectors.title_link)?,
            price_selector: compile_selector(&selectors.price)?,
        })
    }

    /// Extract all complete hotel listings from a search-results page.
    pub fn extract_listings(
        &self,
        document: &Html,
        pricing: &PricingConfig,
    ) -> ExtractionResult<Vec<HotelListing>> {
        let mut listings = Vec::new();

        for card in document.select(&self.card_selector) {
            if let Some(listing) = self.extract_card(&card, pricing)? {
                listings.push(listing);
            }
        }

        debug!("extracted {} hotel listings", listings.len());
        Ok(listings)
    }

    /// Extract one card. `Ok(None)` means the card lacked a required
    /// element and was dropped; an unparseable present price is an error.
    fn extract_card(
        &self,
        card: &ElementRef<'_>,
        pricing: &PricingConfig,
    ) -> ExtractionResult<Option<HotelListing>> {
        let Some(title_link) = card.select(&self.title_link_selector).next() else {
            return Ok(None);
        };
        let Some(price_element) = card.select(&self.price_selector).next() else {
            return Ok(None);
        };

        let name = title_link
            .text()
            .collect::<String>()
            .replace(booking::NEW_WINDOW_SUFFIX, "")
            .trim()
            .to_string();
        let url = title_link.value().attr("href").unwrap_or_default();

        // The displayed price carries a non-breaking space between glyph
        // and amount.
        let price_text = price_element
            .text()
            .collect::<String>()
            .trim()
            .replace('\u{a0}', " ");
        let price = price::normalize_listing_price(&price_text, pricing.ils_to_usd_rate)?;

        if name.is_empty() || url.is_empty() {
            return Ok(None);
        }

        Ok(Some(HotelListing {
            hotel_name: name,
            url: url.to_string(),
            price,
        }))
    }
}
