//! Flight result-card extraction
//!
//! Each result card carries a booking link whose aria-label text encodes
//! price and airline, plus one element per flight leg with departure and
//! arrival times. Fields that cannot be located default to the `"N/A"`
//! sentinel; a card is accepted only when airline, price and all four leg
//! times are real values. Any extraction error in one card is logged and
//! that card alone is dropped.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::domain::FlightListing;
use crate::infrastructure::config::kayak;

use super::error::{ExtractionError, ExtractionResult, compile_selector};
use super::first_text;

/// Placeholder for a field that could not be located. Cards carrying it
/// in a gated field are dropped from the result set.
pub const SENTINEL: &str = "N/A";

/// Currency-glyph-prefixed amount, thousands-separated, in an aria-label.
static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\$€₪]\d{1,3}(?:,\d{3})*").expect("price pattern compiles"));

/// Airline name inside the fixed "for X flight" aria-label phrase.
static AIRLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"for (.*?) flight").expect("airline pattern compiles"));

/// Departure and arrival times of one leg, with meridiem markers.
struct LegTimes {
    depart_time: String,
    depart_meridiem: String,
    arrival_time: String,
    arrival_meridiem: String,
}

/// Parser for flight search-results pages
pub struct FlightResultParser {
    card_selector: Selector,
    booking_link_selector: Selector,
    leg_selector: Selector,
    depart_time_selector: Selector,
    arrival_time_selector: Selector,
    meridiem_selector: Selector,
}

impl FlightResultParser {
    pub fn new() -> ExtractionResult<Self> {
        Ok(Self {
            card_selector: compile_selector(kayak::RESULT_CARD)?,
            booking_link_selector: compile_selector(kayak::BOOKING_LINK)?,
            leg_selector: compile_selector(kayak::FLIGHT_LEG)?,
            depart_time_selector: compile_selector(kayak::DEPART_TIME)?,
            arrival_time_selector: compile_selector(kayak::ARRIVAL_TIME)?,
            meridiem_selector: compile_selector(kayak::TIME_MERIDIEM)?,
        })
    }

    /// Extract all accepted flight listings from a rendered results page.
    ///
    /// Failure is per card: a card that errors is logged and skipped, and
    /// extraction continues with the next one.
    pub fn extract_listings(&self, document: &Html) -> Vec<FlightListing> {
        let cards: Vec<ElementRef<'_>> = document.select(&self.card_selector).collect();
        debug!("found {} flight result cards", cards.len());

        let mut listings = Vec::new();
        for (index, card) in cards.iter().enumerate() {
            match self.extract_card(card) {
                Ok(Some(listing)) => listings.push(listing),
                Ok(None) => debug!("flight card {index} incomplete, dropped"),
                Err(error) => warn!("skipping flight card {index}: {error}"),
            }
        }

        debug!("extracted {} flight listings", listings.len());
        listings
    }

    /// Extract one card. `Ok(None)` means the card failed the acceptance
    /// gate (missing leg or sentinel in a gated field).
    fn extract_card(&self, card: &ElementRef<'_>) -> ExtractionResult<Option<FlightListing>> {
        let booking_link = card
            .select(&self.booking_link_selector)
            .next()
            .ok_or(ExtractionError::required_field_missing("booking-link"))?;
        let aria_label = booking_link
            .value()
            .attr("aria-label")
            .ok_or(ExtractionError::required_field_missing("aria-label"))?;

        let price = PRICE_RE
            .find(aria_label)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| SENTINEL.to_string());

        let airline = AIRLINE_RE
            .captures(aria_label)
            .and_then(|captures| captures.get(1))
            .map(|m| {
                let name = m.as_str();
                name.strip_prefix(kayak::AIRLINE_BOILERPLATE_PREFIX)
                    .unwrap_or(name)
                    .trim()
                    .to_string()
            })
            .unwrap_or_else(|| SENTINEL.to_string());

        let link = booking_link
            .value()
            .attr("href")
            .unwrap_or_default()
            .to_string();

        // First leg is the outbound, second the return.
        let legs: Vec<ElementRef<'_>> = card.select(&self.leg_selector).collect();
        if legs.len() < 2 {
            return Ok(None);
        }
        let outbound = self.extract_leg(&legs[0]);
        let return_leg = self.extract_leg(&legs[1]);

        let gated = [
            airline.as_str(),
            price.as_str(),
            outbound.depart_time.as_str(),
            outbound.arrival_time.as_str(),
            return_leg.depart_time.as_str(),
            return_leg.arrival_time.as_str(),
        ];
        if gated.contains(&SENTINEL) {
            return Ok(None);
        }

        Ok(Some(FlightListing {
            airline,
            price,
            outbound_departure: format!("{} {}", outbound.depart_time, outbound.depart_meridiem),
            outbound_arrival: format!("{} {}", outbound.arrival_time, outbound.arrival_meridiem),
            return_departure: format!("{} {}", return_leg.depart_time, return_leg.depart_meridiem),
            return_arrival: format!("{} {}", return_leg.arrival_time, return_leg.arrival_meridiem),
            link,
        }))
    }

    /// Pull the time fields of one leg, substituting the sentinel for
    /// anything absent. Meridiem markers are paired positionally: first
    /// marker with the departure time, second with the arrival time.
    fn extract_leg(&self, leg: &ElementRef<'_>) -> LegTimes {
        let depart_time =
            first_text(leg, &self.depart_time_selector).unwrap_or_else(|| SENTINEL.to_string());
        let arrival_time =
            first_text(leg, &self.arrival_time_selector).unwrap_or_else(|| SENTINEL.to_string());

        let meridiems: Vec<String> = leg
            .select(&self.meridiem_selector)
            .map(|e| e.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();
        let depart_meridiem = meridiems.first().cloned().unwrap_or_else(|| SENTINEL.to_string());
        let arrival_meridiem = meridiems
            .get(1)
            .or_else(|| meridiems.first())
            .cloned()
            .unwrap_or_else(|| SENTINEL.to_string());

        LegTimes {
            depart_time,
            depart_meridiem,
            arrival_time,
            arrival_meridiem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETE_CARD: &str = r#"
        <div class="resultInner">
            <a class="booking-link" href="https://booking.kayak.com/book/1"
               aria-label="$1,250 total price for all passengers., for El Al flight">
            </a>
            <div class="flight">
                <span class="depart-time">10:35</span>
                <span class="time-meridiem">pm</span>
                <span class="arrival-time">4:20</span>
                <span class="time-meridiem">am</span>
            </div>
            <div class="flight">
                <span class="depart-time">7:10</span>
                <span class="time-meridiem">am</span>
                <span class="arrival-time">12:45</span>
                <span class="time-meridiem">pm</span>
            </div>
        </div>
    "#;

    fn parser() -> FlightResultParser {
        FlightResultParser::new().unwrap()
    }

    #[test]
    fn extracts_a_complete_card() {
        let html = Html::parse_document(COMPLETE_CARD);
        let listings = parser().extract_listings(&html);
        assert_eq!(listings.len(), 1);

        let listing = &listings[0];
        assert_eq!(listing.airline, "El Al");
        assert_eq!(listing.price, "$1,250");
        assert_eq!(listing.outbound_departure, "10:35 pm");
        assert_eq!(listing.outbound_arrival, "4:20 am");
        assert_eq!(listing.return_departure, "7:10 am");
        assert_eq!(listing.return_arrival, "12:45 pm");
        assert_eq!(listing.link, "https://booking.kayak.com/book/1");
    }

    #[test]
    fn strips_passenger_boilerplate_from_airline() {
        let html = Html::parse_document(
            r#"
            <div class="resultInner">
                <a class="booking-link" href="/book/2"
                   aria-label="₪980, for all passengers., for Wizz Air flight">
                </a>
                <div class="flight">
                    <span class="depart-time">6:00</span>
                    <span class="time-meridiem">am</span>
                    <span class="arrival-time">9:30</span>
                    <span class="time-meridiem">am</span>
                </div>
                <div class="flight">
                    <span class="depart-time">11:00</span>
                    <span class="time-meridiem">pm</span>
                    <span class="arrival-time">2:15</span>
                    <span class="time-meridiem">am</span>
                </div>
            </div>
        "#,
        );

        let listings = parser().extract_listings(&html);
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].airline, "Wizz Air");
        assert_eq!(listings[0].price, "₪980");
    }

    #[test]
    fn card_missing_return_arrival_time_is_dropped() {
        let html = Html::parse_document(
            r#"
            <div class="resultInner">
                <a class="booking-link" href="/book/3"
                   aria-label="€640 for Lufthansa flight">
                </a>
                <div class="flight">
                    <span class="depart-time">8:00</span>
                    <span class="time-meridiem">am</span>
                    <span class="arrival-time">11:00</span>
                    <span class="time-meridiem">am</span>
                </div>
                <div class="flight">
                    <span class="depart-time">5:00</span>
                    <span class="time-meridiem">pm</span>
                </div>
            </div>
        "#,
        );

        assert!(parser().extract_listings(&html).is_empty());
    }

    #[test]
    fn card_with_single_leg_is_dropped() {
        let html = Html::parse_document(
            r#"
            <div class="resultInner">
                <a class="booking-link" href="/book/4" aria-label="$300 for Delta flight"></a>
                <div class="flight">
                    <span class="depart-time">9:00</span>
                    <span class="time-meridiem">am</span>
                    <span class="arrival-time">1:00</span>
                    <span class="time-meridiem">pm</span>
                </div>
            </div>
        "#,
        );

        assert!(parser().extract_listings(&html).is_empty());
    }

    #[test]
    fn card_without_booking_link_is_skipped_and_others_survive() {
        let broken = r#"<div class="resultInner"><span>no link here</span></div>"#;
        let html = Html::parse_document(&format!("{broken}{COMPLETE_CARD}"));

        let listings = parser().extract_listings(&html);
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].airline, "El Al");
    }

    #[test]
    fn aria_label_without_price_yields_sentinel_and_drops_card() {
        let html = Html::parse_document(
            r#"
            <div class="resultInner">
                <a class="booking-link" href="/book/5" aria-label="for United flight">
                </a>
                <div class="flight">
                    <span class="depart-time">9:00</span>
                    <span class="time-meridiem">am</span>
                    <span class="arrival-time">1:00</span>
                    <span class="time-meridiem">pm</span>
                </div>
                <div class="flight">
                    <span class="depart-time">3:00</span>
                    <span class="time-meridiem">pm</span>
                    <span class="arrival-time">7:00</span>
                    <span class="time-meridiem">pm</span>
                </div>
            </div>
        "#,
        );

        assert!(parser().extract_listings(&html).is_empty());
    }
}
