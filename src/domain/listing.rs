//! Listing records produced by one extraction pass

use serde::Serialize;

/// One hotel result card, normalized for presentation.
///
/// All three fields are mandatory; a card missing any source field is
/// dropped during extraction. `price` carries the normalized
/// target-currency form, e.g. `"267$"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotelListing {
    pub hotel_name: String,
    pub url: String,
    pub price: String,
}

/// One flight offer with both legs of a round trip.
///
/// `price` keeps the original currency glyph and amount exactly as the
/// source page displayed it. Times carry their meridiem marker, e.g.
/// `"10:35 pm"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightListing {
    pub airline: String,
    pub price: String,
    #[serde(rename = "outboundDeparture")]
    pub outbound_departure: String,
    #[serde(rename = "outboundArrival")]
    pub outbound_arrival: String,
    #[serde(rename = "returnDeparture")]
    pub return_departure: String,
    #[serde(rename = "returnArrival")]
    pub return_arrival: String,
    pub link: String,
}
