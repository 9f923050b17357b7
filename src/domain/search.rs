//! Search request types deserialized from the query string
//!
//! Dates arrive in `d/m/Y` textual form and are reformatted by the query
//! builders; the check-out-not-before-check-in invariant is the caller's
//! responsibility and is not enforced here.

use serde::Deserialize;

/// Parameters for one hotel search request.
#[derive(Debug, Clone, Deserialize)]
pub struct HotelSearchRequest {
    pub city: String,
    #[serde(rename = "checkInDate")]
    pub check_in_date: String,
    #[serde(rename = "checkOutDate")]
    pub check_out_date: String,
    pub adults: u32,
    pub children: u32,
    pub rooms: u32,
}

/// Parameters for one flight search request.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightSearchRequest {
    #[serde(rename = "tripType")]
    pub trip_type: String,
    #[serde(rename = "departureDate")]
    pub departure_date: String,
    #[serde(rename = "returnDate", default)]
    pub return_date: Option<String>,
    pub origin: String,
    pub destination: String,
    pub adults: u32,
    pub children: u32,
}

/// Trip kind derived from the free-form `tripType` parameter.
///
/// Only "one way" (case-insensitive) selects a one-way search; every other
/// value means round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripType {
    OneWay,
    RoundTrip,
}

impl TripType {
    pub fn from_raw(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("one way") {
            Self::OneWay
        } else {
            Self::RoundTrip
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_way_is_case_insensitive() {
        assert_eq!(TripType::from_raw("one way"), TripType::OneWay);
        assert_eq!(TripType::from_raw("One Way"), TripType::OneWay);
        assert_eq!(TripType::from_raw("  ONE WAY "), TripType::OneWay);
    }

    #[test]
    fn anything_else_is_round_trip() {
        assert_eq!(TripType::from_raw("round trip"), TripType::RoundTrip);
        assert_eq!(TripType::from_raw("return"), TripType::RoundTrip);
        assert_eq!(TripType::from_raw(""), TripType::RoundTrip);
    }
}
