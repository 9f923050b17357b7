//! Search-URL builders
//!
//! Turn normalized search parameters into the fully-formed search-results
//! URL each site expects. The booking site takes date components as
//! independent year/month/day query parameters, so dates are split
//! textually; the fare aggregator takes `YYYY-MM-DD` path segments, so
//! dates go through calendar-aware parsing that rejects impossible dates.

use chrono::NaiveDate;

use crate::domain::{FlightSearchRequest, HotelSearchRequest, TripType};
use crate::infrastructure::config::{booking, kayak};

use super::error::ScrapeError;

/// Build the hotel search-results URL.
pub fn hotel_search_url(request: &HotelSearchRequest) -> Result<String, ScrapeError> {
    let (checkin_day, checkin_month, checkin_year) = split_date(&request.check_in_date)?;
    let (checkout_day, checkout_month, checkout_year) = split_date(&request.check_out_date)?;

    let city = request.city.replace(' ', "+");

    Ok(format!(
        "{base}?ss={city}\
         &checkin_year={checkin_year}&checkin_month={checkin_month}&checkin_monthday={checkin_day}\
         &checkout_year={checkout_year}&checkout_month={checkout_month}&checkout_monthday={checkout_day}\
         &group_adults={adults}&group_children={children}&no_rooms={rooms}",
        base = booking::SEARCH_RESULTS_BASE,
        adults = request.adults,
        children = request.children,
        rooms = request.rooms,
    ))
}

/// Build the flight search-results URL.
pub fn flight_search_url(request: &FlightSearchRequest) -> Result<String, ScrapeError> {
    let departure = reformat_calendar_date(&request.departure_date)?;
    let route = format!("{}-{}", request.origin, request.destination);

    let dates = match TripType::from_raw(&request.trip_type) {
        TripType::OneWay => departure,
        TripType::RoundTrip => {
            let raw = request
                .return_date
                .as_deref()
                .filter(|value| !value.is_empty())
                .ok_or(ScrapeError::MissingReturnDate)?;
            format!("{departure}/{}", reformat_calendar_date(raw)?)
        }
    };

    let mut url = format!(
        "{base}/{route}/{dates}/{adults}adults",
        base = kayak::FLIGHTS_BASE,
        adults = request.adults,
    );

    // One placeholder age per child; omitted entirely for adult-only trips.
    if request.children > 0 {
        let ages = vec![kayak::PLACEHOLDER_CHILD_AGE; request.children as usize].join("-");
        url.push_str(&format!("/children-{ages}"));
    }

    url.push_str(&format!("?{}", kayak::SORT_DIRECTIVE));
    Ok(url)
}

/// Split a `d/m/Y` date string into its textual components.
fn split_date(value: &str) -> Result<(&str, &str, &str), ScrapeError> {
    let mut parts = value.split('/');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(day), Some(month), Some(year), None) => Ok((day, month, year)),
        _ => Err(ScrapeError::invalid_date(value, "expected day/month/year")),
    }
}

/// Reformat a `d/m/Y` date into `YYYY-MM-DD`, rejecting invalid calendar
/// dates such as 31/04.
fn reformat_calendar_date(value: &str) -> Result<String, ScrapeError> {
    NaiveDate::parse_from_str(value, "%d/%m/%Y")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|error| ScrapeError::invalid_date(value, error))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn hotel_request() -> HotelSearchRequest {
        HotelSearchRequest {
            city: "Tel Aviv".to_string(),
            check_in_date: "25/12/2024".to_string(),
            check_out_date: "28/12/2024".to_string(),
            adults: 2,
            children: 1,
            rooms: 1,
        }
    }

    fn flight_request() -> FlightSearchRequest {
        FlightSearchRequest {
            trip_type: "round trip".to_string(),
            departure_date: "05/03/2025".to_string(),
            return_date: Some("12/03/2025".to_string()),
            origin: "TLV".to_string(),
            destination: "LHR".to_string(),
            adults: 2,
            children: 0,
        }
    }

    #[test]
    fn hotel_url_splits_dates_into_components() {
        let url = hotel_search_url(&hotel_request()).unwrap();
        assert!(url.starts_with("https://www.booking.com/searchresults.html?ss=Tel+Aviv"));
        assert!(url.contains("checkin_year=2024&checkin_month=12&checkin_monthday=25"));
        assert!(url.contains("checkout_year=2024&checkout_month=12&checkout_monthday=28"));
        assert!(url.contains("group_adults=2&group_children=1&no_rooms=1"));
    }

    #[rstest]
    #[case("25-12-2024")]
    #[case("25/12")]
    #[case("25/12/2024/1")]
    fn hotel_url_rejects_malformed_dates(#[case] bad: &str) {
        let mut request = hotel_request();
        request.check_in_date = bad.to_string();
        let error = hotel_search_url(&request).unwrap_err();
        assert!(error.is_parameter_error());
    }

    #[test]
    fn flight_url_round_trip_joins_both_dates() {
        let url = flight_search_url(&flight_request()).unwrap();
        assert_eq!(
            url,
            "https://booking.kayak.com/flights/TLV-LHR/2025-03-05/2025-03-12/2adults?sort=bestflight_a"
        );
    }

    #[test]
    fn flight_url_one_way_omits_return_segment() {
        let mut request = flight_request();
        request.trip_type = "One Way".to_string();
        let url = flight_search_url(&request).unwrap();
        assert!(url.contains("/TLV-LHR/2025-03-05/2adults"));
        assert!(!url.contains("2025-03-12"));
    }

    #[test]
    fn flight_url_children_get_placeholder_ages() {
        let mut request = flight_request();
        request.children = 3;
        let url = flight_search_url(&request).unwrap();
        assert!(url.contains("/2adults/children-11-11-11?"));
    }

    #[test]
    fn flight_url_no_children_segment_when_zero() {
        let url = flight_search_url(&flight_request()).unwrap();
        assert!(!url.contains("children"));
    }

    #[rstest]
    #[case("31/04/2025")] // April has 30 days
    #[case("29/02/2025")] // not a leap year
    #[case("2025-03-05")]
    fn flight_url_rejects_invalid_calendar_dates(#[case] bad: &str) {
        let mut request = flight_request();
        request.departure_date = bad.to_string();
        let error = flight_search_url(&request).unwrap_err();
        assert!(error.is_parameter_error());
    }

    #[test]
    fn flight_url_round_trip_without_return_date_is_an_error() {
        let mut request = flight_request();
        request.return_date = None;
        assert!(matches!(
            flight_search_url(&request).unwrap_err(),
            ScrapeError::MissingReturnDate
        ));
    }
}
