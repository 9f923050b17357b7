//! Domain types for travel search scraping
//!
//! Pure data: typed search requests arriving at the HTTP boundary and the
//! listing records produced by one extraction pass. Records are created
//! during extraction, never mutated, and live only until they are
//! serialized into the response.

pub mod listing;
pub mod search;

pub use listing::{FlightListing, HotelListing};
pub use search::{FlightSearchRequest, HotelSearchRequest, TripType};
