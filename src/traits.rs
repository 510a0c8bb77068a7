//! Core collaborator traits for the trip planner.
//!
//! The planner consumes routing and weather data through these two seams.
//! Concrete adapters live in `ors` and `owm`; tests inject deterministic
//! fakes with no network access.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::forecast::ForecastRecord;
use crate::route::Route;

/// Failure surfaced by a provider adapter.
///
/// These never escape the planning pipeline itself: inside the core a
/// failed call degrades to missing data. Only the adapters' public
/// `Result` methods and the facade's route fetch report them.
#[derive(Debug)]
pub enum ProviderError {
    /// Transport-level failure (unreachable, timeout, non-2xx).
    Http(reqwest::Error),
    /// Response arrived but could not be interpreted.
    Malformed(String),
    /// The provider answered with nothing usable (no features, no records).
    NoData(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Http(err)
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Http(err) => write!(f, "provider request failed: {err}"),
            ProviderError::Malformed(detail) => write!(f, "malformed provider response: {detail}"),
            ProviderError::NoData(detail) => write!(f, "provider returned no data: {detail}"),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Http(err) => Some(err),
            _ => None,
        }
    }
}

/// Supplies a drivable route through an ordered list of stops.
///
/// The first stop is the origin and the last the destination; the returned
/// route's segment durations must sum to the total trip duration.
pub trait RoutingProvider {
    fn driving_route(
        &self,
        stops: &[String],
        departure_time: DateTime<Utc>,
    ) -> Result<Route, ProviderError>;
}

/// Supplies a time-indexed forecast horizon for a location.
///
/// Records span a multi-day horizon at a fixed interval (OpenWeatherMap:
/// 3-hour buckets over 5 days) and carry UTC timestamps.
pub trait WeatherProvider {
    fn forecast(&self, latitude: f64, longitude: f64)
        -> Result<Vec<ForecastRecord>, ProviderError>;
}
