//! Test fixtures for trip-planner.
//!
//! Provides deterministic fakes and realistic test data:
//! - Real Great Lakes corridor locations (Toronto to Chicago)
//! - Scripted weather providers with no network access
//! - A static routing provider serving the corridor route

pub mod great_lakes_corridor;

pub use great_lakes_corridor::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use trip_planner::forecast::ForecastRecord;
use trip_planner::route::Route;
use trip_planner::traits::{ProviderError, RoutingProvider, WeatherProvider};

/// Weather fake: snow at scripted locations until a per-location cutoff,
/// clear afterwards.
///
/// Serves an hourly horizon spanning 3 hours before to 7 hours after the
/// base time, which covers every candidate window the tests exercise.
pub struct ScriptedWeather {
    base: DateTime<Utc>,
    /// (latitude, snow cutoff as minutes after base); locations not listed
    /// are always clear.
    snow_until: Vec<(f64, i64)>,
}

impl ScriptedWeather {
    pub fn new(base: DateTime<Utc>, snow_until: Vec<(f64, i64)>) -> Self {
        Self { base, snow_until }
    }

    /// Clear skies everywhere, at any time.
    pub fn all_clear(base: DateTime<Utc>) -> Self {
        Self::new(base, Vec::new())
    }

    fn cutoff_for(&self, latitude: f64) -> Option<DateTime<Utc>> {
        self.snow_until
            .iter()
            .find(|(lat, _)| *lat == latitude)
            .map(|(_, minutes)| self.base + Duration::minutes(*minutes))
    }
}

impl WeatherProvider for ScriptedWeather {
    fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastRecord>, ProviderError> {
        let cutoff = self.cutoff_for(latitude);
        let records = (-3..=7)
            .map(|hour| {
                let time = self.base + Duration::hours(hour);
                let snowy = cutoff.is_some_and(|cutoff| time < cutoff);
                if snowy {
                    ForecastRecord {
                        time,
                        description: "light snow".to_string(),
                        temperature_c: -2.0,
                        wind_speed_mps: 12.0,
                        location: Some((latitude, longitude)),
                    }
                } else {
                    ForecastRecord {
                        time,
                        description: "partly cloudy".to_string(),
                        temperature_c: 15.0,
                        wind_speed_mps: 8.0,
                        location: Some((latitude, longitude)),
                    }
                }
            })
            .collect();

        Ok(records)
    }
}

/// Weather fake that always fails, for degraded-lookup paths.
pub struct UnreachableWeather;

impl WeatherProvider for UnreachableWeather {
    fn forecast(&self, latitude: f64, longitude: f64) -> Result<Vec<ForecastRecord>, ProviderError> {
        Err(ProviderError::NoData(format!(
            "no forecast for ({latitude}, {longitude})"
        )))
    }
}

/// Weather fake that fails south of a latitude boundary, for partial-data
/// paths.
pub struct PatchyWeather {
    pub inner: ScriptedWeather,
    pub fails_below_lat: f64,
}

impl WeatherProvider for PatchyWeather {
    fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastRecord>, ProviderError> {
        if latitude < self.fails_below_lat {
            return Err(ProviderError::NoData("coverage gap".to_string()));
        }
        self.inner.forecast(latitude, longitude)
    }
}

/// Wraps a weather provider and counts calls, for asserting that no
/// search runs when none is needed.
pub struct CountingWeather<W> {
    pub inner: W,
    pub calls: Arc<AtomicUsize>,
}

impl<W> CountingWeather<W> {
    pub fn new(inner: W) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl<W: WeatherProvider> WeatherProvider for CountingWeather<W> {
    fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastRecord>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.forecast(latitude, longitude)
    }
}

/// Routing fake serving one fixed route regardless of stops.
pub struct StaticRouting {
    pub route: Route,
}

impl RoutingProvider for StaticRouting {
    fn driving_route(
        &self,
        _stops: &[String],
        _departure_time: DateTime<Utc>,
    ) -> Result<Route, ProviderError> {
        Ok(self.route.clone())
    }
}

/// Routing fake that always fails.
pub struct UnreachableRouting;

impl RoutingProvider for UnreachableRouting {
    fn driving_route(
        &self,
        _stops: &[String],
        _departure_time: DateTime<Utc>,
    ) -> Result<Route, ProviderError> {
        Err(ProviderError::NoData("routing service down".to_string()))
    }
}
