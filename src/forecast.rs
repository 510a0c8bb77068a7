//! Forecast records and nearest-in-time lookup.
//!
//! The weather provider returns a discrete multi-day horizon; the lookup
//! picks the single record closest in time to a requested instant. All
//! timestamps are UTC by the time they reach this module; provider
//! adapters normalize at the boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::traits::WeatherProvider;

/// One discrete forecast bucket from the weather provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    /// Forecast bucket time (UTC).
    pub time: DateTime<Utc>,
    /// Free-text condition description, e.g. "light snow".
    pub description: String,
    /// Air temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Wind speed in meters per second.
    pub wind_speed_mps: f64,
    /// Location the record was fetched for, when known.
    pub location: Option<(f64, f64)>,
}

/// Picks the record whose timestamp is closest to `target`.
///
/// Ties keep the first record in provider order, so the choice is stable
/// and deterministic given stable provider ordering.
pub fn nearest_in_time(
    records: &[ForecastRecord],
    target: DateTime<Utc>,
) -> Option<&ForecastRecord> {
    let mut closest: Option<&ForecastRecord> = None;
    let mut min_diff = i64::MAX;

    for record in records {
        let diff = (record.time - target).num_seconds().abs();
        if diff < min_diff {
            min_diff = diff;
            closest = Some(record);
        }
    }

    closest
}

/// Forecast lookup over an injected weather provider.
///
/// Provider failures and empty horizons degrade to `None`: a missing
/// sample point, never an aborted pass.
#[derive(Debug, Clone)]
pub struct ForecastLookup<W> {
    provider: W,
}

impl<W: WeatherProvider> ForecastLookup<W> {
    pub fn new(provider: W) -> Self {
        Self { provider }
    }

    /// Fetches the forecast horizon for a location and selects the record
    /// nearest to `time`.
    pub fn lookup(
        &self,
        latitude: f64,
        longitude: f64,
        time: DateTime<Utc>,
    ) -> Option<ForecastRecord> {
        let records = match self.provider.forecast(latitude, longitude) {
            Ok(records) => records,
            Err(err) => {
                warn!(latitude, longitude, error = %err, "forecast lookup failed, skipping point");
                return None;
            }
        };

        nearest_in_time(&records, time).cloned().map(|mut record| {
            record.location.get_or_insert((latitude, longitude));
            record
        })
    }
}
