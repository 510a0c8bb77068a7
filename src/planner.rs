//! Trip-planning facade.
//!
//! Composes route fetch, weather sampling, hazard analysis and the
//! departure-time search into one caller-facing answer. Weather problems
//! only thin out the result; a missing route is the one fatal error,
//! since there is nothing to plan without it.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::forecast::{ForecastLookup, ForecastRecord};
use crate::hazard::{analyze_all, Hazard};
use crate::optimizer::{suggest, weather_along_route, SuggestOptions};
use crate::traits::{ProviderError, RoutingProvider, WeatherProvider};

/// Coarse weather risk bucket for a planned trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherRisk {
    Low,
    Medium,
    High,
}

impl WeatherRisk {
    fn from_hazard_count(count: usize) -> Self {
        match count {
            0 => WeatherRisk::Low,
            1 | 2 => WeatherRisk::Medium,
            _ => WeatherRisk::High,
        }
    }
}

/// Weather at one sampled point along the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherStop {
    pub latitude: f64,
    pub longitude: f64,
    /// Forecast bucket time nearest the estimated arrival at this point
    /// (UTC).
    pub arrival_time: DateTime<Utc>,
    /// Human-readable summary, e.g. "light snow, -2°C".
    pub summary: String,
}

/// The planner's caller-facing answer for one trip request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub requested_departure: DateTime<Utc>,
    /// Departure time minimizing hazard exposure; equals the request when
    /// no improvement was found.
    pub suggested_departure: DateTime<Utc>,
    pub total_duration_secs: f64,
    pub total_distance_m: f64,
    /// Hazards detected at the requested departure time.
    pub hazards: Vec<Hazard>,
    /// Per-sample-point weather at the requested departure time.
    pub stops: Vec<WeatherStop>,
    pub risk: WeatherRisk,
}

/// Trip planner over injected routing and weather providers.
#[derive(Debug, Clone)]
pub struct TripPlanner<R, W> {
    routing: R,
    lookup: ForecastLookup<W>,
    options: SuggestOptions,
}

impl<R, W> TripPlanner<R, W>
where
    R: RoutingProvider,
    W: WeatherProvider + Sync,
{
    pub fn new(routing: R, weather: W, options: SuggestOptions) -> Self {
        Self {
            routing,
            lookup: ForecastLookup::new(weather),
            options,
        }
    }

    /// Plans a trip through `stops`, departing around `requested_departure`.
    ///
    /// `deadline`, when given, bounds the total wall-clock spent on
    /// forecast lookups; past it the plan is built from whatever weather
    /// was gathered.
    pub fn plan(
        &self,
        stops: &[String],
        requested_departure: DateTime<Utc>,
        deadline: Option<Instant>,
    ) -> Result<TripPlan, ProviderError> {
        let route = self.routing.driving_route(stops, requested_departure)?;
        debug!(
            duration_secs = route.total_duration_secs(),
            coordinates = route.polyline().len(),
            "fetched route"
        );

        let weather = weather_along_route(
            &route,
            requested_departure,
            self.options.num_points,
            &self.lookup,
            deadline,
        );
        let hazards = analyze_all(&weather, &self.options.thresholds);

        let suggested_departure = suggest(
            &route,
            &weather,
            requested_departure,
            &self.options,
            &self.lookup,
            deadline,
        );

        let weather_stops = weather.iter().map(weather_stop).collect::<Vec<_>>();
        let risk = WeatherRisk::from_hazard_count(hazards.len());

        info!(
            %requested_departure,
            %suggested_departure,
            hazards = hazards.len(),
            ?risk,
            "planned trip"
        );

        Ok(TripPlan {
            requested_departure,
            suggested_departure,
            total_duration_secs: route.total_duration_secs(),
            total_distance_m: route.total_distance_m(),
            hazards,
            stops: weather_stops,
            risk,
        })
    }
}

fn weather_stop(record: &ForecastRecord) -> WeatherStop {
    let (latitude, longitude) = record.location.unwrap_or((0.0, 0.0));
    WeatherStop {
        latitude,
        longitude,
        arrival_time: record.time,
        summary: format!("{}, {}°C", record.description, record.temperature_c),
    }
}
