//! Departure-time optimizer.
//!
//! Re-runs the sample/lookup/classify pipeline for a bounded set of
//! candidate departure offsets and keeps the one with the fewest hazards.
//! Candidates are independent, so they are evaluated on the rayon pool;
//! results are folded in configured order to keep selection deterministic.

use std::time::Instant;

use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::forecast::{ForecastLookup, ForecastRecord};
use crate::hazard::{analyze_all, ClassifierThresholds};
use crate::route::Route;
use crate::sampler::sample;
use crate::traits::WeatherProvider;

/// Default number of sample points along the route.
const DEFAULT_NUM_POINTS: usize = 5;

/// Options for the departure-time search.
///
/// The candidate offset set is configuration, not a constant: a symmetric
/// window suits providers with historical data, a forward-only horizon
/// suits forecast-only providers.
#[derive(Debug, Clone)]
pub struct SuggestOptions {
    /// Number of route sample points per candidate evaluation.
    pub num_points: usize,
    /// Ordered set of signed offsets from the requested departure time.
    pub candidate_offsets: Vec<Duration>,
    /// Thresholds for the hazard classifier.
    pub thresholds: ClassifierThresholds,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self::symmetric_window()
    }
}

impl SuggestOptions {
    /// Small symmetric search: two hours either side of the request.
    pub fn symmetric_window() -> Self {
        Self {
            num_points: DEFAULT_NUM_POINTS,
            candidate_offsets: (-2..=2).map(Duration::hours).collect(),
            thresholds: ClassifierThresholds::default(),
        }
    }

    /// Forward-only search over the multi-day forecast horizon, for
    /// providers that cannot answer about the past.
    pub fn forward_horizon() -> Self {
        Self {
            num_points: DEFAULT_NUM_POINTS,
            candidate_offsets: [3, 6, 9, 12, 15, 21, 24, 36, 48, 72, 96]
                .into_iter()
                .map(Duration::hours)
                .collect(),
            thresholds: ClassifierThresholds::default(),
        }
    }
}

/// Gathers the forecast at each sample point of `route` for a departure
/// at `departure_time`.
///
/// Failed lookups are skipped, so the result may be shorter than
/// `num_points`. Once `deadline` has passed no further lookups are issued
/// and whatever was gathered so far is returned; an empty result is a
/// valid outcome, never an error.
pub fn weather_along_route<W: WeatherProvider>(
    route: &Route,
    departure_time: DateTime<Utc>,
    num_points: usize,
    lookup: &ForecastLookup<W>,
    deadline: Option<Instant>,
) -> Vec<ForecastRecord> {
    let points = sample(route, departure_time, num_points);

    let mut records = Vec::with_capacity(points.len());
    for point in points {
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            debug!("deadline exceeded, returning partial weather samples");
            break;
        }
        if let Some(record) = lookup.lookup(point.latitude, point.longitude, point.time) {
            records.push(record);
        }
    }

    records
}

/// Suggests a departure time that minimizes hazard exposure along `route`.
///
/// If `initial_weather` is empty or hazard-free the requested time is
/// returned unchanged and no search runs. Otherwise every candidate
/// offset's full pipeline is evaluated concurrently and the candidate with
/// strictly fewer hazards than the running minimum wins; ties keep the
/// earliest-evaluated candidate, so the requested time wins all its ties.
///
/// Always returns an answer; absent any improvement, the original
/// request.
pub fn suggest<W: WeatherProvider + Sync>(
    route: &Route,
    initial_weather: &[ForecastRecord],
    requested_departure: DateTime<Utc>,
    options: &SuggestOptions,
    lookup: &ForecastLookup<W>,
    deadline: Option<Instant>,
) -> DateTime<Utc> {
    if initial_weather.is_empty() {
        return requested_departure;
    }

    let initial_hazards = analyze_all(initial_weather, &options.thresholds);
    if initial_hazards.is_empty() {
        return requested_departure;
    }

    info!(count = initial_hazards.len(), "hazards detected at requested departure");
    for hazard in &initial_hazards {
        debug!(%hazard, "detected hazard");
    }

    // Candidate evaluations are independent reads; run them on the rayon
    // pool and collect in configured order so the fold below stays
    // deterministic.
    let candidates: Vec<(Duration, usize)> = options
        .candidate_offsets
        .par_iter()
        .map(|&offset| {
            let candidate_departure = requested_departure + offset;
            let weather =
                weather_along_route(route, candidate_departure, options.num_points, lookup, deadline);
            let hazard_count = analyze_all(&weather, &options.thresholds).len();
            debug!(
                offset_hours = offset.num_hours(),
                hazard_count, "evaluated departure candidate"
            );
            (offset, hazard_count)
        })
        .collect();

    let mut best_departure = requested_departure;
    let mut min_hazards = initial_hazards.len();

    for (offset, hazard_count) in candidates {
        if hazard_count < min_hazards {
            min_hazards = hazard_count;
            best_departure = requested_departure + offset;
        }
    }

    if best_departure != requested_departure {
        info!(
            suggested = %best_departure,
            hazards = min_hazards,
            "suggesting alternative departure time"
        );
    }

    best_departure
}
