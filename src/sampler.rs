//! Geometry sampler: turns a route into space-time sample points.
//!
//! Points are spaced uniformly in *time* along the trip. Spacing in arc
//! length is only uniform when the decoded polyline itself is, which it
//! generally is not: the coordinate pick is proportional by index, not
//! resampled by distance. This is a known approximation, not a bug.

use chrono::{DateTime, Duration, Utc};

use crate::route::Route;

/// A (location, estimated-arrival-time) pair along a route.
///
/// Derived and ephemeral: created fresh per sampling pass, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub latitude: f64,
    pub longitude: f64,
    pub time: DateTime<Utc>,
}

/// Samples `num_points` evenly time-spaced points along `route`.
///
/// For each `i` in `1..=num_points` the point time is
/// `departure + i * total_duration / (num_points + 1)` and the coordinate
/// is picked by index proportionally into the polyline, clamped to the
/// last point.
///
/// A route with no coordinates or without positive duration yields an
/// empty vec; that is a degenerate input, not an error.
pub fn sample(route: &Route, departure_time: DateTime<Utc>, num_points: usize) -> Vec<SamplePoint> {
    let coordinates = route.polyline().points();
    let total_duration = route.total_duration_secs();
    if coordinates.is_empty() || total_duration <= 0.0 || num_points == 0 {
        return Vec::new();
    }

    let time_increment = total_duration / (num_points as f64 + 1.0);

    let mut samples = Vec::with_capacity(num_points);
    for i in 1..=num_points {
        let offset_secs = time_increment * i as f64;
        let point_time = departure_time + Duration::milliseconds((offset_secs * 1000.0) as i64);

        let mut point_index = coordinates.len() * i / (num_points + 1);
        if point_index >= coordinates.len() {
            point_index = coordinates.len() - 1;
        }

        let (latitude, longitude) = coordinates[point_index];
        samples.push(SamplePoint {
            latitude,
            longitude,
            time: point_time,
        });
    }

    samples
}
