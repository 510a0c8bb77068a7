//! Route value types for trip planning.
//!
//! This module provides types for working with a driving route as a decoded
//! coordinate sequence plus per-segment timing. Polyline encoding/decoding
//! happens at the boundary (when receiving from the routing provider or
//! sending to a frontend), never inside the planning core.

use serde::{Deserialize, Serialize};

/// A polyline representing a route geometry as decoded coordinates.
///
/// Stores latitude/longitude points directly for internal processing.
/// Encoding to/from the compact polyline format should happen at
/// API boundaries, not within the planning core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple, ordered start to end.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// One leg of a route as reported by the routing provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Driving time for this segment in seconds.
    pub duration_secs: f64,
    /// Driving distance for this segment in meters.
    pub distance_m: f64,
}

/// A driving route: decoded geometry plus per-segment timing.
///
/// Immutable once obtained from the routing provider; the total trip
/// duration is the sum of the segment durations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    polyline: Polyline,
    segments: Vec<Segment>,
}

impl Route {
    pub fn new(polyline: Polyline, segments: Vec<Segment>) -> Self {
        Self { polyline, segments }
    }

    pub fn polyline(&self) -> &Polyline {
        &self.polyline
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total trip duration in seconds, summed over segments.
    pub fn total_duration_secs(&self) -> f64 {
        self.segments.iter().map(|segment| segment.duration_secs).sum()
    }

    /// Total trip distance in meters, summed over segments.
    pub fn total_distance_m(&self) -> f64 {
        self.segments.iter().map(|segment| segment.distance_m).sum()
    }
}
