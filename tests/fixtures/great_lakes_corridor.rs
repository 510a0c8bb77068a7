//! Real Great Lakes corridor locations for realistic test fixtures.
//!
//! The Toronto to Chicago drive the scripted weather scenarios are built
//! around: roughly 500 km of the corridor, five hours of driving, with
//! the lake-effect snow belt in the northern half.

use chrono::{DateTime, TimeZone, Utc};
use trip_planner::route::{Polyline, Route, Segment};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

pub const TORONTO: Location = Location::new("Toronto, Canada", 43.6532, -79.3832);
pub const LONDON_ON: Location = Location::new("London, Ontario", 42.9849, -81.2453);
pub const DETROIT: Location = Location::new("Detroit, USA", 42.3314, -83.0458);
pub const CHICAGO: Location = Location::new("Chicago, USA", 41.8781, -87.6298);

pub const CORRIDOR: &[Location] = &[TORONTO, LONDON_ON, DETROIT, CHICAGO];

/// Five-hour Toronto to Chicago route: four decoded waypoints, two legs
/// of 9000 seconds each.
pub fn corridor_route() -> Route {
    Route::new(
        Polyline::new(CORRIDOR.iter().map(Location::coords).collect()),
        vec![
            Segment {
                duration_secs: 9000.0,
                distance_m: 250_000.0,
            },
            Segment {
                duration_secs: 9000.0,
                distance_m: 250_000.0,
            },
        ],
    )
}

/// The holiday-drive departure the scenarios are scripted around.
pub fn christmas_departure() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 25, 9, 0, 0).unwrap()
}

/// Snow cutoffs placing snow on the three northern waypoints long enough
/// that every candidate inside the symmetric window still crosses it,
/// while a departure two hours later clears all of them.
///
/// With four sample points the samples arrive at the waypoints one hour
/// apart; snow ends 2.5, 3.5 and 4.5 hours after base at Toronto, London
/// and Detroit respectively, and Chicago stays clear.
pub fn clearing_snow_cutoffs() -> Vec<(f64, i64)> {
    vec![
        (TORONTO.lat, 150),
        (LONDON_ON.lat, 210),
        (DETROIT.lat, 270),
    ]
}

/// Cutoffs keeping snow everywhere north of Chicago for the entire
/// served horizon, so every symmetric-window candidate ties.
pub fn persistent_snow_cutoffs() -> Vec<(f64, i64)> {
    vec![
        (TORONTO.lat, 600),
        (LONDON_ON.lat, 600),
        (DETROIT.lat, 600),
    ]
}
