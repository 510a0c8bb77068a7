//! Hazard classification of forecast records.
//!
//! Maps each record to at most one hazard via a fixed precedence of
//! condition checks. Reporting only the first matching condition keeps
//! hazard counts comparable across departure candidates; this is a
//! scoring rule, not a complete hazard enumeration.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::forecast::ForecastRecord;

/// Default temperature below which driving counts as hazardous, in °C.
const DEFAULT_FREEZING_C: f64 = 0.0;

/// Default wind speed above which driving counts as hazardous, in m/s.
const DEFAULT_STRONG_WIND_MPS: f64 = 15.0;

/// Thresholds for the temperature and wind rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierThresholds {
    /// Temperatures strictly below this are hazardous (°C).
    pub freezing_c: f64,
    /// Wind speeds strictly above this are hazardous (m/s).
    pub strong_wind_mps: f64,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            freezing_c: DEFAULT_FREEZING_C,
            strong_wind_mps: DEFAULT_STRONG_WIND_MPS,
        }
    }
}

/// The kind of adverse condition detected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HazardKind {
    SnowOrSleet,
    HeavyRain,
    Fog,
    /// Carries the observed temperature in °C.
    FreezingTemperature(f64),
    /// Carries the observed wind speed in m/s.
    StrongWind(f64),
}

/// An adverse weather condition at a point in time along a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub kind: HazardKind,
    /// Forecast bucket time at which the condition was detected (UTC).
    pub at: DateTime<Utc>,
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let when = self.at.format("%Y-%m-%d %H:%M");
        match self.kind {
            HazardKind::SnowOrSleet => write!(f, "Snow/Sleet at {when}"),
            HazardKind::HeavyRain => write!(f, "Heavy Rain at {when}"),
            HazardKind::Fog => write!(f, "Fog at {when}"),
            HazardKind::FreezingTemperature(temp) => {
                write!(f, "Freezing Temperatures ({temp}°C) at {when}")
            }
            HazardKind::StrongWind(speed) => {
                write!(f, "Strong Winds ({speed} m/s) at {when}")
            }
        }
    }
}

/// Classifies a forecast record into at most one hazard.
///
/// Precedence is fixed and first-match-wins: snow/sleet, heavy rain, fog,
/// freezing temperature, strong wind. String rules are case-insensitive
/// substring matches over the condition description.
pub fn classify(record: &ForecastRecord, thresholds: &ClassifierThresholds) -> Option<Hazard> {
    let description = record.description.to_lowercase();

    let kind = if description.contains("snow") || description.contains("sleet") {
        HazardKind::SnowOrSleet
    } else if description.contains("heavy rain") {
        HazardKind::HeavyRain
    } else if description.contains("fog") {
        HazardKind::Fog
    } else if record.temperature_c < thresholds.freezing_c {
        HazardKind::FreezingTemperature(record.temperature_c)
    } else if record.wind_speed_mps > thresholds.strong_wind_mps {
        HazardKind::StrongWind(record.wind_speed_mps)
    } else {
        return None;
    };

    Some(Hazard {
        kind,
        at: record.time,
    })
}

/// Classifies every record, keeping only the hazards, in input order.
pub fn analyze_all(records: &[ForecastRecord], thresholds: &ClassifierThresholds) -> Vec<Hazard> {
    records
        .iter()
        .filter_map(|record| classify(record, thresholds))
        .collect()
}
