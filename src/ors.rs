//! OpenRouteService HTTP adapter for driving routes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::route::{Polyline, Route, Segment};
use crate::traits::{ProviderError, RoutingProvider};

#[derive(Debug, Clone)]
pub struct OrsConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for OrsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openrouteservice.org".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrsClient {
    config: OrsConfig,
    client: reqwest::blocking::Client,
}

impl OrsClient {
    pub fn new(config: OrsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Resolves a free-text place name to (lat, lon) via the first
    /// geocoding match.
    pub fn geocode(&self, text: &str) -> Result<(f64, f64), ProviderError> {
        let url = format!("{}/geocode/search", self.config.base_url);
        let response = self
            .client
            .get(url)
            .query(&[("api_key", self.config.api_key.as_str()), ("text", text)])
            .send()?
            .error_for_status()?
            .json::<OrsGeocodeResponse>()?;

        let feature = response
            .features
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::NoData(format!("no geocoding match for '{text}'")))?;

        match feature.geometry.coordinates.as_slice() {
            // Wire order is [lon, lat]; flipped here at the boundary.
            [lon, lat] => Ok((*lat, *lon)),
            other => Err(ProviderError::Malformed(format!(
                "geocode coordinates had {} elements",
                other.len()
            ))),
        }
    }
}

impl RoutingProvider for OrsClient {
    fn driving_route(
        &self,
        stops: &[String],
        _departure_time: DateTime<Utc>,
    ) -> Result<Route, ProviderError> {
        if stops.is_empty() {
            return Err(ProviderError::NoData("no stops supplied".to_string()));
        }

        // ORS wants [lon, lat] pairs.
        let mut coordinates = Vec::with_capacity(stops.len());
        for stop in stops {
            let (lat, lon) = self.geocode(stop)?;
            debug!(%stop, lat, lon, "geocoded stop");
            coordinates.push([lon, lat]);
        }

        let url = format!("{}/v2/directions/driving-car/geojson", self.config.base_url);
        let response = self
            .client
            .post(url)
            .header("Authorization", &self.config.api_key)
            .json(&OrsDirectionsRequest { coordinates })
            .send()?
            .error_for_status()?
            .json::<OrsDirectionsResponse>()?;

        route_from_response(response)
    }
}

fn route_from_response(response: OrsDirectionsResponse) -> Result<Route, ProviderError> {
    let feature = response
        .features
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::NoData("directions response had no features".to_string()))?;

    let points = feature
        .geometry
        .coordinates
        .into_iter()
        .map(|pair| match pair.as_slice() {
            [lon, lat] => Ok((*lat, *lon)),
            other => Err(ProviderError::Malformed(format!(
                "route coordinate had {} elements",
                other.len()
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let segments = feature
        .properties
        .segments
        .into_iter()
        .map(|segment| Segment {
            duration_secs: segment.duration,
            distance_m: segment.distance,
        })
        .collect::<Vec<_>>();

    if segments.is_empty() {
        return Err(ProviderError::NoData("route had no segments".to_string()));
    }

    Ok(Route::new(Polyline::new(points), segments))
}

#[derive(Debug, Serialize)]
struct OrsDirectionsRequest {
    coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
struct OrsGeocodeResponse {
    #[serde(default)]
    features: Vec<OrsGeocodeFeature>,
}

#[derive(Debug, Deserialize)]
struct OrsGeocodeFeature {
    geometry: OrsPointGeometry,
}

#[derive(Debug, Deserialize)]
struct OrsPointGeometry {
    coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct OrsDirectionsResponse {
    #[serde(default)]
    features: Vec<OrsRouteFeature>,
}

#[derive(Debug, Deserialize)]
struct OrsRouteFeature {
    geometry: OrsLineGeometry,
    properties: OrsRouteProperties,
}

#[derive(Debug, Deserialize)]
struct OrsLineGeometry {
    coordinates: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
struct OrsRouteProperties {
    #[serde(default)]
    segments: Vec<OrsSegment>,
}

#[derive(Debug, Deserialize)]
struct OrsSegment {
    distance: f64,
    duration: f64,
}
