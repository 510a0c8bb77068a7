//! OpenWeatherMap HTTP adapter for forecast horizons.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::forecast::ForecastRecord;
use crate::traits::{ProviderError, WeatherProvider};

#[derive(Debug, Clone)]
pub struct OwmConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for OwmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openweathermap.org".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OwmClient {
    config: OwmConfig,
    client: reqwest::blocking::Client,
}

impl OwmClient {
    pub fn new(config: OwmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl WeatherProvider for OwmClient {
    fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastRecord>, ProviderError> {
        let url = format!("{}/data/2.5/forecast", self.config.base_url);
        let response = self
            .client
            .get(url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("units", "metric".to_string()),
                ("appid", self.config.api_key.clone()),
            ])
            .send()?
            .error_for_status()?
            .json::<OwmForecastResponse>()?;

        let records = records_from_response(response, latitude, longitude);
        debug!(latitude, longitude, count = records.len(), "fetched forecast horizon");

        if records.is_empty() {
            return Err(ProviderError::NoData(format!(
                "empty forecast horizon for ({latitude}, {longitude})"
            )));
        }

        Ok(records)
    }
}

/// Maps the provider's 3-hourly entries to forecast records.
///
/// Unix `dt` stamps become UTC timestamps here; entries with no weather
/// element or an out-of-range stamp are dropped.
fn records_from_response(
    response: OwmForecastResponse,
    latitude: f64,
    longitude: f64,
) -> Vec<ForecastRecord> {
    response
        .list
        .into_iter()
        .filter_map(|entry| {
            let condition = entry.weather.into_iter().next()?;
            let time = DateTime::<Utc>::from_timestamp(entry.dt, 0)?;
            Some(ForecastRecord {
                time,
                description: condition.description,
                temperature_c: entry.main.temp,
                wind_speed_mps: entry.wind.speed,
                location: Some((latitude, longitude)),
            })
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    #[serde(default)]
    list: Vec<OwmForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastEntry {
    dt: i64,
    #[serde(default)]
    weather: Vec<OwmCondition>,
    main: OwmMain,
    wind: OwmWind,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}
