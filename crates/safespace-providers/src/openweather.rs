// ABOUTME: OpenWeatherMap client for current weather, air pollution and direct geocoding
// ABOUTME: Maps OpenWeatherMap JSON responses into provider value types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use crate::core::{
    AirQualityMeasurement, AirQualityProvider, CityGeocoder, Coordinates, GeocodedCity,
    WeatherProvider, WeatherSnapshot,
};
use crate::error::{ProviderError, ProviderResult};
use crate::http_client::shared_client;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, instrument};

const SERVICE: &str = "OpenWeatherMap";

/// Default `OpenWeatherMap` API host
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Bucket assumed when the air pollution payload carries no entries
const DEFAULT_BUCKET: u8 = 3;

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: CurrentWeatherMain,
    #[serde(default)]
    weather: Vec<WeatherCondition>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    main: String,
}

#[derive(Debug, Deserialize)]
struct AirPollutionResponse {
    #[serde(default)]
    list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
struct AirPollutionEntry {
    main: AirPollutionIndex,
    #[serde(default)]
    components: AirPollutionComponents,
}

#[derive(Debug, Deserialize)]
struct AirPollutionIndex {
    aqi: u8,
}

#[derive(Debug, Default, Deserialize)]
struct AirPollutionComponents {
    pm2_5: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DirectGeocodeEntry {
    name: String,
    lat: f64,
    lon: f64,
}

/// `OpenWeatherMap` API client
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for OpenWeatherClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl OpenWeatherClient {
    /// Create a client against the public API host
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingApiKey`] when `api_key` is blank
    pub fn new(api_key: impl Into<String>) -> ProviderResult<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom host (proxies, test servers)
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingApiKey`] when `api_key` is blank
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> ProviderResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey(SERVICE));
        }
        Ok(Self {
            client: shared_client().clone(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ProviderResult<T> {
        let url = format!("{}{path}", self.base_url);
        // The API key is appended after logging so it never reaches the logs
        debug!("Fetching {SERVICE} data from: {url} {query:?}");

        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ProviderResult<T> {
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            return Err(ProviderError::ApiError {
                service: SERVICE,
                message: format!("returned status {status}: {error_text}"),
            });
        }
        Ok(response.json().await?)
    }

    fn position_query(at: Coordinates) -> Vec<(&'static str, String)> {
        vec![
            ("lat", at.latitude.to_string()),
            ("lon", at.longitude.to_string()),
        ]
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self), fields(service = "openweathermap", api_call = "current_weather"))]
    async fn current_weather(&self, at: Coordinates) -> ProviderResult<WeatherSnapshot> {
        let mut query = Self::position_query(at);
        query.push(("units", "metric".to_owned()));

        let body: CurrentWeatherResponse = self.get_json("/data/2.5/weather", &query).await?;

        let condition = body
            .weather
            .into_iter()
            .next()
            .map(|w| w.main)
            .ok_or(ProviderError::DataUnavailable(SERVICE))?;

        Ok(WeatherSnapshot {
            temperature_celsius: body.main.temp.round(),
            humidity_percentage: body.main.humidity,
            condition,
            place_name: body.name.filter(|n| !n.trim().is_empty()),
        })
    }
}

#[async_trait]
impl AirQualityProvider for OpenWeatherClient {
    #[instrument(skip(self), fields(service = "openweathermap", api_call = "air_pollution"))]
    async fn current_air_quality(&self, at: Coordinates) -> ProviderResult<AirQualityMeasurement> {
        let query = Self::position_query(at);
        let body: AirPollutionResponse = self.get_json("/data/2.5/air_pollution", &query).await?;

        Ok(measurement_from_entries(&body.list))
    }
}

#[async_trait]
impl CityGeocoder for OpenWeatherClient {
    #[instrument(skip(self), fields(service = "openweathermap", api_call = "direct_geocode"))]
    async fn geocode_city(&self, city: &str) -> ProviderResult<GeocodedCity> {
        let query = vec![("q", city.to_owned()), ("limit", "1".to_owned())];
        let body: Vec<DirectGeocodeEntry> = self.get_json("/geo/1.0/direct", &query).await?;

        body.into_iter()
            .next()
            .map(|entry| GeocodedCity {
                name: entry.name,
                coordinates: Coordinates::new(entry.lat, entry.lon),
            })
            .ok_or_else(|| ProviderError::NotFound {
                service: SERVICE,
                query: city.to_owned(),
            })
    }
}

/// PM2.5 wins over the coarse bucket when both are present
fn measurement_from_entries(entries: &[AirPollutionEntry]) -> AirQualityMeasurement {
    let Some(first) = entries.first() else {
        return AirQualityMeasurement::Bucket(DEFAULT_BUCKET);
    };
    first.components.pm2_5.map_or(
        AirQualityMeasurement::Bucket(first.main.aqi),
        AirQualityMeasurement::Pm25,
    )
}
