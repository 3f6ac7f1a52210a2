// ABOUTME: OpenAQ client for the latest PM2.5 measurement near a position
// ABOUTME: Keyless alternative to the OpenWeatherMap air pollution endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use crate::core::{AirQualityMeasurement, AirQualityProvider, Coordinates};
use crate::error::{ProviderError, ProviderResult};
use crate::http_client::shared_client;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

const SERVICE: &str = "OpenAQ";

/// Default `OpenAQ` API host
pub const DEFAULT_BASE_URL: &str = "https://api.openaq.org";

/// Station search radius in metres
const SEARCH_RADIUS_M: u32 = 25_000;

/// Concentration assumed when the nearest station reports no PM2.5 value
const DEFAULT_PM25: f64 = 50.0;

#[derive(Debug, Deserialize)]
struct LatestResponse {
    #[serde(default)]
    results: Vec<LatestStation>,
}

#[derive(Debug, Deserialize)]
struct LatestStation {
    #[serde(default)]
    measurements: Vec<Measurement>,
}

#[derive(Debug, Deserialize)]
struct Measurement {
    parameter: String,
    value: f64,
}

/// `OpenAQ` latest-measurement client
#[derive(Debug, Clone)]
pub struct OpenAqClient {
    client: Client,
    base_url: String,
}

impl Default for OpenAqClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl OpenAqClient {
    /// Client against the given host
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: shared_client().clone(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }
}

/// PM2.5 from the nearest station
///
/// No station in range is an error rather than the default concentration, so the
/// orchestrator replaces the whole reading with synthetic data instead of pairing
/// live weather with a made-up AQI.
fn pm25_from_response(body: &LatestResponse) -> ProviderResult<f64> {
    let station = body
        .results
        .first()
        .ok_or(ProviderError::DataUnavailable(SERVICE))?;

    Ok(station
        .measurements
        .iter()
        .find(|m| m.parameter == "pm25")
        .map(|m| m.value)
        .filter(|v| v.abs() > f64::EPSILON)
        .unwrap_or(DEFAULT_PM25))
}

#[async_trait]
impl AirQualityProvider for OpenAqClient {
    #[instrument(skip(self), fields(service = "openaq", api_call = "latest"))]
    async fn current_air_quality(&self, at: Coordinates) -> ProviderResult<AirQualityMeasurement> {
        let url = format!(
            "{}/v2/latest?coordinates={},{}&radius={SEARCH_RADIUS_M}&limit=1&parameter=pm25",
            self.base_url, at.latitude, at.longitude
        );
        debug!("Fetching latest PM2.5 from: {url}");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::ApiError {
                service: SERVICE,
                message: format!("returned status {}", response.status()),
            });
        }

        let body: LatestResponse = response.json().await?;
        pm25_from_response(&body).map(AirQualityMeasurement::Pm25)
    }
}
