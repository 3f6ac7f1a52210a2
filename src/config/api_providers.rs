// ABOUTME: External service configuration for weather, air quality and geocoding providers
// ABOUTME: Loads API keys, base URLs, enablement flags and HTTP timeouts from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use safespace_providers::{nominatim, openaq, openweather};
use serde::{Deserialize, Serialize};
use std::env;

/// External API services configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExternalServicesConfig {
    /// Weather service configuration
    pub weather: WeatherServiceConfig,
    /// Air quality source selection
    pub air_quality: AirQualityServiceConfig,
    /// Reverse geocoding configuration
    pub geocoding: GeocodingServiceConfig,
    /// Shared HTTP client timeouts
    pub http: HttpClientConfig,
}

impl ExternalServicesConfig {
    /// Load external services configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            weather: WeatherServiceConfig::from_env(),
            air_quality: AirQualityServiceConfig::from_env(),
            geocoding: GeocodingServiceConfig::from_env(),
            http: HttpClientConfig::from_env(),
        }
    }
}

/// Weather API service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WeatherServiceConfig {
    /// `OpenWeatherMap` API key
    pub api_key: Option<String>,
    /// Weather service base URL
    pub base_url: String,
    /// Enable weather service
    pub enabled: bool,
}

impl WeatherServiceConfig {
    /// Load weather service configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("OPENWEATHER_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            base_url: env_var_or("OPENWEATHER_BASE_URL", openweather::DEFAULT_BASE_URL),
            enabled: env_var_or("WEATHER_SERVICE_ENABLED", "true")
                .parse()
                .unwrap_or(true),
        }
    }

    /// API key if the service is enabled and a key is configured
    #[must_use]
    pub fn usable_api_key(&self) -> Option<&str> {
        if self.enabled {
            self.api_key.as_deref()
        } else {
            None
        }
    }
}

/// Which service supplies air quality measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AirQualitySource {
    /// `OpenWeatherMap` air pollution endpoint (shares the weather API key)
    #[default]
    OpenWeatherMap,
    /// `OpenAQ` latest measurements (keyless)
    OpenAq,
}

impl AirQualitySource {
    /// Parse an `AIR_QUALITY_SOURCE` value; unknown values select `OpenWeatherMap`
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "openaq" => Self::OpenAq,
            _ => Self::OpenWeatherMap,
        }
    }
}

/// Air quality service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AirQualityServiceConfig {
    /// Selected source
    pub source: AirQualitySource,
    /// `OpenAQ` base URL
    pub openaq_base_url: String,
}

impl AirQualityServiceConfig {
    /// Load air quality configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            source: env::var("AIR_QUALITY_SOURCE")
                .map_or(AirQualitySource::default(), |v| AirQualitySource::parse(&v)),
            openaq_base_url: env_var_or("OPENAQ_BASE_URL", openaq::DEFAULT_BASE_URL),
        }
    }
}

/// Geocoding API service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeocodingServiceConfig {
    /// Geocoding service base URL
    pub base_url: String,
    /// Enable geocoding service
    pub enabled: bool,
}

impl GeocodingServiceConfig {
    /// Load geocoding service configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env_var_or("GEOCODING_BASE_URL", nominatim::DEFAULT_BASE_URL),
            enabled: env_var_or("GEOCODING_SERVICE_ENABLED", "true")
                .parse()
                .unwrap_or(true),
        }
    }
}

/// Shared HTTP client timeouts
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl HttpClientConfig {
    /// Load HTTP timeouts from environment
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            connect_timeout_secs: env::var("HTTP_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.connect_timeout_secs),
        }
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
