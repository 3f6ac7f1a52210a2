// ABOUTME: Core provider traits and value types for environmental data sources
// ABOUTME: Weather, air quality, forward/reverse geocoding and device position abstractions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use crate::error::ProviderResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude
    pub latitude: f64,
    /// Longitude
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Current weather at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in Celsius
    pub temperature_celsius: f64,
    /// Relative humidity percentage
    pub humidity_percentage: f64,
    /// Short condition label (e.g. "Clouds")
    pub condition: String,
    /// Place name reported by the weather service, if any
    pub place_name: Option<String>,
}

/// Raw air quality measurement as reported by a source
///
/// Conversion to the 0..=500 index happens in the caller so providers stay
/// free of index policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AirQualityMeasurement {
    /// PM2.5 concentration in µg/m³
    Pm25(f64),
    /// Coarse 1..=5 quality bucket (`OpenWeatherMap` scale)
    Bucket(u8),
}

/// Result of a direct (city name) geocoding lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedCity {
    /// Canonical place name
    pub name: String,
    /// Position of the place
    pub coordinates: Coordinates,
}

/// Current weather source
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions at the given position
    async fn current_weather(&self, at: Coordinates) -> ProviderResult<WeatherSnapshot>;
}

/// Current air quality source
#[async_trait]
pub trait AirQualityProvider: Send + Sync {
    /// Fetch the latest air quality measurement near the given position
    async fn current_air_quality(&self, at: Coordinates) -> ProviderResult<AirQualityMeasurement>;
}

/// Direct geocoder resolving a city name to coordinates
#[async_trait]
pub trait CityGeocoder: Send + Sync {
    /// Resolve a city name
    async fn geocode_city(&self, city: &str) -> ProviderResult<GeocodedCity>;
}

/// Reverse geocoder producing a human-readable locality name
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Name the locality at the given position
    async fn locality_name(&self, at: Coordinates) -> ProviderResult<String>;
}

/// Source of the device's own position
#[async_trait]
pub trait DeviceLocator: Send + Sync {
    /// Current device position
    async fn current_position(&self) -> ProviderResult<Coordinates>;
}
