// ABOUTME: Environmental data providers for weather, air quality, geocoding and synthetic data
// ABOUTME: Async provider traits, HTTP clients for public APIs, and the shared HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

//! Environmental data provider implementations and core abstractions.
//!
//! The orchestrator in the application crate talks to these services only through
//! the traits in [`core`], so every source can be swapped or faked.

// Re-export safespace-core modules so provider code can use `crate::errors::*` etc.
pub use safespace_core::constants;
pub use safespace_core::errors;
pub use safespace_core::models;

/// Core provider traits and shared value types
pub mod core;
/// Device position sources
pub mod device;
/// Provider error type
pub mod error;
/// Shared HTTP client for provider API calls
pub mod http_client;
/// Nominatim (`OpenStreetMap`) reverse geocoding
pub mod nominatim;
/// `OpenAQ` latest PM2.5 measurements
pub mod openaq;
/// `OpenWeatherMap` weather, air pollution and direct geocoding
pub mod openweather;
/// Synthetic readings for when real data is unavailable
pub mod synthetic;

pub use core::{
    AirQualityMeasurement, AirQualityProvider, CityGeocoder, Coordinates, DeviceLocator,
    GeocodedCity, ReverseGeocoder, WeatherProvider, WeatherSnapshot,
};
pub use device::FixedLocator;
pub use error::{ProviderError, ProviderResult};
pub use http_client::{initialize_shared_client, shared_client};
pub use nominatim::NominatimClient;
pub use openaq::OpenAqClient;
pub use openweather::OpenWeatherClient;
