// ABOUTME: Configuration module for environment-driven SafeSpace settings
// ABOUTME: External service endpoints plus per-cycle analysis settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

//! Configuration is read from environment variables only.

/// External service endpoints, keys and HTTP timeouts
pub mod api_providers;
/// Top-level configuration and analysis settings
pub mod environment;

pub use api_providers::{
    AirQualityServiceConfig, AirQualitySource, ExternalServicesConfig, GeocodingServiceConfig,
    HttpClientConfig, WeatherServiceConfig,
};
pub use environment::{AnalysisSettings, LocationMode, SafeSpaceConfig};
