// ABOUTME: Environment reading snapshot produced once per analysis cycle
// ABOUTME: Air quality index, synthetic noise, weather and place name in one record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use serde::{Deserialize, Serialize};

/// Snapshot of the environment around the user
///
/// Constructed once per analysis cycle and consumed read-only downstream.
///
/// # Examples
///
/// ```rust
/// use safespace_core::models::EnvironmentReading;
///
/// let reading = EnvironmentReading {
///     pollutant_index: 42,
///     noise_level_db: 55.0,
///     temperature_celsius: 24.0,
///     humidity_percentage: 60.0,
///     condition_label: "Clear".into(),
///     location_name: "Goregaon East, Mumbai".into(),
/// };
/// assert!(reading.pollutant_index <= 500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentReading {
    /// US AQI value, always within 0-500
    pub pollutant_index: u16,
    /// Ambient noise in decibels (synthetic, there is no sensor)
    pub noise_level_db: f64,
    /// Temperature in Celsius
    pub temperature_celsius: f64,
    /// Relative humidity percentage (0-100)
    pub humidity_percentage: f64,
    /// Main weather condition label (e.g. "Clear", "Haze")
    pub condition_label: String,
    /// Human-friendly place name
    pub location_name: String,
}
