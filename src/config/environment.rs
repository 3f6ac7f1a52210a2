// ABOUTME: Top-level SafeSpace configuration assembled from environment variables
// ABOUTME: Location mode, device fix, stage pacing and engine thresholds for analysis cycles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use super::api_providers::ExternalServicesConfig;
use crate::constants::location::DEVICE_TIMEOUT_SECS;
use crate::errors::AppResult;
use safespace_intelligence::IntelligenceConfig;
use safespace_providers::Coordinates;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::warn;

/// How the analysis cycle decides where the user is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", content = "city", rename_all = "snake_case")]
pub enum LocationMode {
    /// Use the device position, falling back to the default coordinates
    #[default]
    AutoDetect,
    /// Geocode a configured city name
    City(String),
    /// Use the default coordinates without consulting the device
    Fixed,
}

impl LocationMode {
    /// Resolve the mode from the user's settings
    ///
    /// A primary city only takes effect when auto-detection is off.
    #[must_use]
    pub fn from_settings(auto_detect: bool, primary_location: Option<&str>) -> Self {
        if auto_detect {
            return Self::AutoDetect;
        }
        primary_location
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .map_or(Self::Fixed, |city| Self::City(city.to_owned()))
    }

    /// Whether the device position is consulted
    #[must_use]
    pub const fn is_auto_detect(&self) -> bool {
        matches!(self, Self::AutoDetect)
    }
}

/// Per-cycle analysis settings, passed explicitly into every run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Location resolution mode
    pub location: LocationMode,
    /// Upper bound on waiting for a device fix
    pub device_timeout: Duration,
    /// Pause between progress stages
    pub stage_delay: Duration,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            location: LocationMode::AutoDetect,
            device_timeout: Duration::from_secs(DEVICE_TIMEOUT_SECS),
            stage_delay: Duration::ZERO,
        }
    }
}

impl AnalysisSettings {
    /// Load analysis settings from environment
    #[must_use]
    pub fn from_env() -> Self {
        let auto_detect = env::var("SAFESPACE_AUTO_DETECT_LOCATION")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(true);
        let primary = env::var("SAFESPACE_PRIMARY_LOCATION").ok();

        Self {
            location: LocationMode::from_settings(auto_detect, primary.as_deref()),
            device_timeout: Duration::from_secs(
                env::var("SAFESPACE_LOCATION_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEVICE_TIMEOUT_SECS),
            ),
            stage_delay: Duration::from_millis(
                env::var("SAFESPACE_STAGE_DELAY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0),
            ),
        }
    }

    /// Same settings with a different location mode
    #[must_use]
    pub fn with_location(mut self, location: LocationMode) -> Self {
        self.location = location;
        self
    }
}

/// Complete SafeSpace configuration
#[derive(Debug, Clone, Default)]
pub struct SafeSpaceConfig {
    /// External service endpoints and keys
    pub services: ExternalServicesConfig,
    /// Default analysis settings
    pub analysis: AnalysisSettings,
    /// Device position fix, if the host has one configured
    pub device_position: Option<Coordinates>,
    /// Engine thresholds and stage table
    pub intelligence: IntelligenceConfig,
}

impl SafeSpaceConfig {
    /// Load the full configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the engine thresholds or stage table are invalid
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            services: ExternalServicesConfig::from_env(),
            analysis: AnalysisSettings::from_env(),
            device_position: device_position_from_env(),
            intelligence: IntelligenceConfig::load()?,
        })
    }
}

/// Read `SAFESPACE_DEVICE_LAT` / `SAFESPACE_DEVICE_LON`; both must parse
fn device_position_from_env() -> Option<Coordinates> {
    let lat = env::var("SAFESPACE_DEVICE_LAT").ok();
    let lon = env::var("SAFESPACE_DEVICE_LON").ok();

    match (lat, lon) {
        (Some(lat), Some(lon)) => match (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) {
            (Ok(latitude), Ok(longitude))
                if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) =>
            {
                Some(Coordinates::new(latitude, longitude))
            }
            _ => {
                warn!("Ignoring unparseable device position {lat},{lon}");
                None
            }
        },
        _ => None,
    }
}
