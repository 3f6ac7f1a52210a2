// ABOUTME: Environmental data orchestrator producing one reading per analysis cycle
// ABOUTME: Sequences location, weather, air quality and reverse geocoding with synthetic fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

//! Environmental data orchestration
//!
//! [`EnvironmentOrchestrator::fetch_reading`] never fails. Live data is returned as
//! [`ReadingOutcome::Live`]; when no API key is configured or any required call
//! fails, a bounded random reading is returned as [`ReadingOutcome::Synthetic`]
//! together with the reason.

use crate::config::{AirQualitySource, AnalysisSettings, LocationMode, SafeSpaceConfig};
use crate::constants::location::{
    DEFAULT_LATITUDE, DEFAULT_LONGITUDE, HOME_BASE, LOCAL_ZONE, UNKNOWN,
};
use crate::models::EnvironmentReading;
use chrono::{Local, Timelike};
use safespace_intelligence::{bucket_to_index, pm25_to_index};
use safespace_providers::synthetic::{noise_for_hour, synthetic_reading};
use safespace_providers::{
    initialize_shared_client, AirQualityMeasurement, AirQualityProvider, CityGeocoder,
    Coordinates, DeviceLocator, FixedLocator, NominatimClient, OpenAqClient, OpenWeatherClient,
    ProviderResult, ReverseGeocoder, WeatherProvider,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

/// Coordinates used when no better position is available (New Delhi)
pub const DEFAULT_COORDINATES: Coordinates = Coordinates::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE);

/// Why a synthetic reading was substituted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FallbackReason {
    /// No weather API key is configured
    MissingApiKey,
    /// A required live call failed
    ServiceFailure(String),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "weather API key not configured"),
            Self::ServiceFailure(detail) => write!(f, "live service failure: {detail}"),
        }
    }
}

/// Result of one orchestration pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ReadingOutcome {
    /// Reading assembled from live services
    Live {
        /// The reading
        reading: EnvironmentReading,
    },
    /// Bounded random reading substituted for live data
    Synthetic {
        /// The reading
        reading: EnvironmentReading,
        /// Why live data was not used
        reason: FallbackReason,
    },
}

impl ReadingOutcome {
    /// The reading, whichever way it was produced
    #[must_use]
    pub const fn reading(&self) -> &EnvironmentReading {
        match self {
            Self::Live { reading } | Self::Synthetic { reading, .. } => reading,
        }
    }

    /// Consume the outcome, keeping the reading
    #[must_use]
    pub fn into_reading(self) -> EnvironmentReading {
        match self {
            Self::Live { reading } | Self::Synthetic { reading, .. } => reading,
        }
    }

    /// Whether the reading came from live services
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live { .. })
    }

    /// Fallback reason for synthetic readings
    #[must_use]
    pub const fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Self::Live { .. } => None,
            Self::Synthetic { reason, .. } => Some(reason),
        }
    }
}

/// Services that need the weather API key
#[derive(Clone)]
struct LiveSources {
    weather: Arc<dyn WeatherProvider>,
    air_quality: Arc<dyn AirQualityProvider>,
    city_geocoder: Arc<dyn CityGeocoder>,
}

/// Produces one [`EnvironmentReading`] per call from the configured sources
#[derive(Clone)]
pub struct EnvironmentOrchestrator {
    live: Option<LiveSources>,
    reverse_geocoder: Arc<dyn ReverseGeocoder>,
    device: Arc<dyn DeviceLocator>,
}

impl fmt::Debug for EnvironmentOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentOrchestrator")
            .field("live_sources", &self.live.is_some())
            .finish_non_exhaustive()
    }
}

impl EnvironmentOrchestrator {
    /// Orchestrator with no live sources; every reading is synthetic
    #[must_use]
    pub fn new(device: Arc<dyn DeviceLocator>, reverse_geocoder: Arc<dyn ReverseGeocoder>) -> Self {
        Self {
            live: None,
            reverse_geocoder,
            device,
        }
    }

    /// Attach the key-bound live sources
    #[must_use]
    pub fn with_live_sources(
        mut self,
        weather: Arc<dyn WeatherProvider>,
        air_quality: Arc<dyn AirQualityProvider>,
        city_geocoder: Arc<dyn CityGeocoder>,
    ) -> Self {
        self.live = Some(LiveSources {
            weather,
            air_quality,
            city_geocoder,
        });
        self
    }

    /// Build the orchestrator with real service clients from configuration
    #[must_use]
    pub fn from_config(config: &SafeSpaceConfig) -> Self {
        let services = &config.services;
        initialize_shared_client(services.http.timeout_secs, services.http.connect_timeout_secs);

        let device = Arc::new(FixedLocator::from_option(config.device_position));
        let reverse = Arc::new(NominatimClient::with_config(
            services.geocoding.base_url.clone(),
            services.geocoding.enabled,
        ));
        let orchestrator = Self::new(device, reverse);

        let Some(api_key) = services.weather.usable_api_key() else {
            info!("No usable weather API key; readings will be synthetic");
            return orchestrator;
        };

        match OpenWeatherClient::with_base_url(api_key, services.weather.base_url.as_str()) {
            Ok(client) => {
                let client = Arc::new(client);
                let air_quality: Arc<dyn AirQualityProvider> = match services.air_quality.source {
                    AirQualitySource::OpenAq => Arc::new(OpenAqClient::new(
                        services.air_quality.openaq_base_url.as_str(),
                    )),
                    AirQualitySource::OpenWeatherMap => client.clone(),
                };
                orchestrator.with_live_sources(client.clone(), air_quality, client)
            }
            Err(e) => {
                warn!("Weather client unavailable: {e}");
                orchestrator
            }
        }
    }

    /// Whether live sources are configured
    #[must_use]
    pub const fn has_live_sources(&self) -> bool {
        self.live.is_some()
    }

    /// Produce one reading, falling back to synthetic data instead of failing
    #[instrument(skip(self, settings), fields(location_mode = ?settings.location))]
    pub async fn fetch_reading(&self, settings: &AnalysisSettings) -> ReadingOutcome {
        let auto_detect = settings.location.is_auto_detect();

        let Some(live) = &self.live else {
            let has_fix = auto_detect && self.device_position(settings).await.is_some();
            let name = if has_fix { HOME_BASE } else { LOCAL_ZONE };
            return Self::synthetic(name, FallbackReason::MissingApiKey);
        };

        match self.fetch_live(live, settings).await {
            Ok(reading) => {
                debug!(location = %reading.location_name, aqi = reading.pollutant_index, "Live reading assembled");
                ReadingOutcome::Live { reading }
            }
            Err(e) => {
                warn!("Live environment fetch failed: {e}");
                let name = if auto_detect { LOCAL_ZONE } else { UNKNOWN };
                Self::synthetic(name, FallbackReason::ServiceFailure(e.to_string()))
            }
        }
    }

    fn synthetic(location_name: &str, reason: FallbackReason) -> ReadingOutcome {
        let mut reading = synthetic_reading(&mut rand::thread_rng());
        location_name.clone_into(&mut reading.location_name);
        ReadingOutcome::Synthetic { reading, reason }
    }

    /// Device fix bounded by the configured timeout
    async fn device_position(&self, settings: &AnalysisSettings) -> Option<Coordinates> {
        match timeout(settings.device_timeout, self.device.current_position()).await {
            Ok(Ok(position)) => Some(position),
            Ok(Err(e)) => {
                debug!("Device position unavailable: {e}");
                None
            }
            Err(_) => {
                warn!(
                    "Device position timed out after {}s",
                    settings.device_timeout.as_secs()
                );
                None
            }
        }
    }

    /// Coordinates to query and an optional place name that overrides the weather name
    async fn resolve_location(
        &self,
        live: &LiveSources,
        settings: &AnalysisSettings,
    ) -> (Coordinates, Option<String>) {
        match &settings.location {
            LocationMode::AutoDetect => (
                self.device_position(settings)
                    .await
                    .unwrap_or(DEFAULT_COORDINATES),
                None,
            ),
            LocationMode::City(city) => match live.city_geocoder.geocode_city(city).await {
                Ok(found) => {
                    debug!("Using configured city {}", found.name);
                    (found.coordinates, Some(found.name))
                }
                Err(e) => {
                    warn!("City geocoding failed for {city}, using defaults: {e}");
                    (DEFAULT_COORDINATES, None)
                }
            },
            LocationMode::Fixed => (DEFAULT_COORDINATES, None),
        }
    }

    async fn fetch_live(
        &self,
        live: &LiveSources,
        settings: &AnalysisSettings,
    ) -> ProviderResult<EnvironmentReading> {
        let (position, mut place_name) = self.resolve_location(live, settings).await;

        let (weather, air_quality) = tokio::try_join!(
            live.weather.current_weather(position),
            live.air_quality.current_air_quality(position),
        )?;

        if settings.location.is_auto_detect() {
            match self.reverse_geocoder.locality_name(position).await {
                Ok(locality) => place_name = Some(locality),
                Err(e) => debug!("Reverse geocoding skipped: {e}"),
            }
        }

        let pollutant_index = match air_quality {
            AirQualityMeasurement::Pm25(concentration) => pm25_to_index(concentration),
            AirQualityMeasurement::Bucket(bucket) => bucket_to_index(bucket),
        };
        let noise_level_db = noise_for_hour(Local::now().hour(), &mut rand::thread_rng());

        Ok(EnvironmentReading {
            pollutant_index,
            noise_level_db,
            temperature_celsius: weather.temperature_celsius,
            humidity_percentage: weather.humidity_percentage,
            condition_label: weather.condition,
            location_name: place_name
                .or(weather.place_name)
                .unwrap_or_else(|| UNKNOWN.to_owned()),
        })
    }
}
