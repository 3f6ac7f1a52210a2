// ABOUTME: Shared test utilities for SafeSpace integration tests
// ABOUTME: Reading builders and scripted fakes for every provider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `safespace`

use async_trait::async_trait;
use safespace::errors::{AppError, AppResult};
use safespace::models::{
    EnvironmentReading, HealthProfile, NarrativeForecast, RiskAssessment,
};
use safespace::analysis::EnvironmentAnalyst;
use safespace_providers::{
    AirQualityMeasurement, AirQualityProvider, CityGeocoder, Coordinates, DeviceLocator,
    GeocodedCity, ProviderError, ProviderResult, ReverseGeocoder, WeatherProvider,
    WeatherSnapshot,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::sleep;

/// Reading with the given index and noise; everything else fixed
pub fn reading(pollutant_index: u16, noise_level_db: f64) -> EnvironmentReading {
    EnvironmentReading {
        pollutant_index,
        noise_level_db,
        temperature_celsius: 24.0,
        humidity_percentage: 55.0,
        condition_label: "Clear".into(),
        location_name: "Test Town".into(),
    }
}

/// Weather source returning a fixed snapshot, or failing
pub struct FakeWeather {
    pub snapshot: Option<WeatherSnapshot>,
    pub calls: AtomicUsize,
    pub last_position: Mutex<Option<Coordinates>>,
}

impl FakeWeather {
    pub fn ok(place_name: Option<&str>) -> Self {
        Self {
            snapshot: Some(WeatherSnapshot {
                temperature_celsius: 27.0,
                humidity_percentage: 61.0,
                condition: "Clouds".into(),
                place_name: place_name.map(str::to_owned),
            }),
            calls: AtomicUsize::new(0),
            last_position: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            snapshot: None,
            calls: AtomicUsize::new(0),
            last_position: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_position(&self) -> Option<Coordinates> {
        *self.last_position.lock().unwrap()
    }
}

#[async_trait]
impl WeatherProvider for FakeWeather {
    async fn current_weather(&self, at: Coordinates) -> ProviderResult<WeatherSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_position.lock().unwrap() = Some(at);
        self.snapshot.clone().ok_or(ProviderError::ApiError {
            service: "fake-weather",
            message: "returned status 503".into(),
        })
    }
}

/// Air quality source returning a fixed measurement, or failing
pub struct FakeAirQuality {
    pub measurement: Option<AirQualityMeasurement>,
}

impl FakeAirQuality {
    pub const fn pm25(concentration: f64) -> Self {
        Self {
            measurement: Some(AirQualityMeasurement::Pm25(concentration)),
        }
    }

    pub const fn bucket(bucket: u8) -> Self {
        Self {
            measurement: Some(AirQualityMeasurement::Bucket(bucket)),
        }
    }

    pub const fn failing() -> Self {
        Self { measurement: None }
    }
}

#[async_trait]
impl AirQualityProvider for FakeAirQuality {
    async fn current_air_quality(&self, _at: Coordinates) -> ProviderResult<AirQualityMeasurement> {
        self.measurement
            .ok_or(ProviderError::DataUnavailable("fake-air-quality"))
    }
}

/// Direct geocoder that knows exactly one city
pub struct FakeCityGeocoder {
    pub known: Option<GeocodedCity>,
}

impl FakeCityGeocoder {
    pub fn knowing(name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            known: Some(GeocodedCity {
                name: name.into(),
                coordinates: Coordinates::new(latitude, longitude),
            }),
        }
    }

    pub const fn empty() -> Self {
        Self { known: None }
    }
}

#[async_trait]
impl CityGeocoder for FakeCityGeocoder {
    async fn geocode_city(&self, city: &str) -> ProviderResult<GeocodedCity> {
        self.known
            .clone()
            .filter(|known| known.name.eq_ignore_ascii_case(city))
            .ok_or_else(|| ProviderError::NotFound {
                service: "fake-geocoder",
                query: city.to_owned(),
            })
    }
}

/// Reverse geocoder returning a fixed name, or failing
pub struct FakeReverseGeocoder {
    pub name: Option<String>,
    pub calls: AtomicUsize,
}

impl FakeReverseGeocoder {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            name: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReverseGeocoder for FakeReverseGeocoder {
    async fn locality_name(&self, _at: Coordinates) -> ProviderResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.name
            .clone()
            .ok_or(ProviderError::Disabled("fake-reverse-geocoder"))
    }
}

/// Device locator that never answers within any reasonable timeout
pub struct HangingLocator;

#[async_trait]
impl DeviceLocator for HangingLocator {
    async fn current_position(&self) -> ProviderResult<Coordinates> {
        sleep(Duration::from_secs(3600)).await;
        Err(ProviderError::Timeout("hanging-locator"))
    }
}

/// Analyst whose calls always fail
pub struct FailingAnalyst;

#[async_trait]
impl EnvironmentAnalyst for FailingAnalyst {
    async fn assess(
        &self,
        _reading: &EnvironmentReading,
        _profile: &HealthProfile,
    ) -> AppResult<RiskAssessment> {
        Err(AppError::external_service("analyst", "quota exhausted"))
    }

    async fn forecast(
        &self,
        _reading: &EnvironmentReading,
        _location: &str,
    ) -> AppResult<Vec<NarrativeForecast>> {
        Err(AppError::external_service("analyst", "quota exhausted"))
    }
}
