// ABOUTME: Tests for the environment orchestrator against scripted providers
// ABOUTME: Live assembly, location modes, naming precedence and synthetic fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    FakeAirQuality, FakeCityGeocoder, FakeReverseGeocoder, FakeWeather, HangingLocator,
};
use safespace::config::{AnalysisSettings, LocationMode};
use safespace::models::EnvironmentReading;
use safespace::orchestrator::{
    EnvironmentOrchestrator, FallbackReason, ReadingOutcome, DEFAULT_COORDINATES,
};
use safespace_providers::{Coordinates, FixedLocator};
use std::sync::Arc;
use std::time::Duration;

const DEVICE: Coordinates = Coordinates::new(19.076, 72.8777);

fn settings(location: LocationMode) -> AnalysisSettings {
    AnalysisSettings::default().with_location(location)
}

fn orchestrator(
    device: FixedLocator,
    reverse: Arc<FakeReverseGeocoder>,
) -> EnvironmentOrchestrator {
    EnvironmentOrchestrator::new(Arc::new(device), reverse)
}

fn live_orchestrator(
    weather: Arc<FakeWeather>,
    air: FakeAirQuality,
    geocoder: FakeCityGeocoder,
    reverse: Arc<FakeReverseGeocoder>,
) -> EnvironmentOrchestrator {
    orchestrator(FixedLocator::new(DEVICE), reverse).with_live_sources(
        weather,
        Arc::new(air),
        Arc::new(geocoder),
    )
}

fn assert_bounded_synthetic(reading: &EnvironmentReading) {
    assert!((25..=170).contains(&reading.pollutant_index));
    assert!((40.0..=95.0).contains(&reading.noise_level_db));
    assert!((20.0..=30.0).contains(&reading.temperature_celsius));
    assert!((40.0..=70.0).contains(&reading.humidity_percentage));
}

#[tokio::test]
async fn test_missing_key_with_device_fix_is_home_base() {
    let orchestrator = orchestrator(
        FixedLocator::new(DEVICE),
        Arc::new(FakeReverseGeocoder::named("Bandra West, Mumbai")),
    );
    assert!(!orchestrator.has_live_sources());

    let outcome = orchestrator
        .fetch_reading(&settings(LocationMode::AutoDetect))
        .await;

    assert!(!outcome.is_live());
    assert_eq!(outcome.fallback_reason(), Some(&FallbackReason::MissingApiKey));
    assert_eq!(outcome.reading().location_name, "Home Base");
    assert_bounded_synthetic(outcome.reading());
}

#[tokio::test]
async fn test_missing_key_without_device_fix_is_local_zone() {
    let orchestrator = orchestrator(
        FixedLocator::unavailable(),
        Arc::new(FakeReverseGeocoder::failing()),
    );

    let outcome = orchestrator
        .fetch_reading(&settings(LocationMode::AutoDetect))
        .await;

    assert_eq!(outcome.reading().location_name, "Local Zone");
    assert_eq!(outcome.fallback_reason(), Some(&FallbackReason::MissingApiKey));
}

#[tokio::test]
async fn test_missing_key_with_fixed_location_is_local_zone() {
    let orchestrator = orchestrator(
        FixedLocator::new(DEVICE),
        Arc::new(FakeReverseGeocoder::failing()),
    );

    let outcome = orchestrator.fetch_reading(&settings(LocationMode::Fixed)).await;
    assert_eq!(outcome.reading().location_name, "Local Zone");
}

#[tokio::test]
async fn test_live_auto_detect_uses_device_and_reverse_geocoding() {
    let weather = Arc::new(FakeWeather::ok(Some("Mumbai")));
    let reverse = Arc::new(FakeReverseGeocoder::named("Bandra West, Mumbai"));
    let orchestrator = live_orchestrator(
        weather.clone(),
        FakeAirQuality::pm25(35.4),
        FakeCityGeocoder::empty(),
        reverse.clone(),
    );

    let outcome = orchestrator
        .fetch_reading(&settings(LocationMode::AutoDetect))
        .await;

    let reading = match outcome {
        ReadingOutcome::Live { reading } => reading,
        other @ ReadingOutcome::Synthetic { .. } => {
            panic!("expected a live reading, got {other:?}")
        }
    };
    assert_eq!(reading.pollutant_index, 100);
    assert_eq!(reading.location_name, "Bandra West, Mumbai");
    assert_eq!(reading.condition_label, "Clouds");
    assert!((reading.temperature_celsius - 27.0).abs() < f64::EPSILON);
    assert!((35.0..=90.0).contains(&reading.noise_level_db));
    assert_eq!(weather.last_position(), Some(DEVICE));
    assert_eq!(reverse.calls(), 1);
}

#[tokio::test]
async fn test_reverse_geocoding_failure_keeps_weather_name() {
    let orchestrator = live_orchestrator(
        Arc::new(FakeWeather::ok(Some("Mumbai"))),
        FakeAirQuality::bucket(3),
        FakeCityGeocoder::empty(),
        Arc::new(FakeReverseGeocoder::failing()),
    );

    let outcome = orchestrator
        .fetch_reading(&settings(LocationMode::AutoDetect))
        .await;

    assert!(outcome.is_live());
    assert_eq!(outcome.reading().location_name, "Mumbai");
    assert_eq!(outcome.reading().pollutant_index, 125);
}

#[tokio::test]
async fn test_unnamed_live_reading_is_unknown() {
    let orchestrator = live_orchestrator(
        Arc::new(FakeWeather::ok(None)),
        FakeAirQuality::bucket(1),
        FakeCityGeocoder::empty(),
        Arc::new(FakeReverseGeocoder::failing()),
    );

    let outcome = orchestrator.fetch_reading(&settings(LocationMode::Fixed)).await;

    assert!(outcome.is_live());
    assert_eq!(outcome.reading().location_name, "Unknown");
    assert_eq!(outcome.reading().pollutant_index, 25);
}

#[tokio::test]
async fn test_city_mode_geocodes_and_skips_reverse_lookup() {
    let weather = Arc::new(FakeWeather::ok(Some("Bengaluru Urban")));
    let reverse = Arc::new(FakeReverseGeocoder::named("Indiranagar, Bengaluru"));
    let orchestrator = live_orchestrator(
        weather.clone(),
        FakeAirQuality::pm25(12.0),
        FakeCityGeocoder::knowing("Bengaluru", 12.9716, 77.5946),
        reverse.clone(),
    );

    let outcome = orchestrator
        .fetch_reading(&settings(LocationMode::City("bengaluru".into())))
        .await;

    assert!(outcome.is_live());
    assert_eq!(outcome.reading().location_name, "Bengaluru");
    assert_eq!(outcome.reading().pollutant_index, 50);
    assert_eq!(
        weather.last_position(),
        Some(Coordinates::new(12.9716, 77.5946))
    );
    assert_eq!(reverse.calls(), 0);
}

#[tokio::test]
async fn test_unknown_city_falls_back_to_default_coordinates() {
    let weather = Arc::new(FakeWeather::ok(Some("New Delhi")));
    let orchestrator = live_orchestrator(
        weather.clone(),
        FakeAirQuality::pm25(80.0),
        FakeCityGeocoder::empty(),
        Arc::new(FakeReverseGeocoder::failing()),
    );

    let outcome = orchestrator
        .fetch_reading(&settings(LocationMode::City("Atlantis".into())))
        .await;

    assert!(outcome.is_live());
    assert_eq!(outcome.reading().location_name, "New Delhi");
    assert_eq!(weather.last_position(), Some(DEFAULT_COORDINATES));
}

#[tokio::test]
async fn test_weather_failure_falls_back_to_local_zone() {
    let orchestrator = live_orchestrator(
        Arc::new(FakeWeather::failing()),
        FakeAirQuality::pm25(20.0),
        FakeCityGeocoder::empty(),
        Arc::new(FakeReverseGeocoder::named("Bandra West, Mumbai")),
    );

    let outcome = orchestrator
        .fetch_reading(&settings(LocationMode::AutoDetect))
        .await;

    assert!(!outcome.is_live());
    assert!(matches!(
        outcome.fallback_reason(),
        Some(FallbackReason::ServiceFailure(_))
    ));
    assert_eq!(outcome.reading().location_name, "Local Zone");
    assert_bounded_synthetic(outcome.reading());
}

#[tokio::test]
async fn test_air_quality_failure_with_manual_location_is_unknown() {
    let orchestrator = live_orchestrator(
        Arc::new(FakeWeather::ok(Some("Chennai"))),
        FakeAirQuality::failing(),
        FakeCityGeocoder::knowing("Chennai", 13.0827, 80.2707),
        Arc::new(FakeReverseGeocoder::failing()),
    );

    let outcome = orchestrator
        .fetch_reading(&settings(LocationMode::City("Chennai".into())))
        .await;

    assert!(!outcome.is_live());
    assert_eq!(outcome.reading().location_name, "Unknown");
}

#[tokio::test]
async fn test_device_timeout_uses_default_coordinates() {
    let weather = Arc::new(FakeWeather::ok(Some("New Delhi")));
    let orchestrator = EnvironmentOrchestrator::new(
        Arc::new(HangingLocator),
        Arc::new(FakeReverseGeocoder::failing()),
    )
    .with_live_sources(
        weather.clone(),
        Arc::new(FakeAirQuality::pm25(30.0)),
        Arc::new(FakeCityGeocoder::empty()),
    );
    let mut settings = settings(LocationMode::AutoDetect);
    settings.device_timeout = Duration::from_millis(50);

    let outcome = orchestrator.fetch_reading(&settings).await;

    assert!(outcome.is_live());
    assert_eq!(weather.last_position(), Some(DEFAULT_COORDINATES));
}

#[tokio::test]
async fn test_outcome_serializes_with_source_tag() {
    let orchestrator = orchestrator(
        FixedLocator::unavailable(),
        Arc::new(FakeReverseGeocoder::failing()),
    );
    let outcome = orchestrator.fetch_reading(&settings(LocationMode::Fixed)).await;

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["source"], "synthetic");
    assert_eq!(value["reason"]["kind"], "missing_api_key");
    assert_eq!(value["reading"]["location_name"], "Local Zone");

    let reading = outcome.clone().into_reading();
    assert_eq!(&reading, outcome.reading());
}
