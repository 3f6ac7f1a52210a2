// ABOUTME: Tests for intelligence configuration defaults, overrides and validation
// ABOUTME: Environment override tests run serially because they mutate process state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use safespace_intelligence::config::intelligence::GardenConfig;
use safespace_intelligence::{ConfigError, GardenStage, IntelligenceConfig};
use serial_test::serial;
use std::env;

const OVERRIDE_KEYS: [&str; 4] = [
    "SAFESPACE_AQI_AVOID_ABOVE",
    "SAFESPACE_AQI_LIMIT_ABOVE",
    "SAFESPACE_NOISE_PROTECT_ABOVE_DB",
    "SAFESPACE_MOOD_WINDOW_DAYS",
];

fn clear_overrides() {
    for key in OVERRIDE_KEYS {
        env::remove_var(key);
    }
}

#[test]
fn test_defaults_are_valid() {
    let config = IntelligenceConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.recommendations.avoid_outdoor_aqi, 150);
    assert_eq!(config.recommendations.limit_exposure_aqi, 100);
    assert!((config.recommendations.hearing_protection_db - 85.0).abs() < f64::EPSILON);
    assert_eq!(config.mood_trend.window_days, 7);
    assert_eq!(config.garden.stages.len(), 5);
}

#[test]
fn test_inverted_aqi_thresholds_are_rejected() {
    let mut config = IntelligenceConfig::default();
    config.recommendations.limit_exposure_aqi = 160;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_non_positive_mood_window_is_rejected() {
    let mut config = IntelligenceConfig::default();
    config.mood_trend.window_days = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_garden_table_validation() {
    let empty = GardenConfig { stages: Vec::new() };
    assert_eq!(empty.validate(), Err(ConfigError::EmptyStageTable));

    let duplicate_threshold = GardenConfig {
        stages: vec![
            GardenStage::new(1, 0, "Sprout"),
            GardenStage::new(2, 0, "Sapling"),
        ],
    };
    assert!(matches!(
        duplicate_threshold.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_overrides();

    let config = IntelligenceConfig::load().unwrap();
    assert_eq!(
        config.recommendations,
        IntelligenceConfig::default().recommendations
    );
}

#[test]
#[serial]
fn test_env_overrides_apply() {
    clear_overrides();
    env::set_var("SAFESPACE_AQI_AVOID_ABOVE", "180");
    env::set_var("SAFESPACE_NOISE_PROTECT_ABOVE_DB", " 80.5 ");
    env::set_var("SAFESPACE_MOOD_WINDOW_DAYS", "14");

    let config = IntelligenceConfig::load();
    clear_overrides();

    let config = config.unwrap();
    assert_eq!(config.recommendations.avoid_outdoor_aqi, 180);
    assert!((config.recommendations.hearing_protection_db - 80.5).abs() < f64::EPSILON);
    assert_eq!(config.mood_trend.window_days, 14);
}

#[test]
#[serial]
fn test_unparseable_override_is_an_error() {
    clear_overrides();
    env::set_var("SAFESPACE_AQI_LIMIT_ABOVE", "lots");

    let result = IntelligenceConfig::load();
    clear_overrides();

    match result {
        Err(ConfigError::Parse(detail)) => assert!(detail.contains("SAFESPACE_AQI_LIMIT_ABOVE")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_override_that_breaks_ordering_fails_validation() {
    clear_overrides();
    env::set_var("SAFESPACE_AQI_AVOID_ABOVE", "90");

    let result = IntelligenceConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_oversized_mood_window_is_rejected() {
    clear_overrides();
    env::set_var("SAFESPACE_MOOD_WINDOW_DAYS", "200000000");

    let result = IntelligenceConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}
