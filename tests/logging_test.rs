// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates defaults, environment handling, format parsing and subscriber setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use safespace::logging::{EventLogger, LogFormat, LoggingConfig};
use safespace_intelligence::config::GardenConfig;
use safespace_intelligence::apply_points;
use serial_test::serial;
use std::env;

const KEYS: [&str; 8] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "SERVICE_NAME",
    "SERVICE_VERSION",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "LOG_INCLUDE_SPANS",
];

fn clear_env() {
    for key in KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    assert!(config.include_location); // on in production
    assert!(config.include_thread);
    assert!(!config.include_spans);
}

#[test]
#[serial]
fn test_logging_config_from_empty_env() {
    clear_env();

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "safespace");
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_logging_feature_flags() {
    clear_env();
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    env::set_var("LOG_INCLUDE_SPANS", "1");

    let config = LoggingConfig::from_env();
    clear_env();

    assert!(config.include_location);
    assert!(!config.include_thread);
    assert!(config.include_spans);
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "safespace");
    assert_eq!(config.service_version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_log_format_parse() {
    assert_eq!(LogFormat::parse("json"), LogFormat::Json);
    assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
    assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::parse("fancy"), LogFormat::Pretty);
}

#[test]
#[serial]
fn test_init_installs_subscriber_once() {
    clear_env();
    let config = LoggingConfig {
        level: "debug".into(),
        format: LogFormat::Json,
        include_spans: true,
        ..LoggingConfig::default()
    };

    assert!(config.init().is_ok());
    assert!(config.init().is_err());

    let award = apply_points(90, 20, &GardenConfig::default().stages).unwrap();
    EventLogger::log_points_awarded("alice", "q1", &award);
    EventLogger::log_synthetic_fallback("weather API key not configured", "Local Zone");
    EventLogger::log_analysis_complete("Local Zone", 42, false, "Low");
}
