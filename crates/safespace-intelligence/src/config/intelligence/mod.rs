// ABOUTME: Intelligence configuration container with validation and environment overrides
// ABOUTME: Aggregates recommendation thresholds, mood trend bands, and the garden stage table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

//! Intelligence Configuration
//!
//! All thresholds used by the engine live here. Engines receive configuration
//! explicitly; nothing in this crate reads process state while computing.

mod error;
mod garden;
mod mood;
mod recommendation;

pub use error::ConfigError;
pub use garden::GardenConfig;
pub use mood::MoodTrendConfig;
pub use recommendation::RecommendationThresholds;

use crate::constants::mood::MAX_WINDOW_DAYS;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Thresholds for the recommendation rules
    pub recommendations: RecommendationThresholds,
    /// Mood trend classification bands
    pub mood_trend: MoodTrendConfig,
    /// Garden stage table
    pub garden: GardenConfig,
}

impl IntelligenceConfig {
    /// Load defaults, apply environment overrides, and validate
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `SAFESPACE_*` environment overrides on top of this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable cannot be parsed
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let thresholds = &mut self.recommendations;
        override_from_env("SAFESPACE_AQI_AVOID_ABOVE", &mut thresholds.avoid_outdoor_aqi)?;
        override_from_env("SAFESPACE_AQI_LIMIT_ABOVE", &mut thresholds.limit_exposure_aqi)?;
        override_from_env(
            "SAFESPACE_NOISE_PROTECT_ABOVE_DB",
            &mut thresholds.hearing_protection_db,
        )?;
        override_from_env("SAFESPACE_MOOD_WINDOW_DAYS", &mut self.mood_trend.window_days)?;
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = &self.recommendations;
        if thresholds.limit_exposure_aqi >= thresholds.avoid_outdoor_aqi {
            return Err(ConfigError::InvalidRange(
                "limit_exposure_aqi must be < avoid_outdoor_aqi",
            ));
        }
        if thresholds.ideal_exercise_aqi > thresholds.limit_exposure_aqi {
            return Err(ConfigError::InvalidRange(
                "ideal_exercise_aqi must be <= limit_exposure_aqi",
            ));
        }
        if thresholds.ideal_exercise_db > thresholds.hearing_protection_db {
            return Err(ConfigError::InvalidRange(
                "ideal_exercise_db must be <= hearing_protection_db",
            ));
        }

        let mood = &self.mood_trend;
        if !(1..=MAX_WINDOW_DAYS).contains(&mood.window_days) {
            return Err(ConfigError::InvalidRange(
                "mood window_days must be between 1 and 3650",
            ));
        }
        if mood.stable_min_score >= mood.improving_min_score {
            return Err(ConfigError::InvalidRange(
                "stable_min_score must be < improving_min_score",
            ));
        }

        self.garden.validate()
    }
}

fn override_from_env<T: FromStr>(key: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(raw) = env::var(key) {
        *target = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("{key}={raw}")))?;
    }
    Ok(())
}
