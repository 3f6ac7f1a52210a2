// ABOUTME: Recommendation engine thresholds for air quality and noise rules
// ABOUTME: Defaults match the US AQI category boundaries and occupational noise limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use crate::constants::{aqi, noise};
use serde::{Deserialize, Serialize};

/// Thresholds for triggering recommendations
///
/// All comparisons are strict: a rule fires when the reading is strictly above
/// (or strictly below) the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// AQI above which outdoor activity should be avoided
    pub avoid_outdoor_aqi: u16,
    /// AQI above which exposure should be limited
    pub limit_exposure_aqi: u16,
    /// Noise above which hearing protection is advised
    pub hearing_protection_db: f64,
    /// AQI below which conditions suit exercise
    pub ideal_exercise_aqi: u16,
    /// Noise below which conditions suit exercise
    pub ideal_exercise_db: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            avoid_outdoor_aqi: aqi::AVOID_OUTDOOR_ABOVE,
            limit_exposure_aqi: aqi::LIMIT_EXPOSURE_ABOVE,
            hearing_protection_db: noise::HEARING_PROTECTION_ABOVE_DB,
            ideal_exercise_aqi: aqi::IDEAL_EXERCISE_BELOW,
            ideal_exercise_db: noise::IDEAL_EXERCISE_BELOW_DB,
        }
    }
}
