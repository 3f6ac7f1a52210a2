// ABOUTME: Mood trend classification bands and trailing window length
// ABOUTME: Mean ordinal scores map to improving, stable, or declining
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use crate::constants::mood;
use serde::{Deserialize, Serialize};

/// Mood trend configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodTrendConfig {
    /// Trailing window in days
    pub window_days: i64,
    /// Mean score at or above which the trend is improving
    pub improving_min_score: f64,
    /// Mean score at or above which the trend is stable
    pub stable_min_score: f64,
}

impl Default for MoodTrendConfig {
    fn default() -> Self {
        Self {
            window_days: mood::DEFAULT_WINDOW_DAYS,
            improving_min_score: mood::IMPROVING_MIN_SCORE,
            stable_min_score: mood::STABLE_MIN_SCORE,
        }
    }
}
