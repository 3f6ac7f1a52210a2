// ABOUTME: Mood check-in events and the trend vocabulary derived from them
// ABOUTME: Append-only records capturing mood plus air quality and noise at the time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Self-reported mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Feeling great
    Great,
    /// Feeling okay
    Okay,
    /// Feeling bad
    Bad,
    /// Panic / emergency
    Panic,
}

impl Mood {
    /// Ordinal score used for trend averaging (great 4 .. panic 1)
    #[must_use]
    pub const fn score(&self) -> u8 {
        match self {
            Self::Great => 4,
            Self::Okay => 3,
            Self::Bad => 2,
            Self::Panic => 1,
        }
    }
}

/// Direction of recent mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    /// Mean score at or above the improving threshold
    Improving,
    /// Mean score at or above the stable threshold
    Stable,
    /// Anything lower
    Declining,
}

/// One health check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    /// Unique, time-derived identifier (milliseconds since the epoch)
    pub id: String,
    /// When the check-in was recorded
    pub timestamp: DateTime<Utc>,
    /// Reported mood
    pub mood: Mood,
    /// Air quality index when recorded (0 if no reading was available)
    pub pollutant_index_at_time: u16,
    /// Noise level when recorded (0 if no reading was available)
    pub noise_level_at_time: f64,
    /// Reported symptoms
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub symptoms: Vec<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
