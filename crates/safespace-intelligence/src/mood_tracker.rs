// ABOUTME: Append-only mood check-in log with trailing-window queries and trend classification
// ABOUTME: Newest-first ordering, unique millisecond ids, clock-injectable variants for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

//! Mood tracker
//!
//! The log is owned by a single session. Callers that share it across tasks wrap it
//! in [`SharedMoodTracker`] so appends are serialized.

use crate::config::MoodTrendConfig;
use crate::models::{CheckIn, EnvironmentReading, Mood, MoodTrend};
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex};

/// Mood tracker shared between tasks
pub type SharedMoodTracker = Arc<Mutex<MoodTracker>>;

/// In-memory check-in log, newest first
#[derive(Debug, Clone, Default)]
pub struct MoodTracker {
    check_ins: Vec<CheckIn>,
    config: MoodTrendConfig,
}

impl MoodTracker {
    /// Create an empty tracker with default trend bands
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tracker with custom trend bands
    #[must_use]
    pub const fn with_config(config: MoodTrendConfig) -> Self {
        Self {
            check_ins: Vec::new(),
            config,
        }
    }

    /// Wrap this tracker for shared use
    #[must_use]
    pub fn into_shared(self) -> SharedMoodTracker {
        Arc::new(Mutex::new(self))
    }

    /// All check-ins, newest first
    #[must_use]
    pub fn check_ins(&self) -> &[CheckIn] {
        &self.check_ins
    }

    /// Number of check-ins recorded
    #[must_use]
    pub fn len(&self) -> usize {
        self.check_ins.len()
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.check_ins.is_empty()
    }

    /// Record a check-in now
    pub fn record(&mut self, mood: Mood, reading: Option<&EnvironmentReading>) -> CheckIn {
        self.record_at(mood, reading, Utc::now())
    }

    /// Record a check-in at the given instant
    pub fn record_at(
        &mut self,
        mood: Mood,
        reading: Option<&EnvironmentReading>,
        at: DateTime<Utc>,
    ) -> CheckIn {
        self.record_with_details_at(mood, reading, Vec::new(), None, at)
    }

    /// Record a check-in with symptoms and notes at the given instant
    pub fn record_with_details_at(
        &mut self,
        mood: Mood,
        reading: Option<&EnvironmentReading>,
        symptoms: Vec<String>,
        notes: Option<String>,
        at: DateTime<Utc>,
    ) -> CheckIn {
        let check_in = CheckIn {
            id: self.next_id(at),
            timestamp: at,
            mood,
            pollutant_index_at_time: reading.map_or(0, |r| r.pollutant_index),
            noise_level_at_time: reading.map_or(0.0, |r| r.noise_level_db),
            symptoms,
            notes,
        };
        self.check_ins.insert(0, check_in.clone());
        tracing::debug!(id = %check_in.id, mood = ?mood, "Recorded check-in");
        check_in
    }

    /// Check-ins within the last `window_days` days
    #[must_use]
    pub fn recent(&self, window_days: i64) -> Vec<&CheckIn> {
        self.recent_at(window_days, Utc::now())
    }

    /// Check-ins with `timestamp >= now - window_days`
    ///
    /// A window reaching past the representable time range includes every check-in.
    #[must_use]
    pub fn recent_at(&self, window_days: i64, now: DateTime<Utc>) -> Vec<&CheckIn> {
        let Some(cutoff) =
            Duration::try_days(window_days).and_then(|window| now.checked_sub_signed(window))
        else {
            return self.check_ins.iter().collect();
        };
        self.check_ins
            .iter()
            .filter(|check_in| check_in.timestamp >= cutoff)
            .collect()
    }

    /// Mood trend over the configured window, as of now
    #[must_use]
    pub fn trend(&self) -> MoodTrend {
        self.trend_at(Utc::now())
    }

    /// Mood trend over the configured window, as of `now`
    #[must_use]
    pub fn trend_at(&self, now: DateTime<Utc>) -> MoodTrend {
        self.trend_over(self.config.window_days, now)
    }

    /// Mood trend over an explicit window
    ///
    /// An empty window is `Stable`.
    #[must_use]
    pub fn trend_over(&self, window_days: i64, now: DateTime<Utc>) -> MoodTrend {
        self.mean_score(window_days, now)
            .map_or(MoodTrend::Stable, |mean| self.classify(mean))
    }

    /// Mean ordinal mood score over a window, `None` if the window is empty
    #[must_use]
    pub fn mean_score(&self, window_days: i64, now: DateTime<Utc>) -> Option<f64> {
        let recent = self.recent_at(window_days, now);
        if recent.is_empty() {
            return None;
        }
        let total: u32 = recent
            .iter()
            .map(|check_in| u32::from(check_in.mood.score()))
            .sum();
        Some(f64::from(total) / recent.len() as f64)
    }

    fn classify(&self, mean: f64) -> MoodTrend {
        if mean >= self.config.improving_min_score {
            MoodTrend::Improving
        } else if mean >= self.config.stable_min_score {
            MoodTrend::Stable
        } else {
            MoodTrend::Declining
        }
    }

    fn next_id(&self, at: DateTime<Utc>) -> String {
        let millis = at.timestamp_millis();
        let latest = self
            .check_ins
            .iter()
            .filter_map(|check_in| check_in.id.parse::<i64>().ok())
            .max();
        match latest {
            Some(previous) if previous >= millis => (previous + 1).to_string(),
            _ => millis.to_string(),
        }
    }
}
