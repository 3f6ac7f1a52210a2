// ABOUTME: Environmental risk and progression engine for the SafeSpace platform
// ABOUTME: Pure, synchronous computations over readings, profiles and check-ins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

#![deny(unsafe_code)]

//! # SafeSpace Intelligence
//!
//! The computational kernel of the platform:
//!
//! - [`aqi`]: PM2.5 concentration to US AQI via piecewise-linear breakpoints
//! - [`progression`]: point totals to garden levels, and the point-award step
//! - [`recommendation_engine`]: ordered advisories from readings, forecasts and profile
//! - [`mood_tracker`]: append-only check-in log with trailing-window trends
//! - [`quests`]: daily quests feeding the progression step
//!
//! Nothing in this crate performs I/O or suspends.

// Re-export core modules so engine code can use `crate::models::*` etc.
pub use safespace_core::constants;
pub use safespace_core::errors;
pub use safespace_core::models;

/// Intelligence configuration (thresholds, stage tables) and `ConfigError`
pub mod config;

/// PM2.5 to AQI conversion and AQI categories
pub mod aqi;

/// Garden progression (levels, stages, point awards)
pub mod progression;

/// Rule-based recommendation generation
pub mod recommendation_engine;

/// Mood check-in log and trend classification
pub mod mood_tracker;

/// Daily quest board
pub mod quests;

pub use aqi::{bucket_to_index, pm25_to_index, AqiCategory};
pub use config::{ConfigError, IntelligenceConfig};
pub use mood_tracker::{MoodTracker, SharedMoodTracker};
pub use progression::{
    apply_points, award_points, level_for_points, GardenStage, LevelProgress, PointAward,
};
pub use quests::QuestBoard;
pub use recommendation_engine::{generate_recommendations, RecommendationEngine};
