// ABOUTME: Configuration module for safespace-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

/// Intelligence module configuration (recommendations, mood trends, garden stages)
pub mod intelligence;

pub use intelligence::{
    ConfigError, GardenConfig, IntelligenceConfig, MoodTrendConfig, RecommendationThresholds,
};
