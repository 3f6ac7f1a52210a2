// ABOUTME: Core data models for the SafeSpace environmental wellness platform
// ABOUTME: Re-exports readings, profiles, check-ins, analyses, recommendations and quests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

//! # Data Models
//!
//! Value types shared by the intelligence engine, the provider clients and the
//! application crate.
//!
//! ## Design Principles
//!
//! - **Immutable snapshots**: an [`EnvironmentReading`] is built once per analysis cycle
//! - **Serializable**: all models round-trip through JSON for persistence collaborators
//! - **Type Safe**: closed vocabularies (conditions, moods, risk levels) are enums

mod analysis;
mod checkin;
mod environment;
mod profile;
mod quest;
mod recommendation;

// Environment domain
pub use environment::EnvironmentReading;

// Analysis domain
pub use analysis::{ForecastIcon, ForecastPeriod, NarrativeForecast, RiskAssessment, RiskLevel};

// Check-in domain
pub use checkin::{CheckIn, Mood, MoodTrend};

// Profile domain
pub use profile::{AgeGroup, HealthCondition, HealthProfile, JourneyProgress};

// Quest domain
pub use quest::{QuestItem, QuestKind};

// Recommendation domain
pub use recommendation::{Recommendation, RecommendationCategory, RecommendationPriority};
