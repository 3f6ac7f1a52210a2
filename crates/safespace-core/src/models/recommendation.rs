// ABOUTME: Recommendation value object rendered verbatim by report and home views
// ABOUTME: Stable rule ids, category and priority vocabularies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use serde::{Deserialize, Serialize};

/// What a recommendation is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    /// Protective measures against the environment
    Safety,
    /// Suggestions about when or whether to be active
    Activity,
    /// Personal health measures
    Health,
}

/// Display priority; informational only, never a sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    /// Act now
    High,
    /// Worth attention
    Medium,
    /// Nice to know
    Low,
}

/// A single advisory
///
/// Recreated every analysis cycle and never persisted. The `id` is stable per rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Stable, deduplicating rule key
    pub id: String,
    /// Short title
    pub title: String,
    /// One-sentence description
    pub description: String,
    /// Category
    pub category: RecommendationCategory,
    /// Priority
    pub priority: RecommendationPriority,
    /// Emoji glyph
    pub glyph: String,
}
