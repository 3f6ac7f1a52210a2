// ABOUTME: Health profile and journey progress owned by the profile collaborator
// ABOUTME: Condition tags, age groups, cumulative points and garden level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Health sensitivity the user selected during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthCondition {
    /// Asthma, COPD, or pollution sensitivity
    Breathing,
    /// Tinnitus, hyperacusis, or hearing loss
    Hearing,
    /// Both breathing and hearing sensitivity
    Both,
    /// General preventive monitoring
    #[default]
    Prevention,
}

impl HealthCondition {
    /// Whether the condition involves the respiratory system
    #[must_use]
    pub const fn affects_breathing(&self) -> bool {
        matches!(self, Self::Breathing | Self::Both)
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breathing => "Breathing Sensitivity",
            Self::Hearing => "Hearing Sensitivity",
            Self::Both => "Both Conditions",
            Self::Prevention => "General Prevention",
        }
    }
}

impl fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Age band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    /// Child
    Child,
    /// Adult
    #[default]
    Adult,
    /// Senior
    Senior,
}

/// User health profile
///
/// The progression calculator reads `points` and returns a recomputed level; it never
/// mutates the profile itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Backend user identifier, if signed in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Display name
    pub name: String,
    /// Health sensitivity
    pub condition: HealthCondition,
    /// Age band
    pub age_group: AgeGroup,
    /// Consecutive active days
    pub streak: u32,
    /// Cumulative points
    pub points: u32,
    /// Virtual trees planted
    pub trees_planted: u32,
    /// Garden level (>= 1)
    pub garden_level: u32,
    /// Whether onboarding finished
    pub onboarding_complete: bool,
}

impl Default for HealthProfile {
    fn default() -> Self {
        Self {
            user_id: None,
            name: "Guest".into(),
            condition: HealthCondition::Prevention,
            age_group: AgeGroup::Adult,
            streak: 0,
            points: 0,
            trees_planted: 0,
            garden_level: 1,
            onboarding_complete: false,
        }
    }
}

impl HealthProfile {
    /// Default profile bound to a user id
    #[must_use]
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Self::default()
        }
    }

    /// Journey progress view of this profile
    #[must_use]
    pub fn journey_progress(&self) -> Option<JourneyProgress> {
        self.user_id.as_ref().map(|id| JourneyProgress {
            profile_id: id.clone(),
            points: self.points,
            trees_planted: self.trees_planted,
            streak: self.streak,
            updated_at: None,
        })
    }
}

/// Journey progress row kept by the persistence collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyProgress {
    /// Owning profile
    pub profile_id: String,
    /// Cumulative points
    pub points: u32,
    /// Virtual trees planted
    pub trees_planted: u32,
    /// Consecutive active days
    pub streak: u32,
    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
