// ABOUTME: Daily quest items that award garden points when completed
// ABOUTME: Medical, eco and community quest kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use serde::{Deserialize, Serialize};

/// Quest family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    /// Health tracking quests
    Medical,
    /// Environmental contribution quests
    Eco,
    /// Community quests
    Community,
}

/// A quest the user can complete once per day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestItem {
    /// Stable quest identifier
    pub id: String,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Points awarded on completion
    pub points: u32,
    /// Whether the quest has been completed today
    pub completed: bool,
    /// Quest family
    pub kind: QuestKind,
}
