// ABOUTME: Daily quest board tracking completion and the points each quest awards
// ABOUTME: Completing a quest twice or an unknown quest awards nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use crate::models::{QuestItem, QuestKind};

/// The day's quests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestBoard {
    quests: Vec<QuestItem>,
}

impl Default for QuestBoard {
    fn default() -> Self {
        Self::daily()
    }
}

impl QuestBoard {
    /// Standard daily quests
    #[must_use]
    pub fn daily() -> Self {
        Self::with_quests(vec![
            quest(
                "q1",
                "Daily Check-in",
                "Log your symptoms to help your doctor.",
                10,
                QuestKind::Medical,
            ),
            quest(
                "q2",
                "Hydration Goal",
                "Drink 2L of water to help lung function.",
                5,
                QuestKind::Medical,
            ),
            quest(
                "q3",
                "Plant a Virtual Tree",
                "Contribute to the community forest.",
                20,
                QuestKind::Eco,
            ),
        ])
    }

    /// Board with a custom quest list
    #[must_use]
    pub const fn with_quests(quests: Vec<QuestItem>) -> Self {
        Self { quests }
    }

    /// All quests in display order
    #[must_use]
    pub fn quests(&self) -> &[QuestItem] {
        &self.quests
    }

    /// Points a quest would award, `None` if unknown or already completed
    #[must_use]
    pub fn available_points(&self, quest_id: &str) -> Option<u32> {
        self.quests
            .iter()
            .find(|quest| quest.id == quest_id && !quest.completed)
            .map(|quest| quest.points)
    }

    /// Mark a quest completed and return the points it awards
    ///
    /// Returns `None` for unknown or already-completed quests.
    pub fn complete(&mut self, quest_id: &str) -> Option<u32> {
        let quest = self
            .quests
            .iter_mut()
            .find(|quest| quest.id == quest_id && !quest.completed)?;
        quest.completed = true;
        Some(quest.points)
    }

    /// Clear completion flags for a new day
    pub fn reset(&mut self) {
        for quest in &mut self.quests {
            quest.completed = false;
        }
    }

    /// Points still available today
    #[must_use]
    pub fn remaining_points(&self) -> u32 {
        self.quests
            .iter()
            .filter(|quest| !quest.completed)
            .map(|quest| quest.points)
            .sum()
    }
}

fn quest(id: &str, title: &str, description: &str, points: u32, kind: QuestKind) -> QuestItem {
    QuestItem {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        points,
        completed: false,
        kind,
    }
}
