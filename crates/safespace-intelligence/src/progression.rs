// ABOUTME: Garden progression calculator mapping cumulative points to stage levels
// ABOUTME: Resolves current and next stage, progress percentage, and applies point awards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

//! Garden progression
//!
//! The level for a point total is the greatest stage whose `min_points` is at or
//! below the total; the first stage is the floor. Levels are recomputed from the
//! total every time, so a penalty that lowers the total can lower the level.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One row of the garden stage table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GardenStage {
    /// Level number (1-based)
    pub level: u32,
    /// Minimum cumulative points to reach this stage
    pub min_points: u32,
    /// Display label
    pub label: String,
}

impl GardenStage {
    /// Create a stage
    pub fn new(level: u32, min_points: u32, label: impl Into<String>) -> Self {
        Self {
            level,
            min_points,
            label: label.into(),
        }
    }
}

/// Resolved position of a point total within the stage table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// Current level
    pub level: u32,
    /// Current stage
    pub stage: GardenStage,
    /// Next stage, `None` at the top of the table
    pub next_stage: Option<GardenStage>,
    /// Progress towards the next stage in `0.0..=100.0` (100 at the top)
    pub progress_percent: f64,
    /// Points still needed for the next stage (0 at the top)
    pub remaining_points: u32,
}

/// Outcome of applying a point delta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointAward {
    /// New cumulative total
    pub points: u32,
    /// Level before the award
    pub previous_level: u32,
    /// Resolved progress for the new total
    pub progress: LevelProgress,
}

impl PointAward {
    /// Whether the level went up
    #[must_use]
    pub const fn leveled_up(&self) -> bool {
        self.progress.level > self.previous_level
    }

    /// Whether the level went down
    #[must_use]
    pub const fn leveled_down(&self) -> bool {
        self.progress.level < self.previous_level
    }
}

/// Resolve the garden level for a point total
///
/// Stages are sorted by `min_points` first if the caller did not.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyStageTable`] if `stages` is empty
///
/// # Examples
///
/// ```
/// use safespace_intelligence::progression::{level_for_points, GardenStage};
///
/// let stages = vec![
///     GardenStage::new(1, 0, "Sprout"),
///     GardenStage::new(2, 100, "Sapling"),
///     GardenStage::new(3, 300, "Young Tree"),
/// ];
/// let progress = level_for_points(250, &stages).unwrap();
/// assert_eq!(progress.level, 2);
/// assert_eq!(progress.remaining_points, 50);
/// ```
pub fn level_for_points(points: u32, stages: &[GardenStage]) -> Result<LevelProgress, ConfigError> {
    if stages.is_empty() {
        return Err(ConfigError::EmptyStageTable);
    }

    let stages: Cow<'_, [GardenStage]> = if is_sorted_by_min_points(stages) {
        Cow::Borrowed(stages)
    } else {
        let mut sorted = stages.to_vec();
        sorted.sort_by_key(|stage| stage.min_points);
        Cow::Owned(sorted)
    };

    let current_index = stages
        .iter()
        .rposition(|stage| stage.min_points <= points)
        .unwrap_or(0);
    let current = &stages[current_index];
    let next = stages
        .iter()
        .skip(current_index + 1)
        .find(|stage| stage.min_points > current.min_points);

    let (progress_percent, remaining_points) = next.map_or((100.0, 0), |next| {
        let span = f64::from(next.min_points - current.min_points);
        let gained = f64::from(points) - f64::from(current.min_points);
        (
            (gained / span * 100.0).clamp(0.0, 100.0),
            next.min_points.saturating_sub(points),
        )
    });

    Ok(LevelProgress {
        level: current.level,
        stage: current.clone(),
        next_stage: next.cloned(),
        progress_percent,
        remaining_points,
    })
}

/// Add a signed point delta to a total, saturating at `0` and `u32::MAX`
#[must_use]
pub fn award_points(current_points: u32, delta: i64) -> u32 {
    let total = i64::from(current_points).saturating_add(delta);
    u32::try_from(total.clamp(0, i64::from(u32::MAX))).unwrap_or(u32::MAX)
}

/// Apply a delta and re-run level resolution
///
/// # Errors
///
/// Returns [`ConfigError::EmptyStageTable`] if `stages` is empty
pub fn apply_points(
    current_points: u32,
    delta: i64,
    stages: &[GardenStage],
) -> Result<PointAward, ConfigError> {
    let previous_level = level_for_points(current_points, stages)?.level;
    let points = award_points(current_points, delta);
    let progress = level_for_points(points, stages)?;

    if progress.level != previous_level {
        tracing::debug!(
            previous_level,
            new_level = progress.level,
            points,
            "Garden level changed"
        );
    }

    Ok(PointAward {
        points,
        previous_level,
        progress,
    })
}

fn is_sorted_by_min_points(stages: &[GardenStage]) -> bool {
    stages
        .windows(2)
        .all(|pair| pair[0].min_points <= pair[1].min_points)
}
