// ABOUTME: Garden stage table configuration for the progression calculator
// ABOUTME: Five default stages from Sprout to Forest Guardian
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use super::ConfigError;
use crate::progression::GardenStage;
use serde::{Deserialize, Serialize};

/// Garden stage table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GardenConfig {
    /// Stages, ascending by `min_points`
    pub stages: Vec<GardenStage>,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            stages: vec![
                GardenStage::new(1, 0, "Sprout"),
                GardenStage::new(2, 100, "Sapling"),
                GardenStage::new(3, 300, "Young Tree"),
                GardenStage::new(4, 600, "Mature Tree"),
                GardenStage::new(5, 1000, "Forest Guardian"),
            ],
        }
    }
}

impl GardenConfig {
    /// Check the table is non-empty and strictly increasing by level and points
    ///
    /// # Errors
    ///
    /// Returns `EmptyStageTable` or `InvalidRange`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stages.is_empty() {
            return Err(ConfigError::EmptyStageTable);
        }
        let mut sorted = self.stages.clone();
        sorted.sort_by_key(|stage| stage.min_points);
        let strictly_increasing = sorted
            .windows(2)
            .all(|pair| pair[0].min_points < pair[1].min_points && pair[0].level < pair[1].level);
        if !strictly_increasing {
            return Err(ConfigError::InvalidRange(
                "garden stages must strictly increase by level and min_points",
            ));
        }
        Ok(())
    }
}
