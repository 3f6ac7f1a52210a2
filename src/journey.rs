// ABOUTME: Journey service applying quest and tree-planting points to stored health profiles
// ABOUTME: Profile persistence trait with an in-memory store and per-user daily quest boards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use crate::errors::{AppError, AppResult};
use crate::logging::EventLogger;
use crate::models::{HealthCondition, HealthProfile, QuestItem};
use async_trait::async_trait;
use safespace_intelligence::{
    apply_points, level_for_points, GardenStage, LevelProgress, PointAward, QuestBoard,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use tracing::debug;

/// Points for a verified tree planting
pub const TREE_PLANTING_POINTS: u32 = 50;

/// Persistence for health profiles
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load a profile, `None` if the user has none yet
    async fn fetch(&self, user_id: &str) -> AppResult<Option<HealthProfile>>;

    /// Insert or replace a profile keyed by its user id
    async fn upsert(&self, profile: &HealthProfile) -> AppResult<()>;
}

/// Process-local profile store
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<String, HealthProfile>>,
}

impl InMemoryProfileStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn fetch(&self, user_id: &str) -> AppResult<Option<HealthProfile>> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn upsert(&self, profile: &HealthProfile) -> AppResult<()> {
        let user_id = profile
            .user_id
            .clone()
            .ok_or_else(|| AppError::invalid_input("Cannot store a profile without a user id"))?;
        self.profiles.write().await.insert(user_id, profile.clone());
        Ok(())
    }
}

/// Applies progression rules to stored profiles
///
/// Every read-modify-write of a user's profile or quest board runs under that
/// user's lock, so concurrent awards for one user never overwrite each other.
pub struct JourneyService {
    store: Arc<dyn ProfileStore>,
    stages: Vec<GardenStage>,
    boards: Mutex<HashMap<String, QuestBoard>>,
    user_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl JourneyService {
    /// Service over `store` using the given stage table
    #[must_use]
    pub fn new(store: Arc<dyn ProfileStore>, stages: Vec<GardenStage>) -> Self {
        Self {
            store,
            stages,
            boards: Mutex::new(HashMap::new()),
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Profile for a user, creating and storing the default one on first access
    ///
    /// # Errors
    ///
    /// Returns an error if the user id is blank or the store fails
    pub async fn profile(&self, user_id: &str) -> AppResult<HealthProfile> {
        validate_user_id(user_id)?;
        let _guard = self.lock_user(user_id).await;
        self.load_profile(user_id).await
    }

    /// Record the user's condition and mark onboarding complete
    ///
    /// # Errors
    ///
    /// Returns an error if the user id is blank or the store fails
    pub async fn select_condition(
        &self,
        user_id: &str,
        condition: HealthCondition,
    ) -> AppResult<HealthProfile> {
        validate_user_id(user_id)?;
        let _guard = self.lock_user(user_id).await;

        let mut profile = self.load_profile(user_id).await?;
        profile.condition = condition;
        profile.onboarding_complete = true;
        self.store.upsert(&profile).await?;
        Ok(profile)
    }

    /// Today's quests for a user
    pub async fn quests(&self, user_id: &str) -> Vec<QuestItem> {
        self.boards
            .lock()
            .await
            .get(user_id)
            .map_or_else(
                || QuestBoard::daily().quests().to_vec(),
                |board| board.quests().to_vec(),
            )
    }

    /// Start a new day for a user's quest board
    pub async fn reset_daily_quests(&self, user_id: &str) {
        let _guard = self.lock_user(user_id).await;
        if let Some(board) = self.boards.lock().await.get_mut(user_id) {
            board.reset();
        }
    }

    /// Complete a daily quest and award its points
    ///
    /// Returns `Ok(None)` when the quest is unknown or already completed today.
    /// The quest is only marked completed once its points are stored, so a failed
    /// award can be retried.
    ///
    /// # Errors
    ///
    /// Returns an error if the user id is blank, the stage table is empty, or the store fails
    pub async fn complete_quest(
        &self,
        user_id: &str,
        quest_id: &str,
    ) -> AppResult<Option<PointAward>> {
        validate_user_id(user_id)?;
        let _guard = self.lock_user(user_id).await;

        let available = self
            .boards
            .lock()
            .await
            .entry(user_id.to_owned())
            .or_default()
            .available_points(quest_id);

        let Some(points) = available else {
            debug!(user.id = %user_id, quest.id = %quest_id, "Quest unknown or already completed");
            return Ok(None);
        };

        let award = self.award(user_id, i64::from(points), |_| {}).await?;
        self.boards
            .lock()
            .await
            .entry(user_id.to_owned())
            .or_default()
            .complete(quest_id);

        EventLogger::log_points_awarded(user_id, quest_id, &award);
        Ok(Some(award))
    }

    /// Record a verified tree planting
    ///
    /// # Errors
    ///
    /// Returns an error if the user id is blank, the stage table is empty, or the store fails
    pub async fn plant_tree(&self, user_id: &str) -> AppResult<PointAward> {
        validate_user_id(user_id)?;
        let _guard = self.lock_user(user_id).await;

        let award = self
            .award(user_id, i64::from(TREE_PLANTING_POINTS), |profile| {
                profile.trees_planted = profile.trees_planted.saturating_add(1);
            })
            .await?;
        EventLogger::log_points_awarded(user_id, "tree_planting", &award);
        Ok(award)
    }

    /// Apply a signed point adjustment (penalties are negative)
    ///
    /// # Errors
    ///
    /// Returns an error if the user id is blank, the stage table is empty, or the store fails
    pub async fn adjust_points(&self, user_id: &str, delta: i64) -> AppResult<PointAward> {
        validate_user_id(user_id)?;
        let _guard = self.lock_user(user_id).await;

        let award = self.award(user_id, delta, |_| {}).await?;
        EventLogger::log_points_awarded(user_id, "adjustment", &award);
        Ok(award)
    }

    /// Garden progress for a user
    ///
    /// # Errors
    ///
    /// Returns an error if the user id is blank, the stage table is empty, or the store fails
    pub async fn garden_progress(&self, user_id: &str) -> AppResult<LevelProgress> {
        let profile = self.profile(user_id).await?;
        Ok(level_for_points(profile.points, &self.stages)?)
    }

    async fn lock_user(&self, user_id: &str) -> OwnedMutexGuard<()> {
        let lock = self
            .user_locks
            .lock()
            .await
            .entry(user_id.to_owned())
            .or_default()
            .clone();
        lock.lock_owned().await
    }

    /// Caller must hold the user's lock
    async fn load_profile(&self, user_id: &str) -> AppResult<HealthProfile> {
        if let Some(profile) = self.store.fetch(user_id).await? {
            return Ok(profile);
        }

        debug!(user.id = %user_id, "Creating default profile");
        let profile = HealthProfile::for_user(user_id);
        self.store.upsert(&profile).await?;
        Ok(profile)
    }

    /// Caller must hold the user's lock
    async fn award<F>(&self, user_id: &str, delta: i64, update: F) -> AppResult<PointAward>
    where
        F: FnOnce(&mut HealthProfile) + Send,
    {
        let mut profile = self.load_profile(user_id).await?;
        let award = apply_points(profile.points, delta, &self.stages)?;

        profile.points = award.points;
        profile.garden_level = award.progress.level;
        update(&mut profile);

        self.store.upsert(&profile).await?;
        Ok(award)
    }
}

fn validate_user_id(user_id: &str) -> AppResult<()> {
    if user_id.trim().is_empty() {
        return Err(AppError::invalid_input("User id must not be empty"));
    }
    Ok(())
}
