// ABOUTME: Tests for the journey service applying quest and tree points to profiles
// ABOUTME: Uses the in-memory profile store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use async_trait::async_trait;
use safespace::errors::{AppError, AppResult, ErrorCode};
use safespace::journey::{
    InMemoryProfileStore, JourneyService, ProfileStore, TREE_PLANTING_POINTS,
};
use safespace::models::{HealthCondition, HealthProfile};
use safespace_intelligence::config::GardenConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::yield_now;

fn service() -> (Arc<InMemoryProfileStore>, JourneyService) {
    let store = Arc::new(InMemoryProfileStore::new());
    let service = JourneyService::new(store.clone(), GardenConfig::default().stages);
    (store, service)
}

/// Store that yields between reads and writes, letting other tasks interleave
#[derive(Default)]
struct YieldingStore {
    inner: InMemoryProfileStore,
}

#[async_trait]
impl ProfileStore for YieldingStore {
    async fn fetch(&self, user_id: &str) -> AppResult<Option<HealthProfile>> {
        let profile = self.inner.fetch(user_id).await?;
        yield_now().await;
        Ok(profile)
    }

    async fn upsert(&self, profile: &HealthProfile) -> AppResult<()> {
        yield_now().await;
        self.inner.upsert(profile).await
    }
}

/// Store whose next write fails once when armed
#[derive(Default)]
struct FlakyStore {
    inner: InMemoryProfileStore,
    fail_next_write: AtomicBool,
}

#[async_trait]
impl ProfileStore for FlakyStore {
    async fn fetch(&self, user_id: &str) -> AppResult<Option<HealthProfile>> {
        self.inner.fetch(user_id).await
    }

    async fn upsert(&self, profile: &HealthProfile) -> AppResult<()> {
        if self.fail_next_write.swap(false, Ordering::SeqCst) {
            return Err(AppError::internal("profile write failed"));
        }
        self.inner.upsert(profile).await
    }
}

#[tokio::test]
async fn test_first_access_creates_default_profile() {
    let (store, service) = service();
    assert!(store.is_empty().await);

    let profile = service.profile("alice").await.unwrap();

    assert_eq!(profile.user_id.as_deref(), Some("alice"));
    assert_eq!(profile.points, 0);
    assert_eq!(profile.garden_level, 1);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_blank_user_id_is_rejected() {
    let (_, service) = service();
    let error = service.profile("   ").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_select_condition_completes_onboarding() {
    let (store, service) = service();
    service
        .select_condition("alice", HealthCondition::Both)
        .await
        .unwrap();

    let stored = store.fetch("alice").await.unwrap().unwrap();
    assert_eq!(stored.condition, HealthCondition::Both);
    assert!(stored.onboarding_complete);
}

#[tokio::test]
async fn test_quest_points_apply_once() {
    let (_, service) = service();

    let award = service.complete_quest("alice", "q3").await.unwrap().unwrap();
    assert_eq!(award.points, 20);
    assert!(service.complete_quest("alice", "q3").await.unwrap().is_none());
    assert!(service.complete_quest("alice", "unknown").await.unwrap().is_none());

    let quests = service.quests("alice").await;
    assert!(quests.iter().find(|q| q.id == "q3").unwrap().completed);
    assert_eq!(service.profile("alice").await.unwrap().points, 20);
}

#[tokio::test]
async fn test_quest_boards_are_per_user() {
    let (_, service) = service();
    service.complete_quest("alice", "q1").await.unwrap();

    assert!(service.quests("bob").await.iter().all(|q| !q.completed));
    assert!(service.complete_quest("bob", "q1").await.unwrap().is_some());
}

#[tokio::test]
async fn test_daily_reset_allows_repeat() {
    let (_, service) = service();
    service.complete_quest("alice", "q1").await.unwrap();
    service.reset_daily_quests("alice").await;

    let award = service.complete_quest("alice", "q1").await.unwrap().unwrap();
    assert_eq!(award.points, 20);
}

#[tokio::test]
async fn test_tree_planting_levels_up() {
    let (store, service) = service();
    service.adjust_points("alice", 70).await.unwrap();

    let award = service.plant_tree("alice").await.unwrap();

    assert_eq!(award.points, 70 + TREE_PLANTING_POINTS);
    assert!(award.leveled_up());
    let stored = store.fetch("alice").await.unwrap().unwrap();
    assert_eq!(stored.trees_planted, 1);
    assert_eq!(stored.garden_level, 2);
}

#[tokio::test]
async fn test_penalty_lowers_level_and_floors_at_zero() {
    let (store, service) = service();
    service.adjust_points("alice", 320).await.unwrap();

    let award = service.adjust_points("alice", -50).await.unwrap();
    assert!(award.leveled_down());
    assert_eq!(store.fetch("alice").await.unwrap().unwrap().garden_level, 2);

    let award = service.adjust_points("alice", -1_000).await.unwrap();
    assert_eq!(award.points, 0);
    assert_eq!(award.progress.level, 1);
}

#[tokio::test]
async fn test_garden_progress_reflects_points() {
    let (_, service) = service();
    service.adjust_points("alice", 250).await.unwrap();

    let progress = service.garden_progress("alice").await.unwrap();
    assert_eq!(progress.level, 2);
    assert_eq!(progress.remaining_points, 50);
}

#[tokio::test]
async fn test_empty_stage_table_is_a_config_error() {
    let service = JourneyService::new(Arc::new(InMemoryProfileStore::new()), Vec::new());
    let error = service.plant_tree("alice").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[tokio::test]
async fn test_store_rejects_anonymous_profile() {
    let store = InMemoryProfileStore::new();
    assert!(store.upsert(&HealthProfile::default()).await.is_err());
}

#[tokio::test]
async fn test_concurrent_awards_are_not_lost() {
    let store = Arc::new(YieldingStore::default());
    let service = JourneyService::new(store.clone(), GardenConfig::default().stages);

    let (first, second) = tokio::join!(service.plant_tree("u"), service.plant_tree("u"));
    first.unwrap();
    second.unwrap();

    let stored = store.fetch("u").await.unwrap().unwrap();
    assert_eq!(stored.points, 2 * TREE_PLANTING_POINTS);
    assert_eq!(stored.trees_planted, 2);
}

#[tokio::test]
async fn test_concurrent_quest_and_tree_both_count() {
    let store = Arc::new(YieldingStore::default());
    let service = JourneyService::new(store.clone(), GardenConfig::default().stages);

    let (quest, tree) = tokio::join!(
        service.complete_quest("u", "q3"),
        service.plant_tree("u")
    );
    assert!(quest.unwrap().is_some());
    tree.unwrap();

    let stored = store.fetch("u").await.unwrap().unwrap();
    assert_eq!(stored.points, 20 + TREE_PLANTING_POINTS);
    assert_eq!(stored.trees_planted, 1);
}

#[tokio::test]
async fn test_failed_quest_award_can_be_retried() {
    let store = Arc::new(FlakyStore::default());
    let service = JourneyService::new(store.clone(), GardenConfig::default().stages);
    service.profile("alice").await.unwrap();

    store.fail_next_write.store(true, Ordering::SeqCst);
    assert!(service.complete_quest("alice", "q1").await.is_err());

    let quests = service.quests("alice").await;
    assert!(!quests.iter().find(|q| q.id == "q1").unwrap().completed);
    assert_eq!(store.fetch("alice").await.unwrap().unwrap().points, 0);

    let award = service.complete_quest("alice", "q1").await.unwrap().unwrap();
    assert_eq!(award.points, 10);
    assert!(service.quests("alice").await.iter().find(|q| q.id == "q1").unwrap().completed);
}

#[tokio::test]
async fn test_quest_stays_open_when_stage_table_is_empty() {
    let service = JourneyService::new(Arc::new(InMemoryProfileStore::new()), Vec::new());

    let error = service.complete_quest("alice", "q2").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(service.quests("alice").await.iter().all(|q| !q.completed));
}
