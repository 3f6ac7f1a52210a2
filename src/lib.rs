// ABOUTME: Main library entry point for the SafeSpace environmental risk and progression engine
// ABOUTME: Wires configuration, logging, data orchestration, analysis cycles and journey tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

#![deny(unsafe_code)]

//! # SafeSpace
//!
//! Environmental risk assessment and wellness progression for people whose health
//! is sensitive to air quality and noise.
//!
//! ## Architecture
//!
//! - **`safespace-core`**: error types, constants and shared models
//! - **`safespace-intelligence`**: AQI conversion, garden progression, recommendation
//!   rules, mood tracking and quests; pure and synchronous
//! - **`safespace-providers`**: weather, air quality, geocoding and synthetic data sources
//! - **this crate**: configuration, logging, the reading orchestrator, the analysis
//!   cycle and the journey service
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use safespace::analysis::{AnalysisCycle, OfflineAnalyst};
//! use safespace::config::SafeSpaceConfig;
//! use safespace::errors::AppResult;
//! use safespace::models::HealthProfile;
//! use safespace::orchestrator::EnvironmentOrchestrator;
//! use safespace_intelligence::RecommendationEngine;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = SafeSpaceConfig::from_env()?;
//!     let cycle = AnalysisCycle::new(
//!         EnvironmentOrchestrator::from_config(&config),
//!         Arc::new(OfflineAnalyst),
//!         RecommendationEngine::new(config.intelligence.recommendations.clone()),
//!     );
//!
//!     let report = cycle
//!         .run(&HealthProfile::default(), &config.analysis, |stage| {
//!             println!("{}% {}", stage.percent(), stage.message());
//!         })
//!         .await;
//!     println!("{}", report.assessment.headline);
//!     Ok(())
//! }
//! ```

// Re-export core modules so application code can use `crate::errors::*` etc.
pub use safespace_core::constants;
pub use safespace_core::errors;
pub use safespace_core::models;

/// Analysis cycle, environment analysts and reports
pub mod analysis;

/// Environment-driven configuration
pub mod config;

/// Profile persistence and point-awarding journey service
pub mod journey;

/// Structured logging setup and domain event helpers
pub mod logging;

/// Reading orchestration with synthetic fallback
pub mod orchestrator;
