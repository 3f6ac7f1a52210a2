// ABOUTME: Core types and constants for the SafeSpace environmental wellness platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

#![deny(unsafe_code)]

//! # SafeSpace Core
//!
//! Foundation crate providing shared types and constants for the SafeSpace
//! environmental wellness platform. This crate performs no I/O and is designed
//! to change infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Thresholds, defaults, and service identifiers organized by domain
//! - **models**: Environment readings, health profiles, check-ins, recommendations

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (readings, profiles, check-ins, recommendations)
pub mod models;
