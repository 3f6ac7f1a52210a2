// ABOUTME: Configuration error types for intelligence module validation
// ABOUTME: Defines error variants for empty tables, invalid ranges, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

//! Configuration error types for intelligence module validation.

use crate::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
///
/// These are startup/config defects, never runtime-recoverable conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The garden stage table has no entries
    #[error("Garden stage table must contain at least one stage")]
    EmptyStageTable,

    /// Value outside acceptable range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Required configuration field is missing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string())
    }
}
