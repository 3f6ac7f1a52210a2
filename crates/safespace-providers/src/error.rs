// ABOUTME: Provider error type shared by all external data sources
// ABOUTME: Distinguishes disabled services, missing keys, empty results and transport failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use crate::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Provider errors
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Service returned a non-success status or an unusable body
    #[error("{service} API error: {message}")]
    ApiError {
        /// Service name
        service: &'static str,
        /// Failure detail
        message: String,
    },

    /// API key was not configured
    #[error("{0} API key not configured")]
    MissingApiKey(&'static str),

    /// Lookup returned no match
    #[error("{service}: no result for {query}")]
    NotFound {
        /// Service name
        service: &'static str,
        /// What was looked up
        query: String,
    },

    /// Service answered but had no data for the location
    #[error("{0}: data unavailable for this location")]
    DataUnavailable(&'static str),

    /// Service disabled by configuration
    #[error("{0} is disabled")]
    Disabled(&'static str),

    /// Source did not answer in time
    #[error("{0} timed out")]
    Timeout(&'static str),

    /// Network communication error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Result alias for provider calls
pub type ProviderResult<T> = Result<T, ProviderError>;

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        let code = match &error {
            ProviderError::MissingApiKey(_) | ProviderError::Disabled(_) => ErrorCode::ConfigMissing,
            ProviderError::NotFound { .. } => ErrorCode::ResourceNotFound,
            ProviderError::Network(_) | ProviderError::Timeout(_) => {
                ErrorCode::ExternalServiceUnavailable
            }
            ProviderError::ApiError { .. } | ProviderError::DataUnavailable(_) => {
                ErrorCode::ExternalServiceError
            }
        };
        Self::new(code, error.to_string())
    }
}
