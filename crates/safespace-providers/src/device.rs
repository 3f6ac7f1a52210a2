// ABOUTME: Device position source backed by a configured fix
// ABOUTME: Stands in for platform geolocation on hosts without a positioning service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use crate::core::{Coordinates, DeviceLocator};
use crate::error::{ProviderError, ProviderResult};
use async_trait::async_trait;

/// Device locator that reports a fixed, optionally absent, position
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocator {
    position: Option<Coordinates>,
}

impl FixedLocator {
    /// Locator that always reports `position`
    #[must_use]
    pub const fn new(position: Coordinates) -> Self {
        Self {
            position: Some(position),
        }
    }

    /// Locator with no fix; every lookup fails
    #[must_use]
    pub const fn unavailable() -> Self {
        Self { position: None }
    }

    /// Locator built from an optional configured position
    #[must_use]
    pub const fn from_option(position: Option<Coordinates>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl DeviceLocator for FixedLocator {
    async fn current_position(&self) -> ProviderResult<Coordinates> {
        self.position
            .ok_or(ProviderError::DataUnavailable("device location"))
    }
}
