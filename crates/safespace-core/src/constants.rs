// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Thresholds, defaults, and service identifiers for the SafeSpace platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single flat list.

/// Air quality index scale
pub mod aqi {
    /// Lowest value of the standardized index
    pub const INDEX_FLOOR: u16 = 0;
    /// Highest value of the standardized index
    pub const INDEX_CEILING: u16 = 500;
    /// Above this index outdoor activity should be avoided
    pub const AVOID_OUTDOOR_ABOVE: u16 = 150;
    /// Above this index exposure should be limited
    pub const LIMIT_EXPOSURE_ABOVE: u16 = 100;
    /// Below this index conditions are ideal for exercise
    pub const IDEAL_EXERCISE_BELOW: u16 = 50;
}

/// Noise exposure thresholds in decibels
pub mod noise {
    /// Above this level hearing protection is advised
    pub const HEARING_PROTECTION_ABOVE_DB: f64 = 85.0;
    /// Below this level conditions are quiet enough for exercise
    pub const IDEAL_EXERCISE_BELOW_DB: f64 = 60.0;
}

/// Location defaults used when no position can be resolved
pub mod location {
    /// Default latitude (New Delhi)
    pub const DEFAULT_LATITUDE: f64 = 28.6139;
    /// Default longitude (New Delhi)
    pub const DEFAULT_LONGITUDE: f64 = 77.209;
    /// Location name for synthetic readings when auto-detect is on
    pub const LOCAL_ZONE: &str = "Local Zone";
    /// Location name for synthetic readings when a device fix is available
    pub const HOME_BASE: &str = "Home Base";
    /// Location name when nothing is known
    pub const UNKNOWN: &str = "Unknown";
    /// Device location timeout in seconds
    pub const DEVICE_TIMEOUT_SECS: u64 = 10;
}

/// Mood trend classification
pub mod mood {
    /// Default trailing window for trend queries, in days
    pub const DEFAULT_WINDOW_DAYS: i64 = 7;
    /// Longest accepted trailing window, in days
    pub const MAX_WINDOW_DAYS: i64 = 3650;
    /// Mean score at or above which the trend is improving
    pub const IMPROVING_MIN_SCORE: f64 = 3.5;
    /// Mean score at or above which the trend is stable
    pub const STABLE_MIN_SCORE: f64 = 2.5;
}

/// Offline risk assessment presented when the analyst is unreachable
pub mod offline_assessment {
    /// Headline for the offline assessment
    pub const HEADLINE: &str = "System Offline";
    /// Message for the offline assessment
    pub const MESSAGE: &str = "I can't reach the satellites right now, but please stay safe.";
    /// Amber accent colour
    pub const ACCENT_COLOR: &str = "#f59e0b";
}

/// Service identifiers
pub mod service_names {
    /// Service name used in structured logs
    pub const SAFESPACE: &str = "safespace";
    /// User agent sent to external services (required by the Nominatim usage policy)
    pub const USER_AGENT: &str = "SafeSpace-App/1.0 (Environmental Health Monitor)";
}
