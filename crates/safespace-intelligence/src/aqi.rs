// ABOUTME: PM2.5 concentration to US AQI conversion using EPA breakpoint interpolation
// ABOUTME: Also maps indices to EPA categories and coarse provider buckets to indices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

//! Air quality index conversion
//!
//! Concentrations are mapped with the EPA formula
//! `AQI = ((AQIhigh - AQIlow) / (Chigh - Clow)) * (C - Clow) + AQIlow`
//! and rounded to the nearest integer.
//!
//! Out-of-table inputs are clamped: NaN and negative concentrations yield 0,
//! anything above the last band yields 500. A concentration that lands in the
//! 0.1 µg/m³ gap between two bands is interpolated on the next band, which keeps
//! the function total and non-decreasing.

use crate::constants::aqi::{INDEX_CEILING, INDEX_FLOOR};
use serde::{Deserialize, Serialize};

/// One row of the breakpoint table
#[derive(Debug, Clone, Copy)]
struct Breakpoint {
    conc_low: f64,
    conc_high: f64,
    index_low: u16,
    index_high: u16,
}

impl Breakpoint {
    const fn new(conc_low: f64, conc_high: f64, index_low: u16, index_high: u16) -> Self {
        Self {
            conc_low,
            conc_high,
            index_low,
            index_high,
        }
    }

    fn interpolate(&self, concentration: f64) -> f64 {
        let slope =
            f64::from(self.index_high - self.index_low) / (self.conc_high - self.conc_low);
        slope.mul_add(concentration - self.conc_low, f64::from(self.index_low))
    }
}

/// US EPA PM2.5 breakpoints (µg/m³, 24-hour) and the AQI range each maps to
const PM25_BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 12.0, 0, 50),       // Good
    Breakpoint::new(12.1, 35.4, 51, 100),    // Moderate
    Breakpoint::new(35.5, 55.4, 101, 150),   // Unhealthy for Sensitive Groups
    Breakpoint::new(55.5, 150.4, 151, 200),  // Unhealthy
    Breakpoint::new(150.5, 250.4, 201, 300), // Very Unhealthy
    Breakpoint::new(250.5, 500.0, 301, 500), // Hazardous
];

/// Convert a PM2.5 concentration (µg/m³) to a US AQI value in `0..=500`
///
/// # Examples
///
/// ```
/// use safespace_intelligence::aqi::pm25_to_index;
///
/// assert_eq!(pm25_to_index(12.0), 50);
/// assert_eq!(pm25_to_index(35.4), 100);
/// assert_eq!(pm25_to_index(900.0), 500);
/// ```
#[must_use]
pub fn pm25_to_index(concentration: f64) -> u16 {
    if concentration.is_nan() || concentration <= 0.0 {
        return INDEX_FLOOR;
    }

    PM25_BREAKPOINTS
        .iter()
        .find(|bp| concentration <= bp.conc_high)
        .map_or(INDEX_CEILING, |bp| {
            let index = bp
                .interpolate(concentration)
                .round()
                .clamp(f64::from(INDEX_FLOOR), f64::from(INDEX_CEILING));
            index as u16
        })
}

/// Map a coarse 1-5 air quality bucket (as reported by `OpenWeatherMap`) to a
/// representative AQI value; unknown buckets map to 100
#[must_use]
pub const fn bucket_to_index(bucket: u8) -> u16 {
    match bucket {
        1 => 25,
        2 => 75,
        3 => 125,
        4 => 175,
        5 => 250,
        _ => 100,
    }
}

/// EPA air quality category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    /// 0-50
    Good,
    /// 51-100
    Moderate,
    /// 101-150
    UnhealthyForSensitiveGroups,
    /// 151-200
    Unhealthy,
    /// 201-300
    VeryUnhealthy,
    /// 301 and above
    Hazardous,
}

impl AqiCategory {
    /// Category for an AQI value
    #[must_use]
    pub const fn from_index(index: u16) -> Self {
        match index {
            0..=50 => Self::Good,
            51..=100 => Self::Moderate,
            101..=150 => Self::UnhealthyForSensitiveGroups,
            151..=200 => Self::Unhealthy,
            201..=300 => Self::VeryUnhealthy,
            _ => Self::Hazardous,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// EPA colour as a hex string
    #[must_use]
    pub const fn color_hex(&self) -> &'static str {
        match self {
            Self::Good => "#00e400",
            Self::Moderate => "#ffff00",
            Self::UnhealthyForSensitiveGroups => "#ff7e00",
            Self::Unhealthy => "#ff0000",
            Self::VeryUnhealthy => "#8f3f97",
            Self::Hazardous => "#7e0023",
        }
    }
}
