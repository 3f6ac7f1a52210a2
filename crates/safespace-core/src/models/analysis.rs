// ABOUTME: Risk assessment and narrative forecast models from the environment analyst
// ABOUTME: RiskLevel tiers, RiskAssessment headline/message, and per-period forecasts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use crate::constants::offline_assessment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative severity classification for current conditions
///
/// Variants are ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Conditions pose little risk
    Low,
    /// Sensitive users should take care
    Moderate,
    /// Conditions are harmful for sensitive users
    High,
    /// Conditions are harmful for everyone
    Severe,
}

impl RiskLevel {
    /// High or Severe
    #[must_use]
    pub const fn is_elevated(&self) -> bool {
        matches!(self, Self::High | Self::Severe)
    }

    /// The next tier up, saturating at [`RiskLevel::Severe`]
    #[must_use]
    pub const fn escalate(self) -> Self {
        match self {
            Self::Low => Self::Moderate,
            Self::Moderate => Self::High,
            Self::High | Self::Severe => Self::Severe,
        }
    }

    /// Parse a tier label leniently (case-insensitive), as returned by an analyst
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            "severe" => Some(Self::Severe),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
            Self::Severe => write!(f, "Severe"),
        }
    }
}

/// Risk analysis for a reading, produced by an external analyst
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Computed risk tier
    pub risk_level: RiskLevel,
    /// Short headline (3-6 words)
    pub headline: String,
    /// Message addressed to the user
    pub message: String,
    /// Hex accent colour for presentation
    pub accent_color: String,
}

impl RiskAssessment {
    /// Assessment shown when no analyst could be reached
    #[must_use]
    pub fn offline() -> Self {
        Self {
            risk_level: RiskLevel::Moderate,
            headline: offline_assessment::HEADLINE.to_owned(),
            message: offline_assessment::MESSAGE.to_owned(),
            accent_color: offline_assessment::ACCENT_COLOR.to_owned(),
        }
    }
}

/// Period of the day a forecast entry covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForecastPeriod {
    /// Morning
    Morning,
    /// Afternoon
    Afternoon,
    /// Evening
    Evening,
}

impl fmt::Display for ForecastPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Morning => write!(f, "Morning"),
            Self::Afternoon => write!(f, "Afternoon"),
            Self::Evening => write!(f, "Evening"),
        }
    }
}

/// Icon tag attached to a forecast entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastIcon {
    /// Sunny period
    Sun,
    /// Overcast period
    Cloud,
    /// Night period
    Moon,
    /// Any tag the analyst invents
    #[serde(other)]
    Other,
}

/// One forward-looking prediction for a period of the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeForecast {
    /// Period covered
    pub period: ForecastPeriod,
    /// One-sentence prediction text
    pub prediction: String,
    /// Icon tag
    pub icon: ForecastIcon,
    /// Hex risk colour
    #[serde(default)]
    pub risk_color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_levels_are_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::High < RiskLevel::Severe);
        assert_eq!(RiskLevel::Low.max(RiskLevel::High), RiskLevel::High);
    }

    #[test]
    fn test_escalate_saturates() {
        assert_eq!(RiskLevel::Low.escalate(), RiskLevel::Moderate);
        assert_eq!(RiskLevel::High.escalate(), RiskLevel::Severe);
        assert_eq!(RiskLevel::Severe.escalate(), RiskLevel::Severe);
    }

    #[test]
    fn test_from_label_is_lenient() {
        assert_eq!(RiskLevel::from_label(" HIGH "), Some(RiskLevel::High));
        assert_eq!(RiskLevel::from_label("severe"), Some(RiskLevel::Severe));
        assert_eq!(RiskLevel::from_label("extreme"), None);
    }

    #[test]
    fn test_unknown_forecast_icon_deserializes_as_other() {
        let icon: ForecastIcon = serde_json::from_str("\"rainbow\"").unwrap_or(ForecastIcon::Sun);
        assert_eq!(icon, ForecastIcon::Other);
    }
}
