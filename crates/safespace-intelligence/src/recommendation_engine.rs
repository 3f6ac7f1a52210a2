// ABOUTME: Rule-based recommendation engine for environmental and personal advisories
// ABOUTME: Evaluates every rule in a fixed order and concatenates the matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

//! Recommendation engine
//!
//! Rules are independent and evaluated in this order, each appending at most one
//! recommendation (the condition rule may append two):
//!
//! 1. air quality (avoid outdoors, else limit exposure)
//! 2. noise (protect hearing)
//! 3. best time to go outside, from the first forecast entry mentioning "safe" or "good"
//! 4. breathing conditions (inhaler when risk is elevated, then hydration)
//! 5. ideal exercise conditions
//!
//! Output order is rule order; priority is informational and never used to sort.
//! Without a reading, rules 1, 2 and 5 are skipped.

use crate::config::RecommendationThresholds;
use crate::models::{
    EnvironmentReading, ForecastIcon, HealthCondition, NarrativeForecast, Recommendation,
    RecommendationCategory, RecommendationPriority, RiskLevel,
};

/// Stable rule identifiers
pub mod rule_ids {
    /// Air quality is poor
    pub const AQI_HIGH: &str = "aqi-high";
    /// Air quality is degraded
    pub const AQI_MODERATE: &str = "aqi-moderate";
    /// Noise is harmful
    pub const NOISE_HIGH: &str = "noise-high";
    /// A forecast period looks good
    pub const BEST_TIME: &str = "best-time";
    /// Breathing-sensitive user under elevated risk
    pub const BREATHING_ALERT: &str = "breathing-alert";
    /// Breathing-sensitive user
    pub const HYDRATION: &str = "hydration";
    /// Clean, quiet conditions
    pub const EXERCISE: &str = "exercise";
}

/// Keywords marking a forecast entry as a good time to go outside
const FAVORABLE_KEYWORDS: [&str; 2] = ["safe", "good"];

/// Recommendation engine with configurable thresholds
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    thresholds: RecommendationThresholds,
}

impl RecommendationEngine {
    /// Create an engine with custom thresholds
    #[must_use]
    pub const fn new(thresholds: RecommendationThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &RecommendationThresholds {
        &self.thresholds
    }

    /// Generate the ordered recommendation list
    ///
    /// Pure and idempotent: identical inputs give an identical list.
    #[must_use]
    pub fn generate(
        &self,
        reading: Option<&EnvironmentReading>,
        forecast: &[NarrativeForecast],
        condition: HealthCondition,
        risk_level: RiskLevel,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if let Some(reading) = reading {
            recommendations.extend(self.air_quality_rule(reading));
            recommendations.extend(self.noise_rule(reading));
        }

        recommendations.extend(best_time_rule(forecast));
        recommendations.extend(condition_rules(condition, risk_level));

        if let Some(reading) = reading {
            recommendations.extend(self.exercise_rule(reading));
        }

        recommendations
    }

    fn air_quality_rule(&self, reading: &EnvironmentReading) -> Option<Recommendation> {
        if reading.pollutant_index > self.thresholds.avoid_outdoor_aqi {
            Some(recommendation(
                rule_ids::AQI_HIGH,
                "Avoid Outdoor Activities",
                "Air quality is poor. Stay indoors and use air purifier if available.",
                RecommendationCategory::Safety,
                RecommendationPriority::High,
                "🏠",
            ))
        } else if reading.pollutant_index > self.thresholds.limit_exposure_aqi {
            Some(recommendation(
                rule_ids::AQI_MODERATE,
                "Limit Outdoor Exposure",
                "Consider wearing an N95 mask if going outside.",
                RecommendationCategory::Safety,
                RecommendationPriority::Medium,
                "😷",
            ))
        } else {
            None
        }
    }

    fn noise_rule(&self, reading: &EnvironmentReading) -> Option<Recommendation> {
        (reading.noise_level_db > self.thresholds.hearing_protection_db).then(|| {
            recommendation(
                rule_ids::NOISE_HIGH,
                "Protect Your Hearing",
                "Use noise-canceling headphones or earplugs in loud environments.",
                RecommendationCategory::Safety,
                RecommendationPriority::High,
                "🎧",
            )
        })
    }

    fn exercise_rule(&self, reading: &EnvironmentReading) -> Option<Recommendation> {
        (reading.pollutant_index < self.thresholds.ideal_exercise_aqi
            && reading.noise_level_db < self.thresholds.ideal_exercise_db)
            .then(|| {
                recommendation(
                    rule_ids::EXERCISE,
                    "Perfect for Exercise",
                    "Conditions are ideal for outdoor physical activity.",
                    RecommendationCategory::Activity,
                    RecommendationPriority::Low,
                    "🏃",
                )
            })
    }
}

/// Generate recommendations with default thresholds
#[must_use]
pub fn generate_recommendations(
    reading: Option<&EnvironmentReading>,
    forecast: &[NarrativeForecast],
    condition: HealthCondition,
    risk_level: RiskLevel,
) -> Vec<Recommendation> {
    RecommendationEngine::default().generate(reading, forecast, condition, risk_level)
}

fn best_time_rule(forecast: &[NarrativeForecast]) -> Option<Recommendation> {
    let entry = forecast.iter().find(|entry| {
        let text = entry.prediction.to_lowercase();
        FAVORABLE_KEYWORDS.iter().any(|keyword| text.contains(keyword))
    })?;

    let glyph = match entry.icon {
        ForecastIcon::Sun => "☀️",
        ForecastIcon::Moon => "🌙",
        ForecastIcon::Cloud | ForecastIcon::Other => "☁️",
    };

    Some(Recommendation {
        id: rule_ids::BEST_TIME.to_owned(),
        title: format!("Best Time: {}", entry.period),
        description: entry.prediction.clone(),
        category: RecommendationCategory::Activity,
        priority: RecommendationPriority::Medium,
        glyph: glyph.to_owned(),
    })
}

fn condition_rules(condition: HealthCondition, risk_level: RiskLevel) -> Vec<Recommendation> {
    if !condition.affects_breathing() {
        return Vec::new();
    }

    let mut recommendations = Vec::with_capacity(2);
    if risk_level.is_elevated() {
        recommendations.push(recommendation(
            rule_ids::BREATHING_ALERT,
            "Keep Inhaler Ready",
            "Have your rescue inhaler accessible at all times.",
            RecommendationCategory::Health,
            RecommendationPriority::High,
            "💊",
        ));
    }
    recommendations.push(recommendation(
        rule_ids::HYDRATION,
        "Stay Hydrated",
        "Drink plenty of water to help your respiratory system.",
        RecommendationCategory::Health,
        RecommendationPriority::Medium,
        "💧",
    ));
    recommendations
}

fn recommendation(
    id: &str,
    title: &str,
    description: &str,
    category: RecommendationCategory,
    priority: RecommendationPriority,
    glyph: &str,
) -> Recommendation {
    Recommendation {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        category,
        priority,
        glyph: glyph.to_owned(),
    }
}
