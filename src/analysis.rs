// ABOUTME: Analysis cycle tying the orchestrator, an environment analyst and the recommendation engine
// ABOUTME: Emits staged progress updates and always yields a complete report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use crate::config::AnalysisSettings;
use crate::constants::noise::HEARING_PROTECTION_ABOVE_DB;
use crate::errors::AppResult;
use crate::logging::EventLogger;
use crate::models::{
    EnvironmentReading, ForecastIcon, ForecastPeriod, HealthCondition, HealthProfile,
    NarrativeForecast, Recommendation, RiskAssessment, RiskLevel,
};
use crate::orchestrator::{EnvironmentOrchestrator, ReadingOutcome};
use async_trait::async_trait;
use safespace_intelligence::{AqiCategory, RecommendationEngine};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, instrument, warn};

/// Progress stages of an analysis cycle, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    /// Cycle started
    Connecting,
    /// Scanning surroundings
    Scanning,
    /// Fetching real-time data
    Fetching,
    /// Starting the analyst
    WakingGuardian,
    /// Obtaining the reading
    ReceivingLiveData,
    /// Running the analyst
    Analyzing,
    /// Report ready
    Complete,
}

impl AnalysisStage {
    /// Every stage, in emission order
    pub const ALL: [Self; 7] = [
        Self::Connecting,
        Self::Scanning,
        Self::Fetching,
        Self::WakingGuardian,
        Self::ReceivingLiveData,
        Self::Analyzing,
        Self::Complete,
    ];

    /// Progress percentage reached at this stage
    #[must_use]
    pub const fn percent(self) -> u8 {
        match self {
            Self::Connecting => 10,
            Self::Scanning => 30,
            Self::Fetching => 50,
            Self::WakingGuardian => 75,
            Self::ReceivingLiveData => 85,
            Self::Analyzing => 90,
            Self::Complete => 100,
        }
    }

    /// Status line for this stage
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Connecting => "Connecting to satellite network...",
            Self::Scanning => "Scanning local environment...",
            Self::Fetching => "Fetching real-time data...",
            Self::WakingGuardian => "Waking up your guardian...",
            Self::ReceivingLiveData => "Receiving live environmental data...",
            Self::Analyzing => "Analyzing environmental conditions...",
            Self::Complete => "Analysis complete",
        }
    }
}

/// Source of risk assessments and narrative forecasts
///
/// Generative backends live outside this crate; [`OfflineAnalyst`] is the
/// bundled rule-based implementation.
#[async_trait]
pub trait EnvironmentAnalyst: Send + Sync {
    /// Assess the risk of a reading for a profile
    async fn assess(
        &self,
        reading: &EnvironmentReading,
        profile: &HealthProfile,
    ) -> AppResult<RiskAssessment>;

    /// Forecast how conditions evolve through the day
    async fn forecast(
        &self,
        reading: &EnvironmentReading,
        location: &str,
    ) -> AppResult<Vec<NarrativeForecast>>;
}

/// Rule-based analyst that works without any network access
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineAnalyst;

impl OfflineAnalyst {
    /// Risk tier for a reading and condition
    ///
    /// The AQI category sets the base tier. Noise above the hearing-protection
    /// threshold raises it to at least High, and breathing conditions escalate
    /// any tier once the index passes the sensitive-groups band.
    #[must_use]
    pub fn risk_level(reading: &EnvironmentReading, condition: HealthCondition) -> RiskLevel {
        let category = AqiCategory::from_index(reading.pollutant_index);
        let mut level = match category {
            AqiCategory::Good | AqiCategory::Moderate => RiskLevel::Low,
            AqiCategory::UnhealthyForSensitiveGroups => RiskLevel::Moderate,
            AqiCategory::Unhealthy => RiskLevel::High,
            AqiCategory::VeryUnhealthy | AqiCategory::Hazardous => RiskLevel::Severe,
        };

        if reading.noise_level_db > HEARING_PROTECTION_ABOVE_DB {
            level = level.max(RiskLevel::High);
        }

        if condition.affects_breathing()
            && !matches!(category, AqiCategory::Good | AqiCategory::Moderate)
        {
            level = level.escalate();
        }

        level
    }

    fn accent_color(level: RiskLevel) -> &'static str {
        match level {
            RiskLevel::Low => "#10b981",
            RiskLevel::Moderate => "#f59e0b",
            RiskLevel::High => "#ef4444",
            RiskLevel::Severe => "#7e0023",
        }
    }

    fn narrative(level: RiskLevel, location: &str) -> (&'static str, String) {
        match level {
            RiskLevel::Low => (
                "Clear Skies, Easy Breathing",
                format!("I'm watching over you. The air around {location} looks clean, so enjoy your time outside."),
            ),
            RiskLevel::Moderate => (
                "Take It Easy Today",
                format!("I'm noticing the air in {location} is a little heavy. If you're sensitive, keep outdoor time short."),
            ),
            RiskLevel::High => (
                "Guard Your Lungs Today",
                format!("I'm seeing unhealthy conditions around {location}. Keep outdoor plans short and your mask close."),
            ),
            RiskLevel::Severe => (
                "Stay Inside, Stay Safe",
                format!("Conditions in {location} are hazardous right now. I'd stay indoors and keep the windows closed."),
            ),
        }
    }

    fn period_prediction(period: ForecastPeriod, index: u16) -> &'static str {
        match (period, AqiCategory::from_index(index)) {
            (ForecastPeriod::Morning, AqiCategory::Good) => {
                "The morning air should be fresh and good for a walk."
            }
            (ForecastPeriod::Morning, AqiCategory::Moderate) => {
                "Morning air will be fair, fine for short trips outside."
            }
            (ForecastPeriod::Morning, _) => "Morning haze will linger, so keep outdoor plans short.",
            (ForecastPeriod::Afternoon, AqiCategory::Good) => {
                "Afternoon conditions stay safe for outdoor activity."
            }
            (ForecastPeriod::Afternoon, AqiCategory::Moderate) => {
                "The afternoon brings heavier air, so sensitive lungs should pace themselves."
            }
            (ForecastPeriod::Afternoon, _) => "Pollution peaks this afternoon, so stay indoors if you can.",
            (ForecastPeriod::Evening, AqiCategory::Good | AqiCategory::Moderate) => {
                "The evening cools down and the air stays safe to step out."
            }
            (ForecastPeriod::Evening, _) => {
                "The evening may ease a little, but keep the windows closed tonight."
            }
        }
    }

    fn looks_overcast(condition_label: &str) -> bool {
        let label = condition_label.to_lowercase();
        ["cloud", "haze", "hazy", "mist", "fog", "smoke", "rain", "drizzle"]
            .iter()
            .any(|word| label.contains(word))
    }
}

#[async_trait]
impl EnvironmentAnalyst for OfflineAnalyst {
    async fn assess(
        &self,
        reading: &EnvironmentReading,
        profile: &HealthProfile,
    ) -> AppResult<RiskAssessment> {
        let risk_level = Self::risk_level(reading, profile.condition);
        let (headline, mut message) = Self::narrative(risk_level, &reading.location_name);
        if reading.noise_level_db > HEARING_PROTECTION_ABOVE_DB {
            message.push_str(" It's loud out there too, so protect your ears.");
        }

        Ok(RiskAssessment {
            risk_level,
            headline: headline.to_owned(),
            message,
            accent_color: Self::accent_color(risk_level).to_owned(),
        })
    }

    async fn forecast(
        &self,
        reading: &EnvironmentReading,
        _location: &str,
    ) -> AppResult<Vec<NarrativeForecast>> {
        let risk_color = AqiCategory::from_index(reading.pollutant_index)
            .color_hex()
            .to_owned();
        let afternoon_icon = if Self::looks_overcast(&reading.condition_label) {
            ForecastIcon::Cloud
        } else {
            ForecastIcon::Sun
        };

        Ok([
            (ForecastPeriod::Morning, ForecastIcon::Sun),
            (ForecastPeriod::Afternoon, afternoon_icon),
            (ForecastPeriod::Evening, ForecastIcon::Moon),
        ]
        .into_iter()
        .map(|(period, icon)| NarrativeForecast {
            period,
            prediction: Self::period_prediction(period, reading.pollutant_index).to_owned(),
            icon,
            risk_color: risk_color.clone(),
        })
        .collect())
    }
}

/// Everything one analysis cycle produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The reading and whether it is live
    pub outcome: ReadingOutcome,
    /// Risk assessment (offline assessment if the analyst failed)
    pub assessment: RiskAssessment,
    /// Narrative forecast (empty if the analyst failed)
    pub forecast: Vec<NarrativeForecast>,
    /// Ordered recommendations
    pub recommendations: Vec<Recommendation>,
}

impl AnalysisReport {
    /// The reading the report is based on
    #[must_use]
    pub const fn reading(&self) -> &EnvironmentReading {
        self.outcome.reading()
    }
}

/// One scripted pass from location lookup to recommendations
#[derive(Clone)]
pub struct AnalysisCycle {
    orchestrator: EnvironmentOrchestrator,
    analyst: Arc<dyn EnvironmentAnalyst>,
    engine: RecommendationEngine,
}

impl AnalysisCycle {
    /// Create a cycle
    #[must_use]
    pub fn new(
        orchestrator: EnvironmentOrchestrator,
        analyst: Arc<dyn EnvironmentAnalyst>,
        engine: RecommendationEngine,
    ) -> Self {
        Self {
            orchestrator,
            analyst,
            engine,
        }
    }

    /// Run the cycle, reporting each stage to `progress`
    ///
    /// Never fails: reading failures become synthetic readings, analyst failures
    /// become the offline assessment and an empty forecast.
    #[instrument(skip_all, fields(condition = %profile.condition))]
    pub async fn run<F>(
        &self,
        profile: &HealthProfile,
        settings: &AnalysisSettings,
        mut progress: F,
    ) -> AnalysisReport
    where
        F: FnMut(AnalysisStage) + Send,
    {
        for stage in [
            AnalysisStage::Connecting,
            AnalysisStage::Scanning,
            AnalysisStage::Fetching,
            AnalysisStage::WakingGuardian,
        ] {
            progress(stage);
            pause(settings.stage_delay).await;
        }

        progress(AnalysisStage::ReceivingLiveData);
        let outcome = self.orchestrator.fetch_reading(settings).await;
        if let Some(reason) = outcome.fallback_reason() {
            EventLogger::log_synthetic_fallback(&reason.to_string(), &outcome.reading().location_name);
        }

        progress(AnalysisStage::Analyzing);
        let reading = outcome.reading();
        let (assessment, forecast) = tokio::join!(
            self.analyst.assess(reading, profile),
            self.analyst.forecast(reading, &reading.location_name),
        );

        let assessment = assessment.unwrap_or_else(|e| {
            warn!("Environment analysis failed: {e}");
            RiskAssessment::offline()
        });
        let forecast = forecast.unwrap_or_else(|e| {
            warn!("Narrative forecast failed: {e}");
            Vec::new()
        });

        let recommendations = self.engine.generate(
            Some(reading),
            &forecast,
            profile.condition,
            assessment.risk_level,
        );

        EventLogger::log_analysis_complete(
            &reading.location_name,
            reading.pollutant_index,
            outcome.is_live(),
            &assessment.risk_level.to_string(),
        );
        info!(count = recommendations.len(), "Recommendations generated");

        progress(AnalysisStage::Complete);

        AnalysisReport {
            outcome,
            assessment,
            forecast,
            recommendations,
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        sleep(delay).await;
    }
}
