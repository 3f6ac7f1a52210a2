// ABOUTME: SafeSpace CLI - run analysis cycles and engine calculations from the command line
// ABOUTME: Subcommands for a full environment analysis, PM2.5 conversion and garden progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health
//!
//! Usage:
//! ```bash
//! # Analyse current conditions (device position or default coordinates)
//! safespace analyze
//!
//! # Analyse a named city and print the report as JSON
//! safespace analyze --city "Mumbai" --json
//!
//! # Convert a PM2.5 concentration to an AQI value
//! safespace aqi 35.4
//!
//! # Show garden progress for a point total
//! safespace garden 250
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use safespace::analysis::{AnalysisCycle, AnalysisReport, OfflineAnalyst};
use safespace::config::{LocationMode, SafeSpaceConfig};
use safespace::logging::LoggingConfig;
use safespace::models::{HealthCondition, HealthProfile};
use safespace::orchestrator::EnvironmentOrchestrator;
use safespace_intelligence::{level_for_points, pm25_to_index, AqiCategory, RecommendationEngine};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "safespace",
    about = "SafeSpace environmental risk engine",
    long_about = "Assess air quality and noise risk, get recommendations, and inspect garden progression."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run a full analysis cycle
    Analyze {
        /// Analyse this city instead of the device position
        #[arg(long)]
        city: Option<String>,

        /// Health condition used for recommendations
        #[arg(long, value_enum, default_value = "prevention")]
        condition: ConditionArg,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a PM2.5 concentration (µg/m³) to a US AQI value
    Aqi {
        /// PM2.5 concentration
        pm25: f64,
    },

    /// Show the garden stage for a point total
    Garden {
        /// Cumulative points
        points: u32,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ConditionArg {
    Breathing,
    Hearing,
    Both,
    Prevention,
}

impl From<ConditionArg> for HealthCondition {
    fn from(arg: ConditionArg) -> Self {
        match arg {
            ConditionArg::Breathing => Self::Breathing,
            ConditionArg::Hearing => Self::Hearing,
            ConditionArg::Both => Self::Both,
            ConditionArg::Prevention => Self::Prevention,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let config = SafeSpaceConfig::from_env()?;

    match cli.command {
        Command::Analyze {
            city,
            condition,
            json,
        } => analyze(&config, city, condition.into(), json).await?,
        Command::Aqi { pm25 } => {
            let index = pm25_to_index(pm25);
            let category = AqiCategory::from_index(index);
            println!("PM2.5 {pm25} µg/m³ -> AQI {index} ({})", category.label());
        }
        Command::Garden { points } => {
            let progress = level_for_points(points, &config.intelligence.garden.stages)?;
            println!(
                "Level {} ({}) - {:.0}% to next stage",
                progress.level, progress.stage.label, progress.progress_percent
            );
            match progress.next_stage {
                Some(next) => println!(
                    "{} more points to reach {}",
                    progress.remaining_points, next.label
                ),
                None => println!("Top of the garden reached"),
            }
        }
    }

    Ok(())
}

async fn analyze(
    config: &SafeSpaceConfig,
    city: Option<String>,
    condition: HealthCondition,
    json: bool,
) -> Result<()> {
    let mut settings = config.analysis.clone();
    if let Some(city) = city {
        settings = settings.with_location(LocationMode::City(city));
    }

    let cycle = AnalysisCycle::new(
        EnvironmentOrchestrator::from_config(config),
        Arc::new(OfflineAnalyst),
        RecommendationEngine::new(config.intelligence.recommendations.clone()),
    );

    let profile = HealthProfile {
        condition,
        ..HealthProfile::default()
    };

    let report = cycle
        .run(&profile, &settings, |stage| {
            info!(progress = stage.percent(), "{}", stage.message());
        })
        .await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    let reading = report.reading();
    let source = if report.outcome.is_live() {
        "live"
    } else {
        "synthetic"
    };

    println!("📍 {} ({source} data)", reading.location_name);
    println!(
        "   AQI {} | noise {:.0} dB | {:.0}°C | humidity {:.0}% | {}",
        reading.pollutant_index,
        reading.noise_level_db,
        reading.temperature_celsius,
        reading.humidity_percentage,
        reading.condition_label
    );
    println!();
    println!(
        "{} risk: {}",
        report.assessment.risk_level, report.assessment.headline
    );
    println!("   {}", report.assessment.message);

    if !report.forecast.is_empty() {
        println!();
        for entry in &report.forecast {
            println!("   {}: {}", entry.period, entry.prediction);
        }
    }

    println!();
    for recommendation in &report.recommendations {
        println!(
            "{} {} - {}",
            recommendation.glyph, recommendation.title, recommendation.description
        );
    }
}
