// ABOUTME: Synthetic environmental data for when live sources are unavailable
// ABOUTME: Time-of-day banded noise levels and bounded randomized fallback readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use crate::constants::location::UNKNOWN;
use crate::models::EnvironmentReading;
use rand::Rng;
use std::ops::Range;

/// Probability that a synthetic reading models a polluted, noisy day
pub const BAD_DAY_PROBABILITY: f64 = 0.4;

/// Noise band in whole decibels for a local hour (0..=23)
///
/// Rush hours are loudest, nights quietest.
#[must_use]
pub const fn noise_band_for_hour(hour: u32) -> Range<u32> {
    match hour {
        6..=8 => 65..80,
        9..=16 => 60..70,
        17..=19 => 70..90,
        20..=22 => 55..65,
        _ => 35..45,
    }
}

/// Random noise level for a local hour, drawn from [`noise_band_for_hour`]
pub fn noise_for_hour<R: Rng + ?Sized>(hour: u32, rng: &mut R) -> f64 {
    f64::from(rng.gen_range(noise_band_for_hour(hour)))
}

/// Fully synthetic reading with bounded values
///
/// The location name is [`UNKNOWN`]; callers rename it to match how the
/// fallback was reached.
pub fn synthetic_reading<R: Rng + ?Sized>(rng: &mut R) -> EnvironmentReading {
    let bad_day = rng.gen_bool(BAD_DAY_PROBABILITY);

    let (pollutant_index, noise_level_db, condition_label) = if bad_day {
        (rng.gen_range(110..170_u16), rng.gen_range(75..95_u32), "Hazy")
    } else {
        (rng.gen_range(25..65_u16), rng.gen_range(40..60_u32), "Sunny")
    };

    EnvironmentReading {
        pollutant_index,
        noise_level_db: f64::from(noise_level_db),
        temperature_celsius: f64::from(rng.gen_range(20..30_u32)),
        humidity_percentage: f64::from(rng.gen_range(40..70_u32)),
        condition_label: condition_label.to_owned(),
        location_name: UNKNOWN.to_owned(),
    }
}
