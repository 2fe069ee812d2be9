//! Synthetic surf conditions
//!
//! Every value is drawn uniformly: numeric fields from the ranges in
//! [`SampleRanges`], categorical fields from the enum's `ALL` table. Nothing is
//! remembered between calls, so callers supply the random source and the clock.

use std::ops::Range;

use chrono::{DateTime, Days, NaiveDate, Utc};
use rand::Rng;

use crate::catalog::SurfSpot;
use crate::conditions::models::{
    DayOutlook, ForecastDay, SessionAdvice, SimulatedCondition, SpotForecast, TidePhase,
    WaveQuality, WindDirection,
};

/// Length of the forecast served by the API
pub const FORECAST_DAYS: u32 = 7;

/// Sampling ranges for the numeric condition fields
///
/// Wave heights are rounded to one decimal after sampling, so they may land on
/// either bound. Integer ranges are half-open.
#[derive(Debug, Clone)]
pub struct SampleRanges {
    pub wave_height_m: Range<f64>,
    pub wind_speed_kmh: Range<u32>,
    pub temperature_c: Range<i32>,
}

pub const CURRENT_RANGES: SampleRanges = SampleRanges {
    wave_height_m: 1.0..4.0,
    wind_speed_kmh: 5..25,
    temperature_c: 18..28,
};

pub const FORECAST_RANGES: SampleRanges = SampleRanges {
    wave_height_m: 0.5..4.5,
    wind_speed_kmh: 5..30,
    temperature_c: 16..28,
};

/// Simulate the conditions at `spot` as of `now`
pub fn generate_current_conditions<R: Rng + ?Sized>(
    rng: &mut R,
    spot: &SurfSpot,
    now: DateTime<Utc>,
) -> SimulatedCondition {
    let ranges = &CURRENT_RANGES;

    SimulatedCondition {
        spot_id: spot.id,
        spot_name: spot.name,
        timestamp: now,
        wave_height_m: round_to_tenth(rng.random_range(ranges.wave_height_m.clone())),
        wind_direction: pick(rng, &WindDirection::ALL),
        wind_speed_kmh: rng.random_range(ranges.wind_speed_kmh.clone()),
        temperature_c: rng.random_range(ranges.temperature_c.clone()),
        wave_quality: pick(rng, &WaveQuality::ALL),
        tide: pick(rng, &TidePhase::ALL),
        advice: if rng.random_bool(0.5) {
            SessionAdvice::GoSurf
        } else {
            SessionAdvice::WaitForTomorrow
        },
    }
}

/// Simulate `days` consecutive forecast days for `spot`, the first one dated `today`
pub fn generate_forecast<R: Rng + ?Sized>(
    rng: &mut R,
    spot: &SurfSpot,
    today: NaiveDate,
    days: u32,
) -> SpotForecast {
    let days = (0..days)
        .map_while(|offset| today.checked_add_days(Days::new(u64::from(offset))))
        .map(|date| generate_forecast_day(rng, date))
        .collect();

    SpotForecast {
        spot_id: spot.id,
        spot_name: spot.name,
        days,
    }
}

fn generate_forecast_day<R: Rng + ?Sized>(rng: &mut R, date: NaiveDate) -> ForecastDay {
    let ranges = &FORECAST_RANGES;

    ForecastDay {
        date,
        wave_height_m: round_to_tenth(rng.random_range(ranges.wave_height_m.clone())),
        wind_direction: pick(rng, &WindDirection::ALL),
        wind_speed_kmh: rng.random_range(ranges.wind_speed_kmh.clone()),
        temperature_c: rng.random_range(ranges.temperature_c.clone()),
        wave_quality: pick(rng, &WaveQuality::ALL),
        outlook: roll_outlook(rng),
    }
}

/// 40% perfect, then 70% of the rest good, otherwise another day
fn roll_outlook<R: Rng + ?Sized>(rng: &mut R) -> DayOutlook {
    if rng.random_bool(0.4) {
        DayOutlook::Perfect
    } else if rng.random_bool(0.7) {
        DayOutlook::Good
    } else {
        DayOutlook::AnotherDay
    }
}

/// Uniform choice from a non-empty table
fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, options: &[T]) -> T {
    options[rng.random_range(0..options.len())]
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
