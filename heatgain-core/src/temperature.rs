//! Outdoor design temperature over the day.

use std::f64::consts::TAU;

use chrono::Month;
use heatgain_quantities::temperature::Celsius;

use crate::{
    calendar::is_summer_time,
    climate::ClimateProvider,
    prelude::*,
    profile::HOURS_PER_DAY,
};

/// Outdoor temperature by UTC hour.
pub type TemperatureProfile = [Celsius; HOURS_PER_DAY];

/// Difference between the daily maximum and minimum of the synthetic curve.
const DAILY_SWING: f64 = 12.0;

/// Day curve peaking at the design maximum.
///
/// The typical-year curve of the month is shifted up or down to the maximum. Without one, a
/// cosine with a fixed swing peaks in the early afternoon.
#[instrument(skip_all, fields(month = ?month, maximum = %maximum))]
pub fn temperature_profile(
    maximum: Celsius,
    month: Month,
    provider: &impl ClimateProvider,
) -> TemperatureProfile {
    if let Some(typical) = provider.typical_temperature(month)
        && typical.iter().all(|temperature| temperature.value().is_finite())
    {
        let typical_maximum = typical.iter().copied().max().unwrap_or(maximum);
        let shift = maximum - typical_maximum;
        debug!(?shift, "shifting the typical-year profile");
        return typical.map(|temperature| temperature + shift);
    }

    debug!("no typical-year profile, using the cosine day");
    let peak_hour = if is_summer_time(month) { 13.0 } else { 14.0 };
    let mean = maximum - Celsius::from(DAILY_SWING / 2.0);
    let amplitude = maximum - mean;
    std::array::from_fn(|hour| {
        let phase = TAU * (hour as f64 - peak_hour) / HOURS_PER_DAY as f64;
        mean + amplitude * phase.cos()
    })
}
