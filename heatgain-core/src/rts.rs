//! Radiant Time Series: delayed conversion of radiant gains into cooling load.

use std::collections::BTreeMap;

use heatgain_quantities::power::Watts;
use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    profile::{DailyProfile, HOURS_PER_DAY},
};

#[derive(
    Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum ThermalMass {
    Light,
    Medium,
    Heavy,
    #[default]
    VeryHeavy,
}

#[derive(
    Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum FloorType {
    #[default]
    Panels,
    Tiles,
    Carpet,
}

/// Which decay series a radiant gain follows.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RadiationKind {
    /// Beam solar gain landing on the floor.
    Solar,

    /// Diffuse solar, conduction, and internal radiant gains.
    Nonsolar,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccumulationSettings {
    /// Delay the radiant gains, otherwise they become load in the same hour.
    pub include: bool,

    pub thermal_mass: ThermalMass,
    pub floor_type: FloorType,

    /// Share of the facade that is glazed, in percent.
    pub glass_percentage: u8,
}

impl Default for AccumulationSettings {
    fn default() -> Self {
        Self {
            include: true,
            thermal_mass: ThermalMass::default(),
            floor_type: FloorType::default(),
            glass_percentage: 50,
        }
    }
}

impl AccumulationSettings {
    const FALLBACK: Self = Self {
        include: true,
        thermal_mass: ThermalMass::Medium,
        floor_type: FloorType::Panels,
        glass_percentage: 50,
    };

    /// Tabulated glazing share closest to the configured one.
    #[must_use]
    pub const fn glass_bucket(self) -> u8 {
        match self.glass_percentage {
            0..=30 => 10,
            31..=70 => 50,
            _ => 90,
        }
    }
}

/// Decay series for one room type.
///
/// A missing series deserializes as empty and is treated as absent by [`RtsFactors::select`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RtsSeries {
    pub solar: Vec<f64>,
    pub nonsolar: Vec<f64>,
}

impl RtsSeries {
    fn factors(&self, kind: RadiationKind) -> &[f64] {
        match kind {
            RadiationKind::Solar => &self.solar,
            RadiationKind::Nonsolar => &self.nonsolar,
        }
    }
}

/// Thermal mass → floor → glass bucket → series.
pub type RtsTable = BTreeMap<ThermalMass, BTreeMap<FloorType, BTreeMap<u8, RtsSeries>>>;

/// Fractions of a radiant pulse that turn into cooling load 0, 1, … 23 hours later.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RtsFactors(pub [f64; HOURS_PER_DAY]);

impl RtsFactors {
    const MIN_SUM: f64 = 1e-6;

    /// Everything becomes load immediately.
    pub const NO_DELAY: Self = {
        let mut factors = [0.0; HOURS_PER_DAY];
        factors[0] = 1.0;
        Self(factors)
    };

    /// Zero-pad or truncate the tabulated series to a day.
    pub fn from_slice(factors: &[f64]) -> Self {
        let mut padded = [0.0; HOURS_PER_DAY];
        for (slot, factor) in padded.iter_mut().zip(factors) {
            *slot = if factor.is_finite() { *factor } else { 0.0 };
        }
        Self(padded)
    }

    /// Series for the room, falling back to the medium-mass default.
    ///
    /// An empty series, or one that sums to zero, counts as missing.
    pub fn select(table: &RtsTable, settings: AccumulationSettings, kind: RadiationKind) -> Self {
        let lookup = |settings: AccumulationSettings| {
            table
                .get(&settings.thermal_mass)?
                .get(&settings.floor_type)?
                .get(&settings.glass_bucket())
                .map(|series| Self::from_slice(series.factors(kind)))
                .filter(|factors| factors.sum() > Self::MIN_SUM)
        };
        if let Some(factors) = lookup(settings) {
            return factors;
        }
        warn!(
            thermal_mass = ?settings.thermal_mass,
            floor_type = ?settings.floor_type,
            glass_bucket = settings.glass_bucket(),
            ?kind,
            "no RTS series for the room, using the medium-mass default"
        );
        lookup(AccumulationSettings::FALLBACK).unwrap_or_else(|| {
            error!(?kind, "no default RTS series, radiant gains are not delayed");
            Self::NO_DELAY
        })
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Steady periodic response to the gains repeated day after day.
    pub fn apply(&self, gains: &DailyProfile) -> DailyProfile {
        convolve(gains, self)
    }
}

/// Circular convolution: `load[n] = Σₖ factors[k] × gains[(n − k) mod 24]`.
pub fn convolve(gains: &DailyProfile, factors: &RtsFactors) -> DailyProfile {
    DailyProfile::from_fn(|hour| {
        factors
            .0
            .iter()
            .enumerate()
            .map(|(lag, factor)| gains[(hour + HOURS_PER_DAY - lag) % HOURS_PER_DAY] * *factor)
            .sum::<Watts>()
            .finite_or_zero()
    })
}

#[cfg(test)]
pub mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    /// Solar series of a heavy room and a slightly faster non-solar one, each summing to one.
    pub fn series() -> RtsSeries {
        RtsSeries {
            solar: vec![
                0.55, 0.09, 0.04, 0.03, 0.03, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.01, 0.01,
                0.01, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01,
            ],
            nonsolar: vec![0.49, 0.17, 0.09, 0.05, 0.04, 0.03, 0.03, 0.02, 0.02, 0.02, 0.02, 0.02],
        }
    }

    pub fn table() -> RtsTable {
        BTreeMap::from([(
            ThermalMass::Medium,
            BTreeMap::from([(FloorType::Panels, BTreeMap::from([(50, series())]))]),
        )])
    }

    fn pulse(hour: usize, watts: f64) -> DailyProfile {
        let mut profile = DailyProfile::ZERO;
        profile[hour] = Watts::from(watts);
        profile
    }

    #[test]
    fn test_glass_bucket() {
        let bucket = |glass_percentage| {
            AccumulationSettings { glass_percentage, ..AccumulationSettings::default() }
                .glass_bucket()
        };
        assert_eq!(bucket(0), 10);
        assert_eq!(bucket(30), 10);
        assert_eq!(bucket(31), 50);
        assert_eq!(bucket(70), 50);
        assert_eq!(bucket(71), 90);
        assert_eq!(bucket(100), 90);
    }

    #[test]
    fn test_no_delay_is_identity() {
        let gains = DailyProfile::from_fn(|hour| Watts::from((hour * hour) as f64));
        assert_eq!(convolve(&gains, &RtsFactors::NO_DELAY), gains);
    }

    #[test]
    fn test_energy_is_conserved() {
        let factors = RtsFactors::from_slice(&series().solar);
        assert_abs_diff_eq!(factors.sum(), 1.0, epsilon = 1e-9);
        let gains = DailyProfile::from_fn(|hour| {
            Watts::from(if hour > 8 { 100.0 + hour as f64 } else { 0.0 })
        });
        let load = factors.apply(&gains);
        assert_abs_diff_eq!(load.total().value(), gains.total().value(), epsilon = 1e-6);
    }

    #[test]
    fn test_pulse_wraps_around_midnight() {
        let factors = RtsFactors::from_slice(&series().nonsolar);
        let load = factors.apply(&pulse(22, 1000.0));
        assert_abs_diff_eq!(load[22].value(), 490.0, epsilon = 1e-9);
        assert_abs_diff_eq!(load[23].value(), 170.0, epsilon = 1e-9);
        assert_abs_diff_eq!(load[0].value(), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(load[9].value(), 20.0, epsilon = 1e-9);
        assert_eq!(load[10], Watts::ZERO);
    }

    #[test]
    fn test_from_slice_pads_and_truncates() {
        let short = RtsFactors::from_slice(&[0.7, 0.3]);
        assert_abs_diff_eq!(short.0[1], 0.3);
        assert_abs_diff_eq!(short.0[23], 0.0);
        let long = RtsFactors::from_slice(&[0.5; 30]);
        assert_abs_diff_eq!(long.sum(), 12.0);
    }

    #[test]
    fn test_select_falls_back_to_medium() {
        let table = table();
        let settings = AccumulationSettings {
            thermal_mass: ThermalMass::Light,
            floor_type: FloorType::Carpet,
            ..AccumulationSettings::default()
        };
        assert_eq!(
            RtsFactors::select(&table, settings, RadiationKind::Solar),
            RtsFactors::from_slice(&series().solar),
        );
        assert_eq!(
            RtsFactors::select(&table, AccumulationSettings::FALLBACK, RadiationKind::Nonsolar),
            RtsFactors::from_slice(&series().nonsolar),
        );
    }

    #[test]
    fn test_select_skips_empty_series() {
        let mut table = table();
        table.entry(ThermalMass::Heavy).or_default().entry(FloorType::Carpet).or_default().insert(
            50,
            RtsSeries { solar: Vec::new(), nonsolar: vec![0.0; HOURS_PER_DAY] },
        );
        let settings = AccumulationSettings {
            thermal_mass: ThermalMass::Heavy,
            floor_type: FloorType::Carpet,
            ..AccumulationSettings::default()
        };
        let solar = RtsFactors::select(&table, settings, RadiationKind::Solar);
        assert_eq!(solar, RtsFactors::from_slice(&series().solar));
        let nonsolar = RtsFactors::select(&table, settings, RadiationKind::Nonsolar);
        assert_eq!(nonsolar, RtsFactors::from_slice(&series().nonsolar));

        let gains = pulse(12, 4000.0);
        assert_abs_diff_eq!(solar.apply(&gains).total().value(), 4000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_series_without_solar_key() -> Result {
        let table: RtsTable =
            serde_json::from_str(r#"{"heavy": {"carpet": {"50": {"nonsolar": [0.6, 0.4]}}}}"#)?;
        let series = &table[&ThermalMass::Heavy][&FloorType::Carpet][&50];
        assert!(series.solar.is_empty());
        assert_eq!(series.nonsolar, vec![0.6, 0.4]);
        assert_eq!(
            RtsFactors::select(&table, AccumulationSettings::FALLBACK, RadiationKind::Solar),
            RtsFactors::NO_DELAY,
        );
        Ok(())
    }

    #[test]
    fn test_select_without_table_does_not_delay() {
        assert_eq!(
            RtsFactors::select(
                &RtsTable::new(),
                AccumulationSettings::default(),
                RadiationKind::Solar,
            ),
            RtsFactors::NO_DELAY,
        );
    }
}
