//! Sensible gain of mechanical ventilation with heat recovery.

use heatgain_quantities::{temperature::Celsius, transmittance::Conductance};
use serde::{Deserialize, Serialize};

use crate::{profile::DailyProfile, temperature::TemperatureProfile};

/// Volumetric heat capacity of air, W·h/(m³·K).
pub const AIR_HEAT_CAPACITY: f64 = 0.34;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum HeatExchanger {
    #[default]
    None,
    CrossFlow,
    CounterFlow,
    Rotary,
}

impl HeatExchanger {
    /// Share of the sensible heat recovered from the exhaust air.
    #[must_use]
    pub const fn efficiency(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::CrossFlow => 0.5,
            Self::CounterFlow => 0.8,
            Self::Rotary => 0.75,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ventilation {
    pub enabled: bool,

    /// Supply airflow, m³/h.
    pub airflow: f64,

    pub exchanger: HeatExchanger,
}

impl Ventilation {
    /// Effective conductance between the outdoor and the room air.
    pub fn conductance(&self) -> Conductance {
        if !self.enabled || self.airflow <= 0.0 {
            return Conductance::ZERO;
        }
        Conductance::from(AIR_HEAT_CAPACITY * self.airflow * (1.0 - self.exchanger.efficiency()))
            .finite_or_zero()
    }

    /// Hourly convective gain, negative when the outdoor air is cooler.
    pub fn gains(&self, outdoor: &TemperatureProfile, indoor: Celsius) -> DailyProfile {
        let conductance = self.conductance();
        DailyProfile::from_fn(|hour| (conductance * (outdoor[hour] - indoor)).finite_or_zero())
    }
}
