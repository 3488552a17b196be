//! Headline numbers of a calculation.

use chrono::Month;
use heatgain_quantities::{area::SquareMeters, energy::KilowattHours, power::Watts};
use serde::Serialize;

use crate::{
    calendar::local_hour,
    internal::InternalGains,
    results::{CalculationResults, ScenarioResults},
};

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Peak {
    pub utc_hour: usize,
    pub local_hour: usize,
    pub load: Watts,
}

impl Peak {
    fn of(results: &ScenarioResults, month: Month) -> Self {
        let (utc_hour, load) = results.total.peak();
        Self { utc_hour, local_hour: local_hour(utc_hour, month), load }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct PeakSummary {
    pub design: Peak,
    pub typical: Peak,

    /// Solar component at the design peak hour.
    pub solar_at_peak: Watts,

    /// Conduction component at the design peak hour.
    pub conduction_at_peak: Watts,

    /// Typical peak relative to the design peak, if there is a design peak at all.
    pub typical_to_design: Option<f64>,

    pub design_energy: KilowattHours,
    pub typical_energy: KilowattHours,
}

impl PeakSummary {
    pub fn new(results: &CalculationResults, month: Month) -> Self {
        let design = Peak::of(&results.design, month);
        let typical = Peak::of(&results.typical, month);
        let components = &results.design.components;
        Self {
            design,
            typical,
            solar_at_peak: components.solar[design.utc_hour],
            conduction_at_peak: components.conduction()[design.utc_hour],
            typical_to_design: (design.load > Watts::ZERO).then(|| typical.load / design.load),
            design_energy: results.design.total.energy(),
            typical_energy: results.typical.total.energy(),
        }
    }
}

/// Nominal internal gains while every source is active.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InternalGainsSummary {
    pub people_sensible: Watts,
    pub people_latent: Watts,
    pub lighting: Watts,
    pub equipment: Watts,
}

impl InternalGainsSummary {
    pub fn new(gains: &InternalGains, room_area: SquareMeters) -> Self {
        let people = gains.people;
        let (people_sensible, people_latent) = if people.enabled {
            let metabolism = people.activity.metabolism();
            let count = f64::from(people.count);
            (metabolism.sensible * count, metabolism.latent * count)
        } else {
            (Watts::ZERO, Watts::ZERO)
        };
        let lighting = if gains.lighting.enabled {
            (gains.lighting.power_density() * room_area).finite_or_zero()
        } else {
            Watts::ZERO
        };
        Self {
            people_sensible,
            people_latent,
            lighting,
            equipment: gains.equipment.iter().map(|item| item.total_power()).sum(),
        }
    }

    pub fn sensible(&self) -> Watts {
        self.people_sensible + self.lighting + self.equipment
    }

    pub const fn latent(&self) -> Watts {
        self.people_latent
    }

    pub fn total(&self) -> Watts {
        self.sensible() + self.latent()
    }
}
