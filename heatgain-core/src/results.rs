use enumset::EnumSet;
use serde::{Deserialize, Serialize};

use crate::profile::DailyProfile;

/// Irradiance basis of a calculation.
#[derive(Debug, Serialize, Deserialize, enumset::EnumSetType)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Clear-sky irradiance.
    Design,

    /// Typical-year irradiance.
    Typical,
}

impl Scenario {
    #[must_use]
    pub fn all() -> EnumSet<Self> {
        EnumSet::all()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Design => "Design",
            Self::Typical => "Typical",
        }
    }
}

/// Load components by source, each by UTC hour.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Components {
    pub solar: DailyProfile,
    pub conduction_radiant: DailyProfile,
    pub conduction_convective: DailyProfile,
    pub internal_radiant: DailyProfile,
    pub internal_convective: DailyProfile,
    pub internal_latent: DailyProfile,
    pub ventilation: DailyProfile,
}

impl Components {
    pub fn conduction(&self) -> DailyProfile {
        self.conduction_radiant + self.conduction_convective
    }

    pub fn internal_sensible(&self) -> DailyProfile {
        self.internal_radiant + self.internal_convective
    }
}

/// Cooling load of one scenario.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScenarioResults {
    pub sensible: DailyProfile,
    pub latent: DailyProfile,
    pub total: DailyProfile,
    pub components: Components,
}

#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CalculationResults {
    pub design: ScenarioResults,
    pub typical: ScenarioResults,

    /// Clear-sky global irradiance times the window area, summed over the windows.
    pub incident_solar_power: DailyProfile,
}

impl CalculationResults {
    pub const fn scenario(&self, scenario: Scenario) -> &ScenarioResults {
        match scenario {
            Scenario::Design => &self.design,
            Scenario::Typical => &self.typical,
        }
    }
}
