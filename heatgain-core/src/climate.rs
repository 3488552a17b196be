//! Hourly solar geometry and irradiance per month and facade direction.

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
};

use chrono::Month;
use heatgain_quantities::{irradiance::WattsPerSquareMeter, temperature::Celsius};
use serde::{Deserialize, Serialize};

use crate::{profile::HOURS_PER_DAY, results::Scenario, rts::RtsTable, shading::ShadingTable};

/// Source of climate data and the lookup tables the engine depends on.
///
/// Every lookup is fallible by absence: missing data makes the affected window contribute nothing
/// rather than failing the whole calculation.
pub trait ClimateProvider {
    fn direction(&self, month: Month, direction: Direction) -> Option<&DirectionClimate>;

    /// Typical-year outdoor temperature by UTC hour.
    fn typical_temperature(&self, month: Month) -> Option<&[Celsius; HOURS_PER_DAY]>;

    fn shading(&self) -> &ShadingTable;

    fn rts(&self) -> &RtsTable;
}

/// Compass point a window faces.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl Direction {
    pub const ALL: [Self; 16] = [
        Self::N,
        Self::Nne,
        Self::Ne,
        Self::Ene,
        Self::E,
        Self::Ese,
        Self::Se,
        Self::Sse,
        Self::S,
        Self::Ssw,
        Self::Sw,
        Self::Wsw,
        Self::W,
        Self::Wnw,
        Self::Nw,
        Self::Nnw,
    ];

    /// Facade azimuth in degrees clockwise from north.
    #[must_use]
    pub fn azimuth(self) -> f64 {
        22.5 * f64::from(self as u8)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::Nne => "NNE",
            Self::Ne => "NE",
            Self::Ene => "ENE",
            Self::E => "E",
            Self::Ese => "ESE",
            Self::Se => "SE",
            Self::Sse => "SSE",
            Self::S => "S",
            Self::Ssw => "SSW",
            Self::Sw => "SW",
            Self::Wsw => "WSW",
            Self::W => "W",
            Self::Wnw => "WNW",
            Self::Nw => "NW",
            Self::Nnw => "NNW",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Hourly series for one facade direction in one month, indexed by UTC hour.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DirectionClimate {
    /// Clear-sky global irradiance on the facade.
    #[serde(alias = "Gcs")]
    pub clear_sky_global: [WattsPerSquareMeter; HOURS_PER_DAY],

    /// Clear-sky beam irradiance on the facade.
    #[serde(alias = "Gb")]
    pub clear_sky_beam: [WattsPerSquareMeter; HOURS_PER_DAY],

    /// Angle of incidence on the glazing, degrees.
    #[serde(alias = "theta")]
    pub incidence_angle: [f64; HOURS_PER_DAY],

    /// Solar profile angle, degrees. Louvers respond to it.
    #[serde(alias = "omega", default)]
    pub profile_angle: [f64; HOURS_PER_DAY],

    /// Typical-year global irradiance on the facade.
    #[serde(alias = "G")]
    pub typical_global: [WattsPerSquareMeter; HOURS_PER_DAY],

    /// Typical-year beam irradiance on the facade.
    #[serde(alias = "Gb_typical")]
    pub typical_beam: [WattsPerSquareMeter; HOURS_PER_DAY],
}

/// Beam and diffuse split of the facade irradiance at one hour.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Irradiance {
    pub beam: WattsPerSquareMeter,
    pub diffuse: WattsPerSquareMeter,
}

impl DirectionClimate {
    /// Irradiance components for the scenario, diffuse being the global remainder.
    pub fn irradiance(&self, scenario: Scenario, hour: usize) -> Irradiance {
        let (global, beam) = match scenario {
            Scenario::Design => (self.clear_sky_global[hour], self.clear_sky_beam[hour]),
            Scenario::Typical => (self.typical_global[hour], self.typical_beam[hour]),
        };
        let beam = beam.finite_or_zero().max(WattsPerSquareMeter::ZERO);
        let diffuse = (global.finite_or_zero() - beam).max(WattsPerSquareMeter::ZERO);
        Irradiance { beam, diffuse }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MonthClimate {
    #[serde(default)]
    pub temperature: Option<[Celsius; HOURS_PER_DAY]>,

    #[serde(default)]
    pub directions: BTreeMap<Direction, DirectionClimate>,
}

/// Climate dataset as shipped in JSON.
///
/// Months are keyed by their number, January being `1`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClimateDataset {
    pub months: BTreeMap<u32, MonthClimate>,

    #[serde(default)]
    pub shading: ShadingTable,

    #[serde(default)]
    pub rts: RtsTable,
}

impl ClimateDataset {
    fn month(&self, month: Month) -> Option<&MonthClimate> {
        self.months.get(&month.number_from_month())
    }
}

impl ClimateProvider for ClimateDataset {
    fn direction(&self, month: Month, direction: Direction) -> Option<&DirectionClimate> {
        self.month(month)?.directions.get(&direction)
    }

    fn typical_temperature(&self, month: Month) -> Option<&[Celsius; HOURS_PER_DAY]> {
        self.month(month)?.temperature.as_ref()
    }

    fn shading(&self) -> &ShadingTable {
        &self.shading
    }

    fn rts(&self) -> &RtsTable {
        &self.rts
    }
}
