//! Interior attenuation coefficients (IAC) of shading devices.

use std::collections::BTreeMap;

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::{
    climate::ClimateProvider,
    prelude::*,
    window::{Construction, Window},
};

#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shading {
    pub enabled: bool,

    #[serde(default)]
    pub device: ShadingDevice,
}

/// Shading device with exactly the parameters its table lookup needs.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShadingDevice {
    Louvers { location: Location, color: Color, setting: LouverSetting },
    Draperies { material: DraperyMaterial, color: Color },
    RollerShades { setting: RollerShadeSetting },
    InsectScreens { location: Location },
}

impl Default for ShadingDevice {
    fn default() -> Self {
        Self::Louvers {
            location: Location::Indoor,
            color: Color::Light,
            setting: LouverSetting::Tilted45,
        }
    }
}

impl ShadingDevice {
    /// Draperies and roller shades only exist on the room side.
    #[must_use]
    pub const fn is_indoor(self) -> bool {
        match self {
            Self::Louvers { location, .. } | Self::InsectScreens { location } => {
                matches!(location, Location::Indoor)
            }
            Self::Draperies { .. } | Self::RollerShades { .. } => true,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Louvers { .. } => "louvers",
            Self::Draperies { .. } => "draperies",
            Self::RollerShades { .. } => "roller shades",
            Self::InsectScreens { .. } => "insect screens",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Indoor,
    Outdoor,
}

#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Light,
    Medium,
    Dark,
}

#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LouverSetting {
    /// Slats horizontal.
    #[serde(rename = "open_0")]
    #[cfg_attr(feature = "clap", value(name = "open-0"))]
    Open0,

    #[serde(rename = "tilted_45")]
    #[cfg_attr(feature = "clap", value(name = "tilted-45"))]
    Tilted45,

    #[serde(rename = "closed_90")]
    #[cfg_attr(feature = "clap", value(name = "closed-90"))]
    Closed90,
}

#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum DraperyMaterial {
    Open,
    Semiopen,
    Closed,
    Sheer,
}

#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum RollerShadeSetting {
    LightTranslucent,
    LightOpaque,
    DarkOpaque,
}

/// Table row: either a single IAC, or the louver pair at 0° and 60° profile angle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShadingCoefficients {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iac: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iac_diff: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iac0: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iac60: Option<f64>,

    /// Radiant fraction of the transmitted solar gain.
    pub fr: f64,
}

/// Attenuation tables of one glazing construction.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingCatalog {
    pub louvers:
        BTreeMap<Location, BTreeMap<Color, BTreeMap<LouverSetting, ShadingCoefficients>>>,

    /// Keyed by `sheer` or by `{material}_{color}`.
    pub draperies: BTreeMap<String, ShadingCoefficients>,

    pub roller_shades: BTreeMap<RollerShadeSetting, ShadingCoefficients>,
    pub insect_screens: BTreeMap<Location, ShadingCoefficients>,
}

pub type ShadingTable = BTreeMap<Construction, ShadingCatalog>;

/// Whether the shading configured on the windows takes part in the calculation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingMode {
    Configured,
    ForcedOff,
}

/// Resolved effect of shading at one hour.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Attenuation {
    pub beam: f64,
    pub diffuse: f64,

    /// Radiant fraction of the transmitted solar gain.
    pub radiant_fraction: f64,

    pub is_indoor: bool,
}

impl Attenuation {
    pub const NONE: Self = Self::transparent(false);

    const fn transparent(is_indoor: bool) -> Self {
        Self { beam: 1.0, diffuse: 1.0, radiant_fraction: 1.0, is_indoor }
    }
}

/// Shading response of one window, looked up once and evaluated per hour.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ShadingResponse {
    Uniform(Attenuation),

    /// Beam IAC follows the solar profile angle.
    Louvers { iac0: f64, iac60: f64, iac_diff: f64, radiant_fraction: f64, is_indoor: bool },
}

impl ShadingResponse {
    /// Look the window's device up in the table.
    ///
    /// Missing entries resolve to full transmission with a warning.
    pub fn resolve(window: &Window, table: &ShadingTable, mode: ShadingMode) -> Self {
        let shading = window.shading;
        if !shading.enabled || mode == ShadingMode::ForcedOff {
            return Self::Uniform(Attenuation::NONE);
        }
        let device = shading.device;
        let is_indoor = device.is_indoor();
        let construction = window.construction.table_key();

        let Some(coefficients) =
            table.get(&construction).and_then(|catalog| catalog.lookup(device))
        else {
            warn!(
                window = %window.id,
                ?construction,
                ?device,
                "no attenuation data, assuming full transmission"
            );
            return Self::Uniform(Attenuation::transparent(is_indoor));
        };
        let radiant_fraction = clamp_unit(coefficients.fr);

        match device {
            ShadingDevice::Louvers { .. } => {
                let (Some(iac0), Some(iac60), Some(iac_diff)) =
                    (coefficients.iac0, coefficients.iac60, coefficients.iac_diff)
                else {
                    warn!(
                        window = %window.id,
                        ?device,
                        "incomplete louver data, assuming full transmission"
                    );
                    return Self::Uniform(Attenuation::transparent(is_indoor));
                };
                Self::Louvers {
                    iac0: clamp_unit(iac0),
                    iac60: clamp_unit(iac60),
                    iac_diff: clamp_unit(iac_diff),
                    radiant_fraction,
                    is_indoor,
                }
            }
            ShadingDevice::Draperies { .. }
            | ShadingDevice::RollerShades { .. }
            | ShadingDevice::InsectScreens { .. } => {
                let Some(iac) = coefficients.iac else {
                    warn!(window = %window.id, ?device, "missing IAC, assuming full transmission");
                    return Self::Uniform(Attenuation::transparent(is_indoor));
                };
                let iac = clamp_unit(iac);
                Self::Uniform(Attenuation { beam: iac, diffuse: iac, radiant_fraction, is_indoor })
            }
        }
    }

    /// Attenuation at the solar profile angle in degrees.
    pub fn at(self, profile_angle: f64) -> Attenuation {
        match self {
            Self::Uniform(attenuation) => attenuation,
            Self::Louvers { iac0, iac60, iac_diff, radiant_fraction, is_indoor } => {
                let profile_angle = if profile_angle.is_finite() { profile_angle } else { 0.0 };
                let weight = (1.2 * profile_angle).clamp(0.0, 60.0) / 60.0;
                Attenuation {
                    beam: iac0 + (iac60 - iac0) * weight,
                    diffuse: iac_diff,
                    radiant_fraction,
                    is_indoor,
                }
            }
        }
    }
}

impl ShadingCatalog {
    fn lookup(&self, device: ShadingDevice) -> Option<&ShadingCoefficients> {
        match device {
            ShadingDevice::Louvers { location, color, setting } => {
                self.louvers.get(&location)?.get(&color)?.get(&setting)
            }
            ShadingDevice::Draperies { material, color } => {
                self.draperies.get(&drapery_key(material, color))
            }
            ShadingDevice::RollerShades { setting } => self.roller_shades.get(&setting),
            ShadingDevice::InsectScreens { location } => self.insect_screens.get(&location),
        }
    }
}

fn drapery_key(material: DraperyMaterial, color: Color) -> String {
    let material = match material {
        DraperyMaterial::Sheer => return "sheer".to_string(),
        DraperyMaterial::Open => "open",
        DraperyMaterial::Semiopen => "semiopen",
        DraperyMaterial::Closed => "closed",
    };
    let color = match color {
        Color::Light => "light",
        Color::Medium => "medium",
        Color::Dark => "dark",
    };
    format!("{material}_{color}")
}

/// Shading never adds transmission.
fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 1.0) } else { 1.0 }
}

/// Attenuation of the window at the UTC hour of a representative day in the month.
///
/// Convenience wrapper for a single hour. [`crate::calculation::gains_for_month`] resolves the
/// response once per window via [`ShadingResponse::resolve`] and evaluates it with
/// [`ShadingResponse::at`] for every hour, which yields the same values.
pub fn attenuation(
    window: &Window,
    hour: usize,
    month: Month,
    provider: &impl ClimateProvider,
    mode: ShadingMode,
) -> Attenuation {
    let profile_angle = provider
        .direction(month, window.direction)
        .map_or(0.0, |climate| climate.profile_angle[hour]);
    ShadingResponse::resolve(window, provider.shading(), mode).at(profile_angle)
}
