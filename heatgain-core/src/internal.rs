//! Occupancy, lighting and equipment heat gains.

use heatgain_quantities::{area::SquareMeters, irradiance::WattsPerSquareMeter, power::Watts};
use serde::{Deserialize, Serialize};

use crate::{
    ops::HourRange,
    prelude::*,
    profile::DailyProfile,
};

/// Share of equipment heat released as radiation.
const EQUIPMENT_RADIANT_FRACTION: f64 = 0.5;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    SeatedVeryLight,
    StandingLight,
    WalkingModerate,
    HeavySport,
}

/// Heat released by one person.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Metabolism {
    pub sensible: Watts,
    pub latent: Watts,
    pub radiant_fraction: f64,
}

impl ActivityLevel {
    #[must_use]
    pub fn metabolism(self) -> Metabolism {
        let (sensible, latent, radiant_fraction) = match self {
            Self::SeatedVeryLight => (70.0, 45.0, 0.60),
            Self::StandingLight => (75.0, 55.0, 0.58),
            Self::WalkingModerate => (110.0, 185.0, 0.49),
            Self::HeavySport => (210.0, 315.0, 0.54),
        };
        Metabolism { sensible: Watts::from(sensible), latent: Watts::from(latent), radiant_fraction }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum FixtureType {
    #[default]
    LedTroffer,
    FluorescentTroffer,
    Incandescent,
    Halogen,
}

impl FixtureType {
    #[must_use]
    pub fn power_density(self) -> WattsPerSquareMeter {
        WattsPerSquareMeter::from(match self {
            Self::LedTroffer => 8.0,
            Self::FluorescentTroffer => 17.0,
            Self::Incandescent => 30.0,
            Self::Halogen => 25.0,
        })
    }

    #[must_use]
    pub const fn radiant_fraction(self) -> f64 {
        match self {
            Self::LedTroffer => 0.37,
            Self::FluorescentTroffer => 0.43,
            Self::Incandescent => 0.82,
            Self::Halogen => 0.70,
        }
    }
}

/// Typical appliances with their nameplate power.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum EquipmentPreset {
    Pc,
    Laptop,
    Monitor,
    Printer,
    Tv,
    Coffee,
}

impl EquipmentPreset {
    #[must_use]
    pub fn power(self) -> Watts {
        Watts::from(match self {
            Self::Pc => 150,
            Self::Laptop => 60,
            Self::Monitor => 40,
            Self::Printer => 100,
            Self::Tv => 80,
            Self::Coffee => 1200,
        })
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pc => "Desktop PC",
            Self::Laptop => "Laptop",
            Self::Monitor => "Monitor",
            Self::Printer => "Printer",
            Self::Tv => "TV",
            Self::Coffee => "Coffee machine",
        }
    }
}

fn office_hours() -> HourRange {
    HourRange::from(8..16)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct People {
    pub enabled: bool,
    pub count: u32,
    pub activity: ActivityLevel,
    pub hours: HourRange,
}

impl Default for People {
    fn default() -> Self {
        Self { enabled: false, count: 1, activity: ActivityLevel::default(), hours: office_hours() }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lighting {
    pub enabled: bool,
    pub fixture: FixtureType,

    /// Overrides the fixture's typical power density.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_density: Option<WattsPerSquareMeter>,

    pub hours: HourRange,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            enabled: false,
            fixture: FixtureType::default(),
            power_density: None,
            hours: office_hours(),
        }
    }
}

impl Lighting {
    pub fn power_density(&self) -> WattsPerSquareMeter {
        self.power_density.unwrap_or_else(|| self.fixture.power_density())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: u32,
    pub name: String,

    /// Power of a single unit.
    pub power: Watts,

    #[serde(default = "one")]
    pub quantity: u32,

    #[serde(default = "office_hours")]
    pub hours: HourRange,
}

const fn one() -> u32 {
    1
}

impl Equipment {
    pub fn from_preset(id: u32, preset: EquipmentPreset) -> Self {
        Self {
            id,
            name: preset.label().to_string(),
            power: preset.power(),
            quantity: 1,
            hours: office_hours(),
        }
    }

    pub fn total_power(&self) -> Watts {
        self.power * f64::from(self.quantity)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternalGains {
    pub people: People,
    pub lighting: Lighting,
    pub equipment: Vec<Equipment>,
}

impl InternalGains {
    /// Next free equipment id, starting from 1.
    pub fn next_equipment_id(&self) -> Result<u32> {
        self.equipment
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(Some(1), |id| id.checked_add(1))
            .context("equipment ids are exhausted")
    }
}

/// Hourly internal gains by heat transfer mode.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InternalLoads {
    pub radiant: DailyProfile,
    pub convective: DailyProfile,
    pub latent: DailyProfile,
}

impl InternalLoads {
    fn add_sensible(&mut self, hours: HourRange, power: Watts, radiant_fraction: f64) {
        let radiant = power * radiant_fraction;
        for hour in hours.hours() {
            self.radiant[hour] += radiant;
            self.convective[hour] += power - radiant;
        }
    }

    fn add_latent(&mut self, hours: HourRange, power: Watts) {
        for hour in hours.hours() {
            self.latent[hour] += power;
        }
    }
}

fn warn_if_empty(source: &str, hours: HourRange) {
    if hours.is_empty() {
        warn!(source, ?hours, "the schedule is empty, ranges past midnight are not supported");
    }
}

/// Hourly internal gains of the room.
#[instrument(skip_all)]
pub fn internal_loads(gains: &InternalGains, room_area: SquareMeters) -> InternalLoads {
    let mut loads = InternalLoads::default();

    let people = gains.people;
    if people.enabled && people.count != 0 {
        warn_if_empty("people", people.hours);
        let metabolism = people.activity.metabolism();
        let count = f64::from(people.count);
        loads.add_sensible(people.hours, metabolism.sensible * count, metabolism.radiant_fraction);
        loads.add_latent(people.hours, metabolism.latent * count);
    }

    let lighting = gains.lighting;
    if lighting.enabled && room_area > SquareMeters::ZERO {
        warn_if_empty("lighting", lighting.hours);
        loads.add_sensible(
            lighting.hours,
            (lighting.power_density() * room_area).finite_or_zero(),
            lighting.fixture.radiant_fraction(),
        );
    }

    for item in &gains.equipment {
        warn_if_empty(&item.name, item.hours);
        loads.add_sensible(item.hours, item.total_power(), EQUIPMENT_RADIANT_FRACTION);
    }

    loads
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_metabolism() {
        assert_eq!(
            ActivityLevel::WalkingModerate.metabolism(),
            Metabolism {
                sensible: Watts::from(110.0),
                latent: Watts::from(185.0),
                radiant_fraction: 0.49,
            },
        );
    }

    #[test]
    fn test_people() {
        let gains = InternalGains {
            people: People {
                enabled: true,
                count: 3,
                activity: ActivityLevel::SeatedVeryLight,
                hours: HourRange::from(8..17),
            },
            ..InternalGains::default()
        };
        let loads = internal_loads(&gains, SquareMeters::from(20.0));
        assert_abs_diff_eq!(loads.radiant[8].value(), 3.0 * 70.0 * 0.6, epsilon = 1e-9);
        assert_abs_diff_eq!(loads.convective[16].value(), 3.0 * 70.0 * 0.4, epsilon = 1e-9);
        assert_abs_diff_eq!(loads.latent[12].value(), 135.0);
        assert_eq!(loads.radiant[17], Watts::ZERO);
        assert_eq!(loads.latent[7], Watts::ZERO);
    }

    #[test]
    fn test_lighting_requires_area() {
        let gains = InternalGains {
            lighting: Lighting { enabled: true, ..Lighting::default() },
            ..InternalGains::default()
        };
        assert_eq!(internal_loads(&gains, SquareMeters::ZERO), InternalLoads::default());

        let loads = internal_loads(&gains, SquareMeters::from(25.0));
        assert_abs_diff_eq!(loads.radiant[10].value(), 8.0 * 25.0 * 0.37, epsilon = 1e-9);
        assert_abs_diff_eq!(loads.convective[10].value(), 8.0 * 25.0 * 0.63, epsilon = 1e-9);
    }

    #[test]
    fn test_lighting_density_override() {
        let lighting = Lighting {
            enabled: true,
            fixture: FixtureType::Halogen,
            power_density: Some(WattsPerSquareMeter::from(10.0)),
            hours: HourRange::from(0..24),
        };
        let gains = InternalGains { lighting, ..InternalGains::default() };
        let loads = internal_loads(&gains, SquareMeters::from(10.0));
        assert_abs_diff_eq!(loads.radiant.total().value(), 24.0 * 100.0 * 0.7, epsilon = 1e-9);
    }

    #[test]
    fn test_equipment() {
        let mut monitor = Equipment::from_preset(2, EquipmentPreset::Monitor);
        monitor.quantity = 2;
        let gains = InternalGains {
            equipment: vec![Equipment::from_preset(1, EquipmentPreset::Pc), monitor],
            ..InternalGains::default()
        };
        let loads = internal_loads(&gains, SquareMeters::ZERO);
        assert_abs_diff_eq!(loads.radiant[9].value(), 115.0);
        assert_abs_diff_eq!(loads.convective[9].value(), 115.0);
        assert_eq!(loads.latent, DailyProfile::ZERO);
        assert_eq!(gains.next_equipment_id().ok(), Some(3));
    }

    #[test]
    fn test_equipment_ids_exhausted() {
        let gains = InternalGains {
            equipment: vec![Equipment::from_preset(u32::MAX, EquipmentPreset::Pc)],
            ..InternalGains::default()
        };
        assert!(gains.next_equipment_id().is_err());
    }

    #[test]
    fn test_inverted_schedule_is_empty() {
        let gains = InternalGains {
            people: People {
                enabled: true,
                count: 2,
                activity: ActivityLevel::HeavySport,
                hours: HourRange::from(22..6),
            },
            ..InternalGains::default()
        };
        assert_eq!(internal_loads(&gains, SquareMeters::from(20.0)), InternalLoads::default());
    }

    #[test]
    fn test_deserialize_defaults() -> Result {
        let gains: InternalGains = toml::from_str(
            r#"
                [people]
                enabled = true
                count = 2

                [[equipment]]
                id = 1
                name = "Kettle"
                power = 2000
                hours = { start = 7, end = 8 }
            "#,
        )?;
        assert_eq!(gains.people.activity, ActivityLevel::SeatedVeryLight);
        assert_eq!(gains.people.hours, HourRange::from(8..16));
        assert_eq!(gains.equipment[0].quantity, 1);
        assert!(!gains.lighting.enabled);
        Ok(())
    }
}
