pub mod gain;
pub mod shgc;

use std::fmt::{Display, Formatter};

use heatgain_quantities::{area::SquareMeters, transmittance::UValue};
use serde::{Deserialize, Serialize};

use crate::{climate::Direction, shading::Shading};

/// Window identifier, unique within a project.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::From,
    derive_more::Into,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct WindowId(pub u32);

impl Display for WindowId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Glazing construction, which picks the default thermal properties and the angular response.
#[derive(
    Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Construction {
    Custom,

    /// Low-emissivity double or triple glazing.
    #[default]
    Modern,

    Standard,
    OlderDouble,
    Historic,
}

impl Construction {
    /// Default U-value (W/m²K) and SHGC.
    #[must_use]
    pub fn preset(self) -> (UValue, f64) {
        match self {
            Self::Custom | Self::Standard => (UValue::from(1.1), 0.6),
            Self::Modern => (UValue::from(0.9), 0.5),
            Self::OlderDouble => (UValue::from(1.8), 0.7),
            Self::Historic => (UValue::from(4.8), 0.82),
        }
    }

    /// Construction whose lookup tables apply to this one.
    #[must_use]
    pub const fn table_key(self) -> Self {
        match self {
            Self::Custom => Self::Standard,
            other => other,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Modern => "modern",
            Self::Standard => "standard",
            Self::OlderDouble => "older double",
            Self::Historic => "historic",
        }
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub id: WindowId,

    #[serde(default)]
    pub construction: Construction,

    pub direction: Direction,

    /// Thermal transmittance, W/m²K.
    pub u_value: UValue,

    /// Solar heat gain coefficient at normal incidence.
    pub shgc: f64,

    /// Width in meters.
    pub width: f64,

    /// Height in meters.
    pub height: f64,

    #[serde(default)]
    pub shading: Shading,
}

impl Window {
    /// Modern 1.5 × 1.5 m south window without active shading.
    pub fn new(id: WindowId) -> Self {
        Self::with_construction(id, Construction::Modern)
    }

    pub fn with_construction(id: WindowId, construction: Construction) -> Self {
        let (u_value, shgc) = construction.preset();
        Self {
            id,
            construction,
            direction: Direction::S,
            u_value,
            shgc,
            width: 1.5,
            height: 1.5,
            shading: Shading::default(),
        }
    }

    pub fn area(&self) -> SquareMeters {
        SquareMeters::rectangle(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_new_window_defaults() {
        let window = Window::new(WindowId(7));
        assert_eq!(window.construction, Construction::Modern);
        assert_eq!(window.direction, Direction::S);
        assert_eq!(window.u_value, UValue::from(0.9));
        assert_abs_diff_eq!(window.shgc, 0.5);
        assert_abs_diff_eq!(window.area().value(), 2.25);
        assert!(!window.shading.enabled);
    }

    #[test]
    fn test_custom_uses_standard_tables() {
        assert_eq!(Construction::Custom.table_key(), Construction::Standard);
        assert_eq!(Construction::Historic.table_key(), Construction::Historic);
    }

    #[test]
    fn test_deserialize_minimal() -> crate::prelude::Result {
        let window: Window = toml::from_str(
            r#"
                id = 3
                direction = "SW"
                u_value = 1.1
                shgc = 0.6
                width = 1.0
                height = 2.0
            "#,
        )?;
        assert_eq!(window.id, WindowId(3));
        assert_eq!(window.construction, Construction::Modern);
        assert_eq!(window.direction, Direction::Sw);
        assert!(!window.shading.enabled);
        Ok(())
    }
}
