pub mod area;
pub mod energy;
pub mod irradiance;
pub mod power;
pub mod temperature;
pub mod transmittance;

use std::ops::{Div, Mul};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Physical quantity tagged with the exponents of its base dimensions.
///
/// The dimensions are chosen for window heat gains: power (W), area (m²), temperature (K or °C
/// for differences) and time (h). Products between distinct dimensions are implemented
/// explicitly in the submodules, so that `U × A × ΔT` yields [`power::Watts`] and nothing else.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[from(i32, f64, OrderedFloat<f64>)]
#[serde(transparent)]
#[must_use]
pub struct Quantity<const POWER: isize, const AREA: isize, const TEMPERATURE: isize, const TIME: isize>(
    pub OrderedFloat<f64>,
);

impl<const POWER: isize, const AREA: isize, const TEMPERATURE: isize, const TIME: isize>
    Quantity<POWER, AREA, TEMPERATURE, TIME>
{
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    /// Raw value in the quantity's base unit.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0.0
    }

    pub const fn abs(mut self) -> Self {
        self.0 = OrderedFloat(self.0.0.abs());
        self
    }

    /// Replace NaN and infinities with zero, so that a single bad sample does not poison sums.
    pub const fn finite_or_zero(self) -> Self {
        if self.0.0.is_finite() { self } else { Self::ZERO }
    }
}

impl<const POWER: isize, const AREA: isize, const TEMPERATURE: isize, const TIME: isize> Mul<f64>
    for Quantity<POWER, AREA, TEMPERATURE, TIME>
{
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const POWER: isize, const AREA: isize, const TEMPERATURE: isize, const TIME: isize> Div<f64>
    for Quantity<POWER, AREA, TEMPERATURE, TIME>
{
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl<const POWER: isize, const AREA: isize, const TEMPERATURE: isize, const TIME: isize> Div<Self>
    for Quantity<POWER, AREA, TEMPERATURE, TIME>
{
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0.0 / rhs.0.0
    }
}
