use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::{Quantity, area::SquareMeters, power::Watts, temperature::Celsius};

/// Thermal transmittance, the U-value of a window.
pub type UValue = Quantity<1, -1, -1, 0>;

/// Heat transfer coefficient of a whole element: U-value times area.
pub type Conductance = Quantity<1, 0, -1, 0>;

impl Display for UValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} W/m²K", self.0)
    }
}

impl Debug for UValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}W/m²K", self.0)
    }
}

impl Display for Conductance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} W/K", self.0)
    }
}

impl Debug for Conductance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}W/K", self.0)
    }
}

impl Mul<SquareMeters> for UValue {
    type Output = Conductance;

    fn mul(self, area: SquareMeters) -> Self::Output {
        Quantity(self.0 * area.0)
    }
}

impl Mul<Celsius> for Conductance {
    type Output = Watts;

    fn mul(self, temperature_difference: Celsius) -> Self::Output {
        Quantity(self.0 * temperature_difference.0)
    }
}
