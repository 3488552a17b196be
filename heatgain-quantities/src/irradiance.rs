use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::{Quantity, area::SquareMeters, power::Watts};

/// Irradiance on a surface, or a power density of a heat source over the floor area.
pub type WattsPerSquareMeter = Quantity<1, -1, 0, 0>;

impl Display for WattsPerSquareMeter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} W/m²", self.0)
    }
}

impl Debug for WattsPerSquareMeter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}W/m²", self.0)
    }
}

impl Mul<SquareMeters> for WattsPerSquareMeter {
    type Output = Watts;

    fn mul(self, area: SquareMeters) -> Self::Output {
        Quantity(self.0 * area.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_through_area() {
        let area = SquareMeters::rectangle(1.0, 2.0);
        assert_eq!(WattsPerSquareMeter::from(500.0) * area, Watts::from(1000.0));
    }
}
