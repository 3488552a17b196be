use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::{
    Quantity,
    energy::{Hours, KilowattHours},
};

pub type Watts = Quantity<1, 0, 0, 0>;

impl Display for Watts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} W", self.0)
    }
}

impl Debug for Watts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}W", self.0)
    }
}

impl Mul<Hours> for Watts {
    type Output = KilowattHours;

    fn mul(self, hours: Hours) -> Self::Output {
        Quantity(self.0 * hours.0 / 1000.0)
    }
}
