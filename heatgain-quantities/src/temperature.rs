use std::fmt::{Debug, Display, Formatter};

use crate::Quantity;

/// Temperature in degrees Celsius.
///
/// Differences between two temperatures are expressed in the same type.
pub type Celsius = Quantity<0, 0, 1, 0>;

impl Display for Celsius {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} °C", self.0)
    }
}

impl Debug for Celsius {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}°C", self.0)
    }
}
