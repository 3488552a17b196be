use std::fmt::{Debug, Display, Formatter};

use crate::Quantity;

pub type SquareMeters = Quantity<0, 1, 0, 0>;

impl SquareMeters {
    /// Area of a `width × height` rectangle, both in meters.
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::from(width * height)
    }
}

impl Display for SquareMeters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} m²", self.0)
    }
}

impl Debug for SquareMeters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}m²", self.0)
    }
}
