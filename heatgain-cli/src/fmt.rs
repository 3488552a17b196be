use std::fmt::{Debug, Display, Formatter};

pub struct FormattedPercentage(pub f64);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// Hour of the day as on a clock.
pub struct FormattedHour(pub usize);

impl Display for FormattedHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(FormattedPercentage(0.4567).to_string(), "45.7%");
    }

    #[test]
    fn test_hour() {
        assert_eq!(FormattedHour(7).to_string(), "07:00");
        assert_eq!(FormattedHour(13).to_string(), "13:00");
    }
}
