//! Months of the cooling season and the local clock used for reporting.

use chrono::Month;

/// Months searched for the worst solar exposure.
pub const COOLING_SEASON: [Month; 6] =
    [Month::April, Month::May, Month::June, Month::July, Month::August, Month::September];

/// Used when no candidate month has any solar potential.
pub const FALLBACK_MONTH: Month = Month::July;

/// Central European summer time is assumed to span April through October.
#[must_use]
pub const fn is_summer_time(month: Month) -> bool {
    matches!(
        month,
        Month::April
            | Month::May
            | Month::June
            | Month::July
            | Month::August
            | Month::September
            | Month::October
    )
}

#[must_use]
pub const fn utc_offset_hours(month: Month) -> usize {
    if is_summer_time(month) { 2 } else { 1 }
}

/// Convert a UTC hour of the day into the local wall-clock hour.
#[must_use]
pub const fn local_hour(utc_hour: usize, month: Month) -> usize {
    (utc_hour + utc_offset_hours(month)) % 24
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_hour() {
        assert_eq!(local_hour(11, Month::July), 13);
        assert_eq!(local_hour(11, Month::January), 12);
        assert_eq!(local_hour(23, Month::July), 1);
        assert_eq!(local_hour(23, Month::November), 0);
    }
}
