use std::{
    fmt::{Debug, Formatter},
    ops::Sub,
};

use serde::{Deserialize, Serialize};

use crate::profile::HOURS_PER_DAY;

/// Daily schedule in whole UTC hours.
///
/// There is no wraparound past midnight: a range whose end is not after its start is empty.
pub type HourRange = RangeExclusive<u8>;

#[must_use]
#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeExclusive<T: Copy> {
    pub start: T,
    pub end: T,
}

impl<T: Copy + Debug> Debug for RangeExclusive<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl<T: Copy> RangeExclusive<T> {
    pub fn from_std(range: std::ops::Range<T>) -> Self {
        Self { start: range.start, end: range.end }
    }
}

impl<T: Copy + PartialOrd> RangeExclusive<T> {
    #[must_use]
    pub fn contains(self, other: T) -> bool {
        (self.start <= other) && (other < self.end)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.end <= self.start
    }
}

impl<T: Copy + PartialOrd + Sub> RangeExclusive<T>
where
    <T as Sub>::Output: Default,
{
    #[must_use]
    pub fn len(self) -> <T as Sub>::Output {
        if self.is_empty() { Default::default() } else { self.end - self.start }
    }
}

impl HourRange {
    /// Active hour indices, clipped to the day.
    pub fn hours(self) -> std::ops::Range<usize> {
        let end = usize::from(self.end).min(HOURS_PER_DAY);
        usize::from(self.start).min(end)..end
    }
}

impl From<std::ops::Range<u8>> for HourRange {
    fn from(range: std::ops::Range<u8>) -> Self {
        Self::from_std(range)
    }
}
