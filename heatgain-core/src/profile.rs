use std::{
    fmt::{Debug, Formatter},
    iter::Sum,
    ops::{Add, AddAssign, Index, IndexMut, Mul},
};

use heatgain_quantities::{
    energy::{Hours, KilowattHours},
    power::Watts,
};
use serde::{Deserialize, Serialize};

pub const HOURS_PER_DAY: usize = 24;

/// Hourly power over one day, indexed by the UTC hour.
#[must_use]
#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From, derive_more::Into)]
#[serde(transparent)]
pub struct DailyProfile(pub [Watts; HOURS_PER_DAY]);

impl Default for DailyProfile {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Debug for DailyProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.iter().map(|watts| watts.value())).finish()
    }
}

impl DailyProfile {
    pub const ZERO: Self = Self([Watts::ZERO; HOURS_PER_DAY]);

    pub fn from_fn(f: impl FnMut(usize) -> Watts) -> Self {
        Self(std::array::from_fn(f))
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Watts> + ExactSizeIterator + '_ {
        self.0.iter().copied()
    }

    /// Earliest hour with the highest value.
    #[must_use]
    pub fn peak(&self) -> (usize, Watts) {
        self.iter()
            .enumerate()
            .rev()
            .max_by_key(|(_, watts)| *watts)
            .unwrap_or((0, Watts::ZERO))
    }

    pub fn total(&self) -> Watts {
        self.iter().sum()
    }

    /// Energy over the day, every slot lasting one hour.
    pub fn energy(&self) -> KilowattHours {
        self.total() * Hours::ONE
    }

    /// Replace non-finite slots with zero.
    pub fn finite_or_zero(self) -> Self {
        Self(self.0.map(Watts::finite_or_zero))
    }
}

impl Index<usize> for DailyProfile {
    type Output = Watts;

    fn index(&self, hour: usize) -> &Self::Output {
        &self.0[hour]
    }
}

impl IndexMut<usize> for DailyProfile {
    fn index_mut(&mut self, hour: usize) -> &mut Self::Output {
        &mut self.0[hour]
    }
}

impl Add for DailyProfile {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for DailyProfile {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs += rhs;
        }
    }
}

impl Mul<f64> for DailyProfile {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0.map(|watts| watts * rhs))
    }
}

impl Sum for DailyProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
