use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    scale::Scale,
};

pub type Units = u32;

/// A percentage with a permille precision, i.e. `1000` units stand for 100%.
///
/// There is no upper bound since yearly borrow rates may well exceed 100%.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(Units);

impl Percent {
    const UNITS_IN_PERCENT: Units = 10;

    pub const ZERO: Self = Self::from_permille(0);
    pub const HUNDRED: Self = Self::from_percent(100);

    pub const fn from_percent(percent: u16) -> Self {
        Self::from_permille(percent as Units * Self::UNITS_IN_PERCENT)
    }

    pub const fn from_permille(permille: Units) -> Self {
        Self(permille)
    }

    pub const fn units(&self) -> Units {
        self.0
    }

    /// The share of `scale` this percentage stands for, i.e. `self * scale / 100%`.
    ///
    /// The division is the last operation so no precision is lost on the way.
    pub fn of_scale(&self, scale: Scale) -> Result<u64> {
        u128::from(self.0)
            .checked_mul(scale.into())
            .map(|scaled| scaled / u128::from(Self::HUNDRED.units()))
            .and_then(|share| u64::try_from(share).ok())
            .ok_or_else(|| Error::overflow("of_scale", self, scale))
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let whole = self.0 / Self::UNITS_IN_PERCENT;
        let fractional = self.0 % Self::UNITS_IN_PERCENT;

        if fractional == 0 {
            write!(f, "{whole}%")
        } else {
            write!(f, "{whole}.{fractional}%")
        }
    }
}
