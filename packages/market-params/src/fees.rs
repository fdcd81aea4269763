use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use finance::{
    error::{Error, Result},
    fraction::Fraction,
};

/// The share of a borrowed amount charged on top of it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Fraction", into = "Fraction")]
pub struct BorrowFee(Fraction);

impl BorrowFee {
    pub fn new(fee: Fraction) -> Result<Self> {
        Error::broken_invariant_if::<Self>(
            !fee.is_proper(),
            "The borrow fee should not exceed the borrowed amount",
        )
        .map(|()| Self(fee))
    }

    pub const fn fraction(&self) -> &Fraction {
        &self.0
    }
}

impl TryFrom<Fraction> for BorrowFee {
    type Error = Error;

    fn try_from(fee: Fraction) -> Result<Self> {
        Self::new(fee)
    }
}

impl From<BorrowFee> for Fraction {
    fn from(fee: BorrowFee) -> Self {
        fee.0
    }
}

/// Flash loan fee in basis points of the loaned amount.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct FlashloanFee(u64);

impl FlashloanFee {
    pub const DENOMINATOR: u64 = 10_000;

    pub const ZERO: Self = Self(0);

    pub fn from_bps(bps: u64) -> Result<Self> {
        Error::broken_invariant_if::<Self>(
            bps > Self::DENOMINATOR,
            "The flash loan fee should not exceed the loaned amount",
        )
        .map(|()| Self(bps))
    }

    pub const fn bps(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for FlashloanFee {
    type Error = Error;

    fn try_from(bps: u64) -> Result<Self> {
        Self::from_bps(bps)
    }
}

impl From<FlashloanFee> for u64 {
    fn from(fee: FlashloanFee) -> Self {
        fee.0
    }
}

impl Display for FlashloanFee {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/{}", self.0, Self::DENOMINATOR)
    }
}
