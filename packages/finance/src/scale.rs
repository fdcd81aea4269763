use serde::{Deserialize, Serialize};

/// Fixed-point scale, the integer that stands for a whole `1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scale(u64);

impl Scale {
    /// The scale the market uses for factors, kinks and weights.
    pub const MARKET: Self = Self::new(1_000_000_000_000);

    /// The extra scale per-second interest rates are multiplied by.
    pub const INTEREST_RATE: Self = Self::new(10_000_000);

    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    pub const fn units(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<Scale> for u64 {
    fn from(scale: Scale) -> Self {
        scale.0
    }
}

impl From<Scale> for u128 {
    fn from(scale: Scale) -> Self {
        scale.0.into()
    }
}
