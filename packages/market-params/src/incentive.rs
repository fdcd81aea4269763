use serde::{Deserialize, Serialize};

use finance::error::{Error, Result};

/// Weighs the incentive rewards of a pool as `value / scale`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    deny_unknown_fields,
    rename_all = "camelCase",
    try_from = "unchecked::IncentiveRewardFactor"
)]
pub struct IncentiveRewardFactor {
    value: u64,
    scale: u64,
}

impl IncentiveRewardFactor {
    pub fn new(value: u64, scale: u64) -> Result<Self> {
        Error::broken_invariant_if::<Self>(scale == 0, "The scale should be positive")
            .map(|()| Self { value, scale })
    }

    pub const fn value(&self) -> u64 {
        self.value
    }

    pub const fn scale(&self) -> u64 {
        self.scale
    }
}

mod unchecked {
    use serde::Deserialize;

    use finance::error::Error;

    use super::IncentiveRewardFactor as ValidatedIncentiveRewardFactor;

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields, rename_all = "camelCase")]
    pub(super) struct IncentiveRewardFactor {
        value: u64,
        scale: u64,
    }

    impl TryFrom<IncentiveRewardFactor> for ValidatedIncentiveRewardFactor {
        type Error = Error;

        fn try_from(dto: IncentiveRewardFactor) -> Result<Self, Self::Error> {
            Self::new(dto.value, dto.scale)
        }
    }
}
