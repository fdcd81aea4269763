use serde::{Deserialize, Serialize};

use finance::{
    amount::Amount,
    duration::Duration,
    error::{Error, Result},
};

/// Caps the amount leaving a pool within a sliding window.
///
/// The window of `outflow_cycle_duration` is tracked in segments of
/// `outflow_segment_duration`, hence the latter should divide the former.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    deny_unknown_fields,
    rename_all = "camelCase",
    try_from = "unchecked::OutflowLimiter"
)]
pub struct OutflowLimiter {
    outflow_limit: Amount,
    outflow_cycle_duration: Duration,
    outflow_segment_duration: Duration,
}

impl OutflowLimiter {
    pub fn new(
        outflow_limit: Amount,
        outflow_cycle_duration: Duration,
        outflow_segment_duration: Duration,
    ) -> Result<Self> {
        let res = Self {
            outflow_limit,
            outflow_cycle_duration,
            outflow_segment_duration,
        };
        res.invariant_held().map(|()| res)
    }

    pub const fn outflow_limit(&self) -> Amount {
        self.outflow_limit
    }

    pub const fn outflow_cycle_duration(&self) -> Duration {
        self.outflow_cycle_duration
    }

    pub const fn outflow_segment_duration(&self) -> Duration {
        self.outflow_segment_duration
    }

    fn invariant_held(&self) -> Result<()> {
        Error::broken_invariant_if::<Self>(
            self.outflow_limit == 0,
            "The outflow limit should be positive",
        )
        .and_then(|()| {
            Error::broken_invariant_if::<Self>(
                self.outflow_segment_duration.is_zero(),
                "The segment duration should be positive",
            )
        })
        .and_then(|()| {
            Error::broken_invariant_if::<Self>(
                self.outflow_cycle_duration.is_zero()
                    || !self
                        .outflow_cycle_duration
                        .is_multiple_of(self.outflow_segment_duration),
                "The cycle duration should be a positive multiple of the segment duration",
            )
        })
    }
}

mod unchecked {
    use serde::Deserialize;

    use finance::{amount::Amount, duration::Duration, error::Error};

    use super::OutflowLimiter as ValidatedOutflowLimiter;

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields, rename_all = "camelCase")]
    pub(super) struct OutflowLimiter {
        outflow_limit: Amount,
        outflow_cycle_duration: Duration,
        outflow_segment_duration: Duration,
    }

    impl TryFrom<OutflowLimiter> for ValidatedOutflowLimiter {
        type Error = Error;

        fn try_from(dto: OutflowLimiter) -> Result<Self, Self::Error> {
            Self::new(
                dto.outflow_limit,
                dto.outflow_cycle_duration,
                dto.outflow_segment_duration,
            )
        }
    }
}
