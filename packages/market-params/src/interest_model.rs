use serde::{Deserialize, Serialize};

use finance::{
    amount::Amount,
    error::{Error, Result},
    percent::Percent,
    rate,
    scale::Scale,
};

/// The on-chain coefficients of a two-kink borrow rate curve.
///
/// Rates are per second in `scale * interest_rate_scale` units. Kinks, the
/// revenue factor and the borrow weight are fractions of `scale`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    deny_unknown_fields,
    rename_all = "camelCase",
    try_from = "unchecked::InterestModel"
)]
pub struct InterestModel {
    base_borrow_rate_per_sec: u64,
    interest_rate_scale: u64,
    borrow_rate_on_mid_kink: u64,
    mid_kink: u64,
    borrow_rate_on_high_kink: u64,
    high_kink: u64,
    max_borrow_rate: u64,
    revenue_factor: u64,
    borrow_weight: u64,
    scale: u64,
    min_borrow_amount: Amount,
}

impl InterestModel {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        base_borrow_rate_per_sec: u64,
        interest_rate_scale: u64,
        borrow_rate_on_mid_kink: u64,
        mid_kink: u64,
        borrow_rate_on_high_kink: u64,
        high_kink: u64,
        max_borrow_rate: u64,
        revenue_factor: u64,
        borrow_weight: u64,
        scale: u64,
        min_borrow_amount: Amount,
    ) -> Result<Self> {
        let res = Self {
            base_borrow_rate_per_sec,
            interest_rate_scale,
            borrow_rate_on_mid_kink,
            mid_kink,
            borrow_rate_on_high_kink,
            high_kink,
            max_borrow_rate,
            revenue_factor,
            borrow_weight,
            scale,
            min_borrow_amount,
        };
        res.invariant_held().map(|()| res)
    }

    pub const fn base_borrow_rate_per_sec(&self) -> u64 {
        self.base_borrow_rate_per_sec
    }

    pub const fn interest_rate_scale(&self) -> u64 {
        self.interest_rate_scale
    }

    pub const fn borrow_rate_on_mid_kink(&self) -> u64 {
        self.borrow_rate_on_mid_kink
    }

    pub const fn mid_kink(&self) -> u64 {
        self.mid_kink
    }

    pub const fn borrow_rate_on_high_kink(&self) -> u64 {
        self.borrow_rate_on_high_kink
    }

    pub const fn high_kink(&self) -> u64 {
        self.high_kink
    }

    pub const fn max_borrow_rate(&self) -> u64 {
        self.max_borrow_rate
    }

    pub const fn revenue_factor(&self) -> u64 {
        self.revenue_factor
    }

    pub const fn borrow_weight(&self) -> u64 {
        self.borrow_weight
    }

    pub const fn scale(&self) -> u64 {
        self.scale
    }

    pub const fn min_borrow_amount(&self) -> Amount {
        self.min_borrow_amount
    }

    fn invariant_held(&self) -> Result<()> {
        check(self.scale == 0, "The scale should be positive")
            .and_then(|()| {
                check(
                    self.interest_rate_scale == 0,
                    "The interest rate scale should be positive",
                )
            })
            .and_then(|()| check(self.mid_kink == 0, "The mid kink should be positive"))
            .and_then(|()| {
                check(
                    self.mid_kink >= self.high_kink,
                    "The mid kink should be below the high kink",
                )
            })
            .and_then(|()| {
                check(
                    self.high_kink > self.scale,
                    "The high kink should not exceed the scale",
                )
            })
            .and_then(|()| {
                check(
                    !(self.base_borrow_rate_per_sec <= self.borrow_rate_on_mid_kink
                        && self.borrow_rate_on_mid_kink <= self.borrow_rate_on_high_kink
                        && self.borrow_rate_on_high_kink <= self.max_borrow_rate),
                    "The borrow rates should not decrease along the curve",
                )
            })
            .and_then(|()| {
                check(
                    self.revenue_factor > self.scale,
                    "The revenue factor should not exceed the scale",
                )
            })
            .and_then(|()| check(self.borrow_weight == 0, "The borrow weight should be positive"))
            .and_then(|()| {
                check(
                    self.min_borrow_amount == 0,
                    "The minimum borrow amount should be positive",
                )
            })
    }
}

fn check(invariant_broken: bool, msg: &str) -> Result<()> {
    Error::broken_invariant_if::<InterestModel>(invariant_broken, msg)
}

/// A human-readable description of a borrow rate curve, yearly rates and
/// utilization kinks given as percents.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InterestCurve {
    pub base_rate: Percent,
    pub rate_on_mid_kink: Percent,
    pub mid_kink: Percent,
    pub rate_on_high_kink: Percent,
    pub high_kink: Percent,
    pub max_rate: Percent,
    pub revenue_factor: Percent,
    pub borrow_weight: Percent,
    pub min_borrow_amount: Amount,
}

impl InterestCurve {
    /// Derive the on-chain coefficients in integer arithmetic.
    pub fn model(&self, scale: Scale, interest_rate_scale: Scale) -> Result<InterestModel> {
        let per_second = |yearly| rate::rate_per_second(yearly, scale, interest_rate_scale);

        InterestModel::new(
            per_second(self.base_rate)?,
            interest_rate_scale.units(),
            per_second(self.rate_on_mid_kink)?,
            self.mid_kink.of_scale(scale)?,
            per_second(self.rate_on_high_kink)?,
            self.high_kink.of_scale(scale)?,
            per_second(self.max_rate)?,
            self.revenue_factor.of_scale(scale)?,
            self.borrow_weight.of_scale(scale)?,
            scale.units(),
            self.min_borrow_amount,
        )
    }
}

mod unchecked {
    use serde::Deserialize;

    use finance::{amount::Amount, error::Error};

    use super::InterestModel as ValidatedInterestModel;

    /// Brings invariant checking as a step in deserializing an InterestModel
    #[derive(Deserialize)]
    #[serde(deny_unknown_fields, rename_all = "camelCase")]
    pub(super) struct InterestModel {
        base_borrow_rate_per_sec: u64,
        interest_rate_scale: u64,
        borrow_rate_on_mid_kink: u64,
        mid_kink: u64,
        borrow_rate_on_high_kink: u64,
        high_kink: u64,
        max_borrow_rate: u64,
        revenue_factor: u64,
        borrow_weight: u64,
        scale: u64,
        min_borrow_amount: Amount,
    }

    impl TryFrom<InterestModel> for ValidatedInterestModel {
        type Error = Error;

        fn try_from(dto: InterestModel) -> Result<Self, Self::Error> {
            Self::new(
                dto.base_borrow_rate_per_sec,
                dto.interest_rate_scale,
                dto.borrow_rate_on_mid_kink,
                dto.mid_kink,
                dto.borrow_rate_on_high_kink,
                dto.high_kink,
                dto.max_borrow_rate,
                dto.revenue_factor,
                dto.borrow_weight,
                dto.scale,
                dto.min_borrow_amount,
            )
        }
    }
}
