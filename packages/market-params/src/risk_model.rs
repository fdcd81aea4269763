use serde::{Deserialize, Serialize};

use finance::{
    amount::Amount,
    error::{Error, Result},
    percent::Percent,
    scale::Scale,
};

/// The coefficients an asset is accepted as collateral with.
///
/// All factors are fractions of `scale`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    deny_unknown_fields,
    rename_all = "camelCase",
    try_from = "unchecked::RiskModel"
)]
pub struct RiskModel {
    collateral_factor: u64,
    liquidation_factor: u64,
    liquidation_penalty: u64,
    liquidation_discount: u64,
    scale: u64,
    max_collateral_amount: Amount,
}

impl RiskModel {
    pub fn new(
        collateral_factor: u64,
        liquidation_factor: u64,
        liquidation_penalty: u64,
        liquidation_discount: u64,
        scale: u64,
        max_collateral_amount: Amount,
    ) -> Result<Self> {
        let res = Self {
            collateral_factor,
            liquidation_factor,
            liquidation_penalty,
            liquidation_discount,
            scale,
            max_collateral_amount,
        };
        res.invariant_held().map(|()| res)
    }

    /// Build a model out of percents of `scale`.
    pub fn from_percents(
        collateral_factor: Percent,
        liquidation_factor: Percent,
        liquidation_penalty: Percent,
        liquidation_discount: Percent,
        scale: Scale,
        max_collateral_amount: Amount,
    ) -> Result<Self> {
        Self::new(
            collateral_factor.of_scale(scale)?,
            liquidation_factor.of_scale(scale)?,
            liquidation_penalty.of_scale(scale)?,
            liquidation_discount.of_scale(scale)?,
            scale.units(),
            max_collateral_amount,
        )
    }

    pub const fn collateral_factor(&self) -> u64 {
        self.collateral_factor
    }

    pub const fn liquidation_factor(&self) -> u64 {
        self.liquidation_factor
    }

    pub const fn liquidation_penalty(&self) -> u64 {
        self.liquidation_penalty
    }

    pub const fn liquidation_discount(&self) -> u64 {
        self.liquidation_discount
    }

    pub const fn scale(&self) -> u64 {
        self.scale
    }

    pub const fn max_collateral_amount(&self) -> Amount {
        self.max_collateral_amount
    }

    fn invariant_held(&self) -> Result<()> {
        Error::broken_invariant_if::<Self>(
            self.collateral_factor >= self.liquidation_factor,
            "The collateral factor should be below the liquidation factor",
        )
        .and_then(|()| {
            Error::broken_invariant_if::<Self>(
                self.liquidation_factor >= self.scale,
                "The liquidation factor should be below the scale",
            )
        })
        .and_then(|()| {
            Error::broken_invariant_if::<Self>(
                self.liquidation_penalty == 0,
                "The liquidation penalty should be positive",
            )
        })
        .and_then(|()| {
            Error::broken_invariant_if::<Self>(
                self.liquidation_discount > self.liquidation_penalty,
                "The liquidation discount should not exceed the liquidation penalty",
            )
        })
        .and_then(|()| {
            Error::broken_invariant_if::<Self>(
                self.liquidation_penalty >= self.scale,
                "The liquidation penalty should be below the scale",
            )
        })
        .and_then(|()| {
            Error::broken_invariant_if::<Self>(
                self.max_collateral_amount == 0,
                "The maximum collateral amount should be positive",
            )
        })
    }
}

mod unchecked {
    use serde::Deserialize;

    use finance::{amount::Amount, error::Error};

    use super::RiskModel as ValidatedRiskModel;

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields, rename_all = "camelCase")]
    pub(super) struct RiskModel {
        collateral_factor: u64,
        liquidation_factor: u64,
        liquidation_penalty: u64,
        liquidation_discount: u64,
        scale: u64,
        max_collateral_amount: Amount,
    }

    impl TryFrom<RiskModel> for ValidatedRiskModel {
        type Error = Error;

        fn try_from(dto: RiskModel) -> Result<Self, Self::Error> {
            Self::new(
                dto.collateral_factor,
                dto.liquidation_factor,
                dto.liquidation_penalty,
                dto.liquidation_discount,
                dto.scale,
                dto.max_collateral_amount,
            )
        }
    }
}

#[cfg(test)]
mod test {
    use finance::{percent::Percent, scale::Scale};

    use super::RiskModel;

    fn model(
        collateral_factor: u16,
        liquidation_factor: u16,
        liquidation_penalty: u16,
        liquidation_discount: u16,
    ) -> Result<RiskModel, finance::error::Error> {
        RiskModel::from_percents(
            Percent::from_percent(collateral_factor),
            Percent::from_percent(liquidation_factor),
            Percent::from_percent(liquidation_penalty),
            Percent::from_percent(liquidation_discount),
            Scale::MARKET,
            1_000,
        )
    }

    #[test]
    fn from_percents() {
        let sui = model(70, 80, 5, 4).unwrap();
        assert_eq!(700_000_000_000, sui.collateral_factor());
        assert_eq!(800_000_000_000, sui.liquidation_factor());
        assert_eq!(50_000_000_000, sui.liquidation_penalty());
        assert_eq!(40_000_000_000, sui.liquidation_discount());
        assert_eq!(1_000_000_000_000, sui.scale());
        assert_eq!(1_000, sui.max_collateral_amount());
    }

    #[test]
    fn factors_out_of_order() {
        assert!(model(80, 80, 5, 4).is_err());
        assert!(model(85, 80, 5, 4).is_err());
        assert!(model(80, 100, 5, 4).is_err());
    }

    #[test]
    fn penalty_and_discount() {
        assert!(model(70, 80, 5, 5).is_ok());
        assert!(model(70, 80, 5, 6).is_err());
        assert!(model(70, 80, 0, 0).is_err());
        assert!(model(70, 80, 100, 4).is_err());
    }

    #[test]
    fn zero_max_collateral() {
        assert!(RiskModel::new(1, 2, 2, 1, 10, 0).is_err());
        assert!(RiskModel::new(1, 2, 2, 1, 10, 1).is_ok());
    }

    #[test]
    fn deserialize() {
        let json = r#"{
            "collateralFactor": 1,
            "liquidationFactor": 2,
            "liquidationPenalty": 2,
            "liquidationDiscount": 1,
            "scale": 10,
            "maxCollateralAmount": 5
        }"#;
        assert_eq!(
            RiskModel::new(1, 2, 2, 1, 10, 5).unwrap(),
            serde_json::from_str(json).unwrap()
        );
        assert!(serde_json::from_str::<RiskModel>(&json.replace(r#""scale": 10"#, r#""scale": 2"#)).is_err());
    }
}
