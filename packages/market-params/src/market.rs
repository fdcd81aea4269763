use serde::{Deserialize, Serialize};

use currencies::Asset;
use finance::amount::Amount;

use crate::{
    error::Result,
    fees::{BorrowFee, FlashloanFee},
    incentive::IncentiveRewardFactor,
    interest_model::InterestModel,
    limiter::OutflowLimiter,
    risk_model::RiskModel,
    table::Table,
};

/// Every per-asset parameter the market is configured with.
///
/// Built once at the start of a run and passed around by reference. Parameter
/// files deserialize into this type too; tables missing from such a file are
/// left empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct MarketParams {
    interest_models: Table<InterestModel>,
    outflow_limiters: Table<OutflowLimiter>,
    supply_limits: Table<Amount>,
    borrow_limits: Table<Amount>,
    isolated_assets: Table<bool>,
    borrow_fees: Table<BorrowFee>,
    flashloan_fees: Table<FlashloanFee>,
    incentive_reward_factors: Table<IncentiveRewardFactor>,
    risk_models: Table<RiskModel>,
}

impl MarketParams {
    pub const INTEREST_MODELS: &'static str = "interest_models";
    pub const OUTFLOW_LIMITERS: &'static str = "outflow_limiters";
    pub const SUPPLY_LIMITS: &'static str = "supply_limits";
    pub const BORROW_LIMITS: &'static str = "borrow_limits";
    pub const ISOLATED_ASSETS: &'static str = "isolated_assets";
    pub const BORROW_FEES: &'static str = "borrow_fees";
    pub const FLASHLOAN_FEES: &'static str = "flashloan_fees";
    pub const INCENTIVE_REWARD_FACTORS: &'static str = "incentive_reward_factors";
    pub const RISK_MODELS: &'static str = "risk_models";

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        interest_models: Table<InterestModel>,
        outflow_limiters: Table<OutflowLimiter>,
        supply_limits: Table<Amount>,
        borrow_limits: Table<Amount>,
        isolated_assets: Table<bool>,
        borrow_fees: Table<BorrowFee>,
        flashloan_fees: Table<FlashloanFee>,
        incentive_reward_factors: Table<IncentiveRewardFactor>,
        risk_models: Table<RiskModel>,
    ) -> Self {
        Self {
            interest_models,
            outflow_limiters,
            supply_limits,
            borrow_limits,
            isolated_assets,
            borrow_fees,
            flashloan_fees,
            incentive_reward_factors,
            risk_models,
        }
    }

    /// Replace the records `overrides` has entries for, table by table.
    pub fn override_with(mut self, overrides: Self) -> Self {
        let Self {
            interest_models,
            outflow_limiters,
            supply_limits,
            borrow_limits,
            isolated_assets,
            borrow_fees,
            flashloan_fees,
            incentive_reward_factors,
            risk_models,
        } = overrides;

        self.interest_models.override_with(interest_models);
        self.outflow_limiters.override_with(outflow_limiters);
        self.supply_limits.override_with(supply_limits);
        self.borrow_limits.override_with(borrow_limits);
        self.isolated_assets.override_with(isolated_assets);
        self.borrow_fees.override_with(borrow_fees);
        self.flashloan_fees.override_with(flashloan_fees);
        self.incentive_reward_factors
            .override_with(incentive_reward_factors);
        self.risk_models.override_with(risk_models);

        self
    }

    pub fn interest_model(&self, asset: Asset) -> Result<&InterestModel> {
        self.interest_models.lookup(Self::INTEREST_MODELS, asset)
    }

    pub fn outflow_limiter(&self, asset: Asset) -> Result<&OutflowLimiter> {
        self.outflow_limiters.lookup(Self::OUTFLOW_LIMITERS, asset)
    }

    /// The supply cap in the smallest units of `asset`.
    pub fn supply_limit(&self, asset: Asset) -> Result<Amount> {
        self.supply_limits
            .lookup(Self::SUPPLY_LIMITS, asset)
            .copied()
    }

    /// The borrow cap in the smallest units of `asset`.
    pub fn borrow_limit(&self, asset: Asset) -> Result<Amount> {
        self.borrow_limits
            .lookup(Self::BORROW_LIMITS, asset)
            .copied()
    }

    pub fn is_isolated(&self, asset: Asset) -> Result<bool> {
        self.isolated_assets
            .lookup(Self::ISOLATED_ASSETS, asset)
            .copied()
    }

    pub fn borrow_fee(&self, asset: Asset) -> Result<&BorrowFee> {
        self.borrow_fees.lookup(Self::BORROW_FEES, asset)
    }

    pub fn flashloan_fee(&self, asset: Asset) -> Result<FlashloanFee> {
        self.flashloan_fees
            .lookup(Self::FLASHLOAN_FEES, asset)
            .copied()
    }

    pub fn incentive_reward_factor(&self, asset: Asset) -> Result<&IncentiveRewardFactor> {
        self.incentive_reward_factors
            .lookup(Self::INCENTIVE_REWARD_FACTORS, asset)
    }

    pub fn risk_model(&self, asset: Asset) -> Result<&RiskModel> {
        self.risk_models.lookup(Self::RISK_MODELS, asset)
    }

    pub fn interest_models(&self) -> &Table<InterestModel> {
        &self.interest_models
    }

    pub fn supply_limits(&self) -> &Table<Amount> {
        &self.supply_limits
    }

    pub fn borrow_limits(&self) -> &Table<Amount> {
        &self.borrow_limits
    }

    pub fn risk_models(&self) -> &Table<RiskModel> {
        &self.risk_models
    }
}
