use currencies::Asset;
use finance::amount::Amount;
use market_params::{
    BorrowFee, FlashloanFee, IncentiveRewardFactor, InterestModel, OutflowLimiter, RiskModel,
};
use platform::{
    emit::{Emit, Emitter},
    object_id::ObjectId,
    transaction::{Argument, MoveCall, Transaction},
    type_tag::TypeTag,
};

use crate::{deployment::ProtocolDeployment, error::Result};

const APP: &str = "app";
const MINT: &str = "mint";

/// Appends lending market administration calls to a transaction.
///
/// Every call is made on behalf of the admin capability and is generic over
/// the coin type of the asset it configures.
pub struct ProtocolTxBuilder<'d> {
    deployment: &'d ProtocolDeployment,
}

impl<'d> ProtocolTxBuilder<'d> {
    pub const fn new(deployment: &'d ProtocolDeployment) -> Self {
        Self { deployment }
    }

    /// Stage an interest model change and apply it, returning the result of
    /// the latter.
    pub fn add_interest_model(
        &self,
        tx: &mut Transaction,
        model: &InterestModel,
        asset: Asset,
    ) -> Result<Argument> {
        tx.try_append(|tx| -> Result<Argument> {
            let admin_cap = tx.object(self.deployment.admin_cap_id)?;
            let values = [
                model.base_borrow_rate_per_sec(),
                model.interest_rate_scale(),
                model.borrow_rate_on_mid_kink(),
                model.mid_kink(),
                model.borrow_rate_on_high_kink(),
                model.high_kink(),
                model.max_borrow_rate(),
                model.revenue_factor(),
                model.borrow_weight(),
                model.scale(),
                model.min_borrow_amount(),
            ];

            let mut arguments = vec![admin_cap];
            values
                .into_iter()
                .try_for_each(|value| tx.pure(value).map(|value| arguments.push(value)))?;

            let change = self.call(tx, "create_interest_model_change", asset, arguments)?;

            let market = tx.object(self.deployment.market_id)?;
            let clock = tx.object(ObjectId::CLOCK)?;
            let added = self.call(
                tx,
                "add_interest_model",
                asset,
                vec![market, admin_cap, change, clock],
            )?;

            tx.record(
                Emitter::of_type("add-interest-model")
                    .emit_asset("asset", asset)
                    .emit_to_string_value("mid-kink", model.mid_kink())
                    .emit_to_string_value("high-kink", model.high_kink())
                    .emit_to_string_value(
                        "borrow-rate-on-mid-kink",
                        model.borrow_rate_on_mid_kink(),
                    )
                    .emit_to_string_value(
                        "borrow-rate-on-high-kink",
                        model.borrow_rate_on_high_kink(),
                    )
                    .emit_to_string_value("max-borrow-rate", model.max_borrow_rate())
                    .emit_to_string_value("min-borrow-amount", model.min_borrow_amount()),
            );

            Ok(added)
        })
    }

    pub fn add_limiter(
        &self,
        tx: &mut Transaction,
        limiter: &OutflowLimiter,
        asset: Asset,
    ) -> Result<()> {
        tx.try_append(|tx| -> Result<()> {
            let arguments = vec![
                tx.object(self.deployment.admin_cap_id)?,
                tx.object(self.deployment.market_id)?,
                tx.pure(limiter.outflow_limit())?,
                tx.pure(limiter.outflow_cycle_duration().secs())?,
                tx.pure(limiter.outflow_segment_duration().secs())?,
            ];

            self.call(tx, "add_limiter", asset, arguments)?;

            tx.record(
                Emitter::of_type("add-limiter")
                    .emit_asset("asset", asset)
                    .emit_to_string_value("outflow-limit", limiter.outflow_limit())
                    .emit_to_string_value("cycle", limiter.outflow_cycle_duration())
                    .emit_to_string_value("segment", limiter.outflow_segment_duration()),
            );

            Ok(())
        })
    }

    /// `limit` is in the smallest units of `asset`.
    pub fn set_supply_limit(
        &self,
        tx: &mut Transaction,
        limit: Amount,
        asset: Asset,
    ) -> Result<()> {
        self.update_limit(tx, "update_supply_limit", "set-supply-limit", limit, asset)
    }

    /// `limit` is in the smallest units of `asset`.
    pub fn set_borrow_limit(
        &self,
        tx: &mut Transaction,
        limit: Amount,
        asset: Asset,
    ) -> Result<()> {
        self.update_limit(tx, "update_borrow_limit", "set-borrow-limit", limit, asset)
    }

    pub fn update_isolated_asset_status(
        &self,
        tx: &mut Transaction,
        isolated: bool,
        asset: Asset,
    ) -> Result<()> {
        tx.try_append(|tx| -> Result<()> {
            let arguments = vec![
                tx.object(self.deployment.admin_cap_id)?,
                tx.object(self.deployment.market_id)?,
                tx.pure(isolated)?,
            ];

            self.call(tx, "update_isolated_asset_status", asset, arguments)?;

            tx.record(
                Emitter::of_type("update-isolated-asset-status")
                    .emit_asset("asset", asset)
                    .emit_to_string_value("isolated", isolated),
            );

            Ok(())
        })
    }

    pub fn update_borrow_fee(
        &self,
        tx: &mut Transaction,
        fee: &BorrowFee,
        asset: Asset,
    ) -> Result<()> {
        tx.try_append(|tx| -> Result<()> {
            let arguments = vec![
                tx.object(self.deployment.admin_cap_id)?,
                tx.object(self.deployment.market_id)?,
                tx.pure(fee.fraction().numerator())?,
                tx.pure(fee.fraction().denominator())?,
            ];

            self.call(tx, "update_borrow_fee", asset, arguments)?;

            tx.record(
                Emitter::of_type("update-borrow-fee")
                    .emit_asset("asset", asset)
                    .emit_fraction("fee", fee.fraction()),
            );

            Ok(())
        })
    }

    pub fn set_flashloan_fee(
        &self,
        tx: &mut Transaction,
        fee: FlashloanFee,
        asset: Asset,
    ) -> Result<()> {
        tx.try_append(|tx| -> Result<()> {
            let arguments = vec![
                tx.object(self.deployment.market_id)?,
                tx.object(self.deployment.admin_cap_id)?,
                tx.pure(fee.bps())?,
            ];

            self.call(tx, "set_flash_loan_fee", asset, arguments)?;

            tx.record(
                Emitter::of_type("set-flashloan-fee")
                    .emit_asset("asset", asset)
                    .emit_to_string_value("fee", fee),
            );

            Ok(())
        })
    }

    pub fn set_incentive_reward_factor(
        &self,
        tx: &mut Transaction,
        factor: &IncentiveRewardFactor,
        asset: Asset,
    ) -> Result<()> {
        tx.try_append(|tx| -> Result<()> {
            let arguments = vec![
                tx.object(self.deployment.admin_cap_id)?,
                tx.object(self.deployment.market_id)?,
                tx.pure(factor.value())?,
                tx.pure(factor.scale())?,
            ];

            self.call(tx, "set_incentive_reward_factor", asset, arguments)?;

            tx.record(
                Emitter::of_type("set-incentive-reward-factor")
                    .emit_asset("asset", asset)
                    .emit_to_string_value("value", factor.value())
                    .emit_to_string_value("scale", factor.scale()),
            );

            Ok(())
        })
    }

    /// Supply the whole `coin` to the pool of `asset`, returning the minted
    /// market coin.
    pub fn supply_base_asset(
        &self,
        tx: &mut Transaction,
        coin: ObjectId,
        asset: Asset,
    ) -> Result<Argument> {
        tx.try_append(|tx| -> Result<Argument> {
            let arguments = vec![
                tx.object(self.deployment.version_id)?,
                tx.object(self.deployment.market_id)?,
                tx.object(coin)?,
                tx.object(ObjectId::CLOCK)?,
            ];

            let market_coin = self.call_in(tx, MINT, "mint", asset, arguments)?;

            tx.record(
                Emitter::of_type("supply-base-asset")
                    .emit_asset("asset", asset)
                    .emit_object_id("coin", &coin),
            );

            Ok(market_coin)
        })
    }

    /// Stage a risk model change and apply it, returning the result of the
    /// latter.
    pub fn add_risk_model(
        &self,
        tx: &mut Transaction,
        model: &RiskModel,
        asset: Asset,
    ) -> Result<Argument> {
        tx.try_append(|tx| -> Result<Argument> {
            let admin_cap = tx.object(self.deployment.admin_cap_id)?;
            let values = [
                model.collateral_factor(),
                model.liquidation_factor(),
                model.liquidation_penalty(),
                model.liquidation_discount(),
                model.scale(),
                model.max_collateral_amount(),
            ];

            let mut arguments = vec![admin_cap];
            values
                .into_iter()
                .try_for_each(|value| tx.pure(value).map(|value| arguments.push(value)))?;

            let change = self.call(tx, "create_risk_model_change", asset, arguments)?;

            let market = tx.object(self.deployment.market_id)?;
            let added = self.call(tx, "add_risk_model", asset, vec![market, admin_cap, change])?;

            tx.record(
                Emitter::of_type("add-risk-model")
                    .emit_asset("asset", asset)
                    .emit_to_string_value("collateral-factor", model.collateral_factor())
                    .emit_to_string_value("liquidation-factor", model.liquidation_factor())
                    .emit_to_string_value("liquidation-penalty", model.liquidation_penalty())
                    .emit_to_string_value("liquidation-discount", model.liquidation_discount())
                    .emit_to_string_value("max-collateral-amount", model.max_collateral_amount()),
            );

            Ok(added)
        })
    }

    fn update_limit(
        &self,
        tx: &mut Transaction,
        function: &str,
        event: &str,
        limit: Amount,
        asset: Asset,
    ) -> Result<()> {
        tx.try_append(|tx| -> Result<()> {
            let arguments = vec![
                tx.object(self.deployment.admin_cap_id)?,
                tx.object(self.deployment.market_id)?,
                tx.pure(limit)?,
            ];

            self.call(tx, function, asset, arguments)?;

            tx.record(
                Emitter::of_type(event)
                    .emit_asset("asset", asset)
                    .emit_to_string_value("limit", limit),
            );

            Ok(())
        })
    }

    fn call(
        &self,
        tx: &mut Transaction,
        function: &str,
        asset: Asset,
        arguments: Vec<Argument>,
    ) -> Result<Argument> {
        self.call_in(tx, APP, function, asset, arguments)
    }

    fn call_in(
        &self,
        tx: &mut Transaction,
        module: &str,
        function: &str,
        asset: Asset,
        arguments: Vec<Argument>,
    ) -> Result<Argument> {
        TypeTag::of(asset)
            .and_then(|coin_type| {
                MoveCall::new(
                    self.deployment.package_id,
                    module,
                    function,
                    vec![coin_type],
                    arguments,
                )
            })
            .and_then(|call| tx.move_call(call))
            .map_err(Into::into)
    }
}
