use currencies::Asset;
use finance::amount::Amount;
use market_params::{
    BorrowFee, FlashloanFee, IncentiveRewardFactor, InterestModel, MarketParams, OutflowLimiter,
};
use platform::{
    emit::{Emit, Emitter},
    object_id::{Address, ObjectId},
    transaction::{Finalized, Transaction},
    type_tag::TypeTag,
};
use protocol_tx::{DecimalsRegistryTxBuilder, Deployment, OracleRuleTxBuilder, ProtocolTxBuilder};

use crate::error::Result;

/// What to list as a new lending pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PoolListingRequest {
    pub asset: Asset,
    /// A coin of `asset` supplied to the new pool and never withdrawn, so
    /// the pool is never left empty.
    pub dust_coin: ObjectId,
}

/// Compose the transaction listing a new lending pool.
///
/// Every parameter is looked up before any command is appended, so a missing
/// or invalid one yields no transaction at all. The commands then follow a
/// fixed order:
/// interest model, outflow limiter, supply limit, borrow limit, isolated
/// asset status, borrow fee, flash loan fee, incentive reward factor, oracle,
/// decimals, and finally supplying the dust coin and sending the obtained
/// market coin to the zero address.
pub fn compose_pool_listing(
    params: &MarketParams,
    deployment: &Deployment,
    request: &PoolListingRequest,
) -> Result<Finalized> {
    PoolListing::prepare(params, deployment, request).and_then(PoolListing::build)
}

struct PoolListing<'r> {
    asset: Asset,
    interest_model: &'r InterestModel,
    outflow_limiter: &'r OutflowLimiter,
    supply_limit: Amount,
    borrow_limit: Amount,
    isolated: bool,
    borrow_fee: &'r BorrowFee,
    flashloan_fee: FlashloanFee,
    incentive_reward_factor: &'r IncentiveRewardFactor,
    protocol: ProtocolTxBuilder<'r>,
    oracle: OracleRuleTxBuilder<'r>,
    decimals_registry: DecimalsRegistryTxBuilder<'r>,
    dust_coin: ObjectId,
}

impl<'r> PoolListing<'r> {
    fn prepare(
        params: &'r MarketParams,
        deployment: &'r Deployment,
        &PoolListingRequest { asset, dust_coin }: &PoolListingRequest,
    ) -> Result<Self> {
        TypeTag::of(asset)?;

        Ok(Self {
            asset,
            interest_model: params.interest_model(asset)?,
            outflow_limiter: params.outflow_limiter(asset)?,
            supply_limit: params.supply_limit(asset)?,
            borrow_limit: params.borrow_limit(asset)?,
            isolated: params.is_isolated(asset)?,
            borrow_fee: params.borrow_fee(asset)?,
            flashloan_fee: params.flashloan_fee(asset)?,
            incentive_reward_factor: params.incentive_reward_factor(asset)?,
            protocol: ProtocolTxBuilder::new(deployment.protocol()),
            oracle: deployment
                .oracle(asset)
                .and_then(|binding| OracleRuleTxBuilder::for_binding(deployment, binding))?,
            decimals_registry: DecimalsRegistryTxBuilder::new(deployment.decimals_registry()),
            dust_coin,
        })
    }

    fn build(self) -> Result<Finalized> {
        let asset = self.asset;
        let mut tx = Transaction::default();

        self.protocol
            .add_interest_model(&mut tx, self.interest_model, asset)?;
        self.protocol
            .add_limiter(&mut tx, self.outflow_limiter, asset)?;
        self.protocol
            .set_supply_limit(&mut tx, self.supply_limit, asset)?;
        self.protocol
            .set_borrow_limit(&mut tx, self.borrow_limit, asset)?;
        self.protocol
            .update_isolated_asset_status(&mut tx, self.isolated, asset)?;
        self.protocol
            .update_borrow_fee(&mut tx, self.borrow_fee, asset)?;
        self.protocol
            .set_flashloan_fee(&mut tx, self.flashloan_fee, asset)?;
        self.protocol
            .set_incentive_reward_factor(&mut tx, self.incentive_reward_factor, asset)?;

        self.oracle.register(&mut tx, asset)?;

        self.decimals_registry.register_decimals(&mut tx, asset)?;

        let market_coin = self
            .protocol
            .supply_base_asset(&mut tx, self.dust_coin, asset)?;
        tx.transfer_objects(vec![market_coin], Address::ZERO)?;
        tx.record(
            Emitter::of_type("retain-dust")
                .emit_asset("asset", asset)
                .emit_object_id("recipient", &Address::ZERO),
        );

        tx.finalize().map_err(Into::into)
    }
}
