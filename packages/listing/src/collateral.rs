use currencies::Asset;
use market_params::{MarketParams, RiskModel};
use platform::{
    transaction::{Finalized, Transaction},
    type_tag::TypeTag,
};
use protocol_tx::{DecimalsRegistryTxBuilder, Deployment, OracleRuleTxBuilder, ProtocolTxBuilder};

use crate::error::Result;

/// Compose the transaction accepting `asset` as collateral.
///
/// Fails before appending anything if a parameter is missing. The commands
/// add the risk model, then register the oracle and the decimals.
pub fn compose_collateral_listing(
    params: &MarketParams,
    deployment: &Deployment,
    asset: Asset,
) -> Result<Finalized> {
    CollateralListing::prepare(params, deployment, asset).and_then(CollateralListing::build)
}

struct CollateralListing<'r> {
    asset: Asset,
    risk_model: &'r RiskModel,
    protocol: ProtocolTxBuilder<'r>,
    oracle: OracleRuleTxBuilder<'r>,
    decimals_registry: DecimalsRegistryTxBuilder<'r>,
}

impl<'r> CollateralListing<'r> {
    fn prepare(params: &'r MarketParams, deployment: &'r Deployment, asset: Asset) -> Result<Self> {
        TypeTag::of(asset)?;

        Ok(Self {
            asset,
            risk_model: params.risk_model(asset)?,
            protocol: ProtocolTxBuilder::new(deployment.protocol()),
            oracle: deployment
                .oracle(asset)
                .and_then(|binding| OracleRuleTxBuilder::for_binding(deployment, binding))?,
            decimals_registry: DecimalsRegistryTxBuilder::new(deployment.decimals_registry()),
        })
    }

    fn build(self) -> Result<Finalized> {
        let mut tx = Transaction::default();

        self.protocol
            .add_risk_model(&mut tx, self.risk_model, self.asset)?;
        self.oracle.register(&mut tx, self.asset)?;
        self.decimals_registry
            .register_decimals(&mut tx, self.asset)?;

        tx.finalize().map_err(Into::into)
    }
}
