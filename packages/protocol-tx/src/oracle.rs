use currencies::Asset;
use market_params::OracleBinding;
use platform::{
    emit::{Emit, Emitter},
    object_id::ObjectId,
    transaction::{Argument, MoveCall, Transaction},
    type_tag::TypeTag,
};

use crate::{
    deployment::{Deployment, PythRuleDeployment, SwitchboardRuleDeployment},
    error::Result,
};

/// Registers Pyth price info objects with the Pyth oracle rule.
pub struct PythRuleTxBuilder<'d> {
    deployment: &'d PythRuleDeployment,
}

impl<'d> PythRuleTxBuilder<'d> {
    pub const fn new(deployment: &'d PythRuleDeployment) -> Self {
        Self { deployment }
    }

    pub fn register_pyth_price_info_object(
        &self,
        tx: &mut Transaction,
        price_info_object: ObjectId,
        asset: Asset,
    ) -> Result<()> {
        tx.try_append(|tx| -> Result<()> {
            let arguments = vec![
                tx.object(self.deployment.pyth_registry_id)?,
                tx.object(self.deployment.pyth_registry_cap_id)?,
                tx.object(price_info_object)?,
            ];

            register(
                tx,
                self.deployment.package_id,
                "pyth_registry",
                "register_pyth_feed",
                arguments,
                asset,
            )?;

            tx.record(
                Emitter::of_type("register-pyth-price-info-object")
                    .emit_asset("asset", asset)
                    .emit_object_id("price-info-object", &price_info_object),
            );

            Ok(())
        })
    }
}

/// Registers Switchboard on-demand aggregators with the Switchboard oracle rule.
pub struct SwitchboardRuleTxBuilder<'d> {
    deployment: &'d SwitchboardRuleDeployment,
}

impl<'d> SwitchboardRuleTxBuilder<'d> {
    pub const fn new(deployment: &'d SwitchboardRuleDeployment) -> Self {
        Self { deployment }
    }

    pub fn register_switchboard_aggregator(
        &self,
        tx: &mut Transaction,
        aggregator: ObjectId,
        asset: Asset,
    ) -> Result<()> {
        tx.try_append(|tx| -> Result<()> {
            let arguments = vec![
                tx.object(self.deployment.switchboard_on_demand_registry_id)?,
                tx.object(self.deployment.switchboard_on_demand_registry_cap_id)?,
                tx.object(aggregator)?,
            ];

            register(
                tx,
                self.deployment.package_id,
                "switchboard_on_demand_registry",
                "register_switchboard_aggregator",
                arguments,
                asset,
            )?;

            tx.record(
                Emitter::of_type("register-switchboard-aggregator")
                    .emit_asset("asset", asset)
                    .emit_object_id("aggregator", &aggregator),
            );

            Ok(())
        })
    }
}

/// The oracle rule an asset's price feed is registered with.
pub enum OracleRuleTxBuilder<'d> {
    Pyth(PythRuleTxBuilder<'d>, ObjectId),
    Switchboard(SwitchboardRuleTxBuilder<'d>, ObjectId),
}

impl<'d> OracleRuleTxBuilder<'d> {
    /// Resolve the rule of `binding`, failing if it is not deployed.
    pub fn for_binding(deployment: &'d Deployment, binding: &OracleBinding) -> Result<Self> {
        match *binding {
            OracleBinding::Pyth {
                price_info_object_id,
            } => Ok(Self::Pyth(
                PythRuleTxBuilder::new(deployment.pyth_rule()),
                price_info_object_id,
            )),
            OracleBinding::SwitchboardOnDemand { aggregator_id } => deployment
                .switchboard_rule()
                .map(|rule| Self::Switchboard(SwitchboardRuleTxBuilder::new(rule), aggregator_id)),
        }
    }

    pub fn register(&self, tx: &mut Transaction, asset: Asset) -> Result<()> {
        match self {
            Self::Pyth(builder, price_info_object) => {
                builder.register_pyth_price_info_object(tx, *price_info_object, asset)
            }
            Self::Switchboard(builder, aggregator) => {
                builder.register_switchboard_aggregator(tx, *aggregator, asset)
            }
        }
    }
}

fn register(
    tx: &mut Transaction,
    package: ObjectId,
    module: &str,
    function: &str,
    arguments: Vec<Argument>,
    asset: Asset,
) -> Result<()> {
    TypeTag::of(asset)
        .and_then(|coin_type| MoveCall::new(package, module, function, vec![coin_type], arguments))
        .and_then(|call| tx.move_call(call))
        .map(|_| ())
        .map_err(Into::into)
}
