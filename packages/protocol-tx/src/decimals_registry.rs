use currencies::Asset;
use platform::{
    emit::{Emit, Emitter},
    object_id::ObjectId,
    transaction::{MoveCall, Transaction},
    type_tag::TypeTag,
};

use crate::{deployment::DecimalsRegistryDeployment, error::Result};

pub struct DecimalsRegistryTxBuilder<'d> {
    deployment: &'d DecimalsRegistryDeployment,
}

impl<'d> DecimalsRegistryTxBuilder<'d> {
    pub const fn new(deployment: &'d DecimalsRegistryDeployment) -> Self {
        Self { deployment }
    }

    /// Record the decimal digits of `asset` as read from its coin metadata.
    pub fn register_decimals(&self, tx: &mut Transaction, asset: Asset) -> Result<()> {
        tx.try_append(|tx| -> Result<()> {
            let metadata: ObjectId = asset.metadata_id().parse()?;

            let arguments = vec![
                tx.object(self.deployment.coin_decimals_registry_id)?,
                tx.object(metadata)?,
            ];

            TypeTag::of(asset)
                .and_then(|coin_type| {
                    MoveCall::new(
                        self.deployment.package_id,
                        "coin_decimals_registry",
                        "register_decimals",
                        vec![coin_type],
                        arguments,
                    )
                })
                .and_then(|call| tx.move_call(call))?;

            tx.record(
                Emitter::of_type("register-decimals")
                    .emit_asset("asset", asset)
                    .emit_object_id("coin-metadata", &metadata)
                    .emit_to_string_value("decimals", asset.decimal_digits()),
            );

            Ok(())
        })
    }
}
