use currencies::Asset;
use market_params::{OracleBinding, Table};
use platform::object_id::ObjectId;
use protocol_tx::{
    deployment::{DecimalsRegistryDeployment, ProtocolDeployment, PythRuleDeployment},
    Deployment, Network,
};

pub const DUST_COIN: &str = "0x307dc3b470b7b4718a59f26efcc9229a4407b15fbbd031eaf1147535a7626c4c";

fn id(hex: &str) -> ObjectId {
    hex.parse().unwrap()
}

/// Every asset priced by a Pyth feed of its own
pub fn deployment() -> Deployment {
    deployment_with_oracles(
        Asset::ALL
            .into_iter()
            .zip(1u8..)
            .map(|(asset, feed)| {
                let mut bytes = [0xf0; ObjectId::LENGTH];
                bytes[ObjectId::LENGTH - 1] = feed;

                (
                    asset,
                    OracleBinding::Pyth {
                        price_info_object_id: ObjectId::new(bytes),
                    },
                )
            })
            .collect(),
    )
}

pub fn deployment_with_oracles(oracles: Table<OracleBinding>) -> Deployment {
    Deployment::new(
        Network::Localnet,
        ProtocolDeployment {
            package_id: id("0xa1"),
            market_id: id("0xa2"),
            admin_cap_id: id("0xa3"),
            version_id: id("0xa4"),
        },
        DecimalsRegistryDeployment {
            package_id: id("0xb1"),
            coin_decimals_registry_id: id("0xb2"),
        },
        PythRuleDeployment {
            package_id: id("0xc1"),
            pyth_registry_id: id("0xc2"),
            pyth_registry_cap_id: id("0xc3"),
        },
        None,
        oracles,
    )
}
