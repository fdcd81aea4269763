use serde_json::json;

use currencies::Asset;
use listing::{error::Error, PoolListingRequest};
use market_params::MarketParams;
use platform::{object_id::ObjectId, transaction::Command, type_tag::TypeTag};
use protocol_tx::error::Error as ProtocolTxError;

use crate::common::{self, Workspace, DUST_COIN, PROTOCOL_PACKAGE, SENDER};

fn request(asset: Asset) -> PoolListingRequest {
    PoolListingRequest {
        asset,
        dust_coin: DUST_COIN.parse().unwrap(),
    }
}

#[test]
fn proposal_in_outbox() {
    let workspace = Workspace::new("pool-proposal");
    workspace.write_deployment();

    let listing = listing::compose_pool_listing(
        &common::params(),
        &workspace.load_deployment(),
        &request(Asset::Sui),
    )
    .unwrap();
    let proposal = workspace.propose(listing);

    assert_eq!(SENDER, proposal["sender"]);
    assert_eq!(50_000_000, proposal["gasBudget"]);
    assert_eq!(2, proposal["multisig"]["threshold"]);
    assert_eq!(64, proposal["digest"].as_str().unwrap().len());

    let commands = common::commands(&proposal);
    assert_eq!(13, commands.len());
    assert_eq!(Some(&"app::create_interest_model_change"), commands.first());
    assert_eq!(Some(&"transfer_objects"), commands.last());

    let events = common::events(&proposal);
    assert!(events.contains(&"set-supply-limit asset=sui limit=100000000000000000"));
    assert!(events.contains(&"update-isolated-asset-status asset=sui isolated=true"));
    assert_eq!(
        Some(&"retain-dust asset=sui recipient=0x0000000000000000000000000000000000000000000000000000000000000000"),
        events.last()
    );
}

#[test]
fn calls_the_deployed_package() {
    let workspace = Workspace::new("pool-package");
    workspace.write_deployment();

    let listing = listing::compose_pool_listing(
        &common::params(),
        &workspace.load_deployment(),
        &request(Asset::WormholeEth),
    )
    .unwrap();

    let package: ObjectId = PROTOCOL_PACKAGE.parse().unwrap();
    let coin_type = TypeTag::of(Asset::WormholeEth).unwrap();

    let protocol_calls: Vec<_> = listing
        .commands()
        .iter()
        .filter_map(|command| match command {
            Command::MoveCall(call) if call.package() == &package => Some(call),
            _ => None,
        })
        .collect();

    assert_eq!(10, protocol_calls.len());
    protocol_calls
        .iter()
        .for_each(|call| assert_eq!(&[coin_type.clone()], call.type_arguments()));
}

#[test]
fn same_inputs_same_digest() {
    let first = Workspace::new("pool-digest-first");
    first.write_deployment();
    let second = Workspace::new("pool-digest-second");
    second.write_deployment();

    let compose = |workspace: &Workspace| {
        workspace.propose(
            listing::compose_pool_listing(
                &common::params(),
                &workspace.load_deployment(),
                &request(Asset::WormholeUsdc),
            )
            .unwrap(),
        )
    };

    let first = compose(&first);
    let second = compose(&second);
    assert_eq!(first["digest"], second["digest"]);
    assert_eq!(first["txBytes"], second["txBytes"]);
}

#[test]
fn pending_proposal_kept() {
    let workspace = Workspace::new("pool-pending");
    workspace.write_deployment();
    let deployment = workspace.load_deployment();

    let compose = || {
        listing::compose_pool_listing(&common::params(), &deployment, &request(Asset::Cetus))
            .unwrap()
    };

    workspace.propose(compose());

    let multisig = multisig::MultiSig::load(&workspace.multisig_path()).unwrap();
    let again = multisig::SignableTransaction::new(&multisig, 50_000_000, compose()).unwrap();
    assert!(matches!(
        multisig::Submission::submit(&mut workspace.outbox(), again),
        Err(multisig::error::Error::SubmissionFailure(_))
    ));
}

#[test]
fn missing_supply_limit() {
    let workspace = Workspace::new("pool-no-supply-limit");
    workspace.write_deployment();

    assert_eq!(
        Err(Error::Params(market_params::error::Error::MissingConfiguration {
            table: MarketParams::SUPPLY_LIMITS,
            asset: Asset::WormholeApt,
        })),
        listing::compose_pool_listing(
            &common::params(),
            &workspace.load_deployment(),
            &request(Asset::WormholeApt),
        )
    );
}

#[test]
fn supply_limit_from_parameter_file() {
    let workspace = Workspace::new("pool-params-file");
    workspace.write_deployment();

    let overrides: MarketParams =
        serde_json::from_str(r#"{"supplyLimits": {"wormhole_apt": 1000000}}"#).unwrap();
    let params = common::params().override_with(overrides);

    let proposal = workspace.propose(
        listing::compose_pool_listing(
            &params,
            &workspace.load_deployment(),
            &request(Asset::WormholeApt),
        )
        .unwrap(),
    );

    assert!(common::events(&proposal)
        .contains(&"set-supply-limit asset=wormhole_apt limit=1000000"));
}

#[test]
fn switchboard_priced() {
    let workspace = Workspace::new("pool-switchboard");
    workspace.write_deployment();
    workspace.write_switchboard_rule();
    workspace.write_oracles(
        json!({
            "sui": {
                "switchboardOnDemand": {
                    "aggregatorId": "0x0000000000000000000000000000000000000000000000000000000000000abc"
                }
            }
        })
        .as_object()
        .unwrap()
        .clone(),
    );

    let proposal = workspace.propose(
        listing::compose_pool_listing(
            &common::params(),
            &workspace.load_deployment(),
            &request(Asset::Sui),
        )
        .unwrap(),
    );

    assert!(common::commands(&proposal)
        .contains(&"switchboard_on_demand_registry::register_switchboard_aggregator"));
}

#[test]
fn switchboard_rule_not_deployed() {
    let workspace = Workspace::new("pool-no-switchboard");
    workspace.write_deployment();
    workspace.write_oracles(
        json!({
            "sui": {
                "switchboardOnDemand": {
                    "aggregatorId": "0xabc"
                }
            }
        })
        .as_object()
        .unwrap()
        .clone(),
    );

    assert!(matches!(
        listing::compose_pool_listing(
            &common::params(),
            &workspace.load_deployment(),
            &request(Asset::Sui),
        ),
        Err(Error::ProtocolTx(ProtocolTxError::RuleNotDeployed(_)))
    ));
}

#[test]
fn missing_oracle() {
    let workspace = Workspace::new("pool-no-oracle");
    workspace.write_deployment();
    workspace.write_oracles(serde_json::Map::new());

    assert!(matches!(
        listing::compose_pool_listing(
            &common::params(),
            &workspace.load_deployment(),
            &request(Asset::Sui),
        ),
        Err(Error::ProtocolTx(ProtocolTxError::Params(
            market_params::error::Error::MissingConfiguration { .. }
        )))
    ));
}

#[test]
fn missing_artifact() {
    let workspace = Workspace::new("pool-no-artifacts");

    assert!(matches!(
        protocol_tx::Deployment::load(&workspace.deployments(), common::NETWORK),
        Err(ProtocolTxError::ReadArtifact { .. })
    ));
}
