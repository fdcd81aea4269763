use currencies::Asset;
use listing::error::Error;
use market_params::MarketParams;

use crate::common::{self, Workspace};

#[test]
fn proposal_in_outbox() {
    let workspace = Workspace::new("collateral-proposal");
    workspace.write_deployment();

    let listing = listing::compose_collateral_listing(
        &common::params(),
        &workspace.load_deployment(),
        Asset::WormholeSol,
    )
    .unwrap();
    let proposal = workspace.propose(listing);

    assert_eq!(
        vec![
            "app::create_risk_model_change",
            "app::add_risk_model",
            "pyth_registry::register_pyth_feed",
            "coin_decimals_registry::register_decimals",
        ],
        common::commands(&proposal)
    );
    let registered = common::events(&proposal).last().copied().unwrap();
    assert!(registered.starts_with("register-decimals asset=wormhole_sol "));
    assert!(registered.ends_with(" decimals=8"));
}

#[test]
fn threshold_in_proposal() {
    let workspace = Workspace::new("collateral-threshold");
    workspace.write_deployment();
    workspace.write_multisig(3);

    let proposal = workspace.propose(
        listing::compose_collateral_listing(
            &common::params(),
            &workspace.load_deployment(),
            Asset::Sui,
        )
        .unwrap(),
    );

    assert_eq!(3, proposal["multisig"]["threshold"]);
    assert_eq!(3, proposal["multisig"]["signers"].as_array().unwrap().len());
}

#[test]
fn missing_risk_model() {
    let workspace = Workspace::new("collateral-no-risk-model");
    workspace.write_deployment();

    let params = MarketParams::default();
    assert_eq!(
        Err(Error::Params(market_params::error::Error::MissingConfiguration {
            table: MarketParams::RISK_MODELS,
            asset: Asset::Cetus,
        })),
        listing::compose_collateral_listing(&params, &workspace.load_deployment(), Asset::Cetus)
    );
    assert!(!workspace.outbox().dir().exists());
}
