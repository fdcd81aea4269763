use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::json;

use currencies::Asset;
use market_params::MarketParams;

/// The built-in tables with the entries of the file at `overrides`, if any,
/// taking precedence.
pub(crate) fn load(overrides: Option<&Path>) -> Result<MarketParams> {
    let params = MarketParams::mainnet()
        .context("Error occurred while building the built-in parameter tables!")?;

    match overrides {
        None => Ok(params),
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!(r#"Failed to read parameter file "{}"!"#, path.display()))
            .and_then(|json| {
                serde_json::from_str(&json).with_context(|| {
                    format!(r#"Failed to parse parameter file "{}"!"#, path.display())
                })
            })
            .map(|overrides| params.override_with(overrides)),
    }
}

pub(crate) fn show(params: &MarketParams, asset: Option<Asset>) -> Result<()> {
    asset
        .map_or_else(
            || serde_json::to_string_pretty(params),
            |asset| serde_json::to_string_pretty(&of_asset(params, asset)),
        )
        .context("Failed to serialize the parameters!")
        .map(|json| println!("{json}"))
}

/// Entries an asset has no record in are `null`.
fn of_asset(params: &MarketParams, asset: Asset) -> serde_json::Value {
    json!({
        "interestModel": params.interest_model(asset).ok(),
        "outflowLimiter": params.outflow_limiter(asset).ok(),
        "supplyLimit": params.supply_limit(asset).ok(),
        "borrowLimit": params.borrow_limit(asset).ok(),
        "isolated": params.is_isolated(asset).ok(),
        "borrowFee": params.borrow_fee(asset).ok(),
        "flashloanFee": params.flashloan_fee(asset).ok(),
        "incentiveRewardFactor": params.incentive_reward_factor(asset).ok(),
        "riskModel": params.risk_model(asset).ok(),
    })
}
