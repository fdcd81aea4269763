use anyhow::{Context, Result};
use clap::Parser as _;

use listing::PoolListingRequest;
use protocol_tx::Deployment;

use self::args::{Args, Subcommand};

mod args;
mod params;
mod submit;

fn main() -> Result<()> {
    let Args {
        network,
        deployments,
        params,
        subcommand,
    } = Args::parse();

    let params = params::load(params.as_deref())?;

    let load_deployment = || {
        Deployment::load(&deployments, network).with_context(|| {
            format!(
                r#"Error occurred while loading the "{network}" deployment from "{}"!"#,
                deployments.display()
            )
        })
    };

    match subcommand {
        Subcommand::AddPool {
            asset,
            dust_coin,
            submission,
        } => load_deployment()
            .and_then(|deployment| {
                listing::compose_pool_listing(
                    &params,
                    &deployment,
                    &PoolListingRequest { asset, dust_coin },
                )
                .with_context(|| {
                    format!(
                        r#"Composing the pool listing of "{asset}" on "{}" failed!"#,
                        deployment.network()
                    )
                })
            })
            .and_then(|transaction| submit::submit(transaction, &submission)),
        Subcommand::AddCollateral { asset, submission } => load_deployment()
            .and_then(|deployment| {
                listing::compose_collateral_listing(&params, &deployment, asset).with_context(
                    || {
                        format!(
                            r#"Composing the collateral listing of "{asset}" on "{}" failed!"#,
                            deployment.network()
                        )
                    },
                )
            })
            .and_then(|transaction| submit::submit(transaction, &submission)),
        Subcommand::ShowParams { asset } => params::show(&params, asset),
    }
}
