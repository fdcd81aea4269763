use std::path::PathBuf;

use currencies::Asset;
use platform::object_id::ObjectId;
use protocol_tx::Network;

#[derive(Debug, clap::Parser)]
#[command(about = "Compose lending market listings and hand them to the multi-signature signers.")]
pub(crate) struct Args {
    #[arg(global = true, long, env = "POOL_SETUP_NETWORK", default_value_t = Network::Mainnet)]
    pub network: Network,
    #[arg(
        global = true,
        long,
        env = "POOL_SETUP_DEPLOYMENTS",
        default_value_os_t = PathBuf::from("deployments"),
        help = "Directory of the `<artifact>.<network>.json` deployment artifacts."
    )]
    pub deployments: PathBuf,
    #[arg(
        global = true,
        long,
        help = "JSON file overriding entries of the built-in parameter tables."
    )]
    pub params: Option<PathBuf>,
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Subcommand {
    #[command(about = "List a new lending pool.")]
    AddPool {
        asset: Asset,
        #[arg(
            long,
            help = "A coin of the asset kept in the pool for good, so it never runs empty."
        )]
        dust_coin: ObjectId,
        #[command(flatten)]
        submission: SubmissionArgs,
    },
    #[command(about = "Accept an asset as collateral.")]
    AddCollateral {
        asset: Asset,
        #[command(flatten)]
        submission: SubmissionArgs,
    },
    #[command(about = "Print the parameter tables in effect.")]
    ShowParams {
        #[arg(long)]
        asset: Option<Asset>,
    },
}

#[derive(Debug, clap::Args)]
pub(crate) struct SubmissionArgs {
    #[arg(long, help = "JSON description of the multi-signature sender.")]
    pub multisig: PathBuf,
    #[arg(long, help = "Directory the signers collect proposals from.")]
    pub outbox: PathBuf,
    #[arg(long, default_value_t = 500_000_000)]
    pub gas_budget: u64,
    #[arg(long, visible_alias = "gha-log")]
    pub github_actions_logging: bool,
}
