use anyhow::{Context, Result};

use multisig::{MultiSig, Outbox, SignableTransaction, Submission as _};
use platform::{emit::Event, transaction::Finalized};

use crate::args::SubmissionArgs;

pub(crate) fn submit(
    transaction: Finalized,
    &SubmissionArgs {
        ref multisig,
        ref outbox,
        gas_budget,
        github_actions_logging,
    }: &SubmissionArgs,
) -> Result<()> {
    let multisig = MultiSig::load(multisig).context("Error occurred while loading the signers!")?;

    let transaction = SignableTransaction::new(&multisig, gas_budget, transaction)
        .context("Failed to bind the transaction to the multi-signature sender!")?;

    report(
        transaction.events(),
        &transaction.digest_hex(),
        github_actions_logging,
    );

    Outbox::new(outbox)
        .submit(transaction)
        .with_context(|| format!(r#"Handing over to "{}" failed!"#, outbox.display()))
        .map(|id| println!("Proposal `{id}` awaits the signers."))
}

fn report(events: &[Event], digest: &str, github_actions_logging: bool) {
    println!(
        r#"{}Events of transaction "{digest}":"#,
        if github_actions_logging {
            "##[group]"
        } else {
            ""
        },
    );

    events.iter().for_each(|event| println!("\t{event}"));

    if github_actions_logging {
        println!("##[endgroup]");
    }
}
