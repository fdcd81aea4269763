use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    fs::{self, File, OpenOptions},
    io::{self, ErrorKind, Write as _},
    path::{Path, PathBuf},
};

use serde::Serialize;

use platform::object_id::Address;

use crate::{
    config::MultiSig,
    error::{Error, Result},
    signable::SignableTransaction,
};

/// Identifies a handed-off transaction with the backend it was handed to.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubmissionId(String);

impl SubmissionId {
    pub fn new<Id>(id: Id) -> Self
    where
        Id: Into<String>,
    {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SubmissionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// A path a signable transaction takes towards authorization and broadcast.
///
/// Failures are reported as they are, with no retry.
pub trait Submission {
    fn submit(&mut self, transaction: SignableTransaction) -> Result<SubmissionId>;
}

/// Drops proposals in a directory the signers collect them from.
///
/// Each proposal is a JSON file named after the transaction digest. A proposal
/// already there is never overwritten.
pub struct Outbox {
    dir: PathBuf,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Proposal<'t> {
    digest: String,
    sender: &'t Address,
    gas_budget: u64,
    multisig: &'t MultiSig,
    commands: Vec<String>,
    events: Vec<String>,
    tx_bytes: String,
}

impl<'t> From<&'t SignableTransaction> for Proposal<'t> {
    fn from(transaction: &'t SignableTransaction) -> Self {
        Self {
            digest: transaction.digest_hex(),
            sender: transaction.sender(),
            gas_budget: transaction.gas_budget(),
            multisig: transaction.multisig(),
            commands: transaction
                .transaction()
                .commands()
                .iter()
                .map(|command| command.name())
                .collect(),
            events: transaction
                .events()
                .iter()
                .map(ToString::to_string)
                .collect(),
            tx_bytes: transaction.bytes_base64(),
        }
    }
}

impl Outbox {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn proposal_path(&self, id: &SubmissionId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

impl Submission for Outbox {
    fn submit(&mut self, transaction: SignableTransaction) -> Result<SubmissionId> {
        let id = SubmissionId::new(transaction.digest_hex());
        let path = self.proposal_path(&id);

        let proposal = serde_json::to_vec_pretty(&Proposal::from(&transaction))
            .map_err(|error| Error::Serialization(error.to_string()))?;

        fs::create_dir_all(&self.dir)
            .and_then(|()| create_new(&path, |file| file.write_all(&proposal)))
            .map_err(|error| {
                if error.kind() == ErrorKind::AlreadyExists {
                    Error::submission_failure(format!(
                        "proposal '{}' is already pending",
                        path.display()
                    ))
                } else {
                    Error::submission_failure(format!("'{}': {error}", path.display()))
                }
            })
            .map(|()| id)
    }
}

/// Create `path` and fill it through `fill`. A file `fill` fails on is removed
/// so that a later attempt is not taken for a pending one.
fn create_new<F>(path: &Path, fill: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .and_then(|mut file| {
            let filled = fill(&mut file);
            drop(file);

            filled.map_err(|error| {
                let _ = fs::remove_file(path);
                error
            })
        })
}

/// Keeps the submitted transactions in memory.
#[derive(Default)]
pub struct Recorder {
    submissions: Vec<SignableTransaction>,
    rejection: Option<String>,
}

impl Recorder {
    /// A backend failing every submission with `cause`.
    pub fn rejecting<C>(cause: C) -> Self
    where
        C: Into<String>,
    {
        Self {
            submissions: vec![],
            rejection: Some(cause.into()),
        }
    }

    pub fn submissions(&self) -> &[SignableTransaction] {
        &self.submissions
    }
}

impl Submission for Recorder {
    fn submit(&mut self, transaction: SignableTransaction) -> Result<SubmissionId> {
        match &self.rejection {
            Some(cause) => Err(Error::submission_failure(cause)),
            None => {
                let id = SubmissionId::new(transaction.digest_hex());
                self.submissions.push(transaction);
                Ok(id)
            }
        }
    }
}
