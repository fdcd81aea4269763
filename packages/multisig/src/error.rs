use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("[MultiSig] Invalid multi-signature account! Cause: {0}")]
    InvalidMultiSig(String),

    #[error("[MultiSig] Invalid public key '{0}'! Cause: {1}")]
    InvalidPublicKey(String, String),

    #[error("[MultiSig] The gas budget should be positive")]
    ZeroGasBudget(),

    #[error("[MultiSig] Failed to read the multi-signature description '{path}'! Cause: {cause}")]
    ReadDescription { path: PathBuf, cause: String },

    #[error("[MultiSig] {0}")]
    Platform(#[from] platform::error::Error),

    #[error("[MultiSig] An error occured on data serialization: {0}")]
    Serialization(String),

    #[error("[MultiSig] Submission failed: {0}")]
    SubmissionFailure(String),
}

impl Error {
    pub fn broken_invariant_if(check: bool, msg: &str) -> Result<()> {
        if check {
            Err(Self::InvalidMultiSig(msg.into()))
        } else {
            Ok(())
        }
    }

    pub fn submission_failure<C>(cause: C) -> Self
    where
        C: ToString,
    {
        Self::SubmissionFailure(cause.to_string())
    }
}

pub type Result<T> = core::result::Result<T, Error>;
