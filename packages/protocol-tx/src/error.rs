use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("[ProtocolTx] {0}")]
    Platform(#[from] platform::error::Error),

    #[error("[ProtocolTx] {0}")]
    Params(#[from] market_params::error::Error),

    #[error("[ProtocolTx] Unknown network '{0}'")]
    UnknownNetwork(String),

    #[error("[ProtocolTx] Failed to read the deployment artifact '{path}'! Cause: {cause}")]
    ReadArtifact { path: PathBuf, cause: String },

    #[error("[ProtocolTx] Invalid deployment artifact '{path}'! Cause: {cause}")]
    ParseArtifact { path: PathBuf, cause: String },

    #[error("[ProtocolTx] The '{0}' rule is not deployed on this network")]
    RuleNotDeployed(&'static str),
}

impl Error {
    pub fn read_artifact<C>(path: PathBuf, cause: C) -> Self
    where
        C: ToString,
    {
        Self::ReadArtifact {
            path,
            cause: cause.to_string(),
        }
    }

    pub fn parse_artifact<C>(path: PathBuf, cause: C) -> Self
    where
        C: ToString,
    {
        Self::ParseArtifact {
            path,
            cause: cause.to_string(),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
