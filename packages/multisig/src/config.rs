use std::{collections::BTreeSet, fs, path::Path};

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use platform::object_id::Address;

use crate::error::{Error, Result};

pub type Weight = u8;
pub type Threshold = u16;

/// A base64 encoded public key prefixed with its signature scheme flag.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicKey(String);

impl PublicKey {
    const ED25519: (u8, usize) = (0x00, 32);
    const SECP256K1: (u8, usize) = (0x01, 33);
    const SECP256R1: (u8, usize) = (0x02, 33);

    pub fn new<K>(encoded: K) -> Result<Self>
    where
        K: Into<String>,
    {
        let encoded = encoded.into();

        let bytes = general_purpose::STANDARD
            .decode(&encoded)
            .map_err(|error| Error::InvalidPublicKey(encoded.clone(), error.to_string()))?;

        let valid = bytes.split_first().is_some_and(|(&flag, key)| {
            [Self::ED25519, Self::SECP256K1, Self::SECP256R1]
                .into_iter()
                .any(|scheme| scheme == (flag, key.len()))
        });

        if valid {
            Ok(Self(encoded))
        } else {
            Err(Error::InvalidPublicKey(
                encoded,
                "unknown signature scheme or key length".into(),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PublicKey {
    type Error = Error;

    fn try_from(encoded: String) -> Result<Self> {
        Self::new(encoded)
    }
}

impl From<PublicKey> for String {
    fn from(key: PublicKey) -> Self {
        key.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Signer {
    pub public_key: PublicKey,
    pub weight: Weight,
}

/// A multi-signature account, the sender of every listing transaction.
///
/// A transaction is authorized once the weights of the signers that have
/// signed it reach the threshold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    deny_unknown_fields,
    rename_all = "camelCase",
    try_from = "unchecked::MultiSig"
)]
pub struct MultiSig {
    address: Address,
    threshold: Threshold,
    signers: Vec<Signer>,
}

impl MultiSig {
    pub const MAX_SIGNERS: usize = 10;

    pub fn new(address: Address, threshold: Threshold, signers: Vec<Signer>) -> Result<Self> {
        let res = Self {
            address,
            threshold,
            signers,
        };
        res.invariant_held().map(|()| res)
    }

    /// Read a description in JSON.
    pub fn load(path: &Path) -> Result<Self> {
        fs::read_to_string(path)
            .map_err(|error| error.to_string())
            .and_then(|json| serde_json::from_str(&json).map_err(|error| error.to_string()))
            .map_err(|cause| Error::ReadDescription {
                path: path.to_path_buf(),
                cause,
            })
    }

    pub const fn address(&self) -> &Address {
        &self.address
    }

    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn signers(&self) -> &[Signer] {
        &self.signers
    }

    fn invariant_held(&self) -> Result<()> {
        let total_weight: u32 = self
            .signers
            .iter()
            .map(|signer| u32::from(signer.weight))
            .sum();

        let distinct_keys: BTreeSet<&PublicKey> =
            self.signers.iter().map(|signer| &signer.public_key).collect();

        Error::broken_invariant_if(self.signers.is_empty(), "There should be a signer")
            .and_then(|()| {
                Error::broken_invariant_if(
                    self.signers.len() > Self::MAX_SIGNERS,
                    "There should be no more than ten signers",
                )
            })
            .and_then(|()| {
                Error::broken_invariant_if(
                    distinct_keys.len() != self.signers.len(),
                    "Signers should be distinct",
                )
            })
            .and_then(|()| {
                Error::broken_invariant_if(
                    self.signers.iter().any(|signer| signer.weight == 0),
                    "The weight of a signer should be positive",
                )
            })
            .and_then(|()| {
                Error::broken_invariant_if(self.threshold == 0, "The threshold should be positive")
            })
            .and_then(|()| {
                Error::broken_invariant_if(
                    total_weight < u32::from(self.threshold),
                    "The threshold should be reachable by the signers",
                )
            })
    }
}

mod unchecked {
    use serde::Deserialize;

    use platform::object_id::Address;

    use crate::error::Error;

    use super::{MultiSig as ValidatedMultiSig, Signer, Threshold};

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields, rename_all = "camelCase")]
    pub(super) struct MultiSig {
        address: Address,
        threshold: Threshold,
        signers: Vec<Signer>,
    }

    impl TryFrom<MultiSig> for ValidatedMultiSig {
        type Error = Error;

        fn try_from(dto: MultiSig) -> Result<Self, Self::Error> {
            Self::new(dto.address, dto.threshold, dto.signers)
        }
    }
}
