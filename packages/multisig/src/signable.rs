use base64::{engine::general_purpose, Engine as _};
use data_encoding::HEXLOWER;
use serde::Serialize;
use sha2::{Digest as _, Sha256};

use platform::{
    emit::Event,
    object_id::Address,
    transaction::{Finalized, Transaction},
};

use crate::{
    config::MultiSig,
    error::{Error, Result},
};

pub type Digest = [u8; 32];

/// A finalized transaction bound to the multi-signature sender, in the form
/// the signers approve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignableTransaction {
    multisig: MultiSig,
    gas_budget: u64,
    transaction: Finalized,
    bytes: Vec<u8>,
    digest: Digest,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'t> {
    sender: &'t Address,
    gas_budget: u64,
    transaction: &'t Transaction,
}

impl SignableTransaction {
    pub fn new(multisig: &MultiSig, gas_budget: u64, transaction: Finalized) -> Result<Self> {
        if gas_budget == 0 {
            return Err(Error::ZeroGasBudget());
        }

        serde_json::to_vec(&Envelope {
            sender: multisig.address(),
            gas_budget,
            transaction: transaction.transaction(),
        })
        .map_err(|error| Error::Serialization(error.to_string()))
        .map(|bytes| {
            let digest = Sha256::digest(&bytes).into();

            Self {
                multisig: multisig.clone(),
                gas_budget,
                transaction,
                bytes,
                digest,
            }
        })
    }

    pub const fn sender(&self) -> &Address {
        self.multisig.address()
    }

    pub const fn multisig(&self) -> &MultiSig {
        &self.multisig
    }

    pub const fn gas_budget(&self) -> u64 {
        self.gas_budget
    }

    pub const fn transaction(&self) -> &Finalized {
        &self.transaction
    }

    pub fn events(&self) -> &[Event] {
        self.transaction.events()
    }

    /// The canonical bytes the signers sign.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bytes_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.bytes)
    }

    /// SHA-256 of [`bytes`](Self::bytes).
    pub const fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn digest_hex(&self) -> String {
        HEXLOWER.encode(&self.digest)
    }
}
