pub use self::{
    config::{MultiSig, PublicKey, Signer},
    signable::SignableTransaction,
    submission::{Outbox, Recorder, Submission, SubmissionId},
};

pub mod config;
pub mod error;
pub mod signable;
pub mod submission;
