use std::{any::type_name, fmt::Debug};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("[Finance] Programming error or invalid serialized object of '{0}' type, cause '{1}'")]
    BrokenInvariant(String, String),

    #[error("[Finance] Arithmetic overflow when evaluating `{details}`")]
    Overflow { details: String },
}

impl Error {
    pub fn broken_invariant_if<T>(check: bool, msg: &str) -> Result<()> {
        if check {
            Err(Self::BrokenInvariant(type_name::<T>().into(), msg.into()))
        } else {
            Ok(())
        }
    }

    pub fn overflow<L, R>(operation: &str, lhs: L, rhs: R) -> Self
    where
        L: Debug,
        R: Debug,
    {
        Self::Overflow {
            details: format!("{operation}({lhs:?}, {rhs:?})"),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
