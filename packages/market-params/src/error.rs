use thiserror::Error;

use currencies::Asset;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("[Params] No entry for '{asset}' in the '{table}' table")]
    MissingConfiguration { table: &'static str, asset: Asset },

    #[error("[Params] {0}")]
    InvalidParameter(#[from] finance::error::Error),
}

impl Error {
    pub const fn missing_configuration(table: &'static str, asset: Asset) -> Self {
        Self::MissingConfiguration { table, asset }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
