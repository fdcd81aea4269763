use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("[Listing] {0}")]
    Params(#[from] market_params::error::Error),

    #[error("[Listing] {0}")]
    ProtocolTx(#[from] protocol_tx::error::Error),

    #[error("[Listing] {0}")]
    Platform(#[from] platform::error::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
