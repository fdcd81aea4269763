use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("[Currencies] Asset with ticker '{0}' is not supported")]
    NotSupported(String),
}

impl Error {
    pub fn not_supported<T>(ticker: T) -> Self
    where
        T: Into<String>,
    {
        Self::NotSupported(ticker.into())
    }
}
