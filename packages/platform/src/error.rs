use thiserror::Error;

use crate::transaction::Argument;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("[Platform] Invalid object id '{0}'! Cause: {1}")]
    InvalidObjectId(String, String),

    #[error("[Platform] Invalid type tag '{0}'! Cause: {1}")]
    InvalidTypeTag(String, String),

    #[error("[Platform] Invalid Move identifier '{0}'")]
    InvalidIdentifier(String),

    #[error("[Platform] Argument {0:?} refers to a missing input or to a command not scheduled yet")]
    DanglingArgument(Argument),

    #[error("[Platform] Transaction has reached the maximum number of {0}")]
    CapacityExceeded(&'static str),

    #[error("[Platform] An empty transaction can not be finalized")]
    EmptyTransaction(),

    #[error("[Platform] An error occured on data serialization: {0}")]
    Serialization(String),
}

impl Error {
    pub fn invalid_object_id<Id, Cause>(id: Id, cause: Cause) -> Self
    where
        Id: Into<String>,
        Cause: ToString,
    {
        Self::InvalidObjectId(id.into(), cause.to_string())
    }

    pub fn invalid_type_tag<Tag, Cause>(tag: Tag, cause: Cause) -> Self
    where
        Tag: Into<String>,
        Cause: ToString,
    {
        Self::InvalidTypeTag(tag.into(), cause.to_string())
    }
}

pub type Result<T> = core::result::Result<T, Error>;
