use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Identifier of an on-chain object. Account addresses share the same form.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId([u8; Self::LENGTH]);

pub type Address = ObjectId;

impl ObjectId {
    pub const LENGTH: usize = 32;

    const PREFIX: &'static str = "0x";

    pub const ZERO: Self = Self([0; Self::LENGTH]);

    /// The shared system clock object
    pub const CLOCK: Self = Self::from_last_byte(6);

    pub const fn new(bytes: [u8; Self::LENGTH]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }

    const fn from_last_byte(byte: u8) -> Self {
        let mut bytes = [0; Self::LENGTH];
        bytes[Self::LENGTH - 1] = byte;
        Self(bytes)
    }
}

impl FromStr for ObjectId {
    type Err = Error;

    /// Accepts `0x`-prefixed hex strings of up to 64 digits. Shorter ones,
    /// e.g. `0x6`, are left-padded with zeros.
    fn from_str(id: &str) -> Result<Self> {
        let digits = id
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| Error::invalid_object_id(id, "missing '0x' prefix"))?;

        if digits.is_empty() || digits.len() > Self::LENGTH * 2 {
            return Err(Error::invalid_object_id(
                id,
                format!("expected 1 to {} hex digits", Self::LENGTH * 2),
            ));
        }

        let padded = format!("{digits:0>width$}", width = Self::LENGTH * 2);

        HEXLOWER_PERMISSIVE
            .decode(padded.as_bytes())
            .map_err(|error| Error::invalid_object_id(id, error))
            .and_then(|bytes| {
                <[u8; Self::LENGTH]>::try_from(bytes.as_slice())
                    .map(Self)
                    .map_err(|error| Error::invalid_object_id(id, error))
            })
    }
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(Self::PREFIX)?;
        f.write_str(&HEXLOWER.encode(&self.0))
    }
}

impl Debug for ObjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(self, f)
    }
}

impl Serialize for ObjectId {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)
            .and_then(|id| id.parse().map_err(D::Error::custom))
    }
}
