use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use currencies::Asset;

use crate::{
    error::{Error, Result},
    object_id::ObjectId,
};

/// A Move module, function or struct name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new<I>(identifier: I) -> Result<Self>
    where
        I: Into<String>,
    {
        let identifier = identifier.into();

        let mut chars = identifier.chars();

        let valid = chars
            .next()
            .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
            && chars.all(|next| next.is_ascii_alphanumeric() || next == '_')
            && identifier != "_";

        if valid {
            Ok(Self(identifier))
        } else {
            Err(Error::InvalidIdentifier(identifier))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// A non-generic Move struct type, e.g. the type of a coin `0x2::sui::SUI`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeTag {
    address: ObjectId,
    module: Identifier,
    name: Identifier,
}

impl TypeTag {
    const SEPARATOR: &'static str = "::";

    pub fn new(address: ObjectId, module: Identifier, name: Identifier) -> Self {
        Self {
            address,
            module,
            name,
        }
    }

    /// The coin type of `asset`.
    pub fn of(asset: Asset) -> Result<Self> {
        asset.coin_type().parse()
    }

    pub const fn address(&self) -> &ObjectId {
        &self.address
    }

    pub const fn module(&self) -> &Identifier {
        &self.module
    }

    pub const fn name(&self) -> &Identifier {
        &self.name
    }
}

impl FromStr for TypeTag {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        let mut parts = tag.split(Self::SEPARATOR);

        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(address), Some(module), Some(name), None) => address
                .parse()
                .and_then(|address| {
                    Identifier::new(module).and_then(|module| {
                        Identifier::new(name).map(|name| (address, module, name))
                    })
                })
                .map(|(address, module, name)| Self::new(address, module, name))
                .map_err(|error| Error::invalid_type_tag(tag, error)),
            _ => Err(Error::invalid_type_tag(
                tag,
                "expected the form '<address>::<module>::<name>'",
            )),
        }
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{address}{sep}{module}{sep}{name}",
            address = self.address,
            sep = Self::SEPARATOR,
            module = self.module,
            name = self.name
        )
    }
}

impl Serialize for TypeTag {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).and_then(|tag| tag.parse().map_err(D::Error::custom))
    }
}
