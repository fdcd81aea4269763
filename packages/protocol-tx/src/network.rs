use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The network a deployment lives on. Selects the deployment artifacts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Devnet,
    Localnet,
}

impl Network {
    pub const ALL: [Self; 4] = [Self::Mainnet, Self::Testnet, Self::Devnet, Self::Localnet];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Devnet => "devnet",
            Self::Localnet => "localnet",
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(network: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|known| known.as_str() == network)
            .ok_or_else(|| Error::UnknownNetwork(network.into()))
    }
}

#[cfg(test)]
mod test {
    use serde_test::{assert_tokens, Token};

    use crate::error::Error;

    use super::Network;

    #[test]
    fn parse() {
        Network::ALL.into_iter().for_each(|network| {
            assert_eq!(Ok(network), network.to_string().parse());
        });
        assert_eq!(
            Err(Error::UnknownNetwork("Mainnet".into())),
            "Mainnet".parse::<Network>()
        );
    }

    #[test]
    fn serde() {
        assert_tokens(
            &Network::Testnet,
            &[Token::UnitVariant {
                name: "Network",
                variant: "testnet",
            }],
        );
    }
}
