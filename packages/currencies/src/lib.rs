use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

pub use crate::definition::Definition;
use crate::error::Error;

mod definition;
pub mod error;

pub type SymbolSlice = str;
pub type SymbolStatic = &'static SymbolSlice;

/// The closed set of coins the lending market supports as base assets
/// or collaterals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Asset {
    Sui,
    Cetus,
    WormholeUsdc,
    WormholeUsdt,
    WormholeEth,
    WormholeBtc,
    WormholeSol,
    WormholeApt,
}

impl Asset {
    pub const ALL: [Self; 8] = [
        Self::Sui,
        Self::Cetus,
        Self::WormholeUsdc,
        Self::WormholeUsdt,
        Self::WormholeEth,
        Self::WormholeBtc,
        Self::WormholeSol,
        Self::WormholeApt,
    ];

    pub const fn definition(self) -> &'static Definition {
        match self {
            Self::Sui => &definition::SUI,
            Self::Cetus => &definition::CETUS,
            Self::WormholeUsdc => &definition::WORMHOLE_USDC,
            Self::WormholeUsdt => &definition::WORMHOLE_USDT,
            Self::WormholeEth => &definition::WORMHOLE_ETH,
            Self::WormholeBtc => &definition::WORMHOLE_BTC,
            Self::WormholeSol => &definition::WORMHOLE_SOL,
            Self::WormholeApt => &definition::WORMHOLE_APT,
        }
    }

    pub const fn ticker(self) -> SymbolStatic {
        self.definition().ticker
    }

    pub const fn coin_type(self) -> SymbolStatic {
        self.definition().coin_type
    }

    pub const fn metadata_id(self) -> SymbolStatic {
        self.definition().metadata_id
    }

    pub const fn decimal_digits(self) -> u8 {
        self.definition().decimal_digits
    }
}

impl Display for Asset {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.ticker())
    }
}

impl FromStr for Asset {
    type Err = Error;

    fn from_str(ticker: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|asset| asset.ticker() == ticker)
            .ok_or_else(|| Error::not_supported(ticker))
    }
}
