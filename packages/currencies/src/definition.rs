use crate::SymbolStatic;

#[derive(Debug, PartialEq, Eq)]
pub struct Definition {
    /// Identifier of the asset in the configuration tables
    pub ticker: SymbolStatic,

    /// Fully qualified Move type of the coin
    pub coin_type: SymbolStatic,

    /// Object id of the coin's `CoinMetadata`
    pub metadata_id: SymbolStatic,

    /// Exponent on which the whole unit was raised to get the coin's base
    /// unit.
    ///
    /// Example: `(10 ^ DECIMAL_DIGITS) MIST = 1 SUI`
    pub decimal_digits: u8,
}

pub(crate) const SUI: Definition = Definition {
    ticker: "sui",
    coin_type: "0x2::sui::SUI",
    metadata_id: "0x9258181f5ceac8dbffb7030890243caed69a9599d2886d957a9cb7656af3bdb3",
    decimal_digits: 9,
};

pub(crate) const CETUS: Definition = Definition {
    ticker: "cetus",
    coin_type: "0x06864a6f921804860930db6ddbe2e16acdf8504495ea7481637a1c8b9a8fe54b::cetus::CETUS",
    metadata_id: "0x4c0dce55eff2db5419bbd2d239d1aa22b4a400c01bbb648b058a9883989025da",
    decimal_digits: 9,
};

pub(crate) const WORMHOLE_USDC: Definition = Definition {
    ticker: "wormhole_usdc",
    coin_type: "0x5d4b302506645c37ff133b98c4b50a5ae14841659738d6d733d59d0d217a93bf::coin::COIN",
    metadata_id: "0x4fbf84f3029bd0c0b77164b587963be957f853eccf834a67bb9ecba6ec80f189",
    decimal_digits: 6,
};

pub(crate) const WORMHOLE_USDT: Definition = Definition {
    ticker: "wormhole_usdt",
    coin_type: "0xc060006111016b8a020ad5b33834984a437aaa7d3c74c18e09a95d48aceab08c::coin::COIN",
    metadata_id: "0xfb0e3eb97dd158a5ae979dddfa24348063843c5b20eb8381dd5fa7c93699e45c",
    decimal_digits: 6,
};

pub(crate) const WORMHOLE_ETH: Definition = Definition {
    ticker: "wormhole_eth",
    coin_type: "0xaf8cd5edc19c4512f4259f0bee101a40d41ebed738ade5874359610ef8eeced5::coin::COIN",
    metadata_id: "0x8900e4ceede3363bef086d6b50ca89d816d0e90bf6bc46efefe1f8455e08f50f",
    decimal_digits: 8,
};

pub(crate) const WORMHOLE_BTC: Definition = Definition {
    ticker: "wormhole_btc",
    coin_type: "0x027792d9fed7f9844eb4839566001bb6f6cb4804f66aa2da6fe1ee242d896881::coin::COIN",
    metadata_id: "0x5d3c6e60eeff8a05b693b481539e7847dfe33013e7070cdcb387f5c0cac05dfd",
    decimal_digits: 8,
};

pub(crate) const WORMHOLE_SOL: Definition = Definition {
    ticker: "wormhole_sol",
    coin_type: "0xb7844e289a8410e50fb3ca48d69eb9cf29e27d223ef90353fe1bd8e27ff8f3f8::coin::COIN",
    metadata_id: "0x4d2c39082b4477e3e79dc4562d939147ab90c42fc5f3e4acf03b94383cd69b6e",
    decimal_digits: 8,
};

pub(crate) const WORMHOLE_APT: Definition = Definition {
    ticker: "wormhole_apt",
    coin_type: "0x3a5143bb1196e3bcdfab6203d1683ae29edd26294fc8bfeafe4aaa9d2704df37::coin::COIN",
    metadata_id: "0xc969c5251f372c0f34c32759f1d315cf1ea0ee5e4454b52aea08778eacfdd0a8",
    decimal_digits: 8,
};
