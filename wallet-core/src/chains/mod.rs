// wallet-core/src/chains/mod.rs
pub mod bitcoin;

use serde::{Deserialize, Serialize};

/// Bitcoin network selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Mainnet, Network::Testnet];

    #[inline]
    pub fn params(self) -> NetworkParams {
        match self {
            Network::Mainnet => NetworkParams::mainnet(),
            Network::Testnet => NetworkParams::testnet(),
        }
    }

    /// Network whose P2PKH version byte is `version`
    pub fn from_p2pkh_version(version: u8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|network| network.params().p2pkh_version == version)
    }

    /// Network whose WIF version byte is `version`
    pub fn from_wif_version(version: u8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|network| network.params().wif_version == version)
    }
}

// Version bytes cho từng network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkParams {
    pub name: String,
    pub network: Network,
    /// Prefix of Base58Check(version || hash160(pubkey))
    pub p2pkh_version: u8,
    /// Prefix of Base58Check(version || key || 0x01)
    pub wif_version: u8,
}

impl NetworkParams {
    pub fn mainnet() -> Self {
        Self {
            name: "Bitcoin Mainnet".to_string(),
            network: Network::Mainnet,
            p2pkh_version: 0x00,
            wif_version: 0x80,
        }
    }

    pub fn testnet() -> Self {
        Self {
            name: "Bitcoin Testnet".to_string(),
            network: Network::Testnet,
            p2pkh_version: 0x6F,
            wif_version: 0xEF,
        }
    }
}
