// wallet-core/src/chains/bitcoin/mod.rs

//! Bitcoin Chain Support
//!
//! # Key Features
//! - **Address Derivation**: Base58Check P2PKH addresses (mainnet `1...`, testnet `m...`/`n...`) via [`BitcoinAddress`].
//! - **Wallet Import Format**: Compressed-key WIF encoding and import via [`Wif`].

pub mod address;
pub mod wif;

// Re-exports for cleaner API access
pub use address::BitcoinAddress;
pub use wif::{DecodedWif, Wif};
