// wallet-core/src/encoding/mod.rs

//! Text encodings for key material.
//!
//! - **Base58 / Base58Check**: checksummed, human-transcribable strings used by WIF and P2PKH addresses.
//! - Hex goes through the `hex` crate directly (see [`PrivateKey::to_hex`](crate::crypto::PrivateKey::to_hex)).

pub mod base58;
