// wallet-core/src/chains/bitcoin/address.rs
//
// Bitcoin P2PKH Address Module
// Base58Check(version || RIPEMD160(SHA256(compressed pubkey)))

use crate::chains::Network;
use crate::crypto::hash::hash160;
use crate::crypto::PublicKey;
use crate::encoding::base58;
use crate::error::WalletResult;

/// P2PKH Address Generator
///
/// # Flow:  Public Key (33B, compressed) → Hash160 (20B) → version || hash → Base58Check
pub struct BitcoinAddress;

impl BitcoinAddress {
    /// Address for a compressed public key on `network`.
    pub fn from_public_key(public_key: &PublicKey, network: Network) -> WalletResult<String> {
        Self::from_hash160(&hash160(public_key.as_bytes()), network)
    }

    /// Address for an already-computed Hash160.
    pub fn from_hash160(pubkey_hash: &[u8; 20], network: Network) -> WalletResult<String> {
        let mut payload = [0u8; 21];
        payload[0] = network.params().p2pkh_version;
        payload[1..].copy_from_slice(pubkey_hash);
        base58::encode_check(&payload)
    }

    /// Network of a well-formed P2PKH address, `None` if it does not decode.
    pub fn network_of(address: &str) -> Option<Network> {
        let payload = base58::decode_check(address).ok()?;
        if payload.len() != 21 {
            return None;
        }
        Network::from_p2pkh_version(payload[0])
    }

    /// Checksum, length and version byte are all valid
    #[inline]
    pub fn is_valid(address: &str) -> bool {
        Self::network_of(address).is_some()
    }
}
