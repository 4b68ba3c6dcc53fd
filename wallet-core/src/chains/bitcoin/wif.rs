// wallet-core/src/chains/bitcoin/wif.rs
//
// Wallet Import Format
// Compressed: Base58Check(version || key (32B) || 0x01)   → 52 chars on mainnet
// Legacy:     Base58Check(version || key (32B))           → import only

use crate::chains::Network;
use crate::config::DEFAULT_MAX_WIF_LEN;
use crate::crypto::{PrivateKey, PRIVATE_KEY_LEN};
use crate::encoding::base58;
use crate::error::{EncodingError, WalletError, WalletResult};
use zeroize::Zeroizing;

/// Compression flag appended after the key
const COMPRESSED_FLAG: u8 = 0x01;

/// Result of [`Wif::decode`]
#[derive(Debug)]
pub struct DecodedWif {
    pub private_key: PrivateKey,
    pub network: Network,
    /// `true` when the key commits to a compressed public key
    pub compressed: bool,
}

/// WIF Encoder / Decoder
///
/// # Security
/// - Payload buffer là `Zeroizing`, bị xóa ngay sau khi encode/decode
/// - Output string trả về trong `Zeroizing<String>`
pub struct Wif;

impl Wif {
    /// Mainnet compressed WIF, bounded by [`DEFAULT_MAX_WIF_LEN`].
    #[inline]
    pub fn encode(key: &PrivateKey) -> WalletResult<Zeroizing<String>> {
        Self::encode_with_limit(key, Network::Mainnet, DEFAULT_MAX_WIF_LEN)
    }

    /// Compressed WIF for `network`, bounded by [`DEFAULT_MAX_WIF_LEN`].
    #[inline]
    pub fn encode_for(key: &PrivateKey, network: Network) -> WalletResult<Zeroizing<String>> {
        Self::encode_with_limit(key, network, DEFAULT_MAX_WIF_LEN)
    }

    /// Compressed WIF, rejecting results longer than `max_len` characters.
    pub fn encode_with_limit(
        key: &PrivateKey,
        network: Network,
        max_len: usize,
    ) -> WalletResult<Zeroizing<String>> {
        let mut payload = Zeroizing::new([0u8; PRIVATE_KEY_LEN + 2]);
        payload[0] = network.params().wif_version;
        payload[1..=PRIVATE_KEY_LEN].copy_from_slice(key.as_bytes());
        payload[PRIVATE_KEY_LEN + 1] = COMPRESSED_FLAG;

        let wif = Zeroizing::new(base58::encode_check(&payload[..])?);
        if wif.len() > max_len {
            return Err(WalletError::Encoding(EncodingError::LengthExceeded {
                max: max_len,
                actual: wif.len(),
            }));
        }
        Ok(wif)
    }

    /// Import a WIF string (mainnet or testnet, compressed or legacy).
    pub fn decode(wif: &str) -> WalletResult<DecodedWif> {
        let payload = Zeroizing::new(base58::decode_check(wif)?);

        let compressed = match payload.len() {
            n if n == PRIVATE_KEY_LEN + 2 => {
                if payload[PRIVATE_KEY_LEN + 1] != COMPRESSED_FLAG {
                    return Err(WalletError::Validation(format!(
                        "unexpected compression flag 0x{:02x}",
                        payload[PRIVATE_KEY_LEN + 1]
                    )));
                }
                true
            }
            n if n == PRIVATE_KEY_LEN + 1 => false,
            n => {
                return Err(WalletError::Encoding(EncodingError::InvalidLength {
                    expected: format!("{} or {} bytes", PRIVATE_KEY_LEN + 1, PRIVATE_KEY_LEN + 2),
                    actual: n,
                }))
            }
        };

        let network = Network::from_wif_version(payload[0])
            .ok_or(WalletError::Encoding(EncodingError::InvalidVersion(payload[0])))?;

        let private_key = PrivateKey::from_slice(&payload[1..=PRIVATE_KEY_LEN])?;

        Ok(DecodedWif {
            private_key,
            network,
            compressed,
        })
    }
}
