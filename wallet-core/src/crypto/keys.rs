// wallet-core/src/crypto/keys.rs
//
// Key Types - secp256k1 private scalar & compressed public point

use crate::error::{CryptoError, WalletError, WalletResult};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

pub const PRIVATE_KEY_LEN: usize = 32;
pub const PUBLIC_KEY_LEN: usize = 33;

/// secp256k1 group order N (big-endian)
pub const SECP256K1_ORDER: [u8; PRIVATE_KEY_LEN] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B,
    0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// secp256k1 private key
///
/// # Security
/// - **ZeroizeOnDrop**: 32 bytes bị ghi đè bằng 0 khi drop
/// - **No Clone**: key không bao giờ bị copy ra ngoài owner
/// - **No Debug Leak**: Debug impl chỉ hiển thị `[REDACTED]`
///
/// Invariant: `0 < value < N`, enforced by every constructor.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; PRIVATE_KEY_LEN]);

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PrivateKey").field(&"[REDACTED]").finish()
    }
}

impl PrivateKey {
    /// Wrap 32 big-endian bytes, rejecting zero and values `>= N`.
    pub fn from_bytes(bytes: [u8; PRIVATE_KEY_LEN]) -> WalletResult<Self> {
        // Move into the zeroizing wrapper first so the rejected path is wiped too
        let key = Self(bytes);
        if !Self::is_valid(&key.0) {
            return Err(WalletError::Crypto(CryptoError::InvalidPrivateKey(
                "value must be in [1, N-1]".to_string(),
            )));
        }
        Ok(key)
    }

    /// Same as [`from_bytes`](Self::from_bytes) but from a borrowed slice.
    ///
    /// The caller is responsible for zeroing `bytes` afterwards.
    pub fn from_slice(bytes: &[u8]) -> WalletResult<Self> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(WalletError::Crypto(CryptoError::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_LEN,
                bytes.len()
            ))));
        }
        let mut buf = [0u8; PRIVATE_KEY_LEN];
        buf.copy_from_slice(bytes);
        let result = Self::from_bytes(buf);
        buf.zeroize();
        result
    }

    /// Validity predicate: not all-zero and strictly below the curve order.
    ///
    /// Early exit on the first differing byte is fine, N is public.
    pub fn is_valid(bytes: &[u8; PRIVATE_KEY_LEN]) -> bool {
        if bytes.iter().all(|&b| b == 0) {
            return false;
        }
        for (byte, order) in bytes.iter().zip(SECP256K1_ORDER.iter()) {
            if byte != order {
                return byte < order;
            }
        }
        // Equal to N
        false
    }

    /// Raw big-endian scalar
    ///
    /// # Warning
    /// Cẩn thận khi hiển thị hoặc log giá trị này!
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LEN] {
        &self.0
    }

    /// Lowercase hex (64 chars), auto-zeroize on drop
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.0))
    }
}

/// Compressed secp256k1 public key: parity prefix (0x02/0x03) + 32-byte x.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Zeroize)]
pub struct PublicKey([u8; PUBLIC_KEY_LEN]);

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.0))
    }
}

impl PublicKey {
    /// Accepts any 33-byte buffer with a compressed-point prefix.
    ///
    /// Only the prefix is checked here; curve membership is guaranteed by
    /// [`Secp256k1Deriver`](crate::crypto::Secp256k1Deriver), the sole producer
    /// inside this crate.
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LEN]) -> WalletResult<Self> {
        match bytes[0] {
            0x02 | 0x03 => Ok(Self(bytes)),
            prefix => Err(WalletError::Crypto(CryptoError::InvalidPublicKey(format!(
                "unexpected prefix 0x{:02x}",
                prefix
            )))),
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    /// `true` when y is odd (prefix 0x03)
    #[inline]
    pub fn parity(&self) -> bool {
        self.0[0] == 0x03
    }

    /// x-coordinate (32 bytes)
    #[inline]
    pub fn x_only(&self) -> &[u8] {
        &self.0[1..]
    }

    /// Lowercase hex (66 chars)
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}
