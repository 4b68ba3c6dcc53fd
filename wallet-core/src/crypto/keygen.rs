// wallet-core/src/crypto/keygen.rs
//
// Private Key Generation - rejection sampling over [1, N-1]

use crate::config::DEFAULT_MAX_KEYGEN_ATTEMPTS;
use crate::crypto::keys::{PrivateKey, PRIVATE_KEY_LEN};
use crate::error::{CryptoError, WalletError, WalletResult};
use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroize;

/// Nguồn random bytes cho key generation
///
/// Production dùng [`OsEntropy`]; tests có thể inject nguồn khác để mô phỏng
/// lỗi môi trường.
pub trait EntropySource {
    /// Fill `buf` entirely or report failure.
    fn fill(&mut self, buf: &mut [u8]) -> WalletResult<()>;
}

/// OS-level CSPRNG (`getrandom` via `OsRng`)
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> WalletResult<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| WalletError::Crypto(CryptoError::RandomSource(e.to_string())))
    }
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn fill(&mut self, buf: &mut [u8]) -> WalletResult<()> {
        (**self).fill(buf)
    }
}

/// Private key generator
///
/// Draws 32 bytes, accepts if `0 < k < N`, otherwise draws again. The chance
/// of rejecting a single draw is below 2^-127, so hitting `max_attempts`
/// means the random source is broken, not unlucky.
#[derive(Debug)]
pub struct KeyGenerator<E = OsEntropy> {
    entropy: E,
    max_attempts: u32,
}

impl KeyGenerator<OsEntropy> {
    pub fn new() -> Self {
        Self::with_entropy(OsEntropy)
    }
}

impl Default for KeyGenerator<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource> KeyGenerator<E> {
    pub fn with_entropy(entropy: E) -> Self {
        Self {
            entropy,
            max_attempts: DEFAULT_MAX_KEYGEN_ATTEMPTS,
        }
    }

    /// Override the rejection-sampling bound (clamped to at least 1).
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    #[inline]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Generate a uniformly random valid private key.
    pub fn generate(&mut self) -> WalletResult<PrivateKey> {
        let mut candidate = [0u8; PRIVATE_KEY_LEN];

        for attempt in 1..=self.max_attempts {
            if let Err(e) = self.entropy.fill(&mut candidate) {
                candidate.zeroize();
                return Err(e);
            }

            if PrivateKey::is_valid(&candidate) {
                let key = PrivateKey::from_bytes(candidate);
                candidate.zeroize();
                return key;
            }

            tracing::trace!(attempt, "rejected out-of-range key candidate");
        }

        candidate.zeroize();
        tracing::warn!(
            attempts = self.max_attempts,
            "random source produced no valid private key"
        );
        Err(WalletError::Crypto(CryptoError::RandomSourceExhausted {
            attempts: self.max_attempts,
        }))
    }
}
