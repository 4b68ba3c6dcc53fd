// wallet-core/src/config.rs
//
// Tunable bounds for wallet generation. Both limits only turn pathological
// conditions into reportable errors; they are not protocol parameters.

use crate::error::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};

/// Rejection-sampling draws before giving up on the random source
pub const DEFAULT_MAX_KEYGEN_ATTEMPTS: u32 = 1024;

/// Compressed mainnet WIF: 38 bytes → always 52 Base58 chars
pub const DEFAULT_MAX_WIF_LEN: usize = 52;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletConfig {
    pub max_keygen_attempts: u32,
    pub max_wif_len: usize,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            max_keygen_attempts: DEFAULT_MAX_KEYGEN_ATTEMPTS,
            max_wif_len: DEFAULT_MAX_WIF_LEN,
        }
    }
}

impl WalletConfig {
    pub fn validate(&self) -> WalletResult<()> {
        if self.max_keygen_attempts == 0 {
            return Err(WalletError::Validation(
                "maxKeygenAttempts must be at least 1".to_string(),
            ));
        }
        if self.max_wif_len == 0 {
            return Err(WalletError::Validation(
                "maxWifLen must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
