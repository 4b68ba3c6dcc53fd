use crate::chains::bitcoin::Wif;
use crate::chains::{Network, NetworkParams};
use crate::crypto::CurveContext;
use crate::error::{WalletError, WalletResult};
use crate::wallet::Wallet;
use serde::Serialize;

// Core Initialization
pub fn init_core(ctx: &mut CurveContext) -> WalletResult<()> {
    ctx.init()
}

pub fn teardown_core(ctx: &mut CurveContext) {
    ctx.teardown();
}

// --- Key Management ---

pub fn create_wallet(ctx: &CurveContext) -> WalletResult<Wallet> {
    Wallet::create(ctx)
}

/// Rebuild a wallet from a compressed WIF (either network).
pub fn import_wallet(ctx: &CurveContext, wif: &str) -> WalletResult<Wallet> {
    let decoded = Wif::decode(wif)?;
    if !decoded.compressed {
        return Err(WalletError::Validation(
            "uncompressed WIF keys are not supported".to_string(),
        ));
    }
    Wallet::from_private_key(ctx, decoded.private_key)
}

/// Drop the wallet, wiping its secrets. `None` is a no-op.
pub fn free_wallet(wallet: Option<Wallet>) {
    drop(wallet);
}

// --- Read View ---

/// Borrowed, serializable view of every field a caller may display.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletFields<'a> {
    pub private_key_hex: &'a str,
    pub public_key_hex: &'a str,
    pub wif: &'a str,
    pub mainnet_address: &'a str,
    pub testnet_address: &'a str,
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị private key / WIF
impl std::fmt::Debug for WalletFields<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletFields")
            .field("private_key_hex", &"[REDACTED]")
            .field("public_key_hex", &self.public_key_hex)
            .field("wif", &"[REDACTED]")
            .field("mainnet_address", &self.mainnet_address)
            .field("testnet_address", &self.testnet_address)
            .finish()
    }
}

pub fn wallet_fields(wallet: &Wallet) -> WalletFields<'_> {
    WalletFields {
        private_key_hex: wallet.private_key_hex(),
        public_key_hex: wallet.public_key_hex(),
        wif: wallet.wif(),
        mainnet_address: wallet.mainnet_address(),
        testnet_address: wallet.testnet_address(),
    }
}

// --- Config Helpers ---

pub fn get_default_networks() -> Vec<NetworkParams> {
    Network::ALL.into_iter().map(Network::params).collect()
}
