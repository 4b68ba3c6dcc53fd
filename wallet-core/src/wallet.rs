// wallet-core/src/wallet.rs
//
// Wallet Aggregate - one key pair + every derived encoding
//
// Flow:  KeyGenerator → Secp256k1Deriver → hex → WIF → P2PKH (mainnet, testnet)
//
// Construction is all-or-nothing: each step returns early with `?`, and every
// secret produced so far lives in a zeroizing owner, so a failed create wipes
// and releases its partial state without any explicit rollback code.

use crate::chains::bitcoin::{BitcoinAddress, Wif};
use crate::chains::Network;
use crate::config::WalletConfig;
use crate::crypto::{
    CurveContext, EntropySource, KeyGenerator, PrivateKey, PublicKey, Secp256k1Deriver,
};
use crate::error::{CryptoError, WalletError, WalletResult};
use zeroize::{Zeroize, Zeroizing};

pub struct Wallet {
    private_key: PrivateKey,
    public_key: PublicKey,
    private_key_hex: Zeroizing<String>,
    public_key_hex: String,
    wif: Zeroizing<String>,
    mainnet_address: String,
    testnet_address: String,
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị private key / WIF
impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("public_key", &self.public_key_hex)
            .field("mainnet_address", &self.mainnet_address)
            .field("testnet_address", &self.testnet_address)
            .finish_non_exhaustive()
    }
}

impl Drop for Wallet {
    fn drop(&mut self) {
        self.erase();
    }
}

impl Wallet {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Generate a fresh wallet with OS randomness and default bounds.
    pub fn create(ctx: &CurveContext) -> WalletResult<Self> {
        Self::create_with_config(ctx, &WalletConfig::default())
    }

    pub fn create_with_config(ctx: &CurveContext, config: &WalletConfig) -> WalletResult<Self> {
        config.validate()?;
        let mut generator = KeyGenerator::new().with_max_attempts(config.max_keygen_attempts);
        Self::generate(ctx, &mut generator, config)
    }

    /// Generate a wallet drawing its key from `generator`.
    ///
    /// Fails immediately, before consuming any randomness, when `ctx` is not
    /// initialized.
    pub fn generate<E: EntropySource>(
        ctx: &CurveContext,
        generator: &mut KeyGenerator<E>,
        config: &WalletConfig,
    ) -> WalletResult<Self> {
        if !ctx.is_initialized() {
            tracing::warn!("wallet creation attempted before curve context init");
            return Err(WalletError::Crypto(CryptoError::ContextUninitialized));
        }

        let result = generator
            .generate()
            .and_then(|private_key| Self::assemble(ctx, private_key, config));

        if let Err(e) = &result {
            tracing::warn!(error = %e, "wallet creation failed");
        }
        result
    }

    /// Build a wallet around an existing key (e.g. an imported WIF).
    pub fn from_private_key(ctx: &CurveContext, private_key: PrivateKey) -> WalletResult<Self> {
        Self::assemble(ctx, private_key, &WalletConfig::default())
    }

    fn assemble(
        ctx: &CurveContext,
        private_key: PrivateKey,
        config: &WalletConfig,
    ) -> WalletResult<Self> {
        let public_key = Secp256k1Deriver::derive(ctx, &private_key)?;

        let private_key_hex = private_key.to_hex();
        let public_key_hex = public_key.to_hex();
        let wif = Wif::encode_with_limit(&private_key, Network::Mainnet, config.max_wif_len)?;
        let mainnet_address = BitcoinAddress::from_public_key(&public_key, Network::Mainnet)?;
        let testnet_address = BitcoinAddress::from_public_key(&public_key, Network::Testnet)?;

        tracing::info!(address = %mainnet_address, "wallet created");

        Ok(Self {
            private_key,
            public_key,
            private_key_hex,
            public_key_hex,
            wif,
            mainnet_address,
            testnet_address,
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// # Warning
    /// Cẩn thận khi hiển thị hoặc log giá trị này!
    #[inline]
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// 64 lowercase hex chars
    #[inline]
    pub fn private_key_hex(&self) -> &str {
        &self.private_key_hex
    }

    /// 66 lowercase hex chars
    #[inline]
    pub fn public_key_hex(&self) -> &str {
        &self.public_key_hex
    }

    /// Mainnet compressed WIF (52 chars)
    #[inline]
    pub fn wif(&self) -> &str {
        &self.wif
    }

    #[inline]
    pub fn mainnet_address(&self) -> &str {
        &self.mainnet_address
    }

    #[inline]
    pub fn testnet_address(&self) -> &str {
        &self.testnet_address
    }

    pub fn address(&self, network: Network) -> &str {
        match network {
            Network::Mainnet => &self.mainnet_address,
            Network::Testnet => &self.testnet_address,
        }
    }

    // =========================================================================
    // TEARDOWN
    // =========================================================================

    /// Overwrite every field in place. Buffers stay allocated until drop.
    fn erase(&mut self) {
        self.private_key.zeroize();
        self.private_key_hex.zeroize();
        self.wif.zeroize();
        // Không nhạy cảm, nhưng xóa cho đồng bộ
        self.public_key.zeroize();
        self.public_key_hex.zeroize();
        self.mainnet_address.zeroize();
        self.testnet_address.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keygen::test_support::{ConstantEntropy, FailingEntropy, ScriptedEntropy};
    use crate::error::EncodingError;

    fn ctx() -> CurveContext {
        CurveContext::initialized().unwrap()
    }

    #[test]
    fn test_known_vector_all_ones() {
        let key = PrivateKey::from_bytes([0x01; 32]).unwrap();
        let wallet = Wallet::from_private_key(&ctx(), key).unwrap();

        assert_eq!(wallet.private_key_hex(), "01".repeat(32));
        assert_eq!(
            wallet.public_key_hex(),
            "031b84c5567b126440995d3ed5aaba0565d71e1834604819ff9c17f5e9d5dd078f"
        );
        assert_eq!(
            wallet.wif(),
            "KwFfNUhSDaASSAwtG7ssQM1uVX8RgX5GHWnnLfhfiQDigjioWXHH"
        );
        assert_eq!(wallet.mainnet_address(), "1C6Rc3w25VHud3dLDamutaqfKWqhrLRTaD");
        assert_eq!(wallet.testnet_address(), "mrcNu71ztWjAQA6ww9kHiW3zBWSQidHXTQ");
        assert_eq!(wallet.address(Network::Testnet), wallet.testnet_address());
    }

    #[test]
    fn test_create_populates_every_field() {
        let ctx = ctx();
        let wallet = Wallet::create(&ctx).unwrap();

        assert_eq!(wallet.private_key_hex().len(), 64);
        assert_eq!(wallet.public_key_hex().len(), 66);
        assert_eq!(wallet.wif().len(), 52);
        assert!(wallet.mainnet_address().starts_with('1'));
        assert!(
            wallet.testnet_address().starts_with('m') || wallet.testnet_address().starts_with('n')
        );

        // Every cached encoding agrees with the key pair
        assert_eq!(wallet.private_key_hex(), hex::encode(wallet.private_key().as_bytes()));
        assert_eq!(
            &Secp256k1Deriver::derive(&ctx, wallet.private_key()).unwrap(),
            wallet.public_key()
        );
        let decoded = Wif::decode(wallet.wif()).unwrap();
        assert_eq!(decoded.private_key.as_bytes(), wallet.private_key().as_bytes());
        assert_eq!(
            BitcoinAddress::network_of(wallet.mainnet_address()),
            Some(Network::Mainnet)
        );
    }

    #[test]
    fn test_wallets_are_unique() {
        let ctx = ctx();
        let w1 = Wallet::create(&ctx).unwrap();
        let w2 = Wallet::create(&ctx).unwrap();
        assert_ne!(w1.private_key_hex(), w2.private_key_hex());
        assert_ne!(w1.mainnet_address(), w2.mainnet_address());
    }

    #[test]
    fn test_generate_uses_injected_entropy() {
        let mut generator = KeyGenerator::with_entropy(ScriptedEntropy::new(vec![[0x01; 32]]));
        let wallet = Wallet::generate(&ctx(), &mut generator, &WalletConfig::default()).unwrap();
        assert_eq!(wallet.mainnet_address(), "1C6Rc3w25VHud3dLDamutaqfKWqhrLRTaD");
    }

    // ── Atomic failure ───────────────────────────────────────────────

    #[test]
    fn test_uninitialized_context_fails_without_drawing() {
        let mut entropy = ScriptedEntropy::new(vec![[0x01; 32]]);
        let mut generator = KeyGenerator::with_entropy(&mut entropy);
        let result = Wallet::generate(&CurveContext::new(), &mut generator, &WalletConfig::default());
        assert_eq!(
            result.unwrap_err(),
            WalletError::Crypto(CryptoError::ContextUninitialized)
        );
        drop(generator);
        assert_eq!(entropy.calls, 0);

        assert!(Wallet::create(&CurveContext::new()).is_err());
    }

    #[test]
    fn test_entropy_failure_yields_no_wallet() {
        let mut generator = KeyGenerator::with_entropy(FailingEntropy);
        let result = Wallet::generate(&ctx(), &mut generator, &WalletConfig::default());
        assert!(matches!(
            result,
            Err(WalletError::Crypto(CryptoError::RandomSource(_)))
        ));
    }

    #[test]
    fn test_exhausted_generator_yields_no_wallet() {
        let mut generator = KeyGenerator::with_entropy(ConstantEntropy(0xFF)).with_max_attempts(4);
        let result = Wallet::generate(&ctx(), &mut generator, &WalletConfig::default());
        assert!(matches!(
            result,
            Err(WalletError::Crypto(CryptoError::RandomSourceExhausted { attempts: 4 }))
        ));
    }

    #[test]
    fn test_wif_step_failure_yields_no_wallet() {
        // Key generation and derivation succeed, WIF formatting fails
        let config = WalletConfig {
            max_wif_len: 10,
            ..Default::default()
        };
        let result = Wallet::create_with_config(&ctx(), &config);
        assert_eq!(
            result.unwrap_err(),
            WalletError::Encoding(EncodingError::LengthExceeded { max: 10, actual: 52 })
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = WalletConfig {
            max_keygen_attempts: 0,
            ..Default::default()
        };
        assert!(matches!(
            Wallet::create_with_config(&ctx(), &config),
            Err(WalletError::Validation(_))
        ));
    }

    // ── Secure teardown ──────────────────────────────────────────────

    #[test]
    fn test_erase_overwrites_sensitive_memory() {
        let key = PrivateKey::from_bytes([0x01; 32]).unwrap();
        let mut wallet = Wallet::from_private_key(&ctx(), key).unwrap();

        let key_ptr = wallet.private_key.as_bytes().as_ptr();
        let hex_ptr = wallet.private_key_hex.as_ptr();
        let hex_cap = wallet.private_key_hex.capacity();
        let wif_ptr = wallet.wif.as_ptr();
        let wif_cap = wallet.wif.capacity();

        wallet.erase();

        // Buffers are still owned by `wallet`, so reading them is sound
        let key_mem = unsafe { std::slice::from_raw_parts(key_ptr, 32) };
        let hex_mem = unsafe { std::slice::from_raw_parts(hex_ptr, hex_cap) };
        let wif_mem = unsafe { std::slice::from_raw_parts(wif_ptr, wif_cap) };

        assert!(key_mem.iter().all(|&b| b == 0));
        assert!(hex_mem.iter().all(|&b| b == 0));
        assert!(wif_mem.iter().all(|&b| b == 0));
        assert!(wallet.wif().is_empty());
        assert!(wallet.private_key_hex().is_empty());
        assert!(wallet.mainnet_address().is_empty());
        assert_eq!(wallet.public_key().as_bytes(), &[0u8; 33]);
    }

    #[test]
    fn test_debug_does_not_leak_secrets() {
        let key = PrivateKey::from_bytes([0x01; 32]).unwrap();
        let wallet = Wallet::from_private_key(&ctx(), key).unwrap();
        let debug_output = format!("{:?}", wallet);

        assert!(!debug_output.contains(&"01".repeat(32)));
        assert!(!debug_output.contains(wallet.wif()));
        assert!(debug_output.contains(wallet.mainnet_address()));
    }
}
