// wallet-core/src/crypto/key_deriver.rs
//
// secp256k1 Public Key Derivation
//
// Algorithm: P = k·G, serialized as compressed SEC1 (0x02/0x03 || x)

use crate::crypto::context::CurveContext;
use crate::crypto::keys::{PrivateKey, PublicKey};
use crate::error::{CryptoError, WalletError, WalletResult};

/// secp256k1 Public Key Deriver
///
/// # Security
/// - Context bắt buộc phải được `init()` trước
/// - Private key được kiểm tra lại, không tin tưởng caller
/// - `SecretKey` trung gian bị xóa ngay sau khi dùng
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Derive the compressed public key for `key`.
    ///
    /// Deterministic: the same key always yields the same 33 bytes.
    pub fn derive(ctx: &CurveContext, key: &PrivateKey) -> WalletResult<PublicKey> {
        Self::derive_from_slice(ctx, key.as_bytes())
    }

    /// Derive from a borrowed 32-byte slice.
    ///
    /// # ⚠ Security Note
    /// The caller is responsible for zeroing `priv_key` after this call.
    /// Prefer [`derive()`](Self::derive) with a [`PrivateKey`].
    pub fn derive_from_slice(ctx: &CurveContext, priv_key: &[u8]) -> WalletResult<PublicKey> {
        let engine = ctx.engine()?;

        let valid_scalar = <&[u8; 32]>::try_from(priv_key)
            .map(PrivateKey::is_valid)
            .unwrap_or(false);
        if !valid_scalar {
            return Err(WalletError::Crypto(CryptoError::InvalidPrivateKey(
                "refusing to derive from an out-of-range scalar".to_string(),
            )));
        }

        let mut secret_key = secp256k1::SecretKey::from_slice(priv_key).map_err(|e| {
            WalletError::Crypto(CryptoError::InvalidPrivateKey(format!(
                "Invalid secp256k1 private key: {}",
                e
            )))
        })?;

        let public_key = secp256k1::PublicKey::from_secret_key(engine, &secret_key);
        secret_key.non_secure_erase();

        let derived = PublicKey::from_bytes(public_key.serialize()).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(e.to_string()))
        })?;

        tracing::debug!(public_key = %derived.to_hex(), "derived public key");
        Ok(derived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::SECP256K1_ORDER;

    // Private key 0x0101...01
    const ONES_PUBLIC_KEY: &str =
        "031b84c5567b126440995d3ed5aaba0565d71e1834604819ff9c17f5e9d5dd078f";
    // Private key 1 → generator point G
    const G_COMPRESSED: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    // Private key N-1 → -G
    const NEG_G_COMPRESSED: &str =
        "0379be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    fn ctx() -> CurveContext {
        CurveContext::initialized().unwrap()
    }

    #[test]
    fn test_known_vector_all_ones() {
        let key = PrivateKey::from_bytes([0x01; 32]).unwrap();
        let pubkey = Secp256k1Deriver::derive(&ctx(), &key).unwrap();
        assert_eq!(pubkey.to_hex(), ONES_PUBLIC_KEY);
        assert!(pubkey.parity());
    }

    #[test]
    fn test_generator_and_negation() {
        let ctx = ctx();

        let mut one = [0u8; 32];
        one[31] = 1;
        let g = Secp256k1Deriver::derive_from_slice(&ctx, &one).unwrap();
        assert_eq!(g.to_hex(), G_COMPRESSED);

        let mut n_minus_one = SECP256K1_ORDER;
        n_minus_one[31] -= 1;
        let neg_g = Secp256k1Deriver::derive_from_slice(&ctx, &n_minus_one).unwrap();
        assert_eq!(neg_g.to_hex(), NEG_G_COMPRESSED);
        assert_eq!(g.x_only(), neg_g.x_only());
    }

    #[test]
    fn test_consistency() {
        let ctx = ctx();
        let key = PrivateKey::from_bytes([0x5C; 32]).unwrap();
        let p1 = Secp256k1Deriver::derive(&ctx, &key).unwrap();
        let p2 = Secp256k1Deriver::derive(&ctx, &key).unwrap();
        assert_eq!(p1, p2);

        // A fresh context (different blinding) gives the same point
        let p3 = Secp256k1Deriver::derive(&CurveContext::initialized().unwrap(), &key).unwrap();
        assert_eq!(p1, p3);
    }

    #[test]
    fn test_uninitialized_context_rejected() {
        let key = PrivateKey::from_bytes([0x01; 32]).unwrap();
        let result = Secp256k1Deriver::derive(&CurveContext::new(), &key);
        assert_eq!(
            result.unwrap_err(),
            WalletError::Crypto(CryptoError::ContextUninitialized)
        );
    }

    #[test]
    fn test_torn_down_context_rejected() {
        let mut ctx = ctx();
        ctx.teardown();
        let key = PrivateKey::from_bytes([0x01; 32]).unwrap();
        assert!(Secp256k1Deriver::derive(&ctx, &key).is_err());
    }

    #[test]
    fn test_invalid_scalars_rejected() {
        let ctx = ctx();
        assert!(Secp256k1Deriver::derive_from_slice(&ctx, &[0u8; 32]).is_err());
        assert!(Secp256k1Deriver::derive_from_slice(&ctx, &SECP256K1_ORDER).is_err());
        assert!(Secp256k1Deriver::derive_from_slice(&ctx, &[0x01; 31]).is_err());
        assert!(Secp256k1Deriver::derive_from_slice(&ctx, &[]).is_err());
    }
}
