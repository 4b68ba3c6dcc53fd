// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! This module implements the fundamental cryptographic operations for a single-account Bitcoin wallet:
//!
//! - **Curve Context**: Owned, blinded secp256k1 engine with an explicit init/teardown lifecycle via [`CurveContext`].
//! - **Key Generation**: Rejection-sampled private keys in `[1, N-1]` via [`KeyGenerator`].
//! - **Key Derivation**: Compressed public keys (`k·G`) via [`Secp256k1Deriver`].
//! - **Hashing**: SHA-256, double SHA-256 and Hash160 in [`hash`].

pub mod context;
pub mod hash;
pub mod key_deriver;
pub mod keygen;
pub mod keys;

// Re-exports for cleaner API access
pub use context::CurveContext;
pub use key_deriver::Secp256k1Deriver;
pub use keygen::{EntropySource, KeyGenerator, OsEntropy};
pub use keys::{PrivateKey, PublicKey, PRIVATE_KEY_LEN, PUBLIC_KEY_LEN, SECP256K1_ORDER};
