// wallet-core/src/error.rs

use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Encoding Error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Validation Error: {0}")]
    Validation(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Curve context is not initialized.")]
    ContextUninitialized,

    #[error("Secure random source failed: {0}")]
    RandomSource(String),

    #[error("Random source exhausted after {attempts} attempts without a valid key.")]
    RandomSourceExhausted { attempts: u32 },

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Refusing to encode an empty payload.")]
    EmptyInput,

    #[error("Invalid Base58 character '{character}' at position {position}.")]
    InvalidCharacter { character: char, position: usize },

    #[error("Checksum validation failed.")]
    ChecksumMismatch,

    #[error("Invalid payload length: expected {expected}, got {actual}.")]
    InvalidLength { expected: String, actual: usize },

    #[error("Unknown version byte 0x{0:02x}.")]
    InvalidVersion(u8),

    #[error("Encoded string is {actual} characters, limit is {max}.")]
    LengthExceeded { max: usize, actual: usize },

    #[error("Failed to allocate encoding buffer.")]
    AllocationFailed,
}
