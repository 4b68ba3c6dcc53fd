// wallet-core/src/crypto/hash.rs
//
// Hashing primitives used by Base58Check and address derivation.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// Length of a Base58Check checksum
pub const CHECKSUM_LEN: usize = 4;

/// SHA-256(data)
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256(SHA-256(data))
///
/// The inner digest is erased before returning.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let mut inner = sha256(data);
    let outer = sha256(&inner);
    inner.zeroize();
    outer
}

/// First 4 bytes of `double_sha256(data)`
#[inline]
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut digest = double_sha256(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    digest.zeroize();
    out
}

/// Hash160 = RIPEMD160(SHA256(data))
///
/// The intermediate SHA-256 digest is erased after use; some call sites
/// feed data derived from secrets.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let mut sha = sha256(data);
    let ripemd: [u8; 20] = Ripemd160::digest(sha).into();
    sha.zeroize();
    ripemd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_abc() {
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_double_sha256_empty() {
        assert_eq!(
            hex::encode(double_sha256(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn test_checksum_is_prefix_of_double_sha() {
        let data = b"checksum me";
        assert_eq!(checksum(data), double_sha256(data)[..4]);
    }

    #[test]
    fn test_hash160_vectors() {
        assert_eq!(
            hex::encode(hash160(b"")),
            "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
        );
        assert_eq!(
            hex::encode(hash160(b"abc")),
            "bb1be98c142444d7a56aa3981c3942a978e4dc33"
        );
    }

    #[test]
    fn test_hash160_generator_point() {
        // Compressed public key of private key 1
        let pubkey =
            hex::decode("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
                .unwrap();
        assert_eq!(
            hex::encode(hash160(&pubkey)),
            "751e76e8199196d454941c45d1b3a323f1433bd6"
        );
    }
}
