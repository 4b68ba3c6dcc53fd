// wallet-core/src/encoding/base58.rs
//
// Base58 / Base58Check
//
// Checksum: first 4 bytes of SHA-256(SHA-256(payload))
// Alphabet: Bitcoin (no 0, O, I, l)
//
// Buffers may hold secret material (WIF payloads), so every intermediate
// buffer is `Zeroizing` and sized up front: a reallocation would leave an
// unwiped copy behind.

use crate::crypto::hash::{checksum, CHECKSUM_LEN};
use crate::error::{EncodingError, WalletResult};
use zeroize::Zeroizing;

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const INVALID: u8 = 0xFF;

/// ASCII → digit value, `INVALID` for characters outside the alphabet
const DECODE_MAP: [u8; 128] = {
    let mut map = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
};

/// Base58 digits needed for `n` bytes: n·log(256)/log(58) ≈ n·1.3657, rounded up.
#[inline]
fn max_encoded_len(n: usize) -> usize {
    n * 138 / 100 + 1
}

/// Bytes needed for `n` Base58 digits: n·log(58)/log(256) ≈ n·0.7322, rounded up.
#[inline]
fn max_decoded_len(n: usize) -> usize {
    n * 733 / 1000 + 1
}

fn zeroizing_buffer(capacity: usize) -> WalletResult<Zeroizing<Vec<u8>>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| EncodingError::AllocationFailed)?;
    Ok(Zeroizing::new(buf))
}

/// Plain Base58 (no checksum). Empty input encodes to an empty string.
///
/// Each leading zero byte becomes one leading `'1'`; the rest is treated as a
/// big-endian integer and converted by repeated division by 58.
pub fn encode(data: &[u8]) -> WalletResult<String> {
    let zeros = data.iter().take_while(|&&b| b == 0).count();
    let rest = &data[zeros..];

    // Little-endian base-58 digits of `rest`
    let mut digits = zeroizing_buffer(max_encoded_len(rest.len()))?;
    for &byte in rest {
        // digits = digits * 256 + byte
        let mut carry = u32::from(byte);
        for digit in digits.iter_mut() {
            carry += u32::from(*digit) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut out = String::new();
    out.try_reserve_exact(zeros + digits.len())
        .map_err(|_| EncodingError::AllocationFailed)?;
    out.extend(std::iter::repeat('1').take(zeros));
    out.extend(digits.iter().rev().map(|&d| ALPHABET[d as usize] as char));
    Ok(out)
}

/// Base58Check: `encode(payload || checksum(payload))`.
///
/// An empty payload is rejected.
pub fn encode_check(payload: &[u8]) -> WalletResult<String> {
    if payload.is_empty() {
        return Err(EncodingError::EmptyInput.into());
    }

    let mut buf = zeroizing_buffer(payload.len() + CHECKSUM_LEN)?;
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&checksum(payload));

    encode(&buf)
}

/// Plain Base58 decode. Characters outside the alphabet are rejected with
/// their (character) position.
pub fn decode(encoded: &str) -> WalletResult<Vec<u8>> {
    let mut zeros = 0;
    let mut leading = true;

    // Little-endian base-256 bytes of the value
    let mut bytes = zeroizing_buffer(max_decoded_len(encoded.len()))?;
    for (position, character) in encoded.chars().enumerate() {
        let value = match u8::try_from(character) {
            Ok(ascii) if ascii < 128 => DECODE_MAP[ascii as usize],
            _ => INVALID,
        };
        if value == INVALID {
            return Err(EncodingError::InvalidCharacter {
                character,
                position,
            }
            .into());
        }

        if leading && value == 0 {
            zeros += 1;
            continue;
        }
        leading = false;

        // bytes = bytes * 58 + value
        let mut carry = u32::from(value);
        for byte in bytes.iter_mut() {
            carry += u32::from(*byte) * 58;
            *byte = (carry & 0xFF) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xFF) as u8);
            carry >>= 8;
        }
    }

    let mut out = Vec::new();
    out.try_reserve_exact(zeros + bytes.len())
        .map_err(|_| EncodingError::AllocationFailed)?;
    out.resize(zeros, 0u8);
    out.extend(bytes.iter().rev());
    Ok(out)
}

/// Base58Check decode: verifies and strips the 4-byte checksum.
pub fn decode_check(encoded: &str) -> WalletResult<Vec<u8>> {
    let raw = Zeroizing::new(decode(encoded)?);
    if raw.len() <= CHECKSUM_LEN {
        return Err(EncodingError::InvalidLength {
            expected: format!("more than {} bytes", CHECKSUM_LEN),
            actual: raw.len(),
        }
        .into());
    }

    let (payload, sum) = raw.split_at(raw.len() - CHECKSUM_LEN);
    if checksum(payload) != sum {
        return Err(EncodingError::ChecksumMismatch.into());
    }
    Ok(payload.to_vec())
}
