//! Translation between private record identifiers and the obfuscated web
//! tokens that appear in URLs.
//!
//! Tokens are derived from `(key, id)` with an invertible bit mix, so for a
//! fixed key the mapping id -> token is a bijection. The key perturbs the
//! mapping per installation; a link lifted from one deployment does not
//! resolve on another. This is obfuscation against link guessing and forged
//! cross-site links, not cryptography.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared::RecordId;

/// Per-installation salt. Generated once when the private application is
/// created and never changed afterwards, so tokens stay stable for the
/// lifetime of the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKey(u64);

impl PrivateKey {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Fresh random key.
    pub fn generate() -> Self {
        Self(rand::thread_rng().gen())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WebIdError {
    #[error("token has length {0}, expected {TOKEN_LEN}")]
    BadLength(usize),

    #[error("token contains invalid character '{0}'")]
    BadCharacter(char),

    #[error("token checksum mismatch")]
    Checksum,
}

/// 16 hex digits of mixed id plus 2 hex digits of checksum.
pub const TOKEN_LEN: usize = 18;

// splitmix64 finalizer constants and their multiplicative inverses mod 2^64.
const MIX_A: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_B: u64 = 0x94D0_49BB_1331_11EB;
const UNMIX_A: u64 = 0x96DE_1B17_3F11_9089;
const UNMIX_B: u64 = 0x3196_42B2_D24D_8EC3;

fn xorshift(x: u64, shift: u32) -> u64 {
    x ^ (x >> shift)
}

/// Inverse of `xorshift` for shifts >= 1.
fn unxorshift(y: u64, shift: u32) -> u64 {
    let mut x = y;
    for _ in 0..(64 / shift) {
        x = y ^ (x >> shift);
    }
    x
}

fn scramble(key: PrivateKey, value: u64) -> u64 {
    let mut x = value ^ key.get();
    x = xorshift(x, 30);
    x = x.wrapping_mul(MIX_A);
    x = xorshift(x, 27);
    x = x.wrapping_mul(MIX_B);
    xorshift(x, 31)
}

fn unscramble(key: PrivateKey, value: u64) -> u64 {
    let mut x = unxorshift(value, 31);
    x = x.wrapping_mul(UNMIX_B);
    x = unxorshift(x, 27);
    x = x.wrapping_mul(UNMIX_A);
    x = unxorshift(x, 30);
    x ^ key.get()
}

/// One byte binding the mixed value back to the key, so a token forged by
/// editing hex digits is rejected instead of decoding to a wrong id.
fn checksum(key: PrivateKey, mixed: u64) -> u8 {
    ((mixed ^ key.get()).wrapping_mul(MIX_A) >> 56) as u8
}

/// Produce the web token for a record id under the given key.
pub fn encode(key: PrivateKey, id: RecordId) -> String {
    let mixed = scramble(key, id.get());
    format!("{mixed:016x}{:02x}", checksum(key, mixed))
}

/// Recover the record id from a web token.
///
/// Any structural defect (length, alphabet, checksum) fails cleanly; the
/// caller maps the failure to a not-found outcome.
pub fn decode(key: PrivateKey, token: &str) -> Result<RecordId, WebIdError> {
    if token.len() != TOKEN_LEN {
        return Err(WebIdError::BadLength(token.len()));
    }
    // Tokens are canonical lowercase hex; anything else never came from
    // `encode`.
    if let Some(bad) = token
        .chars()
        .find(|c| !c.is_ascii_hexdigit() || c.is_ascii_uppercase())
    {
        return Err(WebIdError::BadCharacter(bad));
    }

    let (mixed_part, check_part) = token.split_at(16);
    // Both parses are infallible after the alphabet check above.
    let mixed = u64::from_str_radix(mixed_part, 16).map_err(|_| WebIdError::Checksum)?;
    let check = u8::from_str_radix(check_part, 16).map_err(|_| WebIdError::Checksum)?;

    if check != checksum(key, mixed) {
        tracing::debug!(token, "web token failed checksum");
        return Err(WebIdError::Checksum);
    }

    Ok(RecordId::new(unscramble(key, mixed)))
}
