#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Block cipher engine
//!
//! AES block transforms (FIPS 197) and the CBC chaining mode
//! (NIST SP 800-38A). Key schedules are direction-bound: an encryption
//! context cannot be used for decryption and vice versa.

pub mod aes;
pub mod cbc;

pub use aes::{AesDecryptKey, AesEncryptKey};
pub use cbc::{CbcDecryptContext, CbcEncryptContext};

/// AES block length in bytes.
pub const BLOCK_LEN: usize = 16;

/// AES-128 key length in bytes.
pub const AES_128_KEY_LEN: usize = 16;

/// AES-192 key length in bytes.
pub const AES_192_KEY_LEN: usize = 24;

/// AES-256 key length in bytes.
pub const AES_256_KEY_LEN: usize = 32;

/// Errors produced by the block cipher engine.
///
/// Validation happens before any cryptographic work: a failed constructor
/// leaves no usable context, and a failed chaining call writes no output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    /// Key size is not among the supported set (16, 24, or 32 bytes).
    #[error("invalid key length: {actual} bytes (must be 16, 24, or 32)")]
    InvalidKeyLength {
        /// The actual length of the key provided.
        actual: usize,
    },

    /// Block-mode input is empty or not a multiple of the block size.
    #[error("invalid input length: {actual} bytes (must be a positive multiple of 16)")]
    InvalidInputLength {
        /// The actual length of the input provided.
        actual: usize,
    },
}

/// XOR `src` into `dst`, one block.
#[inline(always)]
pub(crate) fn xor_block(dst: &mut [u8; BLOCK_LEN], src: &[u8; BLOCK_LEN]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}
