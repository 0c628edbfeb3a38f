#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! CBC chaining mode (NIST SP 800-38A)
//!
//! Each context owns the running IV: the last ciphertext block of a call
//! becomes the chaining block of the next, so splitting a message across
//! several calls produces the same output as one call over the whole
//! message. Callers never hand over a mutable IV buffer.
//!
//! Input length is validated before any block is transformed: a failed call
//! writes no output and leaves the chaining state untouched.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::aes::{AesDecryptKey, AesEncryptKey};
use super::{xor_block, CipherError, BLOCK_LEN};

fn check_input_len(len: usize) -> Result<(), CipherError> {
    if len == 0 || len % BLOCK_LEN != 0 {
        return Err(CipherError::InvalidInputLength { actual: len });
    }
    Ok(())
}

/// CBC encryption context: an AES encryption schedule plus the running IV.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CbcEncryptContext {
    key: AesEncryptKey,
    chain: [u8; BLOCK_LEN],
}

impl CbcEncryptContext {
    /// Create a context from an encryption schedule and a one-block IV.
    #[must_use]
    pub fn new(key: AesEncryptKey, iv: [u8; BLOCK_LEN]) -> Self {
        Self { key, chain: iv }
    }

    /// Encrypt `plaintext`, which must be a positive multiple of 16 bytes.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidInputLength`] for empty or ragged
    /// input, before any block is processed.
    #[tracing::instrument(level = "debug", skip(self, plaintext), fields(len = plaintext.len()))]
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        check_input_len(plaintext.len())?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        for chunk in plaintext.chunks_exact(BLOCK_LEN) {
            let mut block = self.chain;
            let mut input = [0u8; BLOCK_LEN];
            input.copy_from_slice(chunk);
            xor_block(&mut block, &input);
            self.chain = self.key.encrypt_block(&block);
            ciphertext.extend_from_slice(&self.chain);
        }
        Ok(ciphertext)
    }
}

/// CBC decryption context: an AES decryption schedule plus the running IV.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CbcDecryptContext {
    key: AesDecryptKey,
    chain: [u8; BLOCK_LEN],
}

impl CbcDecryptContext {
    /// Create a context from a decryption schedule and a one-block IV.
    #[must_use]
    pub fn new(key: AesDecryptKey, iv: [u8; BLOCK_LEN]) -> Self {
        Self { key, chain: iv }
    }

    /// Decrypt `ciphertext`, which must be a positive multiple of 16 bytes.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidInputLength`] for empty or ragged
    /// input, before any block is processed.
    #[tracing::instrument(level = "debug", skip(self, ciphertext), fields(len = ciphertext.len()))]
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        check_input_len(ciphertext.len())?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        for chunk in ciphertext.chunks_exact(BLOCK_LEN) {
            let mut input = [0u8; BLOCK_LEN];
            input.copy_from_slice(chunk);
            let mut block = self.key.decrypt_block(&input);
            xor_block(&mut block, &self.chain);
            self.chain = input;
            plaintext.extend_from_slice(&block);
        }
        Ok(plaintext)
    }
}
