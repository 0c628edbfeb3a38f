#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Authenticated Encryption with Additional Data (AEAD)
//!
//! AES-GCM authenticated encryption following NIST SP 800-38D.
//!
//! ## AEAD security notes
//!
//! - **Nonce reuse**: NEVER reuse an IV with the same key.
//! - **Tag verification**: constant time, and plaintext is only released
//!   after the tag verifies.
//! - **Truncated tags**: tags may be truncated to 32 bits, at a
//!   corresponding loss of forgery resistance.

pub mod gcm;

pub use gcm::Gcm;

/// Recommended GCM IV length in bytes (96 bits).
pub const IV_LEN: usize = 12;

/// Full GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Shortest accepted truncated tag length in bytes (32 bits).
pub const MIN_TAG_LEN: usize = 4;

/// AEAD errors.
///
/// Parameter validation happens before any cryptographic work.
/// [`AeadError::AuthenticationFailed`] is the only error expected during
/// normal operation: it signals tampered or corrupted input, and callers
/// receive no plaintext alongside it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AeadError {
    /// Key size is not among the supported set (16, 24, or 32 bytes).
    #[error("invalid key length: {actual} bytes (must be 16, 24, or 32)")]
    InvalidKeyLength {
        /// The actual length of the key provided.
        actual: usize,
    },

    /// The IV is empty.
    #[error("invalid IV length: 0 bytes")]
    InvalidIvLength,

    /// Requested or supplied tag length outside 4..=16 bytes.
    #[error("invalid tag length: {actual} bytes (must be 4..=16)")]
    InvalidTagLength {
        /// The actual tag length.
        actual: usize,
    },

    /// The authentication tag did not verify. Any decrypted bytes were
    /// discarded; the ciphertext, AAD, IV, or key does not match.
    #[error("authentication tag verification failed")]
    AuthenticationFailed,
}
