#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Crate-level error type aggregating the per-module error enums.

use crate::aead::AeadError;
use crate::cipher::CipherError;
use crate::codec::CodecError;
use crate::hash::HashError;

/// Errors that can occur in any cachet operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Block cipher or chaining-mode failure.
    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// Authenticated encryption failure.
    #[error(transparent)]
    Aead(#[from] AeadError),

    /// Hashing failure (file I/O only; in-memory hashing cannot fail).
    #[error(transparent)]
    Hash(#[from] HashError),

    /// Malformed hex fixture.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result type alias for cachet operations.
pub type Result<T> = std::result::Result<T, Error>;
