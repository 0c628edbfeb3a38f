#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Cachet
//!
//! Portable symmetric cryptographic primitives with a vector-replay
//! conformance surface.
//!
//! ## Algorithms
//!
//! - **cipher::aes**: AES-128/192/256 block transforms (FIPS 197)
//! - **cipher::cbc**: CBC chaining mode (NIST SP 800-38A)
//! - **aead::gcm**: AES-GCM authenticated encryption (NIST SP 800-38D)
//! - **hash**: SHA-1, SHA-224/256, SHA-384/512 (FIPS 180-4)
//!
//! ## Supporting modules
//!
//! - **codec**: strict hex encoding/decoding for test vectors and fixtures
//! - **self_test**: power-up known-answer tests replaying hardcoded vectors
//!
//! ## Design notes
//!
//! All primitives are pure, synchronous computations over in-memory buffers.
//! Contexts (key schedules, GCM subkeys, hash accumulators) are owned by the
//! thread that created them; create one context per thread for concurrent
//! use. Key material is zeroized on drop. Authentication-tag verification is
//! constant time, and no plaintext is released on a failed verification.

pub mod aead;
pub mod cipher;
pub mod codec;
pub mod error;
pub mod hash;

pub use aead::gcm::Gcm;
pub use aead::AeadError;
pub use cipher::aes::{AesDecryptKey, AesEncryptKey};
pub use cipher::cbc::{CbcDecryptContext, CbcEncryptContext};
pub use cipher::CipherError;
pub use error::{Error, Result};
pub use hash::{
    hash_file, sha1, sha224, sha256, sha384, sha512, Digest, HashError, Sha1, Sha224, Sha256,
    Sha384, Sha512,
};
