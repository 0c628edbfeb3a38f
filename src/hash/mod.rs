#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Hash engine family (FIPS 180-4)
//!
//! SHA-1 and the SHA-2 families as streaming accumulators behind a common
//! [`Digest`] trait, plus one-shot helpers and file hashing. SHA-224/256
//! share one 32-bit compression function, SHA-384/512 one 64-bit function;
//! the variants differ only in initial chaining values and truncation.
//!
//! Hashing in-memory input is total: there is no failure mode. Only
//! [`hash_file`] can fail, with [`HashError::Io`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod sha1;
pub mod sha2;
pub mod sha512;

pub use sha1::Sha1;
pub use sha2::{Sha224, Sha256};
pub use sha512::{Sha384, Sha512};

/// Errors produced by the hash engine. In-memory hashing cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// Reading the input file failed; no digest is produced.
    #[error("failed to read input file: {0}")]
    Io(#[from] std::io::Error),
}

/// Streaming digest accumulator: `new -> update* -> finalize`.
///
/// `update` may be called zero or more times with arbitrary-length chunks;
/// splitting the input differently never changes the digest. `finalize`
/// consumes the accumulator, so the terminal transition is one-shot by
/// construction.
pub trait Digest: Sized {
    /// Fixed-size digest output.
    type Output: AsRef<[u8]>;

    /// Digest length in bytes.
    const OUTPUT_LEN: usize;

    /// Fresh accumulator with the family's initial chaining values.
    fn new() -> Self;

    /// Absorb a chunk of input.
    fn update(&mut self, data: &[u8]);

    /// Apply the terminal length padding and produce the digest.
    fn finalize(self) -> Self::Output;
}

/// Compute a digest over a byte buffer in one call.
fn one_shot<D: Digest>(data: &[u8]) -> D::Output {
    let mut digest = D::new();
    digest.update(data);
    digest.finalize()
}

/// SHA-1 of `data`.
#[must_use]
pub fn sha1(data: &[u8]) -> [u8; 20] {
    one_shot::<Sha1>(data)
}

/// SHA-224 of `data`.
#[must_use]
pub fn sha224(data: &[u8]) -> [u8; 28] {
    one_shot::<Sha224>(data)
}

/// SHA-256 of `data`.
#[must_use]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    one_shot::<Sha256>(data)
}

/// SHA-384 of `data`.
#[must_use]
pub fn sha384(data: &[u8]) -> [u8; 48] {
    one_shot::<Sha384>(data)
}

/// SHA-512 of `data`.
#[must_use]
pub fn sha512(data: &[u8]) -> [u8; 64] {
    one_shot::<Sha512>(data)
}

/// Stream a file through `D`'s update loop and return its digest.
///
/// # Errors
/// Returns [`HashError::Io`] if the file cannot be opened or read; no
/// digest is produced in that case.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn hash_file<D: Digest>(path: impl AsRef<Path>) -> Result<D::Output, HashError> {
    let mut file = File::open(path.as_ref())?;
    let mut digest = D::new();
    let mut buf = [0u8; 8192];
    loop {
        let read = file.read(&mut buf)?;
        if read == 0 {
            break;
        }
        digest.update(&buf[..read]);
    }
    Ok(digest.finalize())
}
