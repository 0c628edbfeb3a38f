#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Strict hex codec for test vectors and fixtures.
//!
//! Two hex characters per byte, most-significant nibble first. Decoding
//! accepts both cases; encoding is always lowercase. A malformed fixture
//! (odd length, non-hex digit) is a broken input, not a runtime condition:
//! callers in test code are expected to `expect` the result.

/// Errors produced by hex decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The input has an odd number of hex characters.
    #[error("hex input has odd length: {0} characters")]
    OddLength(usize),

    /// The input contains a character outside `0-9a-fA-F`.
    #[error("invalid hex digit {digit:?} at offset {offset}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Byte offset of the character in the input string.
        offset: usize,
    },
}

/// Decode a hex string into bytes.
///
/// # Errors
/// Returns [`CodecError`] if the input has odd length or a non-hex digit.
pub fn decode(input: &str) -> Result<Vec<u8>, CodecError> {
    hex::decode(input).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => CodecError::InvalidDigit {
            digit: c,
            offset: index,
        },
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            CodecError::OddLength(input.len())
        }
    })
}

/// Encode bytes as a lowercase hex string. Exact inverse of [`decode`].
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
