#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! AES-GCM (Galois/Counter Mode, NIST SP 800-38D)
//!
//! Counter-mode encryption under AES with a polynomial universal hash
//! (GHASH) over GF(2^128) for authentication. The hash subkey
//! `H = AES_K(0^128)` is derived once at construction; a context is
//! reusable across calls with fresh IVs as long as the key is unchanged.
//!
//! Decryption verifies the tag in constant time before any plaintext is
//! produced, so a failed call never emits untrusted bytes.

use rand::rngs::OsRng;
use rand::RngCore;
use subtle::ConstantTimeEq;
use tracing::instrument;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{AeadError, IV_LEN, MIN_TAG_LEN, TAG_LEN};
use crate::cipher::aes::AesEncryptKey;
use crate::cipher::{CipherError, BLOCK_LEN};

/// GHASH reduction polynomial x^128 + x^7 + x^2 + x + 1, bit-reflected
/// into the field's leftmost-bit-first convention.
const GHASH_R: u128 = 0xe1 << 120;

/// Multiply two elements of GF(2^128) in the GHASH bit ordering
/// (SP 800-38D §6.3). Branchless: every bit of `x` is processed with a
/// mask rather than a conditional.
fn gf_mul(x: u128, y: u128) -> u128 {
    let mut z = 0u128;
    let mut v = y;
    for i in 0..128 {
        let x_bit = (x >> (127 - i)) & 1;
        z ^= x_bit.wrapping_neg() & v;
        let v_lsb = v & 1;
        v = (v >> 1) ^ (v_lsb.wrapping_neg() & GHASH_R);
    }
    z
}

/// Incremental GHASH accumulator keyed by the hash subkey `H`.
struct Ghash {
    h: u128,
    y: u128,
}

impl Ghash {
    fn new(h: u128) -> Self {
        Self { h, y: 0 }
    }

    /// Absorb `data`, zero-padding the final partial block.
    fn update_padded(&mut self, data: &[u8]) {
        for chunk in data.chunks(BLOCK_LEN) {
            let mut block = [0u8; BLOCK_LEN];
            block[..chunk.len()].copy_from_slice(chunk);
            self.y = gf_mul(self.y ^ u128::from_be_bytes(block), self.h);
        }
    }

    /// Absorb the closing length block: two 64-bit big-endian bit counts.
    fn update_lengths(&mut self, first_bits: u64, second_bits: u64) {
        let mut block = [0u8; BLOCK_LEN];
        block[..8].copy_from_slice(&first_bits.to_be_bytes());
        block[8..].copy_from_slice(&second_bits.to_be_bytes());
        self.y = gf_mul(self.y ^ u128::from_be_bytes(block), self.h);
    }

    fn finalize(self) -> u128 {
        self.y
    }
}

/// Increment the rightmost 32 bits of a counter block (SP 800-38D inc32).
#[inline]
fn inc32(counter: &mut [u8; BLOCK_LEN]) {
    let mut word = u32::from_be_bytes([counter[12], counter[13], counter[14], counter[15]]);
    word = word.wrapping_add(1);
    counter[12..].copy_from_slice(&word.to_be_bytes());
}

/// AES-GCM context: an AES encryption schedule plus the derived GHASH
/// subkey. Supports 128/192/256-bit keys.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Gcm {
    key: AesEncryptKey,
    h: u128,
}

impl Gcm {
    /// Derive a GCM context from a 16, 24, or 32-byte key.
    ///
    /// The hash subkey `H = AES_K(0^128)` is computed once here.
    ///
    /// # Errors
    /// Returns [`AeadError::InvalidKeyLength`] for any other key size.
    #[instrument(level = "debug", skip(key), fields(key_len = key.len()))]
    pub fn new(key: &[u8]) -> Result<Self, AeadError> {
        let key = AesEncryptKey::new(key)
            .map_err(|_: CipherError| AeadError::InvalidKeyLength { actual: key.len() })?;
        let h = u128::from_be_bytes(key.encrypt_block(&[0u8; BLOCK_LEN]));
        Ok(Self { key, h })
    }

    /// Generate a fresh random 96-bit IV.
    #[must_use]
    pub fn generate_iv() -> [u8; IV_LEN] {
        let mut iv = [0u8; IV_LEN];
        OsRng.fill_bytes(&mut iv);
        iv
    }

    /// SP 800-38D §7.1: derive the pre-counter block J0. A 96-bit IV is
    /// used directly as `IV || 0^31 || 1`; any other length is normalized
    /// through GHASH with a length block.
    fn derive_j0(&self, iv: &[u8]) -> [u8; BLOCK_LEN] {
        let mut j0 = [0u8; BLOCK_LEN];
        if iv.len() == IV_LEN {
            j0[..IV_LEN].copy_from_slice(iv);
            j0[15] = 0x01;
        } else {
            let mut ghash = Ghash::new(self.h);
            ghash.update_padded(iv);
            ghash.update_lengths(0, (iv.len() as u64) * 8);
            j0 = ghash.finalize().to_be_bytes();
        }
        j0
    }

    /// CTR keystream application starting at `inc32(J0)`. Encryption and
    /// decryption are the same XOR.
    fn ctr_xor(&self, j0: &[u8; BLOCK_LEN], data: &[u8]) -> Vec<u8> {
        let mut counter = *j0;
        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks(BLOCK_LEN) {
            inc32(&mut counter);
            let keystream = self.key.encrypt_block(&counter);
            out.extend(chunk.iter().zip(keystream.iter()).map(|(d, k)| d ^ k));
        }
        out
    }

    /// Full 16-byte tag over `aad` and `ciphertext`:
    /// `GHASH_H(aad ‖ ct ‖ lengths) XOR AES_K(J0)`.
    fn compute_tag(&self, j0: &[u8; BLOCK_LEN], aad: &[u8], ciphertext: &[u8]) -> [u8; TAG_LEN] {
        let mut ghash = Ghash::new(self.h);
        ghash.update_padded(aad);
        ghash.update_padded(ciphertext);
        ghash.update_lengths((aad.len() as u64) * 8, (ciphertext.len() as u64) * 8);

        let s = u128::from_be_bytes(self.key.encrypt_block(j0));
        (ghash.finalize() ^ s).to_be_bytes()
    }

    /// Encrypt `plaintext` and authenticate it together with `aad`.
    ///
    /// Returns the ciphertext (same length as the plaintext) and the tag
    /// truncated to `tag_len` bytes. Zero-length plaintext and AAD are both
    /// valid; the tag still covers the (empty) inputs.
    ///
    /// # Errors
    /// - [`AeadError::InvalidIvLength`] if `iv` is empty.
    /// - [`AeadError::InvalidTagLength`] if `tag_len` is outside 4..=16.
    #[instrument(
        level = "debug",
        skip(self, iv, aad, plaintext),
        fields(iv_len = iv.len(), aad_len = aad.len(), plaintext_len = plaintext.len(), tag_len)
    )]
    pub fn encrypt_and_tag(
        &self,
        iv: &[u8],
        aad: &[u8],
        plaintext: &[u8],
        tag_len: usize,
    ) -> Result<(Vec<u8>, Vec<u8>), AeadError> {
        check_params(iv, tag_len)?;

        let j0 = self.derive_j0(iv);
        let ciphertext = self.ctr_xor(&j0, plaintext);
        let tag = self.compute_tag(&j0, aad, &ciphertext);
        Ok((ciphertext, tag[..tag_len].to_vec()))
    }

    /// Verify the tag over `ciphertext` and `aad`, then decrypt.
    ///
    /// The expected tag is recomputed and compared to `tag` in constant
    /// time. On mismatch no plaintext is produced.
    ///
    /// # Errors
    /// - [`AeadError::InvalidIvLength`] if `iv` is empty.
    /// - [`AeadError::InvalidTagLength`] if `tag.len()` is outside 4..=16.
    /// - [`AeadError::AuthenticationFailed`] on tag mismatch.
    #[instrument(
        level = "debug",
        skip(self, iv, aad, ciphertext, tag),
        fields(iv_len = iv.len(), aad_len = aad.len(), ciphertext_len = ciphertext.len(), tag_len = tag.len())
    )]
    pub fn decrypt_and_verify(
        &self,
        iv: &[u8],
        aad: &[u8],
        ciphertext: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        check_params(iv, tag.len())?;

        let j0 = self.derive_j0(iv);
        let expected = self.compute_tag(&j0, aad, ciphertext);
        if !bool::from(expected[..tag.len()].ct_eq(tag)) {
            return Err(AeadError::AuthenticationFailed);
        }
        Ok(self.ctr_xor(&j0, ciphertext))
    }
}

fn check_params(iv: &[u8], tag_len: usize) -> Result<(), AeadError> {
    if iv.is_empty() {
        return Err(AeadError::InvalidIvLength);
    }
    if !(MIN_TAG_LEN..=TAG_LEN).contains(&tag_len) {
        return Err(AeadError::InvalidTagLength { actual: tag_len });
    }
    Ok(())
}
