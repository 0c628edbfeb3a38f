#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! AES block transforms (FIPS 197)
//!
//! Portable software implementation of the AES-128/192/256 forward and
//! inverse ciphers. Key schedules are expanded once at construction and
//! bound to a direction: [`AesEncryptKey`] only encrypts, [`AesDecryptKey`]
//! only decrypts. Both transforms operate on exactly one 16-byte block.
//!
//! The expanded schedule is zeroized when the context is dropped.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{CipherError, BLOCK_LEN};

/// FIPS 197 Figure 7: the S-box used by SubBytes and the key schedule.
const SBOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16,
];

/// FIPS 197 Figure 14: the inverse S-box used by InvSubBytes.
const INV_SBOX: [u8; 256] = [
    0x52, 0x09, 0x6a, 0xd5, 0x30, 0x36, 0xa5, 0x38, 0xbf, 0x40, 0xa3, 0x9e, 0x81, 0xf3, 0xd7, 0xfb,
    0x7c, 0xe3, 0x39, 0x82, 0x9b, 0x2f, 0xff, 0x87, 0x34, 0x8e, 0x43, 0x44, 0xc4, 0xde, 0xe9, 0xcb,
    0x54, 0x7b, 0x94, 0x32, 0xa6, 0xc2, 0x23, 0x3d, 0xee, 0x4c, 0x95, 0x0b, 0x42, 0xfa, 0xc3, 0x4e,
    0x08, 0x2e, 0xa1, 0x66, 0x28, 0xd9, 0x24, 0xb2, 0x76, 0x5b, 0xa2, 0x49, 0x6d, 0x8b, 0xd1, 0x25,
    0x72, 0xf8, 0xf6, 0x64, 0x86, 0x68, 0x98, 0x16, 0xd4, 0xa4, 0x5c, 0xcc, 0x5d, 0x65, 0xb6, 0x92,
    0x6c, 0x70, 0x48, 0x50, 0xfd, 0xed, 0xb9, 0xda, 0x5e, 0x15, 0x46, 0x57, 0xa7, 0x8d, 0x9d, 0x84,
    0x90, 0xd8, 0xab, 0x00, 0x8c, 0xbc, 0xd3, 0x0a, 0xf7, 0xe4, 0x58, 0x05, 0xb8, 0xb3, 0x45, 0x06,
    0xd0, 0x2c, 0x1e, 0x8f, 0xca, 0x3f, 0x0f, 0x02, 0xc1, 0xaf, 0xbd, 0x03, 0x01, 0x13, 0x8a, 0x6b,
    0x3a, 0x91, 0x11, 0x41, 0x4f, 0x67, 0xdc, 0xea, 0x97, 0xf2, 0xcf, 0xce, 0xf0, 0xb4, 0xe6, 0x73,
    0x96, 0xac, 0x74, 0x22, 0xe7, 0xad, 0x35, 0x85, 0xe2, 0xf9, 0x37, 0xe8, 0x1c, 0x75, 0xdf, 0x6e,
    0x47, 0xf1, 0x1a, 0x71, 0x1d, 0x29, 0xc5, 0x89, 0x6f, 0xb7, 0x62, 0x0e, 0xaa, 0x18, 0xbe, 0x1b,
    0xfc, 0x56, 0x3e, 0x4b, 0xc6, 0xd2, 0x79, 0x20, 0x9a, 0xdb, 0xc0, 0xfe, 0x78, 0xcd, 0x5a, 0xf4,
    0x1f, 0xdd, 0xa8, 0x33, 0x88, 0x07, 0xc7, 0x31, 0xb1, 0x12, 0x10, 0x59, 0x27, 0x80, 0xec, 0x5f,
    0x60, 0x51, 0x7f, 0xa9, 0x19, 0xb5, 0x4a, 0x0d, 0x2d, 0xe5, 0x7a, 0x9f, 0x93, 0xc9, 0x9c, 0xef,
    0xa0, 0xe0, 0x3b, 0x4d, 0xae, 0x2a, 0xf5, 0xb0, 0xc8, 0xeb, 0xbb, 0x3c, 0x83, 0x53, 0x99, 0x61,
    0x17, 0x2b, 0x04, 0x7e, 0xba, 0x77, 0xd6, 0x26, 0xe1, 0x69, 0x14, 0x63, 0x55, 0x21, 0x0c, 0x7d,
];

/// Round constants `[x^(i-1), 0, 0, 0]` over GF(2^8), packed big-endian.
const RCON: [u32; 10] = [
    0x0100_0000,
    0x0200_0000,
    0x0400_0000,
    0x0800_0000,
    0x1000_0000,
    0x2000_0000,
    0x4000_0000,
    0x8000_0000,
    0x1b00_0000,
    0x3600_0000,
];

/// Maximum schedule size: 4 * (14 + 1) words for AES-256.
const MAX_SCHEDULE_WORDS: usize = 60;

/// Multiply two elements of GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.
fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
    }
    product
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes([
        SBOX[(word >> 24) as usize],
        SBOX[((word >> 16) & 0xff) as usize],
        SBOX[((word >> 8) & 0xff) as usize],
        SBOX[(word & 0xff) as usize],
    ])
}

/// Expanded round-key words for one key and one direction.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct KeySchedule {
    words: [u32; MAX_SCHEDULE_WORDS],
    rounds: usize,
}

impl KeySchedule {
    /// FIPS 197 §5.2 KeyExpansion. Only 16/24/32-byte keys are accepted,
    /// checked before any schedule work.
    fn expand(key: &[u8]) -> Result<Self, CipherError> {
        let rounds = match key.len() {
            16 => 10,
            24 => 12,
            32 => 14,
            _ => return Err(CipherError::InvalidKeyLength { actual: key.len() }),
        };
        let nk = key.len() / 4;

        let mut words = [0u32; MAX_SCHEDULE_WORDS];
        for (i, chunk) in key.chunks_exact(4).enumerate() {
            words[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        for i in nk..4 * (rounds + 1) {
            let mut temp = words[i - 1];
            if i % nk == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ RCON[i / nk - 1];
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }
            words[i] = words[i - nk] ^ temp;
        }

        Ok(Self { words, rounds })
    }

    /// Round key for `round`, as four column words.
    #[inline]
    fn round_key(&self, round: usize) -> &[u32] {
        &self.words[4 * round..4 * round + 4]
    }
}

// State is a flat 16-byte block in FIPS 197 column-major order:
// s[row][col] lives at state[4*col + row].

fn add_round_key(state: &mut [u8; BLOCK_LEN], round_key: &[u32]) {
    for (col, &word) in round_key.iter().enumerate() {
        let bytes = word.to_be_bytes();
        for (row, &byte) in bytes.iter().enumerate() {
            state[4 * col + row] ^= byte;
        }
    }
}

fn sub_bytes(state: &mut [u8; BLOCK_LEN]) {
    for byte in state.iter_mut() {
        *byte = SBOX[*byte as usize];
    }
}

fn inv_sub_bytes(state: &mut [u8; BLOCK_LEN]) {
    for byte in state.iter_mut() {
        *byte = INV_SBOX[*byte as usize];
    }
}

fn shift_rows(state: &mut [u8; BLOCK_LEN]) {
    let old = *state;
    for col in 0..4 {
        for row in 0..4 {
            state[4 * col + row] = old[4 * ((col + row) % 4) + row];
        }
    }
}

fn inv_shift_rows(state: &mut [u8; BLOCK_LEN]) {
    let old = *state;
    for col in 0..4 {
        for row in 0..4 {
            state[4 * col + row] = old[4 * ((col + 4 - row) % 4) + row];
        }
    }
}

fn mix_columns(state: &mut [u8; BLOCK_LEN]) {
    for col in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        col[0] = gmul(a0, 2) ^ gmul(a1, 3) ^ a2 ^ a3;
        col[1] = a0 ^ gmul(a1, 2) ^ gmul(a2, 3) ^ a3;
        col[2] = a0 ^ a1 ^ gmul(a2, 2) ^ gmul(a3, 3);
        col[3] = gmul(a0, 3) ^ a1 ^ a2 ^ gmul(a3, 2);
    }
}

fn inv_mix_columns(state: &mut [u8; BLOCK_LEN]) {
    for col in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        col[0] = gmul(a0, 14) ^ gmul(a1, 11) ^ gmul(a2, 13) ^ gmul(a3, 9);
        col[1] = gmul(a0, 9) ^ gmul(a1, 14) ^ gmul(a2, 11) ^ gmul(a3, 13);
        col[2] = gmul(a0, 13) ^ gmul(a1, 9) ^ gmul(a2, 14) ^ gmul(a3, 11);
        col[3] = gmul(a0, 11) ^ gmul(a1, 13) ^ gmul(a2, 9) ^ gmul(a3, 14);
    }
}

/// AES key schedule bound to the encryption direction.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AesEncryptKey {
    schedule: KeySchedule,
}

impl AesEncryptKey {
    /// Expand an encryption schedule from a 16, 24, or 32-byte key.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKeyLength`] for any other key size,
    /// leaving no usable context.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        Ok(Self {
            schedule: KeySchedule::expand(key)?,
        })
    }

    /// FIPS 197 §5.1 Cipher: encrypt exactly one block.
    ///
    /// Pure function of the context and input; the context is not mutated.
    #[must_use]
    pub fn encrypt_block(&self, input: &[u8; BLOCK_LEN]) -> [u8; BLOCK_LEN] {
        let mut state = *input;
        add_round_key(&mut state, self.schedule.round_key(0));
        for round in 1..self.schedule.rounds {
            sub_bytes(&mut state);
            shift_rows(&mut state);
            mix_columns(&mut state);
            add_round_key(&mut state, self.schedule.round_key(round));
        }
        sub_bytes(&mut state);
        shift_rows(&mut state);
        add_round_key(&mut state, self.schedule.round_key(self.schedule.rounds));
        state
    }
}

/// AES key schedule bound to the decryption direction.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AesDecryptKey {
    schedule: KeySchedule,
}

impl AesDecryptKey {
    /// Expand a decryption schedule from a 16, 24, or 32-byte key.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKeyLength`] for any other key size,
    /// leaving no usable context.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        Ok(Self {
            schedule: KeySchedule::expand(key)?,
        })
    }

    /// FIPS 197 §5.3 InvCipher: decrypt exactly one block.
    ///
    /// Inverse of [`AesEncryptKey::encrypt_block`] under the same original
    /// key.
    #[must_use]
    pub fn decrypt_block(&self, input: &[u8; BLOCK_LEN]) -> [u8; BLOCK_LEN] {
        let mut state = *input;
        add_round_key(&mut state, self.schedule.round_key(self.schedule.rounds));
        for round in (1..self.schedule.rounds).rev() {
            inv_shift_rows(&mut state);
            inv_sub_bytes(&mut state);
            add_round_key(&mut state, self.schedule.round_key(round));
            inv_mix_columns(&mut state);
        }
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, self.schedule.round_key(0));
        state
    }
}
