//! AES Known Answer Tests (FIPS 197, NIST SP 800-38A)
//!
//! ECB single-block vectors come from FIPS 197 Appendix C; CBC multi-block
//! vectors come from NIST SP 800-38A Appendix F.2.

#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use super::common::decode_hex;
use cachet::cipher::{AesDecryptKey, AesEncryptKey, CbcDecryptContext, CbcEncryptContext};

/// FIPS 197 Appendix C shared plaintext block
const ECB_PT: &str = "00112233445566778899aabbccddeeff";

/// FIPS 197 Appendix C.1 (AES-128)
const ECB_128_KEY: &str = "000102030405060708090a0b0c0d0e0f";
const ECB_128_CT: &str = "69c4e0d86a7b0430d8cdb78070b4c55a";

/// FIPS 197 Appendix C.2 (AES-192)
const ECB_192_KEY: &str = "000102030405060708090a0b0c0d0e0f1011121314151617";
const ECB_192_CT: &str = "dda97ca4864cdfe06eaf70a0ec0d7191";

/// FIPS 197 Appendix C.3 (AES-256)
const ECB_256_KEY: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
const ECB_256_CT: &str = "8ea2b7ca516745bfeafc49904b496089";

/// NIST SP 800-38A shared CBC inputs (four blocks)
const CBC_IV: &str = "000102030405060708090a0b0c0d0e0f";
const CBC_PT: &str = "6bc1bee22e409f96e93d7e117393172a\
                      ae2d8a571e03ac9c9eb76fac45af8e51\
                      30c81c46a35ce411e5fbc1191a0a52ef\
                      f69f2445df4f9b17ad2b417be66c3710";

/// NIST SP 800-38A F.2.1/F.2.2 (AES-128-CBC)
const CBC_128_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const CBC_128_CT: &str = "7649abac8119b246cee98e9b12e9197d\
                          5086cb9b507219ee95db113a917678b2\
                          73bed6b8e3c1743b7116e69e22229516\
                          3ff1caa1681fac09120eca307586e1a7";

/// NIST SP 800-38A F.2.3/F.2.4 (AES-192-CBC)
const CBC_192_KEY: &str = "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b";
const CBC_192_CT: &str = "4f021db243bc633d7178183a9fa071e8\
                          b4d9ada9ad7dedf4e5e738763f69145a\
                          571b242012fb7ae07fa9baac3df102e0\
                          08b0e27988598881d920a9e64f5615cd";

/// NIST SP 800-38A F.2.5/F.2.6 (AES-256-CBC)
const CBC_256_KEY: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";
const CBC_256_CT: &str = "f58c4c04d6e5f1ba779eabfb5f7bfbd6\
                          9cfc4e967edb808d679f777bc6702c7d\
                          39f23369a9d9bacfa530e26304231461\
                          b2eb05e2c39be9fcda6c19078c6a9d1b";

fn check_ecb_vector(key_hex: &str, ct_hex: &str) {
    let key = decode_hex(key_hex).expect("key decode");
    let pt = decode_hex(ECB_PT).expect("plaintext decode");
    let expected = decode_hex(ct_hex).expect("ciphertext decode");

    let mut block = [0u8; 16];
    block.copy_from_slice(&pt);

    let enc = AesEncryptKey::new(&key).expect("key schedule");
    let ct = enc.encrypt_block(&block);
    assert_eq!(&ct[..], &expected[..], "Ciphertext mismatch");

    let dec = AesDecryptKey::new(&key).expect("key schedule");
    let recovered = dec.decrypt_block(&ct);
    assert_eq!(recovered, block, "Decryption mismatch");
}

#[test]
fn test_aes128_ecb_fips197_c1() {
    check_ecb_vector(ECB_128_KEY, ECB_128_CT);
}

#[test]
fn test_aes192_ecb_fips197_c2() {
    check_ecb_vector(ECB_192_KEY, ECB_192_CT);
}

#[test]
fn test_aes256_ecb_fips197_c3() {
    check_ecb_vector(ECB_256_KEY, ECB_256_CT);
}

fn iv() -> [u8; 16] {
    let bytes = decode_hex(CBC_IV).expect("iv decode");
    let mut iv = [0u8; 16];
    iv.copy_from_slice(&bytes);
    iv
}

fn check_cbc_vector(key_hex: &str, ct_hex: &str) {
    let key = decode_hex(key_hex).expect("key decode");
    let pt = decode_hex(CBC_PT).expect("plaintext decode");
    let expected = decode_hex(ct_hex).expect("ciphertext decode");

    let enc_key = AesEncryptKey::new(&key).expect("key schedule");
    let mut enc = CbcEncryptContext::new(enc_key, iv());
    let ct = enc.encrypt(&pt).expect("encryption");
    assert_eq!(ct, expected, "Ciphertext mismatch");

    let dec_key = AesDecryptKey::new(&key).expect("key schedule");
    let mut dec = CbcDecryptContext::new(dec_key, iv());
    let recovered = dec.decrypt(&ct).expect("decryption");
    assert_eq!(recovered, pt, "Decryption mismatch");
}

#[test]
fn test_aes128_cbc_sp800_38a_f21() {
    check_cbc_vector(CBC_128_KEY, CBC_128_CT);
}

#[test]
fn test_aes192_cbc_sp800_38a_f23() {
    check_cbc_vector(CBC_192_KEY, CBC_192_CT);
}

#[test]
fn test_aes256_cbc_sp800_38a_f25() {
    check_cbc_vector(CBC_256_KEY, CBC_256_CT);
}

/// Feeding the four blocks one at a time must match the one-call result,
/// since the context carries the chaining value across calls.
#[test]
fn test_aes128_cbc_chaining_across_calls() {
    let key = decode_hex(CBC_128_KEY).expect("key decode");
    let pt = decode_hex(CBC_PT).expect("plaintext decode");
    let expected = decode_hex(CBC_128_CT).expect("ciphertext decode");

    let enc_key = AesEncryptKey::new(&key).expect("key schedule");
    let mut enc = CbcEncryptContext::new(enc_key, iv());
    let mut ct = Vec::new();
    for block in pt.chunks_exact(16) {
        ct.extend_from_slice(&enc.encrypt(block).expect("encryption"));
    }
    assert_eq!(ct, expected, "Chained ciphertext mismatch");
}
