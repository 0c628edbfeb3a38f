//! AES-GCM Known Answer Tests (NIST SP 800-38D)
//!
//! Test vectors from the original GCM specification test cases, as carried
//! into the NIST CAVP gcmEncryptExtIV files. Covers both key lengths, the
//! 96-bit fast path, a non-96-bit IV, and truncated tags.

#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use super::common::{constant_time_eq, decode_hex, encode_hex};
use cachet::aead::Gcm;

/// GCM spec Test Case 1 (AES-128, empty plaintext and AAD)
const AES_128_KEY_1: &str = "00000000000000000000000000000000";
const AES_128_IV_1: &str = "000000000000000000000000";
const AES_128_PT_1: &str = "";
const AES_128_AAD_1: &str = "";
const AES_128_CT_1: &str = "";
const AES_128_TAG_1: &str = "58e2fccefa7e3061367f1d57a4e7455a";

/// GCM spec Test Case 2 (AES-128, one zero block)
const AES_128_KEY_2: &str = "00000000000000000000000000000000";
const AES_128_IV_2: &str = "000000000000000000000000";
const AES_128_PT_2: &str = "00000000000000000000000000000000";
const AES_128_AAD_2: &str = "";
const AES_128_CT_2: &str = "0388dace60b6a392f328c2b971b2fe78";
const AES_128_TAG_2: &str = "ab6e47d42cec13bdf53a67b21257bddf";

/// GCM spec Test Case 3 (AES-128, four blocks, no AAD)
const AES_128_KEY_3: &str = "feffe9928665731c6d6a8f9467308308";
const AES_128_IV_3: &str = "cafebabefacedbaddecaf888";
const AES_128_PT_3: &str = "d9313225f88406e5a55909c5aff5269a86a7a9531534f7da2e4c303d\
                            8a318a721c3c0c95956809532fcf0e2449a6b525b16aedf5aa0de657\
                            ba637b391aafd255";
const AES_128_AAD_3: &str = "";
const AES_128_CT_3: &str = "42831ec2217774244b7221b784d0d49ce3aa212f2c02a4e035c17e23\
                            29aca12e21d514b25466931c7d8f6a5aac84aa051ba30b396a0aac97\
                            3d58e091473f5985";
const AES_128_TAG_3: &str = "4d5c2af327cd64a62cf35abd2ba6fab4";

/// GCM spec Test Case 4 (AES-128, partial final block, with AAD)
const AES_128_KEY_4: &str = "feffe9928665731c6d6a8f9467308308";
const AES_128_IV_4: &str = "cafebabefacedbaddecaf888";
const AES_128_PT_4: &str = "d9313225f88406e5a55909c5aff5269a86a7a9531534f7da2e4c303d\
                            8a318a721c3c0c95956809532fcf0e2449a6b525b16aedf5aa0de657\
                            ba637b39";
const AES_128_AAD_4: &str = "feedfacedeadbeeffeedfacedeadbeefabaddad2";
const AES_128_CT_4: &str = "42831ec2217774244b7221b784d0d49ce3aa212f2c02a4e035c17e23\
                            29aca12e21d514b25466931c7d8f6a5aac84aa051ba30b396a0aac97\
                            3d58e091";
const AES_128_TAG_4: &str = "5bc94fbc3221a5db94fae95ae7121a47";

/// GCM spec Test Case 5 (AES-128, 64-bit IV exercises the GHASH IV path)
const AES_128_KEY_5: &str = "feffe9928665731c6d6a8f9467308308";
const AES_128_IV_5: &str = "cafebabefacedbad";
const AES_128_PT_5: &str = "d9313225f88406e5a55909c5aff5269a86a7a9531534f7da2e4c303d\
                            8a318a721c3c0c95956809532fcf0e2449a6b525b16aedf5aa0de657\
                            ba637b39";
const AES_128_AAD_5: &str = "feedfacedeadbeeffeedfacedeadbeefabaddad2";
const AES_128_CT_5: &str = "61353b4c2806934a777ff51fa22a4755699b2a714fcdc6f83766e5f9\
                            7b6c742373806900e49f24b22b097544d4896b424989b5e1ebac0f07\
                            c23f4598";
const AES_128_TAG_5: &str = "3612d2e79e3b0785561be14aaca2fccb";

/// GCM spec Test Case 13 (AES-256, empty plaintext and AAD)
const AES_256_KEY_13: &str = "0000000000000000000000000000000000000000000000000000000000000000";
const AES_256_IV_13: &str = "000000000000000000000000";
const AES_256_PT_13: &str = "";
const AES_256_AAD_13: &str = "";
const AES_256_CT_13: &str = "";
const AES_256_TAG_13: &str = "530f8afbc74536b9a963b4f1c4cb738b";

/// GCM spec Test Case 14 (AES-256, one zero block)
const AES_256_KEY_14: &str = "0000000000000000000000000000000000000000000000000000000000000000";
const AES_256_IV_14: &str = "000000000000000000000000";
const AES_256_PT_14: &str = "00000000000000000000000000000000";
const AES_256_AAD_14: &str = "";
const AES_256_CT_14: &str = "cea7403d4d606b6e074ec5d3baf39d18";
const AES_256_TAG_14: &str = "d0d1c8a799996bf0265b98b5d48ab919";

/// GCM spec Test Case 15 (AES-256, four blocks, no AAD)
const AES_256_KEY_15: &str = "feffe9928665731c6d6a8f9467308308feffe9928665731c6d6a8f9467308308";
const AES_256_IV_15: &str = "cafebabefacedbaddecaf888";
const AES_256_PT_15: &str = "d9313225f88406e5a55909c5aff5269a86a7a9531534f7da2e4c303d\
                             8a318a721c3c0c95956809532fcf0e2449a6b525b16aedf5aa0de657\
                             ba637b391aafd255";
const AES_256_AAD_15: &str = "";
const AES_256_CT_15: &str = "522dc1f099567d07f47f37a32a84427d643a8cdcbfe5c0c97598a2bd\
                             2555d1aa8cb08e48590dbb3da7b08b1056828838c5f61e6393ba7a0a\
                             bcc9f662898015ad";
const AES_256_TAG_15: &str = "b094dac5d93471bdec1a502270e3cc6c";

/// GCM spec Test Case 16 (AES-256, partial final block, with AAD)
const AES_256_KEY_16: &str = "feffe9928665731c6d6a8f9467308308feffe9928665731c6d6a8f9467308308";
const AES_256_IV_16: &str = "cafebabefacedbaddecaf888";
const AES_256_PT_16: &str = "d9313225f88406e5a55909c5aff5269a86a7a9531534f7da2e4c303d\
                             8a318a721c3c0c95956809532fcf0e2449a6b525b16aedf5aa0de657\
                             ba637b39";
const AES_256_AAD_16: &str = "feedfacedeadbeeffeedfacedeadbeefabaddad2";
const AES_256_CT_16: &str = "522dc1f099567d07f47f37a32a84427d643a8cdcbfe5c0c97598a2bd\
                             2555d1aa8cb08e48590dbb3da7b08b1056828838c5f61e6393ba7a0a\
                             bcc9f662";
const AES_256_TAG_16: &str = "76fc6ece0f4e1768cddf8853bb2d551b";

fn check_gcm_vector(
    key_hex: &str,
    iv_hex: &str,
    pt_hex: &str,
    aad_hex: &str,
    ct_hex: &str,
    tag_hex: &str,
) {
    let key = decode_hex(key_hex).expect("key decode");
    let iv = decode_hex(iv_hex).expect("iv decode");
    let plaintext = decode_hex(pt_hex).expect("plaintext decode");
    let aad = decode_hex(aad_hex).expect("aad decode");
    let expected_ct = decode_hex(ct_hex).expect("ciphertext decode");
    let expected_tag = decode_hex(tag_hex).expect("tag decode");

    let cipher = Gcm::new(&key).expect("cipher creation");

    let (ct, tag) = cipher
        .encrypt_and_tag(&iv, &aad, &plaintext, expected_tag.len())
        .expect("encryption");
    assert_eq!(ct, expected_ct, "Ciphertext mismatch");
    assert!(
        constant_time_eq(&tag, &expected_tag),
        "Tag mismatch: got {}, expected {}",
        encode_hex(&tag),
        encode_hex(&expected_tag)
    );

    let decrypted = cipher
        .decrypt_and_verify(&iv, &aad, &ct, &tag)
        .expect("decryption");
    assert_eq!(decrypted, plaintext, "Decryption mismatch");
}

#[test]
fn test_aes128_gcm_spec_case_1() {
    check_gcm_vector(
        AES_128_KEY_1,
        AES_128_IV_1,
        AES_128_PT_1,
        AES_128_AAD_1,
        AES_128_CT_1,
        AES_128_TAG_1,
    );
}

#[test]
fn test_aes128_gcm_spec_case_2() {
    check_gcm_vector(
        AES_128_KEY_2,
        AES_128_IV_2,
        AES_128_PT_2,
        AES_128_AAD_2,
        AES_128_CT_2,
        AES_128_TAG_2,
    );
}

#[test]
fn test_aes128_gcm_spec_case_3() {
    check_gcm_vector(
        AES_128_KEY_3,
        AES_128_IV_3,
        AES_128_PT_3,
        AES_128_AAD_3,
        AES_128_CT_3,
        AES_128_TAG_3,
    );
}

#[test]
fn test_aes128_gcm_spec_case_4() {
    check_gcm_vector(
        AES_128_KEY_4,
        AES_128_IV_4,
        AES_128_PT_4,
        AES_128_AAD_4,
        AES_128_CT_4,
        AES_128_TAG_4,
    );
}

#[test]
fn test_aes128_gcm_spec_case_5_short_iv() {
    check_gcm_vector(
        AES_128_KEY_5,
        AES_128_IV_5,
        AES_128_PT_5,
        AES_128_AAD_5,
        AES_128_CT_5,
        AES_128_TAG_5,
    );
}

#[test]
fn test_aes256_gcm_spec_case_13() {
    check_gcm_vector(
        AES_256_KEY_13,
        AES_256_IV_13,
        AES_256_PT_13,
        AES_256_AAD_13,
        AES_256_CT_13,
        AES_256_TAG_13,
    );
}

#[test]
fn test_aes256_gcm_spec_case_14() {
    check_gcm_vector(
        AES_256_KEY_14,
        AES_256_IV_14,
        AES_256_PT_14,
        AES_256_AAD_14,
        AES_256_CT_14,
        AES_256_TAG_14,
    );
}

#[test]
fn test_aes256_gcm_spec_case_15() {
    check_gcm_vector(
        AES_256_KEY_15,
        AES_256_IV_15,
        AES_256_PT_15,
        AES_256_AAD_15,
        AES_256_CT_15,
        AES_256_TAG_15,
    );
}

#[test]
fn test_aes256_gcm_spec_case_16() {
    check_gcm_vector(
        AES_256_KEY_16,
        AES_256_IV_16,
        AES_256_PT_16,
        AES_256_AAD_16,
        AES_256_CT_16,
        AES_256_TAG_16,
    );
}

/// A truncated tag must be the prefix of the full tag and must round-trip.
#[test]
fn test_gcm_truncated_tags() {
    let key = decode_hex(AES_128_KEY_4).expect("key decode");
    let iv = decode_hex(AES_128_IV_4).expect("iv decode");
    let aad = decode_hex(AES_128_AAD_4).expect("aad decode");
    let plaintext = decode_hex(AES_128_PT_4).expect("plaintext decode");
    let full_tag = decode_hex(AES_128_TAG_4).expect("tag decode");

    let cipher = Gcm::new(&key).expect("cipher creation");
    for tag_len in [4usize, 8, 12, 13, 15, 16] {
        let (ct, tag) = cipher
            .encrypt_and_tag(&iv, &aad, &plaintext, tag_len)
            .expect("encryption");
        assert_eq!(tag.len(), tag_len, "Tag length mismatch");
        assert_eq!(&tag[..], &full_tag[..tag_len], "Tag is not a prefix");

        let decrypted = cipher
            .decrypt_and_verify(&iv, &aad, &ct, &tag)
            .expect("decryption");
        assert_eq!(decrypted, plaintext, "Decryption mismatch");
    }
}
