//! Integration tests for rijndael-crypto
//!
//! These exercise the public API only, the way an embedding program would.

use rijndael_crypto::{
    derive_key, generate_vector, validate_vector, CryptError, RijndaelCrypt, BLOCK_SIZE,
    KEY_LENGTH, VECTOR_LENGTH,
};

const TEST_PASSPHRASE: &str = "mysecret";
const TEST_VECTOR: &str = "1234567890123456";

fn setup_crypt() -> RijndaelCrypt {
    RijndaelCrypt::new(TEST_PASSPHRASE, TEST_VECTOR).expect("Failed to build cipher")
}

#[test]
fn test_hello_world_scenario() {
    let crypt = setup_crypt();

    let encrypted = crypt.encrypt("Hello, World!").unwrap();
    assert_eq!(encrypted, "m/xK7KM6Ujf+tHJI2fCNMw==");

    let decrypted = crypt.decrypt(&encrypted).unwrap();
    assert_eq!(decrypted, "Hello, World!");
}

#[test]
fn test_short_vector_scenario() {
    let result = RijndaelCrypt::new(TEST_PASSPHRASE, "short");
    assert!(matches!(result, Err(CryptError::InvalidVectorLength(5))));
}

#[test]
fn test_not_base64_scenario() {
    let result = setup_crypt().decrypt("not-base64!!");
    assert_eq!(result, Err(CryptError::DecryptionFailed));
}

#[test]
fn test_vector_length_validation() {
    for len in [0usize, 1, 15, 17, 24, 64] {
        let vector = "a".repeat(len);
        let result = RijndaelCrypt::new(TEST_PASSPHRASE, &vector);
        assert!(
            matches!(result, Err(CryptError::InvalidVectorLength(l)) if l == len),
            "length {} should be rejected",
            len
        );
    }
}

#[test]
fn test_vector_must_be_sixteen_ascii_characters() {
    // 8 Cyrillic characters, 16 bytes
    let result = RijndaelCrypt::new(TEST_PASSPHRASE, "ЙЦУКЕНГШ");
    assert!(matches!(result, Err(CryptError::InvalidVectorLength(8))));

    // 16 Cyrillic characters, 32 bytes
    let result = RijndaelCrypt::new(TEST_PASSPHRASE, "ЙЦУКЕНГШЩЗФЫВАПР");
    assert!(matches!(result, Err(CryptError::InvalidVectorLength(32))));
}

#[test]
fn test_roundtrip_various_plaintexts() {
    let crypt = setup_crypt();
    let plaintexts = [
        "",
        "a",
        "exactly sixteen!",
        "Multi\nline\ttext with \"quotes\"",
        "Привет мир! 你好世界! مرحبا بالعالم",
        "🔐 emoji payload 🔑",
    ];

    for plaintext in plaintexts {
        let encrypted = crypt.encrypt(plaintext).unwrap();
        assert_eq!(crypt.decrypt(&encrypted).unwrap(), plaintext);
    }
}

#[test]
fn test_determinism_across_instances() {
    let first = setup_crypt().encrypt("repeatable").unwrap();
    let second = setup_crypt().encrypt("repeatable").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_passphrase_of_any_length() {
    let long = "z".repeat(4096);
    let passphrases = ["", "k", "a much longer passphrase than sixteen bytes", long.as_str()];

    for passphrase in passphrases {
        assert_eq!(derive_key(passphrase).len(), KEY_LENGTH);

        let crypt = RijndaelCrypt::new(passphrase, TEST_VECTOR).unwrap();
        let encrypted = crypt.encrypt("payload").unwrap();
        assert_eq!(crypt.decrypt(&encrypted).unwrap(), "payload");
    }
}

#[test]
fn test_different_passphrases_differ() {
    let a = RijndaelCrypt::new("alpha", TEST_VECTOR).unwrap();
    let b = RijndaelCrypt::new("bravo", TEST_VECTOR).unwrap();
    assert_ne!(a.encrypt("payload").unwrap(), b.encrypt("payload").unwrap());
}

#[test]
fn test_different_vectors_differ() {
    let a = RijndaelCrypt::new(TEST_PASSPHRASE, "aaaaaaaaaaaaaaaa").unwrap();
    let b = RijndaelCrypt::new(TEST_PASSPHRASE, "bbbbbbbbbbbbbbbb").unwrap();
    assert_ne!(a.encrypt("payload").unwrap(), b.encrypt("payload").unwrap());
}

#[test]
fn test_byte_level_api() {
    let crypt = setup_crypt();
    let data = [0u8, 1, 2, 3, 250, 251, 252, 253, 254, 255];

    let encrypted = crypt.encrypt_bytes(&data).unwrap();
    assert_eq!(encrypted.len() % BLOCK_SIZE, 0);
    assert_eq!(crypt.decrypt_bytes(&encrypted).unwrap(), data.to_vec());

    // Truncated ciphertext is no longer block aligned
    assert_eq!(
        crypt.decrypt_bytes(&encrypted[..encrypted.len() - 1]),
        Err(CryptError::DecryptionFailed)
    );
}

#[test]
fn test_generated_vector_usable() {
    let vector = generate_vector();
    assert_eq!(validate_vector(&vector).unwrap().len(), VECTOR_LENGTH);

    let crypt = RijndaelCrypt::new(TEST_PASSPHRASE, &vector).unwrap();
    let encrypted = crypt.encrypt("generated").unwrap();
    assert_eq!(crypt.decrypt(&encrypted).unwrap(), "generated");
}

#[test]
fn test_error_messages() {
    let err = RijndaelCrypt::new(TEST_PASSPHRASE, "").unwrap_err();
    assert_eq!(err.to_string(), "Security vector must be 16 characters long.");

    let err = setup_crypt().decrypt("AAAA").unwrap_err();
    assert_eq!(err.to_string(), "Decryption failed. Please check your inputs.");
}

#[test]
fn test_clone_behaves_identically() {
    let crypt = setup_crypt();
    let cloned = crypt.clone();
    assert_eq!(crypt.encrypt("clone").unwrap(), cloned.encrypt("clone").unwrap());
}
