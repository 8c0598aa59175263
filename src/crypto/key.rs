//! Key derivation for AES-128 encryption
//!
//! The key is the raw 16-byte MD5 digest of the passphrase bytes. No salt,
//! no iterations: identical passphrases always map to identical keys, which
//! is what keeps ciphertext interchangeable with other implementations.

use md5::{Digest, Md5};

use crate::KEY_LENGTH;

/// Derive the AES-128 key from a passphrase
///
/// Accepts anything byte-like, so both `&str` and `&[u8]` passphrases work.
///
/// # Example
///
/// ```
/// use rijndael_crypto::derive_key;
///
/// assert_eq!(derive_key("mysecret"), derive_key(b"mysecret"));
/// ```
pub fn derive_key(passphrase: impl AsRef<[u8]>) -> [u8; KEY_LENGTH] {
    let digest = Md5::digest(passphrase.as_ref());

    let mut key = [0u8; KEY_LENGTH];
    key.copy_from_slice(&digest);
    key
}

/// Derived key rendered as a lowercase hex string (32 chars)
#[cfg(test)]
pub(crate) fn key_hex(passphrase: impl AsRef<[u8]>) -> String {
    derive_key(passphrase)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
