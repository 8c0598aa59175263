//! AES-128-CBC encryption and decryption
//!
//! This module implements the cipher adapter:
//! - AES-128-CBC with PKCS7 padding
//! - Key is the MD5 digest of the passphrase
//! - IV is the raw bytes of a 16-character caller-supplied vector
//! - Ciphertext travels as standard padded Base64
//!
//! **IMPORTANT**: A fixed IV makes encryption deterministic. Identical
//! plaintexts under the same passphrase and vector produce identical
//! ciphertext.

use std::fmt;

use aes::Aes128;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockModeDecrypt, BlockModeEncrypt, KeyIvInit};
use cbc::{Decryptor, Encryptor};

use super::key::derive_key;
use super::vector::validate_vector;
use crate::error::{CryptError, Result};
use crate::{BLOCK_SIZE, KEY_LENGTH, VECTOR_LENGTH};

type Aes128CbcEnc = Encryptor<Aes128>;
type Aes128CbcDec = Decryptor<Aes128>;

/// AES-128-CBC cipher bound to one derived key and one vector
///
/// Holds no mutable state: every call to [`encrypt`](Self::encrypt) or
/// [`decrypt`](Self::decrypt) is an independent transformation, so a single
/// instance may be shared across threads.
#[derive(Clone)]
pub struct RijndaelCrypt {
    key: [u8; KEY_LENGTH],
    iv: [u8; VECTOR_LENGTH],
}

impl RijndaelCrypt {
    /// Create a cipher from a passphrase and a vector
    ///
    /// The vector is validated before anything else happens.
    ///
    /// # Errors
    ///
    /// Returns [`CryptError::InvalidVectorLength`] if `vector` is not exactly
    /// 16 bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use rijndael_crypto::{CryptError, RijndaelCrypt};
    ///
    /// assert!(RijndaelCrypt::new("mysecret", "1234567890123456").is_ok());
    /// assert!(matches!(
    ///     RijndaelCrypt::new("mysecret", "short"),
    ///     Err(CryptError::InvalidVectorLength(5))
    /// ));
    /// ```
    pub fn new(passphrase: impl AsRef<[u8]>, vector: &str) -> Result<Self> {
        let iv = validate_vector(vector)?;
        Ok(Self::from_parts(derive_key(passphrase), iv))
    }

    /// Create a cipher from an already-derived key and raw IV bytes
    pub(crate) fn from_parts(key: [u8; KEY_LENGTH], iv: [u8; VECTOR_LENGTH]) -> Self {
        Self { key, iv }
    }

    /// Encrypt UTF-8 text and return standard Base64 ciphertext
    ///
    /// # Errors
    ///
    /// Returns [`CryptError::EncryptionFailed`] if the cipher rejects the input.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let encrypted = self.encrypt_bytes(plaintext.as_bytes())?;
        Ok(STANDARD.encode(encrypted))
    }

    /// Decrypt standard Base64 ciphertext back into UTF-8 text
    ///
    /// # Errors
    ///
    /// Returns [`CryptError::DecryptionFailed`] on invalid Base64, ciphertext
    /// that is not a whole number of blocks, bad padding, or a plaintext that
    /// is not valid UTF-8.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let decoded = STANDARD.decode(ciphertext)?;
        let decrypted = self.decrypt_bytes(&decoded)?;
        Ok(String::from_utf8(decrypted)?)
    }

    /// Encrypt raw bytes; output length is the next multiple of 16
    pub fn encrypt_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        // PKCS7 always adds at least one byte, so a full block when aligned
        let padded_len = (data.len() / BLOCK_SIZE + 1) * BLOCK_SIZE;

        let mut buffer = vec![0u8; padded_len];
        buffer[..data.len()].copy_from_slice(data);

        let encryptor = Aes128CbcEnc::new(&self.key.into(), &self.iv.into());

        let encrypted = encryptor
            .encrypt_padded::<Pkcs7>(&mut buffer, data.len())
            .map_err(|_| CryptError::EncryptionFailed)?;

        Ok(encrypted.to_vec())
    }

    /// Decrypt raw ciphertext bytes and strip PKCS7 padding
    pub fn decrypt_bytes(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(CryptError::DecryptionFailed);
        }

        // Create a mutable copy for in-place decryption
        let mut buffer = ciphertext.to_vec();

        let decryptor = Aes128CbcDec::new(&self.key.into(), &self.iv.into());

        let decrypted = decryptor
            .decrypt_padded::<Pkcs7>(&mut buffer)
            .map_err(|_| CryptError::DecryptionFailed)?;

        Ok(decrypted.to_vec())
    }
}

impl fmt::Debug for RijndaelCrypt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RijndaelCrypt")
            .field("key", &"<redacted>")
            .field("iv", &"<redacted>")
            .finish()
    }
}
