//! Error types for Rijndael Crypto

use thiserror::Error;

/// Main error type for cipher operations
///
/// Decryption failures are deliberately coarse: bad Base64, misaligned
/// ciphertext, broken padding and invalid UTF-8 all surface as
/// [`CryptError::DecryptionFailed`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptError {
    /// Initialization vector is not exactly 16 bytes (carries the actual length)
    #[error("Security vector must be 16 characters long.")]
    InvalidVectorLength(usize),

    /// The cipher primitive rejected the plaintext
    #[error("Encryption failed. Please check your inputs.")]
    EncryptionFailed,

    /// Ciphertext could not be decoded, decrypted or unpadded
    #[error("Decryption failed. Please check your inputs.")]
    DecryptionFailed,
}

impl From<base64::DecodeError> for CryptError {
    fn from(_: base64::DecodeError) -> Self {
        CryptError::DecryptionFailed
    }
}

impl From<std::string::FromUtf8Error> for CryptError {
    fn from(_: std::string::FromUtf8Error) -> Self {
        CryptError::DecryptionFailed
    }
}

/// Result type alias for cipher operations
pub type Result<T> = std::result::Result<T, CryptError>;
