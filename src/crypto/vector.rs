//! Initialization vector handling
//!
//! The vector is taken verbatim as the UTF-8 bytes of a caller-supplied
//! string. It must be exactly 16 characters and exactly 16 bytes long, so in
//! practice only 16 ASCII characters are accepted.

use rand::Rng;

use crate::error::{CryptError, Result};
use crate::VECTOR_LENGTH;

const VECTOR_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Validate a vector string and return its raw bytes
///
/// The error carries the character count, or the byte count when the
/// character count is right but the bytes are not.
///
/// # Example
///
/// ```
/// use rijndael_crypto::{validate_vector, CryptError};
///
/// assert_eq!(validate_vector("1234567890123456").unwrap(), *b"1234567890123456");
/// assert_eq!(validate_vector("short"), Err(CryptError::InvalidVectorLength(5)));
/// ```
pub fn validate_vector(vector: &str) -> Result<[u8; VECTOR_LENGTH]> {
    let char_count = vector.chars().count();
    if char_count != VECTOR_LENGTH {
        return Err(CryptError::InvalidVectorLength(char_count));
    }

    // 16 characters, but multi-byte ones overflow the block
    vector
        .as_bytes()
        .try_into()
        .map_err(|_| CryptError::InvalidVectorLength(vector.len()))
}

/// Generate a random 16-character alphanumeric vector
///
/// The result always passes [`validate_vector`].
pub fn generate_vector() -> String {
    let mut rng = rand::rng();
    let chars: Vec<char> = VECTOR_CHARS.chars().collect();

    (0..VECTOR_LENGTH)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect()
}
