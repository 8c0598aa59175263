//! # Rijndael Crypto
//!
//! Symmetric encryption of short text strings with AES-128-CBC.
//!
//! ## Features
//!
//! - AES-128-CBC encryption with PKCS7 padding
//! - 128-bit key derived from a passphrase of any length via MD5
//! - Caller-supplied 16-character initialization vector
//! - Base64 (standard alphabet, padded) ciphertext encoding
//!
//! The scheme is byte-compatible with other tools that hash the passphrase
//! with MD5 and feed it straight into AES-128-CBC. MD5 is kept for that
//! compatibility, not for its strength.
//!
//! ## Example
//!
//! ```
//! use rijndael_crypto::RijndaelCrypt;
//!
//! let crypt = RijndaelCrypt::new("mysecret", "1234567890123456").unwrap();
//! let encrypted = crypt.encrypt("Hello, World!").unwrap();
//! assert_eq!(crypt.decrypt(&encrypted).unwrap(), "Hello, World!");
//! ```

pub mod crypto;
pub mod error;

// Re-export main types
pub use crypto::{derive_key, generate_vector, validate_vector, RijndaelCrypt};
pub use error::{CryptError, Result};

/// Required initialization vector length in bytes
pub const VECTOR_LENGTH: usize = 16;

/// Derived key length in bytes (AES-128)
pub const KEY_LENGTH: usize = 16;

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;
