//! Cryptographic operations for Rijndael Crypto
//!
//! This module implements AES-128-CBC encryption with PKCS7 padding, keyed by
//! the MD5 digest of a passphrase and seeded by a caller-supplied vector.

mod cipher;
mod key;
mod vector;

pub use cipher::RijndaelCrypt;
pub use key::derive_key;
pub use vector::{generate_vector, validate_vector};
