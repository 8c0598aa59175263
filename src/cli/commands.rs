//! Command implementations for the positional (non-interactive) mode.

use anyhow::{bail, Result};
use colored::Colorize;
use rijndael_crypto::{generate_vector, validate_vector, RijndaelCrypt};
use tracing::debug;

use super::{Mode, Secrets, VECTOR_LENGTH_MESSAGE};

/// Run one cipher operation over already-validated inputs
pub fn transform(
    mode: Mode,
    text: &str,
    key: &str,
    vector: &str,
) -> rijndael_crypto::Result<String> {
    let crypt = RijndaelCrypt::new(key, vector)?;
    match mode {
        Mode::Encrypt => crypt.encrypt(text),
        Mode::Decrypt => crypt.decrypt(text),
    }
}

/// Whether a vector has the length the cipher accepts (16 chars, 16 bytes)
pub fn vector_has_valid_length(vector: &str) -> bool {
    validate_vector(vector).is_ok()
}

/// Print a result line: bold label, highlighted value
pub fn print_result(mode: Mode, value: &str) {
    println!("{} {}", mode.result_label().bold(), value.yellow());
}

/// Encrypt or decrypt from command-line arguments
pub fn run(mode: Mode, text: &str, secrets: &Secrets) -> Result<()> {
    debug!(%mode, text_len = text.len(), "positional mode");

    if !vector_has_valid_length(&secrets.vector) {
        bail!(VECTOR_LENGTH_MESSAGE);
    }

    let result = transform(mode, text, &secrets.key, &secrets.vector)?;
    debug!(result_len = result.len(), "operation complete");

    print_result(mode, &result);
    Ok(())
}

/// Print a fresh random vector
pub fn vector() -> Result<()> {
    println!("{}", generate_vector());
    Ok(())
}
