//! CLI definitions and command implementations for rijndael-crypto.

pub mod commands;
pub mod interactive;

use std::fmt;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

/// Banner shown by interactive mode
pub const TITLE: &str = "Rijndael/AES Encryption/Decryption Tool";

/// CLI-side wording for a rejected vector
pub const VECTOR_LENGTH_MESSAGE: &str = "Security vector must be exactly 16 characters long.";

const USAGE_EXAMPLES: &str = "\
Examples:
  rijndael-crypto encrypt \"text\" \"key\" \"vector\"
  rijndael-crypto decrypt \"encryptedBase64\" \"key\" \"vector\"

Run without a command to be prompted for each value.";

/// Rijndael/AES Encryption/Decryption Tool
#[derive(Parser, Debug)]
#[command(name = "rijndael-crypto")]
#[command(author, version, about, long_about = None, after_help = USAGE_EXAMPLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt text and print the ciphertext as Base64
    Encrypt {
        /// Text to encrypt
        #[arg(allow_hyphen_values = true)]
        text: String,

        #[command(flatten)]
        secrets: Secrets,
    },

    /// Decrypt Base64 ciphertext and print the text
    Decrypt {
        /// Encrypted text (Base64 encoded)
        #[arg(allow_hyphen_values = true)]
        text: String,

        #[command(flatten)]
        secrets: Secrets,
    },

    /// Print a random 16-character security vector
    Vector,
}

/// Key and vector, positional or from the environment
#[derive(Args, Debug, Clone)]
pub struct Secrets {
    /// Encryption key (any length)
    #[arg(env = "RIJNDAEL_KEY", hide_env_values = true, allow_hyphen_values = true)]
    pub key: String,

    /// Security vector (must be 16 characters)
    #[arg(env = "RIJNDAEL_VECTOR", hide_env_values = true, allow_hyphen_values = true)]
    pub vector: String,
}

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Ran to the end, including sessions that reported an input error
    Completed,
    /// The user backed out of the operation menu
    Cancelled,
}

impl Flow {
    /// Process exit status for this outcome
    pub fn exit_code(self) -> ExitCode {
        match self {
            Flow::Completed => ExitCode::SUCCESS,
            Flow::Cancelled => ExitCode::FAILURE,
        }
    }
}

/// Direction of a cipher operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    /// All modes in menu order
    pub const ALL: [Mode; 2] = [Mode::Encrypt, Mode::Decrypt];

    /// Label printed in front of the result value
    pub fn result_label(self) -> &'static str {
        match self {
            Mode::Encrypt => "Encrypted text (Base64):",
            Mode::Decrypt => "Decrypted text:",
        }
    }

    /// Spinner message on success
    pub fn success_message(self) -> &'static str {
        match self {
            Mode::Encrypt => "Encryption successful!",
            Mode::Decrypt => "Decryption successful!",
        }
    }

    /// Prompt for the text to transform
    pub fn text_prompt(self) -> &'static str {
        match self {
            Mode::Encrypt => "Enter the text to encrypt",
            Mode::Decrypt => "Enter the encrypted text (Base64 encoded)",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encrypt => write!(f, "encrypt"),
            Mode::Decrypt => write!(f, "decrypt"),
        }
    }
}
