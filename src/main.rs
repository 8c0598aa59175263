//! rijndael-crypto CLI - AES-128-CBC text encryption
//!
//! Usage:
//!   rijndael-crypto                                   - interactive prompts
//!   rijndael-crypto encrypt <text> <key> <vector>     - encrypt to Base64
//!   rijndael-crypto decrypt <base64> <key> <vector>   - decrypt from Base64
//!   rijndael-crypto vector                            - random 16-char vector

mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, Mode};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Initialize logging; stdout is reserved for results
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rijndael_crypto={}", log_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        None => return Ok(cli::interactive::run()?.exit_code()),
        Some(Commands::Encrypt { text, secrets }) => {
            cli::commands::run(Mode::Encrypt, &text, &secrets)?
        }
        Some(Commands::Decrypt { text, secrets }) => {
            cli::commands::run(Mode::Decrypt, &text, &secrets)?
        }
        Some(Commands::Vector) => cli::commands::vector()?,
    }

    Ok(ExitCode::SUCCESS)
}
