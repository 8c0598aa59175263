//! Interactive mode: pick an operation, answer the prompts, see the result.

use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::commands::{print_result, transform, vector_has_valid_length};
use super::{Flow, Mode, TITLE, VECTOR_LENGTH_MESSAGE};

const CANCELLED_MESSAGE: &str = "Operation cancelled";

/// Print the tool banner
pub fn print_banner() {
    println!("\n{}", TITLE.green().bold());
    println!("{}\n", "=".repeat(TITLE.len()).green());
}

/// Map a menu answer to a mode; `None` means the menu was dismissed
pub fn mode_from_choice(choice: Option<usize>) -> Option<Mode> {
    choice.and_then(|index| Mode::ALL.get(index).copied())
}

/// Run the prompt-driven flow
pub fn run() -> Result<Flow> {
    print_banner();

    let theme = ColorfulTheme::default();

    let choice = Select::with_theme(&theme)
        .with_prompt("Choose operation")
        .items(&Mode::ALL)
        .default(0)
        .interact_opt()
        .ok()
        .flatten();

    let Some(mode) = mode_from_choice(choice) else {
        eprintln!("{}", CANCELLED_MESSAGE.red());
        return Ok(Flow::Cancelled);
    };
    debug!(%mode, "interactive mode");

    let text: String = Input::with_theme(&theme)
        .with_prompt(mode.text_prompt())
        .allow_empty(true)
        .interact_text()
        .context("Cannot read text")?;

    let key = Password::with_theme(&theme)
        .with_prompt("Enter the encryption key (any length)")
        .allow_empty_password(true)
        .interact()
        .context("Cannot read encryption key")?;

    let vector: String = Input::with_theme(&theme)
        .with_prompt("Enter the security vector (must be 16 characters)")
        .allow_empty(true)
        .interact_text()
        .context("Cannot read security vector")?;

    // Reported, not fatal: the session simply ends
    if !vector_has_valid_length(&vector) {
        eprintln!("{} {}", "Error:".red().bold(), VECTOR_LENGTH_MESSAGE.red());
        return Ok(Flow::Completed);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .context("Invalid spinner template")?,
    );
    spinner.set_message("Processing...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = transform(mode, &text, &key, &vector);
    spinner.finish_and_clear();

    match outcome {
        Ok(result) => {
            println!("{} {}", "✔".green(), mode.success_message().green());
            print_result(mode, &result);
        }
        Err(err) => {
            debug!(error = %err, "operation failed");
            eprintln!("{} {}", "✖".red(), err.to_string().red());
        }
    }

    Ok(Flow::Completed)
}
