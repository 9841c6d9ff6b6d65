mod clipboard;
mod config;
mod errors;
mod generators;
mod logging;
mod password;

use std::io::{self, Write};

use clap::Parser;

use crate::clipboard::{ClipboardOutcome, copy_to_clipboard, request_copy};
use crate::config::Config;
use crate::errors::{AppError, ClipboardError};

#[derive(Parser, Debug)]
#[command(
    name = "passgen",
    version,
    about = "Generate a secure password",
    long_about = r#"
Generates a random password from a cryptographically secure source.

Letters (a-z, A-Z) are always used; digits and symbols can be added.
When --length is not given the length is read from PASSWORD_LENGTH,
either from the environment or from a .env file in the working directory.

Clipboard copying with --clip is only performed when CLIP_ALLOWED=true.
"#
)]
struct Cli {
    /// Length of the password (defaults to PASSWORD_LENGTH)
    #[arg(short, long, allow_negative_numbers = true)]
    length: Option<i64>,

    /// Include numbers in the password
    #[arg(short, long)]
    numbers: bool,

    /// Include symbols in the password
    #[arg(short, long)]
    symbols: bool,

    /// Copy password to clipboard
    #[arg(short, long)]
    clip: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let env_file = config::load_env_from_current_dir();
    logging::init_logger(cli.verbose);
    tracing::debug!(?cli, ?env_file, "parsed arguments");

    let result = env_file
        .and_then(|_| Config::from_env())
        .map_err(AppError::from)
        .and_then(|config| run(&cli, &config, &mut io::stdout().lock(), copy_to_clipboard));

    if let Err(e) = result {
        tracing::debug!(error = ?e, "passgen failed");
        // Nothing more can be reported if stderr itself is gone.
        let _ = report_error(&e, &mut io::stderr().lock());
        std::process::exit(1);
    }
}

fn run<W, F>(cli: &Cli, config: &Config, out: &mut W, copy: F) -> Result<(), AppError>
where
    W: Write,
    F: FnOnce(&str) -> Result<(), ClipboardError>,
{
    let length = config.resolve_length(cli.length)?;
    let password = password::generate(length, cli.numbers, cli.symbols)?;

    writeln!(out, "Generated Password: {}", password)?;

    match request_copy(config.clip_allowed, cli.clip) {
        ClipboardOutcome::NotRequested => {}
        ClipboardOutcome::Disabled => {
            writeln!(out, "Clipboard copying is disabled by environment settings")?;
        }
        ClipboardOutcome::Copy => {
            copy(&password)?;
            writeln!(out, "Password copied to clipboard")?;
        }
    }

    Ok(())
}

/// Writes the single user-facing line for a failed run.
fn report_error<W: Write>(error: &AppError, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", error_message(error))
}

fn error_message(error: &AppError) -> String {
    match error {
        AppError::Password(e) => format!("Error generating password: {}", e),
        AppError::Clipboard(e) => format!("Error copying to clipboard: {}", e),
        other => format!("Error: {}", other),
    }
}
