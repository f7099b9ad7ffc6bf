mod cli;
mod error;
mod ui;

use cli::Cli;
use error::{CliError, Result};
use std::process;

fn main() {
    if let Err(err) = cli::parse().and_then(run) {
        match err {
            CliError::Usage => ui::plain_message(&err.user_message()),
            _ => ui::error_message(&err.user_message()),
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let notes = changelog::extract_from_path(&cli.release_version, &cli.changelog_path)?;
    ui::plain_message(&notes);
    Ok(())
}
