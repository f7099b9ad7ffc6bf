use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

use crate::error::{CliError, Result};

pub const USAGE: &str = "Usage: extract-changelog <version> <path_to_changelog>";

#[derive(Parser, Debug)]
#[command(name = "extract-changelog")]
#[command(
    author,
    version,
    about = "Print the release notes for a version from a Markdown changelog"
)]
pub struct Cli {
    /// Version whose `## [<version>]` section is printed, matched literally
    #[arg(id = "release_version", value_name = "VERSION")]
    pub release_version: String,

    /// Path to the changelog file
    pub changelog_path: PathBuf,
}

/// Parses the process arguments.
///
/// `--help` and `--version` are handled by clap and exit immediately. Any
/// other argument problem becomes [`CliError::Usage`].
pub fn parse() -> Result<Cli> {
    parse_from(std::env::args_os())
}

pub fn parse_from<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => CliError::Usage,
    })
}
