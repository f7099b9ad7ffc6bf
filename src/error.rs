use changelog::ChangelogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Changelog error: {0}")]
    Changelog(#[from] ChangelogError),

    #[error("Wrong number of arguments")]
    Usage,
}

impl CliError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Changelog(err) => err.user_message(),
            Self::Usage => crate::cli::USAGE.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
