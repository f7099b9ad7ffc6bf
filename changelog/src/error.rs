use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading a changelog
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Changelog not found at path: {0}")]
    NotFound(PathBuf),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadError(e) => format!("File operation failed: {e}"),
            Self::NotFound(path) => format!("Changelog not found at: {}", path.display()),
            Self::RegexError(e) => format!("Regular expression error: {e}"),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}
