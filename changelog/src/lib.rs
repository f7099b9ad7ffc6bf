//! Release-notes extraction for Markdown changelogs.
//!
//! Sections are delimited by level-2 headings of the form `## [<version>]`,
//! optionally followed by a date or annotation on the same line.

pub mod config;
pub mod document;
pub mod error;
pub mod types;
pub mod utils;

pub use config::ExtractConfig;
pub use document::{Changelog, find_section};
pub use error::ChangelogError;
pub use types::{Result, Section};

use std::path::Path;

/// Extracts the release notes for `version` from changelog text.
///
/// Returns the trimmed section body, or a placeholder naming the version when
/// the changelog has no heading for it.
///
/// # Errors
///
/// Returns an error if `version` cannot be compiled into a heading pattern
pub fn extract(version: &str, document: &str) -> Result<String> {
    extract_with_config(version, document, &ExtractConfig::default())
}

/// Same as [`extract`] with explicit configuration.
///
/// # Errors
///
/// Returns an error if `version` cannot be compiled into a heading pattern
pub fn extract_with_config(
    version: &str,
    document: &str,
    config: &ExtractConfig,
) -> Result<String> {
    let notes = match find_section(document, version)? {
        Some(section) if config.trim_body => section.body().to_string(),
        Some(section) => section.raw().to_string(),
        None => config.not_found_message(version),
    };
    Ok(notes)
}

/// Reads the changelog at `changelog_path` and extracts the notes for `version`.
///
/// # Errors
///
/// Returns an error if the file cannot be read
pub fn extract_from_path(version: &str, changelog_path: &Path) -> Result<String> {
    Changelog::from_path(changelog_path)?.release_notes(version)
}
