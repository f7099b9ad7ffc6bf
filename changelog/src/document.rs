use crate::config::ExtractConfig;
use crate::error::ChangelogError;
use crate::types::{Result, Section};
use crate::utils::{
    HEADING_PREFIX, VERSION_HEADING_PATTERN, build_version_heading_pattern, find_section_end,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Finds the section for `version` in `content`.
///
/// The section starts after the first line of the form `## [<version>]...`
/// that ends with a line break, and runs up to the next line starting with
/// `## [` or the end of the document.
///
/// # Errors
/// Returns error if `version` cannot be compiled into a heading pattern
pub fn find_section<'a>(content: &'a str, version: &str) -> Result<Option<Section<'a>>> {
    let heading_pattern = build_version_heading_pattern(version)?;

    let Some(heading) = heading_pattern.find(content) else {
        return Ok(None);
    };

    let body_end = find_section_end(content, heading.end());
    let version_start = heading.start() + HEADING_PREFIX.len();

    Ok(Some(Section {
        version: &content[version_start..version_start + version.len()],
        heading: heading.as_str(),
        raw: &content[heading.end()..body_end],
    }))
}

/// A changelog document read in full
#[derive(Debug, Clone)]
pub struct Changelog {
    path: Option<PathBuf>,
    content: String,
    config: ExtractConfig,
}

impl Changelog {
    /// Reads a changelog from disk
    ///
    /// # Errors
    /// Returns error if the file does not exist or cannot be read
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ChangelogError::NotFound(path.clone()),
            _ => ChangelogError::ReadError(e)
                .with_context(format!("Failed to read {}", path.display())),
        })?;

        Ok(Self {
            path: Some(path),
            content,
            config: ExtractConfig::default(),
        })
    }

    /// Wraps changelog text that is already in memory
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            path: None,
            content: content.into(),
            config: ExtractConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ExtractConfig) -> Self {
        self.config = config;
        self
    }

    /// Gets the section for a version, if the changelog has one
    ///
    /// # Errors
    /// Returns error if `version` cannot be compiled into a heading pattern
    pub fn section(&self, version: &str) -> Result<Option<Section<'_>>> {
        find_section(&self.content, version)
    }

    /// Gets the release notes for a version.
    ///
    /// A missing version yields a readable placeholder naming the version
    /// instead of an error, so callers always get text to publish.
    ///
    /// # Errors
    /// Returns error if `version` cannot be compiled into a heading pattern
    pub fn release_notes(&self, version: &str) -> Result<String> {
        crate::extract_with_config(version, &self.content, &self.config)
    }

    /// Lists the versions named by `## [..]` headings, in document order.
    ///
    /// Every line listed here also ends the section above it.
    #[must_use]
    pub fn versions(&self) -> Vec<&str> {
        VERSION_HEADING_PATTERN
            .captures_iter(&self.content)
            .filter_map(|captures| captures.get(1).map(|m| m.as_str()))
            .collect()
    }

    /// Gets the path the changelog was read from
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Gets the raw content of the changelog
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Gets a reference to the extraction configuration
    #[must_use]
    pub const fn config(&self) -> &ExtractConfig {
        &self.config
    }
}
