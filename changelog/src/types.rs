use crate::error::ChangelogError;

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// A version section borrowed from a changelog document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub(crate) version: &'a str,
    pub(crate) heading: &'a str,
    pub(crate) raw: &'a str,
}

impl<'a> Section<'a> {
    /// The version named by the heading
    #[must_use]
    pub const fn version(&self) -> &'a str {
        self.version
    }

    /// The full heading line without its line break
    #[must_use]
    pub fn heading(&self) -> &'a str {
        self.heading.trim_end_matches(['\r', '\n'])
    }

    /// Everything between the heading line and the next heading, untouched
    #[must_use]
    pub const fn raw(&self) -> &'a str {
        self.raw
    }

    /// The section text with surrounding whitespace and blank lines removed
    #[must_use]
    pub fn body(&self) -> &'a str {
        self.raw.trim()
    }
}
