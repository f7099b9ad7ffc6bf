/// Configuration options for release-notes extraction
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// File name quoted in the not-found message
    pub changelog_name: String,
    /// Strip surrounding whitespace and blank lines from the section body
    pub trim_body: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            changelog_name: "CHANGELOG.md".to_string(),
            trim_body: true,
        }
    }
}

impl ExtractConfig {
    /// Text returned when no heading names the requested version
    #[must_use]
    pub fn not_found_message(&self, version: &str) -> String {
        format!(
            "Release notes for version {version} not found in {}",
            self.changelog_name
        )
    }
}
