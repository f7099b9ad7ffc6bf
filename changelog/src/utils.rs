use crate::error::ChangelogError;
use crate::types::Result;
use once_cell::sync::Lazy;
use regex::Regex;

/// Marker that opens every version heading line
pub const HEADING_PREFIX: &str = "## [";

/// Matches the start of any version heading line and captures the text after
/// `## [` up to the closing `]` or the end of the line.
pub static VERSION_HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^## \[([^\]\r\n]*)").expect("Failed to compile version heading regex")
});

/// Builds the pattern for the heading line of one version.
///
/// The version is escaped, so characters such as `+` or `.` match only
/// themselves. The match covers the whole heading line including its line
/// break; a heading on the last line without one does not match.
pub fn build_version_heading_pattern(version: &str) -> Result<Regex> {
    Regex::new(&format!(r"(?m)^## \[{}\][^\n]*\n", regex::escape(version)))
        .map_err(|e| ChangelogError::RegexError(e).with_context(format!("Invalid version {version}")))
}

/// Finds where the section starting at `from` ends: the start of the next
/// heading line, or the end of `content`.
pub fn find_section_end(content: &str, from: usize) -> usize {
    VERSION_HEADING_PATTERN
        .find_at(content, from)
        .map_or(content.len(), |m| m.start())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_pattern_keeps_annotation_in_match() {
        let pattern = build_version_heading_pattern("1.2.3").unwrap();
        let m = pattern.find("intro\n## [1.2.3] - 2024-05-01\nbody\n").unwrap();
        assert_eq!(m.as_str(), "## [1.2.3] - 2024-05-01\n");
    }

    #[test]
    fn test_heading_pattern_rejects_near_misses() {
        let pattern = build_version_heading_pattern("1.2.3").unwrap();
        assert!(!pattern.is_match("## [1.2.30]\n"));
        assert!(!pattern.is_match("### [1.2.3]\n"));
        assert!(!pattern.is_match(" ## [1.2.3]\n"));
        assert!(!pattern.is_match("## [1.2.3]"));
    }

    #[test]
    fn test_heading_pattern_is_literal() {
        assert!(!build_version_heading_pattern("1.0").unwrap().is_match("## [1x0]\n"));
        assert!(!build_version_heading_pattern("1.*").unwrap().is_match("## [1.2]\n"));
        assert!(
            build_version_heading_pattern("1.0.0+build.1")
                .unwrap()
                .is_match("## [1.0.0+build.1]\n")
        );
        assert!(
            !build_version_heading_pattern("1.0.0+build.1")
                .unwrap()
                .is_match("## [1.0.00build.1]\n")
        );
    }

    #[test]
    fn test_section_end_is_next_heading_line() {
        let content = "## [2.0.0]\nbody ## [x]\n## [1.0.0]\nold\n";
        assert_eq!(find_section_end(content, 11), 23);
        assert_eq!(&content[23..], "## [1.0.0]\nold\n");
    }

    #[test]
    fn test_section_end_defaults_to_document_end() {
        let content = "## [2.0.0]\nbody\n### [nested]\n";
        assert_eq!(find_section_end(content, 11), content.len());
    }

    #[test]
    fn test_version_heading_pattern_captures_version() {
        let versions: Vec<_> = VERSION_HEADING_PATTERN
            .captures_iter("# Changelog\n## [Unreleased]\n## [0.2.0] - x\n### [nope]\n## []\n## [open\n")
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect();
        assert_eq!(versions, vec!["Unreleased", "0.2.0", "", "open"]);
    }
}
