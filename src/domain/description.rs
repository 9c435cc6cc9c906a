//! Description extraction from markdown content.
//!
//! Rules are tried in order. Each rule scans every line top-to-bottom and the
//! first rule with a match wins, so a blockquote further down the file still
//! beats a heading on the first line.

use crate::domain::entities::DescriptionSource;

/// A line extractor tagged with the source it reports.
#[derive(Clone, Copy)]
pub struct DescriptionRule {
    pub source: DescriptionSource,
    pub extract: fn(&str) -> Option<&str>,
}

/// Rules in precedence order: blockquote summary, then level-one heading.
pub const DESCRIPTION_RULES: &[DescriptionRule] = &[
    DescriptionRule {
        source: DescriptionSource::Blockquote,
        extract: blockquote,
    },
    DescriptionRule {
        source: DescriptionSource::Heading,
        extract: heading,
    },
];

/// Return the description text and the rule that produced it.
///
/// `None` means no rule matched and the caller should fall back. A leading
/// byte-order mark is ignored.
pub fn extract_description(content: &str) -> Option<(DescriptionSource, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    DESCRIPTION_RULES.iter().find_map(|rule| {
        content
            .lines()
            .find_map(rule.extract)
            .map(|text| (rule.source, text))
    })
}

fn blockquote(line: &str) -> Option<&str> {
    strip_marker(line, "> ")
}

fn heading(line: &str) -> Option<&str> {
    strip_marker(line, "# ")
}

fn strip_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.trim()
        .strip_prefix(marker)
        .map(str::trim)
        .filter(|rest| !rest.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use crate::domain::entities::DescriptionSource::{Blockquote, Heading};

    #[rstest]
    #[case("> Does alpha things", Some((Blockquote, "Does alpha things")))]
    #[case("# Beta Tool", Some((Heading, "Beta Tool")))]
    #[case("   >   padded summary   ", Some((Blockquote, "padded summary")))]
    #[case("## Second level only", None)]
    #[case(">no space", None)]
    #[case("> ", None)]
    #[case("#", None)]
    #[case("", None)]
    #[case("\u{FEFF}> Summary\n# Title", Some((Blockquote, "Summary")))]
    #[case("\u{FEFF}# Title\n", Some((Heading, "Title")))]
    fn given_single_line_when_extracting_then_matches_expected(
        #[case] content: &str,
        #[case] expected: Option<(DescriptionSource, &str)>,
    ) {
        assert_eq!(extract_description(content), expected);
    }

    #[test]
    fn given_heading_before_blockquote_when_extracting_then_blockquote_wins() {
        let content = "# Title\n\nSome intro.\n\n> The real summary\n";
        assert_eq!(
            extract_description(content),
            Some((Blockquote, "The real summary"))
        );
    }

    #[test]
    fn given_blockquote_then_heading_when_extracting_then_ignores_heading() {
        let content = "> First summary\n# Heading\n> Second summary\n";
        assert_eq!(
            extract_description(content),
            Some((Blockquote, "First summary"))
        );
    }

    #[test]
    fn given_crlf_line_endings_when_extracting_then_strips_carriage_return() {
        let content = "# Windows Heading\r\nbody\r\n";
        assert_eq!(
            extract_description(content),
            Some((Heading, "Windows Heading"))
        );
    }

    #[test]
    fn given_rules_when_listed_then_blockquote_precedes_heading() {
        let sources: Vec<_> = DESCRIPTION_RULES.iter().map(|r| r.source).collect();
        assert_eq!(sources, vec![Blockquote, Heading]);
    }
}
