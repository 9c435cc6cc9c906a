//! Rendering of the fenced references tree.

use termtree::Tree;

use crate::domain::entities::{DescribedEntry, TreeBlock, FENCE};

/// Column width the file name is padded to before the comment marker.
pub const DEFAULT_NAME_WIDTH: usize = 25;

/// Line rendered under the label when there is nothing to list.
pub const EMPTY_LINE: &str = "(empty)";

/// Render `entries` below `label` as a fenced block.
///
/// Entries are rendered in the order given; callers sort them. Names shorter
/// than `name_width` are padded, longer names are kept whole.
pub fn render_tree(label: &str, entries: &[DescribedEntry], name_width: usize) -> TreeBlock {
    let mut lines = vec![FENCE.to_string()];

    if entries.is_empty() {
        lines.push(label.to_string());
        lines.push(EMPTY_LINE.to_string());
    } else {
        let tree = Tree::new(label.to_string()).with_leaves(
            entries
                .iter()
                .map(|e| format!("{:<width$}# {}", e.name, e.description, width = name_width)),
        );
        lines.extend(tree.to_string().lines().map(str::to_string));
    }

    lines.push(FENCE.to_string());
    TreeBlock::new(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entry(name: &str, description: &str) -> DescribedEntry {
        DescribedEntry::new(name, description)
    }

    #[test]
    fn given_no_entries_when_rendering_then_emits_empty_state() {
        let block = render_tree("references/", &[], DEFAULT_NAME_WIDTH);
        assert_eq!(block.lines(), ["```", "references/", "(empty)", "```"]);
    }

    #[test]
    fn given_two_entries_when_rendering_then_last_uses_corner_connector() {
        let entries = [
            entry("alpha.md", "Does alpha things"),
            entry("beta.md", "Beta Tool"),
        ];

        let block = render_tree("references/", &entries, DEFAULT_NAME_WIDTH);

        assert_eq!(
            block.to_string(),
            "```\n\
             references/\n\
             ├── alpha.md                 # Does alpha things\n\
             └── beta.md                  # Beta Tool\n\
             ```"
        );
    }

    #[test]
    fn given_single_entry_when_rendering_then_uses_corner_connector() {
        let block = render_tree("docs/", &[entry("only.md", "Only one")], DEFAULT_NAME_WIDTH);
        assert_eq!(block.lines().len(), 4);
        assert!(block.lines()[2].starts_with("└── only.md"));
    }

    #[rstest]
    #[case(10, "├── short.md  # Short")]
    #[case(4, "├── short.md# Short")]
    #[case(0, "├── short.md# Short")]
    fn given_name_width_when_rendering_then_pads_but_never_truncates(
        #[case] width: usize,
        #[case] expected_first: &str,
    ) {
        let entries = [entry("short.md", "Short"), entry("z.md", "Z")];
        let block = render_tree("refs/", &entries, width);
        assert_eq!(block.lines()[2], expected_first);
    }

    #[test]
    fn given_same_entries_when_rendering_twice_then_output_is_identical() {
        let entries = [entry("a.md", "A"), entry("b.md", "B"), entry("c.md", "C")];
        let first = render_tree("references/", &entries, DEFAULT_NAME_WIDTH);
        let second = render_tree("references/", &entries, DEFAULT_NAME_WIDTH);
        assert_eq!(first, second);

        let connectors: Vec<_> = first.lines()[2..5]
            .iter()
            .map(|l| l.chars().next().unwrap())
            .collect();
        assert_eq!(connectors, vec!['├', '├', '└']);
    }
}
