//! Output helpers shared across commands

use scnuml_errors::error::{CliErrorKind, Error, Result};
use text_trees::{FormatCharacters, StringTreeNode, TreeFormatting};

/// Tree formatter for consistent tree output across commands
pub struct TreeFormatter {
    ascii: bool,
}

impl TreeFormatter {
    pub fn new(ascii: bool) -> Self {
        Self { ascii }
    }

    /// Format a StringTreeNode into a string with consistent styling
    pub fn format_tree(&self, tree: &StringTreeNode) -> Result<String> {
        let format_chars = if self.ascii {
            FormatCharacters::ascii()
        } else {
            FormatCharacters::box_chars()
        };
        let formatting = TreeFormatting::dir_tree(format_chars);
        tree.to_string_with_format(&formatting).map_err(|e| {
            Error::cli(
                format!("failed to format tree: {e}"),
                CliErrorKind::OutputFormatError,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_and_box_styles_differ() {
        let tree = StringTreeNode::with_child_nodes(
            "root".to_string(),
            vec![StringTreeNode::new("leaf".to_string())].into_iter(),
        );

        let ascii = TreeFormatter::new(true).format_tree(&tree).unwrap();
        let boxed = TreeFormatter::new(false).format_tree(&tree).unwrap();

        assert!(ascii.contains("root"));
        assert!(ascii.contains("leaf"));
        assert_ne!(ascii, boxed);
    }
}
