// Regular plural endings

use lexisplit_core::node::DecompositionNode;

use crate::dictionary::Dictionary;

/// Plural endings in priority order, each with the singular endings to try
/// in place of it. The specific endings come before the looser "es"/"s".
const PLURAL_ENDINGS: [(&str, &[&str]); 4] = [
    ("ies", &["y"]),
    ("ves", &["f", "fe"]),
    ("es", &[""]),
    ("s", &[""]),
];

/// Split a regular plural into its singular root and ending.
///
/// The first candidate root (in ending priority order) that is a known noun
/// wins. The ending alone never counts as a plural: some stem must remain.
pub(super) fn split_regular_plural(
    token: &str,
    dict: &Dictionary,
) -> Option<Vec<DecompositionNode>> {
    for (ending, replacements) in PLURAL_ENDINGS {
        let Some(stem) = token.strip_suffix(ending) else {
            continue;
        };
        if stem.is_empty() {
            continue;
        }
        for replacement in replacements {
            let root = format!("{stem}{replacement}");
            if dict.is_noun(&root) {
                return Some(vec![
                    DecompositionNode::plural_root(root),
                    DecompositionNode::plural_suffix(ending),
                ]);
            }
        }
    }
    None
}
