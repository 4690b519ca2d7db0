// Prefix and suffix splits
//
// An affix split is only accepted when the remaining side is itself a known
// noun. A dictionary affix on its own is never enough.

use lexisplit_core::node::DecompositionNode;

use crate::dictionary::Dictionary;

/// Split off the first listed prefix whose remainder is a noun.
pub(super) fn split_prefix(token: &str, dict: &Dictionary) -> Option<Vec<DecompositionNode>> {
    dict.prefixes().iter().find_map(|prefix| {
        let rest = token.strip_prefix(prefix.as_str())?;
        (!rest.is_empty() && dict.is_noun(rest)).then(|| {
            vec![
                DecompositionNode::prefix(prefix.as_str()),
                DecompositionNode::noun(rest),
            ]
        })
    })
}

/// Split off the first listed suffix whose root is a noun.
pub(super) fn split_suffix(token: &str, dict: &Dictionary) -> Option<Vec<DecompositionNode>> {
    dict.suffixes().iter().find_map(|suffix| {
        let root = token.strip_suffix(suffix.as_str())?;
        (!root.is_empty() && dict.is_noun(root)).then(|| {
            vec![
                DecompositionNode::noun(root),
                DecompositionNode::suffix(suffix.as_str()),
            ]
        })
    })
}
