// Decomposition rule cascade
//
// Rules are tried in a fixed order and the first one that produces parts
// wins. Only the compound rule looks at every candidate before choosing.
//
//   1. exact noun           -> [noun]
//   2. irregular plural     -> [plural_root_irregular]
//   3. regular plural       -> [plural_root, plural_suffix]
//   4. prefix + noun        -> [prefix, noun]
//   5. noun + suffix        -> [noun, suffix]
//   6. compound             -> [compound_root, compound_root]
//   7. fallback             -> [unknown]   (success = false)

mod affix;
mod compound;
mod plural;

pub use compound::{CompoundSplit, HalfMatch, MIN_COMPOUND_HALF, best_compound_split, score_compound};

use std::fmt;

use lexisplit_core::node::{DecompositionNode, NodeKind};
use lexisplit_core::tree::DecompositionTree;
use serde::Serialize;

use crate::dictionary::Dictionary;

/// The rule family that produced a decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    ExactNoun,
    IrregularPlural,
    RegularPlural,
    Prefix,
    Suffix,
    Compound,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::ExactNoun => "exact noun",
            Rule::IrregularPlural => "irregular plural",
            Rule::RegularPlural => "regular plural",
            Rule::Prefix => "prefix",
            Rule::Suffix => "suffix",
            Rule::Compound => "compound",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type RuleFn = fn(&str, &Dictionary) -> Option<Vec<DecompositionNode>>;

/// Rules in precedence order.
const CASCADE: [(Rule, RuleFn); 6] = [
    (Rule::ExactNoun, exact_noun),
    (Rule::IrregularPlural, irregular_plural),
    (Rule::RegularPlural, plural::split_regular_plural),
    (Rule::Prefix, affix::split_prefix),
    (Rule::Suffix, affix::split_suffix),
    (Rule::Compound, compound::split_compound),
];

fn exact_noun(token: &str, dict: &Dictionary) -> Option<Vec<DecompositionNode>> {
    dict.is_noun(token)
        .then(|| vec![DecompositionNode::noun(token)])
}

fn irregular_plural(token: &str, dict: &Dictionary) -> Option<Vec<DecompositionNode>> {
    dict.irregular_root(token)
        .filter(|root| !root.is_empty())
        .map(|root| vec![DecompositionNode::plural_root_irregular(root)])
}

/// Run the rule cascade on `token`.
///
/// Returns the rule that fired and the parts it produced, or `None` when
/// no rule applies. The empty token never decomposes.
pub fn decompose(token: &str, dict: &Dictionary) -> Option<(Rule, Vec<DecompositionNode>)> {
    if token.is_empty() {
        return None;
    }
    CASCADE
        .iter()
        .find_map(|&(rule, apply)| apply(token, dict).map(|parts| (rule, parts)))
}

/// Decompose a single token into a [`DecompositionTree`].
///
/// Deterministic and side-effect free: the same token and dictionary always
/// give an identical tree. A token no rule accepts (including the empty
/// string) yields `success = false` with one `unknown` node.
pub fn split_word(token: &str, dict: &Dictionary) -> DecompositionTree {
    match decompose(token, dict) {
        Some((rule, parts)) => {
            log::trace!("{token:?}: {rule} -> {parts:?}");
            DecompositionTree::decomposed(token, parts)
        }
        None => {
            log::trace!("{token:?}: no rule applies");
            DecompositionTree::unknown(token)
        }
    }
}

/// Decompose each token independently, preserving order.
pub fn classify<S: AsRef<str>>(tokens: &[S], dict: &Dictionary) -> Vec<DecompositionTree> {
    tokens
        .iter()
        .map(|t| split_word(t.as_ref(), dict))
        .collect()
}

/// A token labelled only as a known noun or unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenLabel {
    pub token: String,
    /// Either [`NodeKind::Noun`] or [`NodeKind::Unknown`].
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

/// Label each token by exact noun membership, without decomposing it.
pub fn label<S: AsRef<str>>(tokens: &[S], dict: &Dictionary) -> Vec<TokenLabel> {
    tokens
        .iter()
        .map(|t| {
            let token = t.as_ref();
            let kind = if dict.is_noun(token) {
                NodeKind::Noun
            } else {
                NodeKind::Unknown
            };
            TokenLabel {
                token: token.to_string(),
                kind,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexisplit_core::node::NodeKind::*;

    fn dict() -> Dictionary {
        Dictionary::builder()
            .nouns(["cat", "bus", "bu", "house", "boat", "leaf", "knife", "city", "box"])
            .nouns(["kindness", "kind", "child", "rain", "coat", "sun", "flower"])
            .irregular_plural("children", "child")
            .irregular_plural("mice", "mouse")
            .prefixes(["un", "re"])
            .suffixes(["ness", "ful"])
            .compound_roots(["sun", "flower", "light", "house"])
            .build()
    }

    fn parts(tree: &DecompositionTree) -> Vec<(&str, NodeKind)> {
        tree.parts().iter().map(|n| (n.value(), n.kind())).collect()
    }

    #[test]
    fn exact_noun_is_returned_unchanged() {
        let tree = split_word("cat", &dict());
        assert!(tree.success());
        assert_eq!(parts(&tree), vec![("cat", Noun)]);
    }

    #[test]
    fn exact_noun_beats_plural() {
        // "bus" ends in "s" and "bu" is a noun, but exact match comes first.
        assert_eq!(decompose("bus", &dict()).map(|(r, _)| r), Some(Rule::ExactNoun));
    }

    #[test]
    fn exact_noun_beats_suffix() {
        // "kindness" is kind + ness, but is itself a noun.
        assert_eq!(parts(&split_word("kindness", &dict())), vec![("kindness", Noun)]);
    }

    #[test]
    fn irregular_plural_maps_to_root() {
        let tree = split_word("children", &dict());
        assert!(tree.success());
        assert_eq!(parts(&tree), vec![("child", PluralRootIrregular)]);
    }

    #[test]
    fn empty_irregular_root_is_no_match() {
        let dict = Dictionary::from_json_str(r#"{ "irregular_plurals": { "oxen": "" } }"#).unwrap();
        let tree = split_word("oxen", &dict);
        assert!(!tree.success());
        assert_eq!(parts(&tree), vec![("oxen", Unknown)]);

        // Falls through to the next rule rather than stopping.
        let dict = Dictionary::builder()
            .noun("oxe")
            .irregular_plural("oxes", "")
            .build();
        assert_eq!(decompose("oxes", &dict).map(|(r, _)| r), Some(Rule::RegularPlural));
    }

    #[test]
    fn irregular_root_need_not_be_a_noun() {
        assert_eq!(parts(&split_word("mice", &dict())), vec![("mouse", PluralRootIrregular)]);
    }

    #[test]
    fn regular_plural_s() {
        assert_eq!(
            parts(&split_word("cats", &dict())),
            vec![("cat", PluralRoot), ("s", PluralSuffix)]
        );
    }

    #[test]
    fn regular_plural_es() {
        assert_eq!(
            parts(&split_word("boxes", &dict())),
            vec![("box", PluralRoot), ("es", PluralSuffix)]
        );
    }

    #[test]
    fn regular_plural_ies() {
        assert_eq!(
            parts(&split_word("cities", &dict())),
            vec![("city", PluralRoot), ("ies", PluralSuffix)]
        );
    }

    #[test]
    fn regular_plural_ves_tries_f_then_fe() {
        assert_eq!(
            parts(&split_word("leaves", &dict())),
            vec![("leaf", PluralRoot), ("ves", PluralSuffix)]
        );
        assert_eq!(
            parts(&split_word("knives", &dict())),
            vec![("knife", PluralRoot), ("ves", PluralSuffix)]
        );
    }

    #[test]
    fn prefix_with_noun_remainder() {
        assert_eq!(
            parts(&split_word("uncat", &dict())),
            vec![("un", Prefix), ("cat", Noun)]
        );
    }

    #[test]
    fn suffix_with_noun_root() {
        assert_eq!(
            parts(&split_word("catful", &dict())),
            vec![("cat", Noun), ("ful", Suffix)]
        );
    }

    #[test]
    fn bare_affix_is_not_split() {
        let d = dict();
        assert!(!split_word("un", &d).success());
        assert!(!split_word("ness", &d).success());
    }

    #[test]
    fn prefix_beats_suffix() {
        let d = Dictionary::builder()
            .nouns(["catful", "uncat"])
            .nouns(["cat"])
            .prefix("un")
            .suffix("ful")
            .build();
        // "uncatful": un + catful (prefix rule) before uncat + ful (suffix rule).
        assert_eq!(
            parts(&split_word("uncatful", &d)),
            vec![("un", Prefix), ("catful", Noun)]
        );
    }

    #[test]
    fn compound_of_two_nouns() {
        let tree = split_word("houseboat", &dict());
        assert!(tree.success());
        assert_eq!(
            parts(&tree),
            vec![("house", CompoundRoot), ("boat", CompoundRoot)]
        );
        assert_eq!(decompose("houseboat", &dict()).map(|(r, _)| r), Some(Rule::Compound));
    }

    #[test]
    fn compound_prefers_noun_halves_over_roots() {
        // sun|flower are both nouns (score 3).
        assert_eq!(
            parts(&split_word("sunflower", &dict())),
            vec![("sun", CompoundRoot), ("flower", CompoundRoot)]
        );
    }

    #[test]
    fn compound_accepts_weak_roots() {
        // "light" is only a compound root; "sun" is a noun (score 2).
        assert_eq!(
            parts(&split_word("sunlight", &dict())),
            vec![("sun", CompoundRoot), ("light", CompoundRoot)]
        );
    }

    #[test]
    fn unknown_token_falls_back() {
        let tree = split_word("zzz", &dict());
        assert!(!tree.success());
        assert_eq!(parts(&tree), vec![("zzz", Unknown)]);
    }

    #[test]
    fn empty_token_is_unknown() {
        let tree = split_word("", &dict());
        assert!(!tree.success());
        assert_eq!(parts(&tree), vec![("", Unknown)]);
    }

    #[test]
    fn classify_preserves_order() {
        let trees = classify(&["cats", "zzz", "children"], &dict());
        let originals: Vec<&str> = trees.iter().map(DecompositionTree::original).collect();
        assert_eq!(originals, vec!["cats", "zzz", "children"]);
        assert_eq!(
            trees.iter().map(DecompositionTree::success).collect::<Vec<_>>(),
            vec![true, false, true]
        );
    }

    #[test]
    fn label_marks_nouns_only() {
        let labels = label(&["cat", "cats"], &dict());
        assert_eq!(labels[0].kind, Noun);
        assert_eq!(labels[1].kind, Unknown);
        assert_eq!(
            serde_json::to_value(&labels[0]).unwrap(),
            serde_json::json!({ "token": "cat", "type": "noun" })
        );
    }

    #[test]
    fn rule_names() {
        assert_eq!(Rule::RegularPlural.to_string(), "regular plural");
        assert_eq!(Rule::Compound.as_str(), "compound");
    }
}
