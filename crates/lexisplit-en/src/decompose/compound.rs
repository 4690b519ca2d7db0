// Compound splitting
//
// Every split point leaving at least MIN_COMPOUND_HALF characters on both
// sides is scored by dictionary membership of its halves. Splits whose
// halves are not both recognised are not candidates at all.

use lexisplit_core::node::DecompositionNode;

use crate::dictionary::Dictionary;

/// Minimum number of characters in each half of a compound.
pub const MIN_COMPOUND_HALF: usize = 2;

/// How a compound half was recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HalfMatch {
    /// The half is a known noun.
    Noun,
    /// The half is only in the compound-root vocabulary.
    Root,
}

impl HalfMatch {
    /// Classify a half; nouns take priority over compound roots.
    pub fn of(half: &str, dict: &Dictionary) -> Option<Self> {
        if dict.is_noun(half) {
            Some(HalfMatch::Noun)
        } else if dict.is_compound_root(half) {
            Some(HalfMatch::Root)
        } else {
            None
        }
    }
}

/// Score a split from the classification of its halves.
///
/// | left | right | score |
/// |------|-------|-------|
/// | noun | noun  | 3     |
/// | noun | root  | 2     |
/// | root | noun  | 2     |
/// | root | root  | 1     |
///
/// Any unrecognised half disqualifies the split (`None`).
pub fn score_compound(left: Option<HalfMatch>, right: Option<HalfMatch>) -> Option<u8> {
    use HalfMatch::{Noun, Root};
    match (left?, right?) {
        (Noun, Noun) => Some(3),
        (Noun, Root) | (Root, Noun) => Some(2),
        (Root, Root) => Some(1),
    }
}

/// A scored compound split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundSplit<'a> {
    pub left: &'a str,
    pub right: &'a str,
    pub score: u8,
}

/// Find the highest-scoring compound split of `token`.
///
/// Ties go to the split with the shortest left half.
pub fn best_compound_split<'a>(token: &'a str, dict: &Dictionary) -> Option<CompoundSplit<'a>> {
    let total = token.chars().count();
    let mut best: Option<CompoundSplit<'a>> = None;

    for (left_len, (at, _)) in token.char_indices().enumerate().skip(MIN_COMPOUND_HALF) {
        if total - left_len < MIN_COMPOUND_HALF {
            break;
        }
        let (left, right) = token.split_at(at);
        let Some(score) = score_compound(HalfMatch::of(left, dict), HalfMatch::of(right, dict))
        else {
            continue;
        };
        if best.is_none_or(|b| score > b.score) {
            best = Some(CompoundSplit { left, right, score });
        }
    }

    best
}

pub(super) fn split_compound(token: &str, dict: &Dictionary) -> Option<Vec<DecompositionNode>> {
    best_compound_split(token, dict).map(|split| {
        vec![
            DecompositionNode::compound_root(split.left),
            DecompositionNode::compound_root(split.right),
        ]
    })
}
