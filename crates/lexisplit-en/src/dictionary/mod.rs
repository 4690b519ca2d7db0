// Static lookup dictionary for the decomposition engine.
//
// The dictionary is built once (from JSON or programmatically) and never
// changes afterwards. Nouns are bucketed by their first character so a
// lookup only touches the words sharing that letter.

mod builder;

pub use builder::DictionaryBuilder;

use std::collections::BTreeMap;

use hashbrown::{HashMap, HashSet};
use serde::Deserialize;

/// Error type for dictionary loading failures.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The input was not valid JSON or did not match the exchange format.
    #[error("malformed dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk shape of the dictionary. Any collection may be absent or null.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DictionaryFile {
    nouns: Option<BTreeMap<String, Vec<String>>>,
    irregular_plurals: Option<BTreeMap<String, String>>,
    prefixes: Option<Vec<String>>,
    suffixes: Option<Vec<String>>,
    compound_roots: Option<Vec<String>>,
}

/// Immutable lookup tables used by every decomposition rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    nouns: HashMap<char, HashSet<String>>,
    irregular_plurals: HashMap<String, String>,
    prefixes: Vec<String>,
    suffixes: Vec<String>,
    compound_roots: HashSet<String>,
}

impl Dictionary {
    /// An empty dictionary. Every token decomposes to `unknown` against it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a dictionary in code.
    pub fn builder() -> DictionaryBuilder {
        DictionaryBuilder::default()
    }

    /// Parse a dictionary from JSON bytes.
    ///
    /// Missing collections are treated as empty. Only malformed JSON fails;
    /// `nouns` entries under a key that is not a single character, and
    /// nouns that do not begin with their letter, are skipped with a warning.
    pub fn from_json(data: &[u8]) -> Result<Self, DictionaryError> {
        let file: DictionaryFile = serde_json::from_slice(data)?;
        Ok(Self::from_file(file))
    }

    /// Parse a dictionary from a JSON string.
    pub fn from_json_str(data: &str) -> Result<Self, DictionaryError> {
        Self::from_json(data.as_bytes())
    }

    fn from_file(file: DictionaryFile) -> Self {
        let mut nouns: HashMap<char, HashSet<String>> = HashMap::new();
        for (key, words) in file.nouns.unwrap_or_default() {
            let Some(letter) = single_char(&key) else {
                log::warn!("skipping {} nouns under invalid letter key {key:?}", words.len());
                continue;
            };
            for word in words {
                if word.starts_with(letter) {
                    nouns.entry(letter).or_default().insert(word);
                } else {
                    log::warn!("skipping noun {word:?} filed under letter {letter:?}");
                }
            }
        }

        let dict = Self {
            nouns,
            irregular_plurals: file.irregular_plurals.unwrap_or_default().into_iter().collect(),
            prefixes: non_empty(file.prefixes.unwrap_or_default()),
            suffixes: non_empty(file.suffixes.unwrap_or_default()),
            compound_roots: file.compound_roots.unwrap_or_default().into_iter().collect(),
        };
        log::debug!(
            "loaded dictionary: {} nouns, {} irregular plurals, {} prefixes, {} suffixes, {} compound roots",
            dict.noun_count(),
            dict.irregular_plurals.len(),
            dict.prefixes.len(),
            dict.suffixes.len(),
            dict.compound_roots.len()
        );
        dict
    }

    /// Check whether `word` is a known noun.
    pub fn is_noun(&self, word: &str) -> bool {
        let Some(first) = word.chars().next() else {
            return false;
        };
        self.nouns
            .get(&first)
            .is_some_and(|bucket| bucket.contains(word))
    }

    /// Singular root of an irregular plural surface form, if listed.
    pub fn irregular_root(&self, word: &str) -> Option<&str> {
        self.irregular_plurals.get(word).map(String::as_str)
    }

    /// Known prefixes in precedence order.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Known suffixes in precedence order.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Check whether `word` is in the weaker compound-root vocabulary.
    pub fn is_compound_root(&self, word: &str) -> bool {
        self.compound_roots.contains(word)
    }

    /// Total number of nouns across all letters.
    pub fn noun_count(&self) -> usize {
        self.nouns.values().map(HashSet::len).sum()
    }

    /// Check whether every collection is empty.
    pub fn is_empty(&self) -> bool {
        self.noun_count() == 0
            && self.irregular_plurals.is_empty()
            && self.prefixes.is_empty()
            && self.suffixes.is_empty()
            && self.compound_roots.is_empty()
    }
}

/// The only character of `s`, or `None` if `s` has zero or several.
fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Drop empty affixes; they can never produce a valid split.
fn non_empty(affixes: Vec<String>) -> Vec<String> {
    affixes.into_iter().filter(|a| !a.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "nouns": { "c": ["cat", "child"], "h": ["house"] },
        "irregular_plurals": { "children": "child", "mice": "mouse" },
        "prefixes": ["un", "re"],
        "suffixes": ["ness", "ful"],
        "compound_roots": ["boat"]
    }"#;

    #[test]
    fn parses_full_dictionary() {
        let dict = Dictionary::from_json_str(SAMPLE).unwrap();
        assert!(dict.is_noun("cat"));
        assert!(dict.is_noun("house"));
        assert!(!dict.is_noun("boat"));
        assert_eq!(dict.irregular_root("mice"), Some("mouse"));
        assert_eq!(dict.prefixes(), &["un".to_string(), "re".to_string()]);
        assert_eq!(dict.suffixes(), &["ness".to_string(), "ful".to_string()]);
        assert!(dict.is_compound_root("boat"));
        assert_eq!(dict.noun_count(), 3);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let dict = Dictionary::from_json_str(r#"{ "nouns": { "d": ["dog"] } }"#).unwrap();
        assert!(dict.is_noun("dog"));
        assert!(dict.prefixes().is_empty());
        assert!(dict.suffixes().is_empty());
        assert_eq!(dict.irregular_root("dogs"), None);
        assert!(!dict.is_compound_root("dog"));
    }

    #[test]
    fn null_collections_default_to_empty() {
        let dict = Dictionary::from_json_str(r#"{ "nouns": null, "prefixes": null }"#).unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn empty_object_is_empty_dictionary() {
        let dict = Dictionary::from_json_str("{}").unwrap();
        assert!(dict.is_empty());
        assert_eq!(dict, Dictionary::new());
    }

    #[test]
    fn unknown_top_level_keys_are_ignored() {
        let dict = Dictionary::from_json_str(r#"{ "verbs": ["run"], "nouns": {} }"#).unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn invalid_letter_keys_are_skipped() {
        let dict =
            Dictionary::from_json_str(r#"{ "nouns": { "ca": ["cat"], "": ["x"], "d": ["dog"] } }"#)
                .unwrap();
        assert!(dict.is_noun("dog"));
        assert!(!dict.is_noun("cat"));
        assert!(!dict.is_noun("x"));
        assert_eq!(dict.noun_count(), 1);
    }

    #[test]
    fn misfiled_nouns_are_skipped() {
        let dict = Dictionary::from_json_str(
            r#"{ "nouns": { "C": ["cat"], "c": ["cow", "dog", ""], "d": ["dog"] } }"#,
        )
        .unwrap();
        assert!(dict.is_noun("cow"));
        assert!(dict.is_noun("dog"));
        assert!(!dict.is_noun("cat"));
        assert!(!dict.is_noun(""));
        assert_eq!(dict.noun_count(), 2);
    }

    #[test]
    fn letter_with_only_misfiled_nouns_leaves_no_bucket() {
        let dict = Dictionary::from_json_str(r#"{ "nouns": { "c": ["dog"] } }"#).unwrap();
        assert!(dict.is_empty());
        assert_eq!(dict, Dictionary::new());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Dictionary::from_json_str(r#"{ "nouns": ["cat"] }"#).unwrap_err();
        assert!(matches!(err, DictionaryError::Json(_)));
    }

    #[test]
    fn empty_affixes_are_dropped() {
        let dict = Dictionary::from_json_str(r#"{ "prefixes": ["", "un"], "suffixes": [""] }"#)
            .unwrap();
        assert_eq!(dict.prefixes(), &["un".to_string()]);
        assert!(dict.suffixes().is_empty());
    }

    #[test]
    fn empty_word_is_never_a_noun() {
        let dict = Dictionary::from_json_str(SAMPLE).unwrap();
        assert!(!dict.is_noun(""));
    }

    #[test]
    fn lookup_is_exact() {
        let dict = Dictionary::from_json_str(SAMPLE).unwrap();
        assert!(!dict.is_noun("ca"));
        assert!(!dict.is_noun("cats"));
        assert!(!dict.is_noun("Cat"));
    }
}
