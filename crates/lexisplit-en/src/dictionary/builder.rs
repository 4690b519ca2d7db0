// Programmatic dictionary construction

use super::Dictionary;

/// Builds a [`Dictionary`] in code.
///
/// Nouns are filed under their own first character, so the letter
/// invariant holds by construction. Empty nouns and affixes are ignored.
///
/// ```
/// use lexisplit_en::dictionary::Dictionary;
///
/// let dict = Dictionary::builder()
///     .nouns(["house", "boat"])
///     .irregular_plural("children", "child")
///     .prefix("un")
///     .build();
/// assert!(dict.is_noun("boat"));
/// ```
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    dict: Dictionary,
}

impl DictionaryBuilder {
    pub fn noun(mut self, word: impl Into<String>) -> Self {
        let word = word.into();
        if let Some(first) = word.chars().next() {
            self.dict.nouns.entry(first).or_default().insert(word);
        }
        self
    }

    pub fn nouns<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        words.into_iter().fold(self, |b, w| b.noun(w))
    }

    pub fn irregular_plural(mut self, surface: impl Into<String>, root: impl Into<String>) -> Self {
        self.dict
            .irregular_plurals
            .insert(surface.into(), root.into());
        self
    }

    /// Append a prefix; earlier prefixes take precedence.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !prefix.is_empty() {
            self.dict.prefixes.push(prefix);
        }
        self
    }

    pub fn prefixes<I, S>(self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        prefixes.into_iter().fold(self, |b, p| b.prefix(p))
    }

    /// Append a suffix; earlier suffixes take precedence.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        if !suffix.is_empty() {
            self.dict.suffixes.push(suffix);
        }
        self
    }

    pub fn suffixes<I, S>(self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        suffixes.into_iter().fold(self, |b, s| b.suffix(s))
    }

    pub fn compound_root(mut self, root: impl Into<String>) -> Self {
        self.dict.compound_roots.insert(root.into());
        self
    }

    pub fn compound_roots<I, S>(self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        roots.into_iter().fold(self, |b, r| b.compound_root(r))
    }

    pub fn build(self) -> Dictionary {
        self.dict
    }
}
