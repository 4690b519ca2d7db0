// Token type produced by the tokenizer

/// A lowercase word token together with its location in the source text.
///
/// Positions are measured in characters, not bytes, so that they line up
/// with what a user sees in an editor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The lowercased letters of the token. Never empty.
    pub text: String,

    /// Character offset of the first letter within the source text.
    pub pos: usize,

    /// Number of source characters covered by the token.
    pub len: usize,
}

impl Token {
    /// Create a new token starting at `pos`.
    pub fn new(text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self { text, pos, len }
    }

    /// Character offset one past the last letter.
    pub fn end(&self) -> usize {
        self.pos + self.len
    }

    /// The token text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
