// LexHandle: owns a dictionary and exposes the whole engine.
//
// Front ends (CLI, wasm) load the dictionary once, wrap it in a handle and
// call into it for every request. The handle holds no mutable state, so a
// shared reference can be used from any number of threads.

use lexisplit_core::token::Token;
use lexisplit_core::tree::DecompositionTree;

use crate::decompose::{self, TokenLabel};
use crate::dictionary::{Dictionary, DictionaryError};
use crate::tokenizer;

/// Error type for LexHandle construction failures.
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    /// The dictionary could not be loaded.
    #[error("failed to load dictionary: {0}")]
    Dictionary(#[from] DictionaryError),
}

/// Top-level handle owning the decomposition dictionary.
#[derive(Debug, Clone)]
pub struct LexHandle {
    dictionary: Dictionary,
}

impl LexHandle {
    /// Create a handle from the JSON dictionary exchange format.
    pub fn from_json(data: &[u8]) -> Result<Self, LexError> {
        let dictionary = Dictionary::from_json(data)?;
        Ok(Self { dictionary })
    }

    /// Create a handle around an already-built dictionary.
    pub fn from_dictionary(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Split text into lowercase word tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        tokenizer::tokenize(text)
    }

    /// Split text into tokens with source positions.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        tokenizer::tokens(text)
    }

    /// Decompose one token.
    pub fn split_word(&self, token: &str) -> DecompositionTree {
        decompose::split_word(token, &self.dictionary)
    }

    /// Decompose each token, preserving order.
    pub fn classify<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<DecompositionTree> {
        decompose::classify(tokens, &self.dictionary)
    }

    /// Label each token as a known noun or unknown.
    pub fn label<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<TokenLabel> {
        decompose::label(tokens, &self.dictionary)
    }

    /// Tokenize `text` and decompose every token.
    pub fn analyze(&self, text: &str) -> Vec<DecompositionTree> {
        let tokens = self.tokenize(text);
        log::debug!("analyzing {} tokens", tokens.len());
        self.classify(&tokens)
    }

    /// The library version string.
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
