// Word tokenizer
//
// Extracts maximal runs of ASCII letters from raw text, lowercased. Every
// other character (digits, punctuation, whitespace, any non-ASCII letter)
// ends the current run and is otherwise dropped.

use lexisplit_core::character::fold_word_char;
use lexisplit_core::token::Token;

/// Split text into lowercase word tokens, in input order.
///
/// Never fails; text without letters yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    tokens(text).into_iter().map(|t| t.text).collect()
}

/// Like [`tokenize`], but also records where each token came from.
pub fn tokens(text: &str) -> Vec<Token> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut start = 0;

    for (pos, c) in text.chars().enumerate() {
        match fold_word_char(c) {
            Some(letter) => {
                if current.is_empty() {
                    start = pos;
                }
                current.push(letter);
            }
            None => {
                if !current.is_empty() {
                    result.push(Token::new(std::mem::take(&mut current), start));
                }
            }
        }
    }

    if !current.is_empty() {
        result.push(Token::new(current, start));
    }

    result
}
