// Whitespace tokenizer
//
// Splits text into words on Unicode whitespace. Each token keeps its raw
// form and index; normalization happens in `Token::new`.

use scrivere_core::character::char_len;
use scrivere_core::token::Token;

/// Split `text` into tokens in reading order.
///
/// Runs of whitespace count as a single separator; leading and trailing
/// whitespace produce no tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    tokens(text).collect()
}

/// Lazily iterate over the tokens of `text`.
pub fn tokens(text: &str) -> impl Iterator<Item = Token> + '_ {
    text.split_whitespace()
        .enumerate()
        .map(|(index, word)| Token::new(word, index))
}

/// Number of whitespace-separated words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of characters in `text`, counting Unicode scalar values.
pub fn character_count(text: &str) -> usize {
    char_len(text)
}
