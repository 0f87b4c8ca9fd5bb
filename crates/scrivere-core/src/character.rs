// Character classification and word normalization
//
// Normalization reduces a whitespace-delimited word to the key used for
// rule-table lookups: lower-cased, with everything except word characters
// and internal apostrophes removed.

// ---------------------------------------------------------------------------
// Apostrophes
// ---------------------------------------------------------------------------

/// ASCII apostrophe, the canonical form kept in normalized words.
pub const APOSTROPHE: char = '\'';

/// Typographic apostrophes folded to [`APOSTROPHE`] during normalization.
/// RIGHT SINGLE QUOTATION MARK is what most word processors insert for `'`.
const TYPOGRAPHIC_APOSTROPHES: &[char] = &['\u{2019}', '\u{2018}', '\u{02BC}'];

/// Check whether a character is an apostrophe (ASCII or typographic).
pub fn is_apostrophe(c: char) -> bool {
    c == APOSTROPHE || TYPOGRAPHIC_APOSTROPHES.contains(&c)
}

/// Check whether a character counts as a word character.
///
/// Word characters are alphanumeric characters in any script plus the
/// underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a single word for dictionary lookup.
///
/// Steps:
/// 1. lower-case (full Unicode mapping)
/// 2. fold typographic apostrophes to `'`
/// 3. drop every character that is neither a word character nor `'`
/// 4. trim apostrophes at both ends, so only internal ones survive
///
/// A word consisting only of punctuation normalizes to the empty string.
///
/// ```
/// use scrivere_core::character::normalize_word;
///
/// assert_eq!(normalize_word("Perchè?"), "perchè");
/// assert_eq!(normalize_word("«Un’altro»"), "un'altro");
/// assert_eq!(normalize_word("..."), "");
/// ```
pub fn normalize_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars().flat_map(char::to_lowercase) {
        if is_apostrophe(c) {
            out.push(APOSTROPHE);
        } else if is_word_char(c) {
            out.push(c);
        }
    }
    let trimmed = out.trim_matches(APOSTROPHE);
    if trimmed.len() == out.len() {
        out
    } else {
        trimmed.to_string()
    }
}

/// Check whether a word is already in normalized form.
pub fn is_normalized(word: &str) -> bool {
    !word.is_empty() && normalize_word(word) == word
}

/// Number of characters (Unicode scalar values) in a string.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
