//! Tokenizer: turns raw job-description text into an ordered keyword stream.

use crate::matching::MatchPolicy;

/// Extracts keywords from `text` in first-occurrence order.
///
/// The whole text is lower-cased, then split on runs of anything that is not
/// an ASCII letter, digit or underscore. Short tokens and stop words are
/// dropped. Duplicates are kept; dedup happens when results are shaped.
pub fn tokenize(text: &str, policy: &MatchPolicy) -> Vec<String> {
    let lowered = text.to_lowercase();
    split_words(&lowered)
        .filter(|word| word.len() > policy.short_word_len)
        .filter(|word| !policy.is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Splits on non-word characters, skipping the empty pieces produced by
/// leading, trailing or consecutive delimiters.
fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|piece| !piece.is_empty())
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
