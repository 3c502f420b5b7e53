// Resume / job-description matching engine.
// tokenizer, scorer, shaper and analysis are pure and synchronous.
// handlers is the HTTP edge: upload parsing and text extraction.

pub mod analysis;
pub mod handlers;
pub mod scorer;
pub mod shaper;
pub mod tokenizer;

/// Tunable constants of the matching engine, grouped so the pure functions
/// can take them as an argument instead of reading global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPolicy {
    /// Words that never become keywords.
    pub stop_words: &'static [&'static str],
    /// Tokens this long or shorter are dropped.
    pub short_word_len: usize,
    /// Maximum entries per matched / missing list after dedup.
    pub display_cap: usize,
    /// Upper bound of the percentage score.
    pub max_score: u32,
}

impl MatchPolicy {
    pub const STANDARD: MatchPolicy = MatchPolicy {
        stop_words: &["the", "and", "with", "from", "this", "that"],
        short_word_len: 3,
        display_cap: 8,
        max_score: 100,
    };

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word)
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_standard() {
        assert_eq!(MatchPolicy::default(), MatchPolicy::STANDARD);
    }

    #[test]
    fn test_standard_stop_words() {
        let policy = MatchPolicy::STANDARD;
        for word in ["the", "and", "with", "from", "this", "that"] {
            assert!(policy.is_stop_word(word), "{word} should be a stop word");
        }
        assert!(!policy.is_stop_word("rust"));
        // Case-sensitive: callers lower-case before asking.
        assert!(!policy.is_stop_word("The"));
    }
}
