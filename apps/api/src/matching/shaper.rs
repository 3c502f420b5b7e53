use std::collections::HashSet;

use crate::matching::MatchPolicy;

/// Dedups `keywords` keeping the first occurrence, upper-cases them for
/// display and keeps at most `policy.display_cap` entries.
pub fn shape(keywords: &[String], policy: &MatchPolicy) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(keywords.len());
    keywords
        .iter()
        .filter(|keyword| seen.insert(keyword.as_str()))
        .take(policy.display_cap)
        .map(|keyword| keyword.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let shaped = shape(
            &keywords(&["ruby", "java", "ruby", "java", "rails"]),
            &MatchPolicy::STANDARD,
        );
        assert_eq!(shaped, vec!["RUBY", "JAVA", "RAILS"]);
    }

    #[test]
    fn test_caps_after_dedup() {
        let words: Vec<String> = (0..12).map(|i| format!("skill{i:02}")).collect();
        let mut doubled = words.clone();
        doubled.extend(words.iter().cloned());

        let shaped = shape(&doubled, &MatchPolicy::STANDARD);
        assert_eq!(shaped.len(), 8);
        assert_eq!(shaped.first().map(String::as_str), Some("SKILL00"));
        assert_eq!(shaped.last().map(String::as_str), Some("SKILL07"));
    }

    #[test]
    fn test_empty_input() {
        assert!(shape(&[], &MatchPolicy::STANDARD).is_empty());
    }

    #[test]
    fn test_custom_cap() {
        let policy = MatchPolicy {
            display_cap: 2,
            ..MatchPolicy::STANDARD
        };
        let shaped = shape(&keywords(&["aaaa", "bbbb", "cccc"]), &policy);
        assert_eq!(shaped, vec!["AAAA", "BBBB"]);
    }

    #[test]
    fn test_is_deterministic() {
        let input = keywords(&["kafka", "redis", "kafka", "spark"]);
        assert_eq!(
            shape(&input, &MatchPolicy::STANDARD),
            shape(&input, &MatchPolicy::STANDARD)
        );
    }
}
