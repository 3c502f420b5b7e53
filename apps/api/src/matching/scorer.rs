//! Keyword scorer: classifies JD keywords against the resume text and
//! computes the coverage percentage.
//!
//! Matching is plain substring containment on the lower-cased resume, not a
//! whole-word match: "java" matches "javascript" and "react" matches
//! "reactive". Callers relying on the score should expect those hits.

use crate::matching::MatchPolicy;

/// Result of one classification pass. Lists are in keyword order and still
/// contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// 0 – `policy.max_score`
    pub score: u32,
}

/// Partitions `keywords` into matched / missing by presence in `resume_text`.
pub fn match_keywords(resume_text: &str, keywords: &[String], policy: &MatchPolicy) -> MatchOutcome {
    let resume = resume_text.to_lowercase();

    let (matched, missing): (Vec<String>, Vec<String>) = keywords
        .iter()
        .cloned()
        .partition(|keyword| resume.contains(keyword.as_str()));

    let score = coverage_score(matched.len(), keywords.len(), policy.max_score);

    MatchOutcome {
        matched,
        missing,
        score,
    }
}

/// `round(matched / total * 100)`, capped at `max_score`. Zero when there is
/// nothing to match against.
pub fn coverage_score(matched: usize, total: usize, max_score: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let percent = ((matched as f64 / total as f64) * 100.0).round() as u32;
    percent.min(max_score)
}
