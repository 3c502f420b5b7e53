//! Analysis: the one operation the HTTP layer calls per upload.
//!
//! `analyze` = tokenize the JD → classify against the resume → shape both
//! lists. Request-local, no shared state; safe to call from any task.

use serde::{Deserialize, Serialize};

use crate::matching::scorer::match_keywords;
use crate::matching::shaper::shape;
use crate::matching::tokenizer::tokenize;
use crate::matching::MatchPolicy;

/// Display-ready result of one resume / JD comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub score: u32, // 0 – 100
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Compares a resume against a job description with the standard policy.
pub fn analyze(resume_text: &str, job_description_text: &str) -> AnalysisResult {
    analyze_with(&MatchPolicy::STANDARD, resume_text, job_description_text)
}

pub fn analyze_with(
    policy: &MatchPolicy,
    resume_text: &str,
    job_description_text: &str,
) -> AnalysisResult {
    let keywords = tokenize(job_description_text, policy);
    let outcome = match_keywords(resume_text, &keywords, policy);

    AnalysisResult {
        score: outcome.score.min(policy.max_score),
        matched: shape(&outcome.matched, policy),
        missing: shape(&outcome.missing, policy),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire format
// ────────────────────────────────────────────────────────────────────────────

/// JSON body of `POST /analyze`. Also accepted back by `POST /api/chat` as
/// score context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub score: u32,
    pub analysis: SkillAnalysis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAnalysis {
    pub hard_skills: KeywordLists,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordLists {
    #[serde(default)]
    pub matched: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
}

impl From<AnalysisResult> for AnalysisResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            score: result.score,
            analysis: SkillAnalysis {
                hard_skills: KeywordLists {
                    matched: result.matched,
                    missing: result.missing,
                },
            },
        }
    }
}
