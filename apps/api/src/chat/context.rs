use crate::matching::analysis::AnalysisResponse;

/// Builds the user context forwarded to the assistant.
///
/// With an analysis attached the question is prefixed with the score and the
/// missing keywords, so the model answers about this specific resume.
pub fn build_user_context(question: &str, analysis: Option<&AnalysisResponse>) -> String {
    match analysis {
        Some(analysis) => format!(
            "Resume Score: {}%. Missing: {}. Question: {}",
            analysis.score,
            analysis.analysis.hard_skills.missing.join(", "),
            question
        ),
        None => question.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::analysis::analyze;

    #[test]
    fn test_plain_question_passes_through() {
        assert_eq!(
            build_user_context("What should I learn next?", None),
            "What should I learn next?"
        );
    }

    #[test]
    fn test_analysis_prefixes_score_and_missing() {
        let analysis =
            AnalysisResponse::from(analyze("expert in python and react", "python react nodejs docker"));
        assert_eq!(
            build_user_context("How do I close the gap?", Some(&analysis)),
            "Resume Score: 50%. Missing: NODEJS, DOCKER. Question: How do I close the gap?"
        );
    }

    #[test]
    fn test_analysis_with_nothing_missing() {
        let analysis = AnalysisResponse::from(analyze("rust tokio", "rust tokio"));
        assert_eq!(
            build_user_context("Am I ready?", Some(&analysis)),
            "Resume Score: 100%. Missing: . Question: Am I ready?"
        );
    }
}
