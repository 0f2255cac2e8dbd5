use serde::Serialize;

use crate::core::types::PredictionResult;
use crate::dataset::store::Dataset;
use crate::matching::scoring::ScoreTable;

/// Result of one prediction request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "predictions", rename_all = "snake_case")]
pub enum PredictionOutcome {
    /// At least one disease matched; ranked best first
    Matches(Vec<PredictionResult>),
    /// No disease matched any input token
    NoMatches,
}

impl PredictionOutcome {
    pub fn predictions(&self) -> &[PredictionResult] {
        match self {
            Self::Matches(results) => results,
            Self::NoMatches => &[],
        }
    }

    pub fn top_confidence(&self) -> Option<u8> {
        self.predictions().first().map(|p| p.confidence)
    }

    /// User-facing notice describing the outcome
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Matches(results) => format!(
                "Found {} potential diseases with highest confidence: {}%",
                results.len(),
                self.top_confidence().unwrap_or_default()
            ),
            Self::NoMatches => "No diseases found matching the provided symptoms.".to_string(),
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matches(_))
    }
}

/// Attach descriptions, sort by confidence, and keep the top `limit`.
///
/// The sort is stable: diseases with equal confidence stay in the order they
/// were first matched.
pub fn rank(
    scores: ScoreTable,
    dataset: &Dataset,
    limit: usize,
    fallback_description: &str,
) -> PredictionOutcome {
    let mut results: Vec<PredictionResult> = scores
        .into_entries()
        .into_iter()
        .map(|(disease, score)| {
            let description = dataset
                .describe(&disease)
                .filter(|d| !d.is_empty())
                .unwrap_or(fallback_description)
                .to_string();

            PredictionResult {
                disease,
                confidence: score.confidence,
                matching_symptoms: score.matched,
                description,
            }
        })
        .collect();

    results.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    results.truncate(limit);

    if results.is_empty() {
        PredictionOutcome::NoMatches
    } else {
        PredictionOutcome::Matches(results)
    }
}
