use tracing::debug;

use crate::core::types::FALLBACK_DESCRIPTION;
use crate::dataset::store::Dataset;
use crate::matching::query::{PredictError, SymptomQuery};
use crate::matching::ranking::{rank, PredictionOutcome};
use crate::matching::scoring::{match_record, ScoreTable};

/// Default number of predictions returned
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Configuration for the prediction engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingConfig {
    /// Maximum number of ranked predictions to return
    pub max_results: usize,
    /// Description used for diseases missing from the description table
    pub fallback_description: String,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            fallback_description: FALLBACK_DESCRIPTION.to_string(),
        }
    }
}

/// Scores a symptom query against every row of a dataset
pub struct PredictionEngine<'a> {
    dataset: &'a Dataset,
    config: MatchingConfig,
}

impl<'a> PredictionEngine<'a> {
    /// Create a new engine with default configuration
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new engine with custom configuration
    pub fn with_config(dataset: &'a Dataset, config: MatchingConfig) -> Self {
        Self { dataset, config }
    }

    /// Per-disease scores for a query, in first-matched order
    pub fn score(&self, query: &SymptomQuery) -> ScoreTable {
        let mut table = ScoreTable::new(query.len());

        for record in &self.dataset.records {
            let matched = match_record(record, query.distinct_tokens());
            table.record(&record.disease, &matched);
        }

        debug!(
            tokens = query.len(),
            distinct = query.distinct_tokens().len(),
            rows = self.dataset.records.len(),
            diseases = table.len(),
            "Scored symptom query"
        );

        table
    }

    /// Score and rank a parsed query
    pub fn predict_query(&self, query: &SymptomQuery) -> PredictionOutcome {
        rank(
            self.score(query),
            self.dataset,
            self.config.max_results,
            &self.config.fallback_description,
        )
    }

    /// Parse free text, then score and rank it
    ///
    /// # Errors
    ///
    /// Returns `PredictError::EmptyInput` or `PredictError::InputTooLong` if the
    /// input is rejected before scoring.
    pub fn predict(&self, input: &str) -> Result<PredictionOutcome, PredictError> {
        let query = SymptomQuery::parse(input)?;
        Ok(self.predict_query(&query))
    }
}
