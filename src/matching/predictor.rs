use std::sync::Arc;

use tracing::{info, warn};

use crate::dataset::source::DatasetSources;
use crate::dataset::store::{Dataset, DatasetError, LoadSummary};
use crate::matching::engine::{MatchingConfig, PredictionEngine};
use crate::matching::query::{PredictError, SymptomQuery};
use crate::matching::ranking::PredictionOutcome;

/// Loaded/not-loaded holder for the dataset used by predictions
///
/// The dataset is shared behind an `Arc`; a successful [`load`](Self::load)
/// replaces it in one assignment, so a caller holding the previous `Arc` keeps
/// a complete, consistent table set.
#[derive(Debug, Clone, Default)]
pub struct DiseasePredictor {
    dataset: Option<Arc<Dataset>>,
    config: MatchingConfig,
}

impl DiseasePredictor {
    pub fn new(config: MatchingConfig) -> Self {
        Self {
            dataset: None,
            config,
        }
    }

    /// Predictor that starts with an already-built dataset
    pub fn with_dataset(dataset: Dataset, config: MatchingConfig) -> Self {
        Self {
            dataset: Some(Arc::new(dataset)),
            config,
        }
    }

    /// Fetch both tables and swap them in.
    ///
    /// On failure the current dataset, if any, is kept.
    ///
    /// # Errors
    ///
    /// Returns a `DatasetError` if either table cannot be read or parsed.
    pub async fn load(&mut self, sources: &DatasetSources) -> Result<LoadSummary, DatasetError> {
        match Dataset::load(sources).await {
            Ok(dataset) => Ok(self.replace(dataset)),
            Err(e) => {
                warn!(error = %e, loaded = self.is_loaded(), "Dataset load failed");
                Err(e)
            }
        }
    }

    /// Install a dataset, replacing any previous one
    pub fn replace(&mut self, dataset: Dataset) -> LoadSummary {
        let summary = dataset.summary();
        if dataset.is_empty() {
            warn!("Loaded dataset has no disease records");
        }
        self.dataset = Some(Arc::new(dataset));
        info!("{}", summary.message());
        summary
    }

    /// Predict diseases for comma-separated symptom text
    ///
    /// # Errors
    ///
    /// Returns `PredictError::EmptyInput` or `PredictError::InputTooLong` for
    /// rejected input, or `PredictError::DatasetNotLoaded` before a successful load.
    pub fn predict(&self, input: &str) -> Result<PredictionOutcome, PredictError> {
        let query = SymptomQuery::parse(input)?;
        let dataset = self.dataset().ok_or(PredictError::DatasetNotLoaded)?;
        let engine = PredictionEngine::with_config(&dataset, self.config.clone());
        Ok(engine.predict_query(&query))
    }

    /// Shared handle to the current dataset
    pub fn dataset(&self) -> Option<Arc<Dataset>> {
        self.dataset.clone()
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DiseaseRecord;
    use crate::dataset::source::DatasetSource;
    use std::path::PathBuf;

    fn write_dataset(dir: &std::path::Path, rows: &str) -> DatasetSources {
        let diseases = dir.join("dataset.csv");
        let descriptions = dir.join("symptom_Description.csv");
        std::fs::write(&diseases, format!("Disease,Symptom_1,Symptom_2\n{rows}")).unwrap();
        std::fs::write(&descriptions, "Disease,Description\nFlu,Viral.\n").unwrap();
        DatasetSources::new(
            DatasetSource::File(diseases),
            DatasetSource::File(descriptions),
        )
    }

    #[test]
    fn test_predict_before_load() {
        let predictor = DiseasePredictor::default();
        assert!(!predictor.is_loaded());
        assert_eq!(
            predictor.predict("fever"),
            Err(PredictError::DatasetNotLoaded)
        );
    }

    #[test]
    fn test_empty_input_checked_before_dataset() {
        let predictor = DiseasePredictor::default();
        assert_eq!(predictor.predict(""), Err(PredictError::EmptyInput));
    }

    #[test]
    fn test_with_dataset() {
        let dataset = Dataset::from_tables(
            vec![DiseaseRecord::new("Flu", vec!["fever"])],
            Vec::new(),
        );
        let predictor = DiseasePredictor::with_dataset(dataset, MatchingConfig::default());
        let outcome = predictor.predict("fever").unwrap();
        assert_eq!(outcome.top_confidence(), Some(100));
    }

    #[tokio::test]
    async fn test_load_then_predict() {
        let dir = tempfile::tempdir().unwrap();
        let sources = write_dataset(dir.path(), "Flu,fever,cough\n");

        let mut predictor = DiseasePredictor::default();
        let summary = predictor.load(&sources).await.unwrap();
        assert_eq!(summary.records, 1);
        assert_eq!(summary.descriptions, 1);

        let outcome = predictor.predict("fever, cough").unwrap();
        assert_eq!(outcome.predictions()[0].description, "Viral.");
    }

    #[tokio::test]
    async fn test_reload_replaces_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let sources = write_dataset(dir.path(), "Flu,fever,cough\n");
        let mut predictor = DiseasePredictor::default();
        predictor.load(&sources).await.unwrap();
        let old = predictor.dataset().unwrap();

        let sources = write_dataset(dir.path(), "Cold,sneezing\n");
        predictor.load(&sources).await.unwrap();

        assert_eq!(old.records[0].disease, "Flu");
        assert_eq!(
            predictor.predict("fever").unwrap(),
            PredictionOutcome::NoMatches
        );
        assert!(predictor.predict("sneezing").unwrap().is_match());
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let sources = write_dataset(dir.path(), "Flu,fever,cough\n");
        let mut predictor = DiseasePredictor::default();
        predictor.load(&sources).await.unwrap();

        let broken = DatasetSources::new(
            DatasetSource::File(PathBuf::from("/nonexistent/dataset.csv")),
            sources.descriptions.clone(),
        );
        assert!(predictor.load(&broken).await.is_err());
        assert!(predictor.is_loaded());
        assert!(predictor.predict("fever").unwrap().is_match());
    }

    #[tokio::test]
    async fn test_failed_first_load_stays_unloaded() {
        let mut predictor = DiseasePredictor::default();
        let sources = DatasetSources::new(
            DatasetSource::File(PathBuf::from("/nonexistent/a.csv")),
            DatasetSource::File(PathBuf::from("/nonexistent/b.csv")),
        );
        assert!(predictor.load(&sources).await.is_err());
        assert!(!predictor.is_loaded());
    }
}
