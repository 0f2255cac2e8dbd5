use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;
use tracing::info;

use crate::core::types::{DiseaseDescription, DiseaseRecord};
use crate::dataset::source::{build_client, DatasetSources};
use crate::dataset::vocabulary::SymptomVocabulary;
use crate::parsing::csv::{parse_description_text, parse_disease_text};
use crate::parsing::ParseError;
use crate::utils::validation::compute_fingerprint;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to initialize HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to parse {table}: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: ParseError,
    },
}

/// Counts and provenance reported after a successful load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub records: usize,
    pub descriptions: usize,
    pub diseases: usize,
    pub fingerprint: String,
    pub loaded_at: String,
}

impl LoadSummary {
    /// One-line notice shown to the user after loading
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Loaded {} disease records and {} descriptions.",
            self.records, self.descriptions
        )
    }
}

/// The in-memory disease and description tables
///
/// A dataset is immutable once built. Reloading produces a new `Dataset` that
/// replaces the old one as a whole.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Disease rows in file order
    pub records: Vec<DiseaseRecord>,

    /// Description rows in file order
    pub descriptions: Vec<DiseaseDescription>,

    /// MD5 over the raw text of both tables
    pub fingerprint: String,

    /// RFC 3339 UTC timestamp of when the tables were parsed
    pub loaded_at: String,

    /// Where the tables came from, if loaded from sources
    pub sources: Option<DatasetSources>,
}

impl Dataset {
    /// Build a dataset from already-parsed tables
    pub fn from_tables(records: Vec<DiseaseRecord>, descriptions: Vec<DiseaseDescription>) -> Self {
        Self {
            records,
            descriptions,
            fingerprint: String::new(),
            loaded_at: chrono::Utc::now().to_rfc3339(),
            sources: None,
        }
    }

    /// Parse a dataset from the raw text of both tables
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Parse` if either table is rejected.
    pub fn from_text(disease_text: &str, description_text: &str) -> Result<Self, DatasetError> {
        let records = parse_disease_text(disease_text).map_err(|source| DatasetError::Parse {
            table: "disease table",
            source,
        })?;
        let descriptions =
            parse_description_text(description_text).map_err(|source| DatasetError::Parse {
                table: "description table",
                source,
            })?;

        let mut dataset = Self::from_tables(records, descriptions);
        dataset.fingerprint = compute_fingerprint(&[disease_text, description_text]);
        Ok(dataset)
    }

    /// Fetch and parse both tables
    ///
    /// # Errors
    ///
    /// Returns a `DatasetError` if either source cannot be read or parsed.
    pub async fn load(sources: &DatasetSources) -> Result<Self, DatasetError> {
        let client = build_client()?;

        let disease_text = sources.diseases.fetch_text(&client).await?;
        let description_text = sources.descriptions.fetch_text(&client).await?;

        let mut dataset = Self::from_text(&disease_text, &description_text)?;
        dataset.sources = Some(sources.clone());

        info!(
            records = dataset.records.len(),
            descriptions = dataset.descriptions.len(),
            fingerprint = %dataset.fingerprint,
            "Loaded dataset"
        );

        Ok(dataset)
    }

    /// Description for a disease: first exact, case-sensitive name match
    pub fn describe(&self, disease: &str) -> Option<&str> {
        self.descriptions
            .iter()
            .find(|d| d.disease == disease)
            .map(|d| d.description.as_str())
    }

    /// Number of distinct disease names in the disease table
    pub fn disease_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.disease.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Sorted set of every symptom in the disease table
    pub fn vocabulary(&self) -> SymptomVocabulary {
        SymptomVocabulary::from_records(&self.records)
    }

    pub fn summary(&self) -> LoadSummary {
        LoadSummary {
            records: self.records.len(),
            descriptions: self.descriptions.len(),
            diseases: self.disease_count(),
            fingerprint: self.fingerprint.clone(),
            loaded_at: self.loaded_at.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
