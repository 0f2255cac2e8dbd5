use serde::Serialize;
use std::collections::BTreeSet;

use crate::core::types::DiseaseRecord;

/// Default number of vocabulary entries shown at once
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Every distinct symptom in the disease table, sorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomVocabulary {
    symptoms: Vec<String>,
}

/// A truncated view of a symptom list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabularyPage<'a> {
    pub symptoms: Vec<&'a str>,

    /// Number of matching entries not included in `symptoms`
    pub remaining: usize,
}

impl SymptomVocabulary {
    pub fn from_records(records: &[DiseaseRecord]) -> Self {
        let symptoms: BTreeSet<&str> = records
            .iter()
            .flat_map(DiseaseRecord::present_symptoms)
            .collect();

        Self {
            symptoms: symptoms.into_iter().map(str::to_string).collect(),
        }
    }

    /// Symptoms containing `term`, case-insensitive, in vocabulary order.
    /// A blank term matches everything.
    pub fn search(&self, term: &str) -> Vec<&str> {
        let term = term.trim().to_lowercase();
        self.symptoms
            .iter()
            .map(String::as_str)
            .filter(|s| term.is_empty() || s.to_lowercase().contains(&term))
            .collect()
    }

    /// Search, then keep the first `limit` entries
    pub fn page(&self, term: &str, limit: usize) -> VocabularyPage<'_> {
        let mut symptoms = self.search(term);
        let remaining = symptoms.len().saturating_sub(limit);
        symptoms.truncate(limit);
        VocabularyPage {
            symptoms,
            remaining,
        }
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.symptoms
            .binary_search_by(|s| s.as_str().cmp(symptom))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }
}
