use std::collections::HashMap;

use crate::core::types::DiseaseRecord;

/// Loose symptom comparison: either string contains the other, ignoring case.
///
/// `token` is expected to be lowercase already (see
/// [`SymptomQuery`](crate::matching::query::SymptomQuery)). Short tokens such
/// as "pain" therefore match every symptom containing them.
#[must_use]
pub fn symptom_matches(record_symptom: &str, token: &str) -> bool {
    let record_symptom = record_symptom.to_lowercase();
    record_symptom.contains(token) || token.contains(record_symptom.as_str())
}

/// Percentage of `total` represented by `matched`, rounded half up
#[must_use]
pub fn confidence_percent(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (200 * matched + total) / (2 * total);
    u8::try_from(percent.min(100)).unwrap_or(100)
}

/// Input tokens matched by one disease row, in token order
pub fn match_record<'t>(record: &DiseaseRecord, tokens: &'t [String]) -> Vec<&'t str> {
    let symptoms: Vec<&str> = record.present_symptoms().collect();
    tokens
        .iter()
        .filter(|token| symptoms.iter().any(|s| symptom_matches(s, token)))
        .map(String::as_str)
        .collect()
}

/// Best score and matched tokens accumulated for one disease
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseScore {
    /// Union of matched tokens across rows, first-seen order
    pub matched: Vec<String>,

    /// Highest per-row matched token count
    pub best_matched: usize,

    /// Confidence for `best_matched`
    pub confidence: u8,
}

/// Per-disease scores in the order diseases were first matched
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    entries: Vec<(String, DiseaseScore)>,
    index: HashMap<String, usize>,
    total_tokens: usize,
}

impl ScoreTable {
    pub fn new(total_tokens: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            total_tokens,
        }
    }

    /// Merge one row's matches into its disease entry.
    ///
    /// Rows with no matches are ignored. Repeated diseases keep the highest
    /// score and the union of matched tokens.
    pub fn record(&mut self, disease: &str, matched: &[&str]) {
        if matched.is_empty() {
            return;
        }

        let idx = match self.index.get(disease) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.index.insert(disease.to_string(), idx);
                self.entries.push((
                    disease.to_string(),
                    DiseaseScore {
                        matched: Vec::new(),
                        best_matched: 0,
                        confidence: 0,
                    },
                ));
                idx
            }
        };

        let score = &mut self.entries[idx].1;
        for token in matched {
            if !score.matched.iter().any(|m| m == token) {
                score.matched.push((*token).to_string());
            }
        }
        if matched.len() > score.best_matched {
            score.best_matched = matched.len();
            score.confidence = confidence_percent(matched.len(), self.total_tokens);
        }
    }

    pub fn into_entries(self) -> Vec<(String, DiseaseScore)> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
