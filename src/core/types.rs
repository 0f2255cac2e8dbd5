use serde::{Deserialize, Serialize};

/// Number of symptom columns carried by every disease row
pub const SYMPTOM_COLUMNS: usize = 17;

/// Description used when a disease has no entry in the description table
pub const FALLBACK_DESCRIPTION: &str = "No description available.";

/// Confidence above which a prediction is shown as a strong match
pub const HIGH_CONFIDENCE_THRESHOLD: u8 = 70;

/// One row of the disease table: a disease and up to 17 symptom cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub disease: String,

    /// Exactly [`SYMPTOM_COLUMNS`] cells; missing columns are empty strings
    pub symptoms: Vec<String>,
}

impl DiseaseRecord {
    /// Build a record, padding or truncating the symptom cells to the fixed width
    pub fn new<S: Into<String>>(disease: impl Into<String>, symptoms: Vec<S>) -> Self {
        let mut symptoms: Vec<String> = symptoms.into_iter().map(Into::into).collect();
        symptoms.resize(SYMPTOM_COLUMNS, String::new());

        Self {
            disease: disease.into(),
            symptoms,
        }
    }

    /// Symptom cells that are not blank, in column order
    pub fn present_symptoms(&self) -> impl Iterator<Item = &str> {
        self.symptoms
            .iter()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

/// One row of the description table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseDescription {
    pub disease: String,
    pub description: String,
}

impl DiseaseDescription {
    pub fn new(disease: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            disease: disease.into(),
            description: description.into(),
        }
    }
}

/// How strongly a prediction should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Moderate,
    High,
}

impl ConfidenceLevel {
    #[must_use]
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence > HIGH_CONFIDENCE_THRESHOLD {
            Self::High
        } else {
            Self::Moderate
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// A ranked disease prediction for one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub disease: String,

    /// Percentage of input tokens matched, 0-100
    pub confidence: u8,

    /// Input tokens that matched this disease, first-seen order, no duplicates
    pub matching_symptoms: Vec<String>,

    pub description: String,
}

impl PredictionResult {
    #[must_use]
    pub fn level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_pads_missing_columns() {
        let record = DiseaseRecord::new("Flu", vec!["fever", "cough"]);
        assert_eq!(record.symptoms.len(), SYMPTOM_COLUMNS);
        assert_eq!(record.symptoms[0], "fever");
        assert_eq!(record.symptoms[2], "");
    }

    #[test]
    fn test_record_truncates_extra_columns() {
        let cells: Vec<String> = (0..20).map(|i| format!("s{i}")).collect();
        let record = DiseaseRecord::new("X", cells);
        assert_eq!(record.symptoms.len(), SYMPTOM_COLUMNS);
        assert_eq!(record.symptoms[16], "s16");
    }

    #[test]
    fn test_present_symptoms_skips_blank_cells() {
        let record = DiseaseRecord::new("Flu", vec!["fever", "", "  ", "cough"]);
        let present: Vec<&str> = record.present_symptoms().collect();
        assert_eq!(present, vec!["fever", "cough"]);
    }

    #[test]
    fn test_confidence_level_threshold() {
        assert_eq!(ConfidenceLevel::from_confidence(100), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_confidence(71), ConfidenceLevel::High);
        assert_eq!(
            ConfidenceLevel::from_confidence(70),
            ConfidenceLevel::Moderate
        );
        assert_eq!(ConfidenceLevel::from_confidence(0), ConfidenceLevel::Moderate);
    }

    #[test]
    fn test_prediction_serializes_snake_case() {
        let result = PredictionResult {
            disease: "Flu".to_string(),
            confidence: 50,
            matching_symptoms: vec!["fever".to_string()],
            description: FALLBACK_DESCRIPTION.to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["confidence"], 50);
        assert_eq!(json["matching_symptoms"][0], "fever");
    }
}
