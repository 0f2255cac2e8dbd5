//! Core data types for symptom-based disease prediction.
//!
//! - [`DiseaseRecord`]: A disease and its 17 symptom cells from the disease table
//! - [`DiseaseDescription`]: A disease and its free-text description
//! - [`PredictionResult`]: A ranked, scored disease for one query
//! - [`ConfidenceLevel`]: Presentation band derived from a confidence percentage
//!
//! Records are indexed by position only. The same disease name may appear on many
//! rows, one per observed symptom combination.
//!
//! [`DiseaseRecord`]: types::DiseaseRecord
//! [`DiseaseDescription`]: types::DiseaseDescription
//! [`PredictionResult`]: types::PredictionResult
//! [`ConfidenceLevel`]: types::ConfidenceLevel

pub mod types;
