//! # disease-predictor
//!
//! A library for predicting likely diseases from free-text symptom descriptions.
//!
//! Symptoms are matched against a tabular dataset in which each row links a
//! disease to up to 17 symptoms. Every disease is scored by the share of the
//! user's symptoms it explains, and the best five are returned with their
//! descriptions.
//!
//! ## Features
//!
//! - **Loose matching**: A symptom matches when either phrase contains the other
//! - **Duplicate-row merging**: Diseases listed on many rows keep their best score
//! - **Symptom vocabulary**: Searchable list of every known symptom
//! - **File or URL datasets**: Local CSV (optionally gzipped) or HTTP(S)
//! - **Hot reload**: Replace the loaded tables without restarting
//!
//! ## Example
//!
//! ```rust,no_run
//! use disease_predictor::{DatasetSources, DiseasePredictor, MatchingConfig};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let mut predictor = DiseasePredictor::new(MatchingConfig::default());
//! let summary = predictor.load(&DatasetSources::default()).await?;
//! println!("{}", summary.message());
//!
//! let outcome = predictor.predict("itching, skin_rash, chills")?;
//! for p in outcome.predictions() {
//!     println!("{}: {}%", p.disease, p.confidence);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Core data types for records, descriptions, and predictions
//! - [`dataset`]: Dataset loading, provenance, and symptom vocabulary
//! - [`matching`]: Tokenizing, scoring, ranking, and predictor state
//! - [`parsing`]: Parsers for the disease and description tables
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server exposing the predictor as a JSON API

pub mod cli;
pub mod core;
pub mod dataset;
pub mod matching;
pub mod parsing;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use core::types::*;
pub use dataset::{Dataset, DatasetSource, DatasetSources, SymptomVocabulary};
pub use matching::{
    DiseasePredictor, MatchingConfig, PredictError, PredictionEngine, PredictionOutcome,
    SymptomSelection,
};
