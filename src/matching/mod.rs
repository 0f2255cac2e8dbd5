//! Symptom matching engine, ranking, and predictor state.
//!
//! This module provides the core prediction functionality:
//!
//! - [`SymptomQuery`]: Normalized tokens parsed from free-text input
//! - [`PredictionEngine`]: Scores a query against every row of a dataset
//! - [`PredictionOutcome`]: Ranked predictions or a distinct no-match result
//! - [`DiseasePredictor`]: Owns the loaded dataset and supports reloading
//! - [`SymptomSelection`]: Builds input text from individually picked symptoms
//!
//! ## Matching Algorithm
//!
//! 1. **Tokenize**: lowercase the input, split on commas, trim, and drop
//!    empty tokens
//! 2. **Match**: a row symptom matches a token when either contains the other
//! 3. **Score**: confidence is `round(100 × distinct matched tokens / total tokens)`,
//!    where repeated tokens still count toward the total
//! 4. **Merge**: rows for the same disease keep the best score and the union
//!    of matched tokens
//! 5. **Rank**: stable sort by confidence, descending, then keep the top 5
//!
//! ## Example
//!
//! ```rust
//! use disease_predictor::core::types::DiseaseRecord;
//! use disease_predictor::dataset::Dataset;
//! use disease_predictor::matching::PredictionEngine;
//!
//! let dataset = Dataset::from_tables(
//!     vec![DiseaseRecord::new("Flu", vec!["fever", "cough"])],
//!     Vec::new(),
//! );
//!
//! let engine = PredictionEngine::new(&dataset);
//! let outcome = engine.predict("fever, headache").unwrap();
//!
//! for p in outcome.predictions() {
//!     println!("{}: {}%", p.disease, p.confidence);
//! }
//! ```

pub mod engine;
pub mod predictor;
pub mod query;
pub mod ranking;
pub mod scoring;
pub mod selection;

pub use engine::{MatchingConfig, PredictionEngine};
pub use predictor::DiseasePredictor;
pub use query::{PredictError, SymptomQuery};
pub use ranking::PredictionOutcome;
pub use selection::SymptomSelection;
