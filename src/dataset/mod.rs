//! Dataset loading and the derived symptom vocabulary.
//!
//! A dataset is two comma-delimited tables: disease rows with up to 17 symptom
//! columns, and disease descriptions. Each table can come from a local file
//! (optionally gzip-compressed) or an HTTP(S) URL.
//!
//! ## Example
//!
//! ```rust,no_run
//! use disease_predictor::dataset::{Dataset, DatasetSources};
//!
//! # async fn demo() -> Result<(), disease_predictor::dataset::DatasetError> {
//! let dataset = Dataset::load(&DatasetSources::default()).await?;
//! println!("{}", dataset.summary().message());
//!
//! for symptom in dataset.vocabulary().search("pain") {
//!     println!("{symptom}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod source;
pub mod store;
pub mod vocabulary;

pub use source::{DatasetSource, DatasetSources};
pub use store::{Dataset, DatasetError, LoadSummary};
pub use vocabulary::SymptomVocabulary;
