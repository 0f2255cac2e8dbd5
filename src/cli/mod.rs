//! Command-line interface for disease-predictor.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **predict**: Rank likely diseases for a list of symptoms
//! - **symptoms**: Browse or search the symptom vocabulary
//! - **dataset**: Load the dataset and report what it contains
//! - **serve**: Start the web interface and JSON API
//!
//! ## Usage
//!
//! ```text
//! # Predict from symptoms
//! disease-predictor predict "itching, skin_rash, chills"
//!
//! # JSON output for scripting
//! disease-predictor predict "fever, cough" --format json
//!
//! # Search the vocabulary
//! disease-predictor symptoms --search pain
//!
//! # Use a remote dataset
//! disease-predictor predict "fever" --dataset https://example.org/dataset.csv
//!
//! # Start web UI
//! disease-predictor serve --port 8080 --open
//! ```

use clap::{Parser, Subcommand};

use crate::dataset::source::{
    DatasetSource, DatasetSources, DEFAULT_DESCRIPTION_SOURCE, DEFAULT_DISEASE_SOURCE,
};
use crate::dataset::store::Dataset;

pub mod dataset;
pub mod predict;
pub mod symptoms;

#[derive(Parser)]
#[command(name = "disease-predictor")]
#[command(version)]
#[command(about = "Predict likely diseases from a list of symptoms")]
#[command(
    long_about = "disease-predictor matches comma-separated symptoms against a disease/symptom dataset.\n\nEach disease is scored by the share of your symptoms it explains. The top five are shown with:\n- A confidence percentage\n- The symptoms that matched\n- A short description of the disease"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict diseases from comma-separated symptoms
    Predict(predict::PredictArgs),

    /// List or search known symptoms
    Symptoms(symptoms::SymptomsArgs),

    /// Load the dataset and show a summary
    Dataset(dataset::DatasetArgs),

    /// Start the web server
    Serve(ServeArgs),
}

/// Locations of the two dataset tables
#[derive(clap::Args, Clone, Debug)]
pub struct DatasetSourceArgs {
    /// Disease/symptom table (file path or http(s) URL)
    #[arg(long = "dataset", default_value = DEFAULT_DISEASE_SOURCE)]
    pub diseases: DatasetSource,

    /// Disease description table (file path or http(s) URL)
    #[arg(long, default_value = DEFAULT_DESCRIPTION_SOURCE)]
    pub descriptions: DatasetSource,
}

impl DatasetSourceArgs {
    pub fn sources(&self) -> DatasetSources {
        DatasetSources::new(self.diseases.clone(), self.descriptions.clone())
    }

    /// Load both tables on a short-lived runtime
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime cannot be created or the dataset fails to load.
    pub fn load(&self) -> anyhow::Result<Dataset> {
        let sources = self.sources();
        let rt = tokio::runtime::Runtime::new()?;
        Ok(rt.block_on(Dataset::load(&sources))?)
    }
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    #[command(flatten)]
    pub sources: DatasetSourceArgs,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
