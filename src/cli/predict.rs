use clap::builder::TypedValueParser;
use clap::Args;

use crate::cli::{DatasetSourceArgs, OutputFormat};
use crate::core::types::PredictionResult;
use crate::matching::engine::{MatchingConfig, PredictionEngine, DEFAULT_MAX_RESULTS};
use crate::matching::query::SymptomQuery;
use crate::matching::ranking::PredictionOutcome;

#[derive(Args)]
pub struct PredictArgs {
    /// Comma-separated symptoms, e.g. "fever, cough, headache"
    #[arg(required = true)]
    pub symptoms: String,

    /// Number of predictions to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS,
          value_parser = clap::value_parser!(u16).range(1..=100).map(usize::from))]
    pub max_results: usize,

    #[command(flatten)]
    pub sources: DatasetSourceArgs,
}

/// Execute predict subcommand
///
/// # Errors
///
/// Returns an error if the input is empty or the dataset cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: PredictArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    // Validate input before touching the dataset
    let query = SymptomQuery::parse(&args.symptoms)?;

    if verbose {
        eprintln!(
            "Parsed {} symptom tokens: {}",
            query.len(),
            query.tokens().join(", ")
        );
    }

    let dataset = args.sources.load()?;

    if verbose {
        eprintln!("{}", dataset.summary().message());
    }

    if dataset.is_empty() {
        eprintln!("Warning: Dataset is empty, no diseases to match against.");
        return Ok(());
    }

    let config = MatchingConfig {
        max_results: args.max_results,
        ..MatchingConfig::default()
    };
    let engine = PredictionEngine::with_config(&dataset, config);
    let outcome = engine.predict_query(&query);

    if !outcome.is_match() {
        eprintln!("{}", outcome.summary());
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&outcome, verbose),
        OutputFormat::Json => print_json_results(&outcome)?,
        OutputFormat::Tsv => print_tsv_results(outcome.predictions()),
    }

    Ok(())
}

fn print_text_results(outcome: &PredictionOutcome, verbose: bool) {
    for (i, result) in outcome.predictions().iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!(
            "\n#{} {} ({}% confidence, {})",
            i + 1,
            result.disease,
            result.confidence,
            result.level()
        );

        if !result.matching_symptoms.is_empty() {
            println!("   Matching symptoms: {}", result.matching_symptoms.join(", "));
        }
        println!("   {}", result.description);
    }

    if verbose {
        eprintln!("\n{}", outcome.summary());
    }
}

fn print_json_results(outcome: &PredictionOutcome) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "summary": outcome.summary(),
        "predictions": outcome.predictions(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(results: &[PredictionResult]) {
    println!("rank\tdisease\tconfidence\tmatching_symptoms\tdescription");
    for (i, result) in results.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            i + 1,
            result.disease,
            result.confidence,
            result.matching_symptoms.join(","),
            result.description,
        );
    }
}
