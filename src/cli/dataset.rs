use clap::Args;

use crate::cli::{DatasetSourceArgs, OutputFormat};
use crate::dataset::store::Dataset;

#[derive(Args)]
pub struct DatasetArgs {
    #[command(flatten)]
    pub sources: DatasetSourceArgs,
}

/// Execute dataset subcommand
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DatasetArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let dataset = args.sources.load()?;

    match format {
        OutputFormat::Text => print_text_summary(&args, &dataset),
        OutputFormat::Json => print_json_summary(&args, &dataset)?,
        OutputFormat::Tsv => print_tsv_summary(&dataset),
    }

    Ok(())
}

fn print_text_summary(args: &DatasetArgs, dataset: &Dataset) {
    let summary = dataset.summary();

    println!("Dataset Summary");
    println!("{}", "=".repeat(60));
    println!("\nDisease table: {}", args.sources.diseases);
    println!("  Records: {}", summary.records);
    println!("  Distinct diseases: {}", summary.diseases);
    println!("  Distinct symptoms: {}", dataset.vocabulary().len());
    println!("\nDescription table: {}", args.sources.descriptions);
    println!("  Descriptions: {}", summary.descriptions);
    println!("\nFingerprint: {}", summary.fingerprint);
    println!("Loaded at: {}", summary.loaded_at);
}

fn print_json_summary(args: &DatasetArgs, dataset: &Dataset) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "sources": args.sources.sources(),
        "summary": dataset.summary(),
        "symptoms": dataset.vocabulary().len(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_summary(dataset: &Dataset) {
    let summary = dataset.summary();
    println!("records\tdiseases\tsymptoms\tdescriptions\tfingerprint");
    println!(
        "{}\t{}\t{}\t{}\t{}",
        summary.records,
        summary.diseases,
        dataset.vocabulary().len(),
        summary.descriptions,
        summary.fingerprint,
    );
}
