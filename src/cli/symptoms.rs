use clap::Args;

use crate::cli::{DatasetSourceArgs, OutputFormat};
use crate::dataset::vocabulary::DEFAULT_PAGE_SIZE;
use crate::utils::validation::clamp_page_size;

#[derive(Args)]
pub struct SymptomsArgs {
    /// Only show symptoms containing this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Maximum number of symptoms to list
    #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub limit: usize,

    #[command(flatten)]
    pub sources: DatasetSourceArgs,
}

/// Execute symptoms subcommand
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SymptomsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let dataset = args.sources.load()?;
    let vocabulary = dataset.vocabulary();

    if verbose {
        eprintln!("{} distinct symptoms available", vocabulary.len());
    }

    let term = args.search.as_deref().unwrap_or("");
    let page = vocabulary.page(term, clamp_page_size(args.limit));

    if page.symptoms.is_empty() {
        eprintln!("No symptoms found matching '{term}'.");
        return Ok(());
    }

    match format {
        OutputFormat::Text | OutputFormat::Tsv => {
            for symptom in &page.symptoms {
                println!("{symptom}");
            }
            if page.remaining > 0 {
                eprintln!("+{} more", page.remaining);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "total": vocabulary.len(),
                "symptoms": page.symptoms,
                "remaining": page.remaining,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
