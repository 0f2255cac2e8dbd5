use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod dataset;
mod matching;
mod parsing;
mod utils;
mod web;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("disease_predictor=debug,info")
    } else {
        EnvFilter::new("disease_predictor=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Predict(args) => {
            cli::predict::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Symptoms(args) => {
            cli::symptoms::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Dataset(args) => {
            cli::dataset::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args)?;
        }
    }

    Ok(())
}
