//! # geocat: Catalog Normalization CLI
//!
//! Entry point of the `geocat` command.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use geocat_cli::{
    config::get_config, render, run_normalize, source::PayloadSource, NormalizeOptions,
};
use tracing_subscriber::EnvFilter;

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a YAML configuration file (defaults to ./geocat.yml when present)
    #[arg(long, global = true, env = "GEOCAT_CONFIG")]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize a CSW catalog search response into canonical records
    Normalize(NormalizeArgs),
}

#[derive(Parser, Debug)]
struct NormalizeArgs {
    /// Catalog JSON file to read, `-` for stdin (the default)
    #[arg(long, short, conflicts_with = "url")]
    input: Option<PathBuf>,
    /// Fetch the catalog JSON from this URL instead
    #[arg(long)]
    url: Option<String>,
    /// Base URL for resolving relative links, overriding the payload's catalogURL
    #[arg(long)]
    catalog_url: Option<String>,
    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
    /// Exit with an error if any record raised a warning
    #[arg(long)]
    strict: bool,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = get_config(cli.config.as_deref())?;

    // Logs go to stderr so stdout stays machine-readable JSON.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Normalize(args) => {
            let options = NormalizeOptions {
                source: PayloadSource::from_args(args.input, args.url),
                catalog_url: args.catalog_url,
                strict: args.strict,
            };
            let report = run_normalize(&options, &config).await?;
            println!("{}", render(report.as_ref(), args.pretty || config.pretty)?);
        }
    }

    Ok(())
}
