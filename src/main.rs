//! `pubmed-pharma` — find PubMed papers with authors from pharmaceutical and
//! biotech companies.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]) and apply CLI overrides.
//! 3. Search PubMed and fetch the matching records ([`pubmed`]).
//! 4. Normalize each record ([`record`]) and classify its affiliations
//!    ([`affiliation`]); records that fail to normalize are skipped
//!    ([`pipeline`]).
//! 5. Render the surviving papers ([`report`]).
//! 6. Exit `0`, or `1` when nothing qualified or the fetch failed.

mod affiliation;
mod cli;
mod config;
mod error;
mod models;
mod pipeline;
mod pubmed;
mod record;
mod report;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use affiliation::classifier::Classifier;
use cli::{Cli, ReportFormat};
use config::load_config;
use pubmed::client::PubMedClient;

fn init_tracing(debug: bool) {
    let default_level = if debug { "pubmed_pharma=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn spinner() -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Querying PubMed…");
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    let cwd = std::env::current_dir()?;
    let mut config = load_config(&cwd, cli.config.as_deref())?;
    if let Some(max) = cli.max_results {
        config.pubmed.max_results = max;
    }
    if cli.api_key.is_some() {
        config.pubmed.api_key = cli.api_key.clone();
    }

    let classifier = Classifier::new(&config.classifier)?;
    let max_results = config.pubmed.max_results;
    let client = PubMedClient::new(config.pubmed)?;

    if !cli.quiet {
        eprintln!(
            "{} Searching PubMed for: {}...",
            "🔍".cyan(),
            cli.query.bold()
        );
    }

    // Spinner and debug log lines would interleave on stderr.
    let pb = if cli.quiet || cli.debug {
        None
    } else {
        Some(spinner()?)
    };

    let result =
        pipeline::get_filtered_papers(&client, &classifier, &cli.query, max_results, cli.debug)
            .await;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    let papers = result?;

    if papers.is_empty() {
        eprintln!(
            "{}",
            "⚠️  No papers found with non-academic pharma/biotech affiliations.".red()
        );
        std::process::exit(1);
    }

    if let Some(path) = &cli.file {
        report::export::write_csv_file(&papers, path)?;
        if !cli.quiet {
            eprintln!("{} Results saved to {}", "✅".green(), path.display().to_string().green());
        }
        return Ok(());
    }

    match cli.report {
        ReportFormat::Table => report::terminal::render(&papers, cli.quiet),
        ReportFormat::Csv => report::export::write_csv(&papers, std::io::stdout().lock())?,
        ReportFormat::Json => println!("{}", report::export::to_json(&papers)?),
    }

    Ok(())
}
