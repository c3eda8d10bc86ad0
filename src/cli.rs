use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pubmed-pharma",
    about = "Fetch PubMed papers with pharma/biotech affiliations",
    version
)]
pub struct Cli {
    /// PubMed search query (quoted if multi-word)
    pub query: String,

    /// Enable debug logging and report each included paper
    #[arg(short, long)]
    pub debug: bool,

    /// Filename to save CSV output
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format when no --file is given
    #[arg(long, default_value = "table", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Maximum number of PubMed ids to fetch [default: from config, 20]
    #[arg(long, value_name = "N")]
    pub max_results: Option<usize>,

    /// Config file [default: ./.pubmed-pharma/config.toml, fallback ~/.config/pubmed-pharma/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// NCBI API key
    #[arg(long, env = "NCBI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Only print the results
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Table,
    Csv,
    Json,
}
