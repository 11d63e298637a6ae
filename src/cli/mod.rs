pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "data_ingestion")]
#[command(about = "Split the built-in breast cancer dataset and save it as JSON", long_about = None)]
pub struct Cli {
    /// Output file path for the processed data
    #[arg(long)]
    pub data: PathBuf,

    /// Proportion of the dataset to include in the test split
    #[arg(long)]
    pub test_size: Option<f64>,

    /// Seed for a reproducible split (random on every run when omitted)
    #[arg(long)]
    pub random_state: Option<u64>,

    /// Write the JSON object directly instead of wrapping it in a JSON string
    #[arg(long)]
    pub no_wrap: bool,

    /// Indent the JSON document
    #[arg(long)]
    pub pretty: bool,

    /// JSON config file; flags given on the command line take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    commands::ingest(cli)
}
