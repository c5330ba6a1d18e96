use crate::output::OutputFormat;
use chatsonar_classifiers::ClassifierKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chatsonar")]
#[command(
    author,
    version,
    about = "Detect hate speech and offensive language in chat log files"
)]
pub struct Cli {
    /// Chat log file to classify, one `[timestamp] <user>> message` per line
    #[arg(long = "dataset_path", visible_alias = "dataset-path", value_name = "PATH")]
    pub dataset_path: Option<PathBuf>,

    /// Output file name. Default: <input stem>-processed.csv (or .txt for JSON)
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file path
    #[arg(short, long, env = "CHATSONAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Classifier backend: lexicon or remote
    #[arg(long, value_parser = parse_kind)]
    pub classifier: Option<ClassifierKind>,

    /// Endpoint for the remote classifier
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_kind(s: &str) -> Result<ClassifierKind, String> {
    s.parse()
}
