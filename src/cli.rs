use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// kvote parallel k-nearest-neighbor classifier.
#[derive(Parser)]
#[command(
    name = "kvote",
    version,
    about = "Parallel brute-force k-nearest-neighbor classifier"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Classify a labeled test set against a training set and report accuracy.
    Classify(ClassifyArgs),
    /// Classify a single feature vector.
    Predict(PredictArgs),
    /// Shuffle a dataset and split it into training and test files.
    Split(SplitArgs),
}

/// Arguments for the `classify` subcommand.
#[derive(clap::Args)]
pub struct ClassifyArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Training (reference) CSV.
    #[arg(long)]
    pub train: PathBuf,

    /// Test (query) CSV.
    #[arg(long)]
    pub test: PathBuf,

    /// Number of neighbors that vote. Overrides config; defaults to sqrt(n).
    #[arg(short)]
    pub k: Option<usize>,

    /// Worker threads. Overrides config; defaults to one per logical CPU.
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Write per-query predictions CSV.
    #[arg(short, long)]
    pub predictions: Option<PathBuf>,

    /// Write evaluation report JSON.
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Exit with an error if any query failed.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `predict` subcommand.
#[derive(clap::Args)]
pub struct PredictArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Training (reference) CSV.
    #[arg(long)]
    pub train: PathBuf,

    /// Number of neighbors that vote. Overrides config; defaults to sqrt(n).
    #[arg(short)]
    pub k: Option<usize>,

    /// Feature values of the point to classify.
    #[arg(required = true, allow_negative_numbers = true)]
    pub features: Vec<f64>,
}

/// Arguments for the `split` subcommand.
#[derive(clap::Args)]
pub struct SplitArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Input CSV to split.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output path for the training set.
    #[arg(long)]
    pub train: PathBuf,

    /// Output path for the test set.
    #[arg(long)]
    pub test: PathBuf,

    /// Additional column to drop before splitting (repeatable).
    #[arg(long = "drop", value_name = "COLUMN")]
    pub drop: Vec<String>,

    /// Fraction of rows in the test set. Overrides config.
    #[arg(long)]
    pub test_fraction: Option<f64>,

    /// Shuffle seed. Overrides config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}
