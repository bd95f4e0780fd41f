//! Split command: shuffle a dataset into training and test files.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use kvote_io::{read_dataset, write_dataset};

use crate::cli::SplitArgs;
use crate::config::KvoteConfig;
use crate::convert;

/// Run the dataset preparation step.
pub fn run(args: SplitArgs) -> Result<()> {
    let _cmd = info_span!("split").entered();
    let config = KvoteConfig::load(args.config.as_deref())?;
    let dataset_cfg =
        convert::build_split_input_config(&config.dataset, &config.split, &args.drop)?;
    let vocab = convert::build_vocabulary(&config.dataset)?;

    let test_fraction = args.test_fraction.unwrap_or(config.split.test_fraction);
    let seed = args.seed.unwrap_or(config.split.seed);

    let dataset = read_dataset(&args.input, &dataset_cfg, &vocab)
        .with_context(|| format!("failed to read dataset: {}", args.input.display()))?;
    let (train, test) = dataset
        .split(test_fraction, seed)
        .context("failed to split dataset")?;
    info!(
        n_train = train.len(),
        n_test = test.len(),
        test_fraction,
        seed,
        "dataset split"
    );

    write_dataset(&args.train, &train, &vocab)
        .with_context(|| format!("failed to write training set: {}", args.train.display()))?;
    write_dataset(&args.test, &test, &vocab)
        .with_context(|| format!("failed to write test set: {}", args.test.display()))?;

    println!(
        "{} training row(s) -> {}, {} test row(s) -> {}",
        train.len(),
        args.train.display(),
        test.len(),
        args.test.display()
    );
    Ok(())
}
