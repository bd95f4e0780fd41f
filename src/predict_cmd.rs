//! Predict command: classify one feature vector.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use kvote_io::read_dataset;
use kvote_knn::{Prediction, classify_one};

use crate::cli::PredictArgs;
use crate::config::KvoteConfig;
use crate::convert;

/// Classify the feature vector given on the command line.
pub fn run(args: PredictArgs) -> Result<()> {
    let _cmd = info_span!("predict").entered();
    let config = KvoteConfig::load(args.config.as_deref())?;
    let dataset_cfg = convert::build_dataset_config(&config.dataset)?;
    let vocab = convert::build_vocabulary(&config.dataset)?;

    let train = read_dataset(&args.train, &dataset_cfg, &vocab)
        .with_context(|| format!("failed to read training set: {}", args.train.display()))?;
    let reference = train
        .to_reference_set(vocab.len())
        .context("invalid training set")?;
    let k = convert::resolve_k(args.k, &config.classify, reference.len());

    let prediction = classify_one(&reference, &args.features, k).context("prediction failed")?;
    debug!(k, label = prediction.as_i64(), "prediction");

    match prediction {
        Prediction::Class(label) => match vocab.name(label) {
            Some(name) => println!("{name}"),
            None => println!("{label}"),
        },
        Prediction::Unclassified => println!("unclassified"),
    }
    Ok(())
}
