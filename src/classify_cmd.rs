//! Classify command: label a test set against a training set.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use kvote_evaluate::{EvaluateError, evaluate, to_json};
use kvote_io::{read_dataset, write_predictions};
use kvote_knn::classify;

use crate::cli::ClassifyArgs;
use crate::config::KvoteConfig;
use crate::convert;

/// Run the batch classification pipeline.
pub fn run(args: ClassifyArgs) -> Result<()> {
    let _cmd = info_span!("classify").entered();
    // 1. Load config
    let config = KvoteConfig::load(args.config.as_deref())?;
    let dataset_cfg = convert::build_dataset_config(&config.dataset)?;
    let vocab = convert::build_vocabulary(&config.dataset)?;

    // 2. Read both sets
    let train = read_dataset(&args.train, &dataset_cfg, &vocab)
        .with_context(|| format!("failed to read training set: {}", args.train.display()))?;
    let test = read_dataset(&args.test, &dataset_cfg, &vocab)
        .with_context(|| format!("failed to read test set: {}", args.test.display()))?;

    if test.n_features() != train.n_features() {
        bail!(
            "test set has {} feature(s), training set has {}",
            test.n_features(),
            train.n_features()
        );
    }

    // 3. Build the reference set and resolve k
    let reference = train
        .to_reference_set(vocab.len())
        .context("invalid training set")?;
    let k = convert::resolve_k(args.k, &config.classify, reference.len());
    let classify_cfg = convert::build_classify_config(k, args.threads, &config.classify);

    // 4. Classify
    let predictions =
        classify(&reference, test.points(), &classify_cfg).context("classification failed")?;

    for (index, reason) in predictions.failures() {
        warn!(index, %reason, "query failed");
    }
    for index in predictions.unclassified() {
        warn!(index, "query unclassified");
    }

    // 5. Score against the test labels
    let truth = test.labels();
    let report = match evaluate(&predictions, &truth, vocab.names()) {
        Ok(report) => {
            println!("Accuracy: {:.2}%", report.summary.accuracy * 100.0);
            Some(report)
        }
        Err(EvaluateError::NoGroundTruth) => {
            warn!("test set carries no labels, accuracy not computed");
            None
        }
        Err(e) => return Err(e).context("evaluation failed"),
    };
    println!(
        "{} queries, {} classified, {} unclassified, {} failed (k = {k})",
        predictions.len(),
        predictions.len() - predictions.unclassified().count() - predictions.n_failed(),
        predictions.unclassified().count(),
        predictions.n_failed(),
    );

    // 6. Write outputs
    if let Some(ref path) = args.predictions {
        write_predictions(path, &predictions, &truth, &vocab)
            .with_context(|| format!("failed to write predictions: {}", path.display()))?;
    }
    if let Some(ref path) = args.report {
        let Some(ref report) = report else {
            bail!("cannot write report: test set carries no labels");
        };
        let json = to_json(report).context("failed to serialize report")?;
        std::fs::write(path, &json)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    if args.strict && predictions.n_failed() > 0 {
        bail!("{} query(ies) failed", predictions.n_failed());
    }

    Ok(())
}
