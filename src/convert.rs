//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use tracing::info;

use kvote_io::{DatasetConfig, LabelVocabulary};
use kvote_knn::{ClassifyConfig, k_heuristic};

use crate::config::{ClassifyToml, DatasetToml, SplitToml};

/// Parses a delimiter string: a single ASCII character, or `tab`.
pub fn parse_delimiter(s: &str) -> Result<u8> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => bail!("delimiter must be a single ASCII character, got {s:?}"),
        },
    }
}

fn base_dataset_config(dataset: &DatasetToml) -> Result<DatasetConfig> {
    Ok(DatasetConfig::default()
        .with_headers(dataset.has_headers)
        .with_delimiter(parse_delimiter(&dataset.delimiter)?)
        .with_label_column(dataset.label_column)
        .with_allow_unlabeled(dataset.allow_unlabeled))
}

/// Builds the [`DatasetConfig`] for training and test files.
pub fn build_dataset_config(dataset: &DatasetToml) -> Result<DatasetConfig> {
    let cfg = base_dataset_config(dataset)?;
    cfg.validate().context("invalid [dataset] configuration")?;
    Ok(cfg)
}

/// Builds the [`DatasetConfig`] for the raw input of `split`.
///
/// Drops `[split].drop_columns` plus any `extra` columns given on the
/// command line.
pub fn build_split_input_config(
    dataset: &DatasetToml,
    split: &SplitToml,
    extra: &[String],
) -> Result<DatasetConfig> {
    let cfg = base_dataset_config(dataset)?
        .with_drop_columns(split.drop_columns.iter().chain(extra).cloned());
    cfg.validate()
        .context("invalid [dataset] / [split] configuration")?;
    Ok(cfg)
}

/// Builds the [`LabelVocabulary`] from the configured class names.
pub fn build_vocabulary(dataset: &DatasetToml) -> Result<LabelVocabulary> {
    LabelVocabulary::new(dataset.classes.iter().cloned()).context("invalid [dataset].classes")
}

/// Picks k: command-line flag, then config, then `k_heuristic(n_reference)`.
pub fn resolve_k(flag: Option<usize>, classify: &ClassifyToml, n_reference: usize) -> usize {
    match flag.or(classify.k) {
        Some(k) => k,
        None => {
            let k = k_heuristic(n_reference);
            info!(k, n_reference, "k not set, using square-root heuristic");
            k
        }
    }
}

/// Builds a [`ClassifyConfig`] for a resolved k and optional thread override.
pub fn build_classify_config(
    k: usize,
    threads: Option<usize>,
    classify: &ClassifyToml,
) -> ClassifyConfig {
    let cfg = ClassifyConfig::new(k);
    match threads.or(classify.threads) {
        Some(t) => cfg.with_threads(t),
        None => cfg,
    }
}
