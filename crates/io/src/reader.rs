//! Delimited-text dataset reader.

use std::path::Path;

use tracing::{debug, info};

use kvote_knn::LabeledPoint;

use crate::dataset::{Dataset, DatasetConfig};
use crate::error::IoError;
use crate::validate::ValidationCollector;
use crate::vocabulary::LabelVocabulary;

/// Default class column name for headerless files.
const DEFAULT_LABEL_NAME: &str = "class";

/// Where features and the class live within one record.
#[derive(Debug)]
struct ColumnLayout {
    width: usize,
    feature_columns: Vec<usize>,
    label_column: usize,
    feature_names: Vec<String>,
    label_name: String,
}

/// Resolves dropped columns and the class column against the file width.
fn resolve_layout(
    width: usize,
    header: Option<&[String]>,
    config: &DatasetConfig,
    path: &Path,
) -> Result<ColumnLayout, IoError> {
    let mut dropped = Vec::with_capacity(config.drop_columns().len());
    if let Some(header) = header {
        for name in config.drop_columns() {
            let idx = header
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| IoError::MissingColumn {
                    name: name.clone(),
                    path: path.to_path_buf(),
                })?;
            dropped.push(idx);
        }
    }

    let mut c = ValidationCollector::new();
    let label_column = config.label_column().unwrap_or(width.saturating_sub(1));
    if label_column >= width {
        c.push(format!(
            "label column {label_column} out of range for {width} column(s)"
        ));
    }
    if dropped.contains(&label_column) {
        c.push(format!("label column {label_column} is also dropped"));
    }

    let feature_columns: Vec<usize> = (0..width)
        .filter(|i| *i != label_column && !dropped.contains(i))
        .collect();
    if feature_columns.is_empty() {
        c.push("no feature columns remain");
    }
    c.finish()?;

    let column_name = |i: usize, fallback: String| {
        header
            .and_then(|h| h.get(i))
            .filter(|name| !name.is_empty())
            .cloned()
            .unwrap_or(fallback)
    };
    let feature_names = feature_columns
        .iter()
        .map(|&i| column_name(i, format!("f{i}")))
        .collect();
    let label_name = column_name(label_column, DEFAULT_LABEL_NAME.to_string());

    Ok(ColumnLayout {
        width,
        feature_columns,
        label_column,
        feature_names,
        label_name,
    })
}

/// Parses one record, recording every problem in `c`.
///
/// Returns `None` if the record had any problem.
fn parse_record(
    record: &csv::StringRecord,
    line: u64,
    layout: &ColumnLayout,
    config: &DatasetConfig,
    vocab: &LabelVocabulary,
    c: &mut ValidationCollector,
) -> Option<LabeledPoint> {
    if record.len() != layout.width {
        c.push_line(
            line,
            format_args!("expected {} field(s), got {}", layout.width, record.len()),
        );
        return None;
    }

    let mut ok = true;
    let mut features = Vec::with_capacity(layout.feature_columns.len());
    for (&col, name) in layout.feature_columns.iter().zip(&layout.feature_names) {
        let cell = &record[col];
        match cell.parse::<f64>() {
            Ok(v) if v.is_finite() => features.push(v),
            _ => {
                c.push_line(
                    line,
                    format_args!("column '{name}' value '{cell}' is not a finite number"),
                );
                ok = false;
            }
        }
    }

    let cell = &record[layout.label_column];
    let label = if cell.is_empty() {
        if !config.allow_unlabeled() {
            c.push_line(line, "missing class");
            ok = false;
        }
        None
    } else {
        let id = vocab.id(cell);
        if id.is_none() {
            c.push_line(line, format_args!("unknown class '{cell}'"));
            ok = false;
        }
        id
    };

    ok.then_some(LabeledPoint { features, label })
}

/// Read a labeled dataset from a delimited text file.
///
/// Every numeric column except the class column (and any dropped columns)
/// becomes a feature. Class names are mapped to labels through `vocab`.
/// Blank lines are skipped. All malformed rows are reported together.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::MissingColumn`] for an unknown dropped column,
/// [`IoError::Validation`] for invalid configuration or malformed rows,
/// and [`IoError::Csv`] for lower-level read failures.
pub fn read_dataset(
    path: &Path,
    config: &DatasetConfig,
    vocab: &LabelVocabulary,
) -> Result<Dataset, IoError> {
    config.validate()?;
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(config.has_headers())
        .delimiter(config.delimiter())
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let header: Option<Vec<String>> = if config.has_headers() {
        Some(reader.headers()?.iter().map(str::to_string).collect())
    } else {
        None
    };

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        records.push(record);
    }

    let width = match (&header, records.first()) {
        (Some(h), _) => h.len(),
        (None, Some(first)) => first.len(),
        (None, None) => {
            debug!(path = %path.display(), "empty headerless file");
            return Err(IoError::Validation {
                count: 1,
                details: format!("{} contains no rows", path.display()),
            });
        }
    };
    let layout = resolve_layout(width, header.as_deref(), config, path)?;
    debug!(
        width,
        label_column = layout.label_column,
        n_features = layout.feature_columns.len(),
        "resolved column layout"
    );

    let mut c = ValidationCollector::new();
    let mut points = Vec::with_capacity(records.len());
    for (row, record) in records.iter().enumerate() {
        let line = record.position().map_or(row as u64 + 1, |p| p.line());
        if let Some(point) = parse_record(record, line, &layout, config, vocab, &mut c) {
            points.push(point);
        }
    }
    c.finish()?;

    let dataset = Dataset::new(points, layout.feature_names, layout.label_name)?;
    info!(
        path = %path.display(),
        n_points = dataset.len(),
        n_features = dataset.n_features(),
        "dataset loaded"
    );
    Ok(dataset)
}
