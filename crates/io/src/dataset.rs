//! In-memory labeled dataset and its reader configuration.

use kvote_knn::{KnnError, Label, LabeledPoint, ReferenceSet};

use crate::error::IoError;
use crate::validate::ValidationCollector;

// ---------------------------------------------------------------------------
// DatasetConfig
// ---------------------------------------------------------------------------

/// Layout of a delimited dataset file.
///
/// The [`Default`] matches the Iris CSV files: comma separated, one header
/// row, class name in the last column.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    /// Whether the first row holds column names.
    has_headers: bool,
    /// Field delimiter byte.
    delimiter: u8,
    /// Zero-based index of the class column in the file. `None` means last.
    label_column: Option<usize>,
    /// Header names of columns to ignore (e.g. a row id).
    drop_columns: Vec<String>,
    /// Whether an empty class cell is read as an unlabeled point.
    allow_unlabeled: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            has_headers: true,
            delimiter: b',',
            label_column: None,
            drop_columns: Vec::new(),
            allow_unlabeled: false,
        }
    }
}

impl DatasetConfig {
    /// Set whether the first row is a header.
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the class column index, or `None` for the last column.
    pub fn with_label_column(mut self, column: Option<usize>) -> Self {
        self.label_column = column;
        self
    }

    /// Set the header names of columns to drop.
    pub fn with_drop_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drop_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Allow rows with an empty class cell.
    pub fn with_allow_unlabeled(mut self, allow: bool) -> Self {
        self.allow_unlabeled = allow;
        self
    }

    /// Returns whether the first row is a header.
    pub fn has_headers(&self) -> bool {
        self.has_headers
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Returns the class column index, if fixed.
    pub fn label_column(&self) -> Option<usize> {
        self.label_column
    }

    /// Returns the columns to drop.
    pub fn drop_columns(&self) -> &[String] {
        &self.drop_columns
    }

    /// Returns whether unlabeled rows are accepted.
    pub fn allow_unlabeled(&self) -> bool {
        self.allow_unlabeled
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if columns are dropped by name without
    /// a header row, or the delimiter is a quote or line break.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = ValidationCollector::new();
        if !self.has_headers && !self.drop_columns.is_empty() {
            c.push("drop_columns requires a header row");
        }
        if matches!(self.delimiter, b'"' | b'\n' | b'\r') {
            c.push(format!(
                "delimiter {:?} is not allowed",
                char::from(self.delimiter)
            ));
        }
        c.finish()
    }
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// Labeled points with the column names they were read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    points: Vec<LabeledPoint>,
    feature_names: Vec<String>,
    label_name: String,
}

impl Dataset {
    /// Creates a dataset, checking every point against the feature names.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every point whose dimension
    /// differs from `feature_names.len()`.
    pub fn new(
        points: Vec<LabeledPoint>,
        feature_names: Vec<String>,
        label_name: impl Into<String>,
    ) -> Result<Self, IoError> {
        let n_features = feature_names.len();
        let mut c = ValidationCollector::new();
        for (i, p) in points.iter().enumerate() {
            if p.dim() != n_features {
                c.push(format!(
                    "point {i} has {} features, expected {n_features}",
                    p.dim()
                ));
            }
        }
        c.finish()?;
        Ok(Self {
            points,
            feature_names,
            label_name: label_name.into(),
        })
    }

    /// Points in file order.
    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    /// Consumes `self`, returning the points.
    pub fn into_points(self) -> Vec<LabeledPoint> {
        self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Feature dimension.
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Feature column names.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Class column name.
    pub fn label_name(&self) -> &str {
        &self.label_name
    }

    /// Ground-truth labels in point order.
    pub fn labels(&self) -> Vec<Option<Label>> {
        self.points.iter().map(|p| p.label).collect()
    }

    /// A dataset with the same columns and different points.
    ///
    /// # Errors
    ///
    /// Same as [`Dataset::new`].
    pub fn with_points(&self, points: Vec<LabeledPoint>) -> Result<Self, IoError> {
        Self::new(points, self.feature_names.clone(), self.label_name.clone())
    }

    /// Builds the classifier's reference set from these points.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError`] if a point is unlabeled or a label is `>= n_classes`.
    pub fn to_reference_set(&self, n_classes: usize) -> Result<ReferenceSet, KnnError> {
        ReferenceSet::from_points(&self.points, n_classes)
    }
}
