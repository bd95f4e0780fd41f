//! Labeled points and predictions.

/// Integer class identifier in `[0, n_classes)`.
pub type Label = usize;

/// Numeric rendering of [`Prediction::Unclassified`].
///
/// Reserved: never used for a real class.
pub const UNCLASSIFIED: i64 = -1;

/// A feature vector with an optional class label.
///
/// Reference points must be labeled. For query points the label is ground
/// truth for evaluation only and is ignored by classification.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoint {
    /// Feature values, fixed dimension across a dataset.
    pub features: Vec<f64>,
    /// Class label, `None` when unknown.
    pub label: Option<Label>,
}

impl LabeledPoint {
    /// Creates a labeled point.
    pub fn new(features: Vec<f64>, label: Label) -> Self {
        Self {
            features,
            label: Some(label),
        }
    }

    /// Creates a point with no label.
    pub fn unlabeled(features: Vec<f64>) -> Self {
        Self {
            features,
            label: None,
        }
    }

    /// Returns the feature dimension.
    pub fn dim(&self) -> usize {
        self.features.len()
    }
}

impl AsRef<[f64]> for LabeledPoint {
    fn as_ref(&self) -> &[f64] {
        &self.features
    }
}

/// Outcome of a majority vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prediction {
    /// The winning class.
    Class(Label),
    /// No votes were cast.
    Unclassified,
}

impl Prediction {
    /// Returns the predicted label, if any.
    pub fn label(self) -> Option<Label> {
        match self {
            Prediction::Class(l) => Some(l),
            Prediction::Unclassified => None,
        }
    }

    /// Numeric form: the label, or [`UNCLASSIFIED`].
    pub fn as_i64(self) -> i64 {
        match self {
            Prediction::Class(l) => l as i64,
            Prediction::Unclassified => UNCLASSIFIED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let p = LabeledPoint::new(vec![1.0, 2.0], 1);
        assert_eq!(p.label, Some(1));
        assert_eq!(p.dim(), 2);

        let q = LabeledPoint::unlabeled(vec![0.5]);
        assert_eq!(q.label, None);
        assert_eq!(q.as_ref(), &[0.5]);
    }

    #[test]
    fn test_prediction_numeric() {
        assert_eq!(Prediction::Class(2).as_i64(), 2);
        assert_eq!(Prediction::Unclassified.as_i64(), -1);
        assert_eq!(Prediction::Class(0).label(), Some(0));
        assert_eq!(Prediction::Unclassified.label(), None);
    }
}
