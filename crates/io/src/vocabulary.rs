//! Mapping between class names and integer labels.

use std::collections::HashMap;

use kvote_knn::Label;

use crate::error::IoError;
use crate::validate::ValidationCollector;

/// The three Iris species, in label order.
pub const IRIS_CLASSES: [&str; 3] = ["Iris-setosa", "Iris-versicolor", "Iris-virginica"];

/// Closed, ordered set of class names.
///
/// The label of a class is its position. One vocabulary is built from
/// configuration and shared by the reader, the writers and the evaluation
/// report, so all of them agree on the numbering.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelVocabulary {
    names: Vec<String>,
    ids: HashMap<String, Label>,
}

impl LabelVocabulary {
    /// Builds a vocabulary from class names in label order.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the list is empty, a name is blank
    /// or a name appears twice.
    pub fn new<I, S>(names: I) -> Result<Self, IoError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|s| Into::<String>::into(s).trim().to_string())
            .collect();
        let mut c = ValidationCollector::new();
        if names.is_empty() {
            c.push("class vocabulary is empty");
        }

        let mut ids = HashMap::with_capacity(names.len());
        for (label, name) in names.iter().enumerate() {
            if name.is_empty() {
                c.push(format!("class {label} has an empty name"));
            } else if ids.insert(name.clone(), label).is_some() {
                c.push(format!("duplicate class name '{name}'"));
            }
        }
        c.finish()?;

        Ok(Self { names, ids })
    }

    /// The Iris vocabulary ([`IRIS_CLASSES`]).
    pub fn iris() -> Self {
        let names: Vec<String> = IRIS_CLASSES.iter().map(|s| s.to_string()).collect();
        let ids = names
            .iter()
            .enumerate()
            .map(|(label, name)| (name.clone(), label))
            .collect();
        Self { names, ids }
    }

    /// Label of `name`, if it is a known class.
    pub fn id(&self, name: &str) -> Option<Label> {
        self.ids.get(name.trim()).copied()
    }

    /// Name of `label`, if it is in range.
    pub fn name(&self, label: Label) -> Option<&str> {
        self.names.get(label).map(String::as_str)
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if there are no classes.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Class names in label order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for LabelVocabulary {
    fn default() -> Self {
        Self::iris()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iris_ids() {
        let v = LabelVocabulary::iris();
        assert_eq!(v.len(), 3);
        assert_eq!(v.id("Iris-setosa"), Some(0));
        assert_eq!(v.id("Iris-versicolor"), Some(1));
        assert_eq!(v.id(" Iris-virginica "), Some(2));
        assert_eq!(v.id("Iris-unknown"), None);
        assert_eq!(v.name(2), Some("Iris-virginica"));
        assert_eq!(v.name(3), None);
    }

    #[test]
    fn default_is_iris() {
        assert_eq!(LabelVocabulary::default(), LabelVocabulary::iris());
    }

    #[test]
    fn custom_order_defines_labels() {
        let v = LabelVocabulary::new(["cat", "dog"]).unwrap();
        assert_eq!(v.id("dog"), Some(1));
        assert_eq!(v.names(), &["cat".to_string(), "dog".to_string()]);
    }

    #[test]
    fn rejects_empty() {
        let names: [&str; 0] = [];
        assert!(matches!(
            LabelVocabulary::new(names),
            Err(IoError::Validation { count: 1, .. })
        ));
    }

    #[test]
    fn rejects_duplicates_and_blanks() {
        let err = LabelVocabulary::new(["a", "", "a"]).unwrap_err();
        match err {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert!(details.contains("class 1 has an empty name"));
                assert!(details.contains("duplicate class name 'a'"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
