//! # kvote-io
//!
//! Read labeled datasets from delimited text files, split them into training
//! and test sets, and write datasets and predictions back out. Bridges the
//! file formats into the classifier's [`kvote_knn::LabeledPoint`] model.

mod dataset;
mod error;
mod reader;
mod split;
mod validate;
mod vocabulary;
mod writer;

pub use dataset::{Dataset, DatasetConfig};
pub use error::IoError;
pub use reader::read_dataset;
pub use split::train_test_split;
pub use vocabulary::{IRIS_CLASSES, LabelVocabulary};
pub use writer::{write_dataset, write_predictions};
