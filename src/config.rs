use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level kvote configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct KvoteConfig {
    /// Dataset layout and class names.
    #[serde(default)]
    pub dataset: DatasetToml,

    /// Classification settings.
    #[serde(default)]
    pub classify: ClassifyToml,

    /// Train/test split settings.
    #[serde(default)]
    pub split: SplitToml,
}

impl KvoteConfig {
    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetToml {
    #[serde(default = "default_true")]
    pub has_headers: bool,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub label_column: Option<usize>,
    #[serde(default)]
    pub allow_unlabeled: bool,
    #[serde(default = "default_classes")]
    pub classes: Vec<String>,
}

impl Default for DatasetToml {
    fn default() -> Self {
        Self {
            has_headers: true,
            delimiter: default_delimiter(),
            label_column: None,
            allow_unlabeled: false,
            classes: default_classes(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_delimiter() -> String {
    ",".to_string()
}
fn default_classes() -> Vec<String> {
    kvote_io::IRIS_CLASSES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ClassifyToml {
    #[serde(default)]
    pub k: Option<usize>,
    #[serde(default)]
    pub threads: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitToml {
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,
    #[serde(default)]
    pub seed: u64,
    /// Columns removed from the raw input; the split files no longer carry them.
    #[serde(default)]
    pub drop_columns: Vec<String>,
}

impl Default for SplitToml {
    fn default() -> Self {
        Self {
            test_fraction: default_test_fraction(),
            seed: 0,
            drop_columns: Vec::new(),
        }
    }
}

fn default_test_fraction() -> f64 {
    0.2
}
